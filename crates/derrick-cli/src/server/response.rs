//! `{ success, data }` / `{ success, message }` envelopes.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

/// Successful response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct DataBody<T> {
    pub success: bool,
    pub data: T,
}

/// Failed response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// 200 with `data` wrapped in the success envelope.
pub fn ok<T: Serialize>(data: T) -> Json<DataBody<T>> {
    Json(DataBody {
        success: true,
        data,
    })
}

/// 201 with `data` wrapped in the success envelope.
pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<DataBody<T>>) {
    (StatusCode::CREATED, ok(data))
}
