//! Milestone and progress handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use derrick_core::{
    params::{CreateMilestone, UpdateMilestone},
    Milestone, ProjectProgress, TrackerError,
};
use serde_json::{json, Value};

use super::{
    error::ApiError,
    response::{created, ok, DataBody},
    SharedState,
};

type ApiResult<T> = Result<T, ApiError>;

/// Parses a numeric path id. Anything else cannot name a record.
pub(super) fn parse_id(kind: &str, raw: &str) -> ApiResult<u64> {
    raw.parse()
        .map_err(|_| ApiError::NotFound(format!("{kind} '{raw}'")))
}

pub async fn health() -> Json<DataBody<Value>> {
    ok(json!({ "status": "ok" }))
}

pub async fn list(
    State(state): State<SharedState>,
    Path(project_id): Path<String>,
) -> ApiResult<Json<DataBody<Vec<Milestone>>>> {
    let milestones = state.tracker.list_milestones(&project_id).await?;
    Ok(ok(milestones.0))
}

pub async fn create(
    State(state): State<SharedState>,
    Path(project_id): Path<String>,
    body: Result<Json<CreateMilestone>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<DataBody<Milestone>>)> {
    let Json(mut params) = body?;
    params.project_id = project_id;

    let milestone = state.tracker.create_milestone(&params).await?;
    Ok(created(milestone))
}

pub async fn progress(
    State(state): State<SharedState>,
    Path(project_id): Path<String>,
) -> ApiResult<Json<DataBody<ProjectProgress>>> {
    let progress = state.tracker.project_progress(&project_id).await?;
    Ok(ok(progress))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(milestone_id): Path<String>,
) -> ApiResult<Json<DataBody<Milestone>>> {
    let id = parse_id("Milestone", &milestone_id)?;
    let milestone = state
        .tracker
        .get_milestone(id)
        .await?
        .ok_or(TrackerError::MilestoneNotFound { id })?;
    Ok(ok(milestone))
}

pub async fn update(
    State(state): State<SharedState>,
    Path(milestone_id): Path<String>,
    body: Result<Json<UpdateMilestone>, JsonRejection>,
) -> ApiResult<Json<DataBody<Milestone>>> {
    let id = parse_id("Milestone", &milestone_id)?;
    let Json(params) = body?;

    let result = state.tracker.update_milestone(id, &params).await?;
    Ok(ok(result.resource))
}

pub async fn delete(
    State(state): State<SharedState>,
    Path(milestone_id): Path<String>,
) -> ApiResult<Json<DataBody<Milestone>>> {
    let id = parse_id("Milestone", &milestone_id)?;
    let milestone = state.tracker.delete_milestone(id).await?;
    Ok(ok(milestone))
}
