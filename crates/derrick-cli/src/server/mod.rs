//! REST API and real-time event channel over the tracker.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ HTTP client  │───▶│ controllers  │───▶│   Tracker    │
//! └──────────────┘    └──────────────┘    └──────┬───────┘
//!        ▲                                       │ publish
//!        │ JSON text frames  ┌──────────────┐    │
//!        └───────────────────│  events (ws) │◀───┘
//!                            └──────────────┘
//! ```
//!
//! Handlers return the `{ success, data }` envelope on success and
//! `{ success: false, message }` with 400/404/500 on failure.

use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use derrick_core::{BroadcastPublisher, StatusPolicy, Tracker, TrackerBuilder};
use log::{info, warn};

pub mod error;
pub mod events;
pub mod milestone_controller;
pub mod response;
pub mod routes;
pub mod task_controller;

pub use error::ApiError;
pub use routes::build_router;

/// Queued events per subscriber before a slow socket starts missing some.
const EVENT_CAPACITY: usize = 256;

/// State shared by every handler.
pub struct AppState {
    pub tracker: Tracker,
    pub events: BroadcastPublisher,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    /// Builds a tracker whose events feed the WebSocket channel.
    pub async fn new(database_file: Option<PathBuf>, policy: StatusPolicy) -> Result<SharedState> {
        let events = BroadcastPublisher::new(EVENT_CAPACITY);
        let tracker = TrackerBuilder::new()
            .with_database_path(database_file)
            .with_status_policy(policy)
            .with_publisher(Arc::new(events.clone()))
            .build()
            .await
            .context("Failed to initialize tracker")?;

        Ok(Arc::new(Self { tracker, events }))
    }
}

/// Serves the API on `addr` until Ctrl-C.
pub async fn serve(addr: SocketAddr, state: SharedState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    let local = listener.local_addr().context("Failed to read local address")?;

    info!("Derrick API listening on http://{local}");
    info!("  Events WS: ws://{local}/api/projects/{{project_id}}/events");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
