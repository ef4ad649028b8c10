//! Route table.

use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::{events, milestone_controller, task_controller, ApiError, SharedState};

/// Builds the full API router.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/api/health", get(milestone_controller::health))
        .route(
            "/api/projects/:project_id/milestones",
            get(milestone_controller::list).post(milestone_controller::create),
        )
        .route(
            "/api/projects/:project_id/progress",
            get(milestone_controller::progress),
        )
        .route(
            "/api/projects/:project_id/events",
            get(events::ws_handler),
        )
        .route(
            "/api/milestones/:milestone_id",
            get(milestone_controller::get)
                .patch(milestone_controller::update)
                .delete(milestone_controller::delete),
        )
        .route(
            "/api/milestones/:milestone_id/tasks",
            post(task_controller::create),
        )
        .route(
            "/api/milestones/:milestone_id/tasks/:task_id",
            patch(task_controller::update).delete(task_controller::delete),
        )
        .fallback(unknown_route)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

async fn unknown_route() -> ApiError {
    ApiError::NotFound("Route".to_string())
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
