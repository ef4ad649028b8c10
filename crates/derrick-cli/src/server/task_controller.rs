//! Task handlers. Tasks are always addressed through their milestone.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use derrick_core::{
    params::{CreateTask, UpdateTask},
    MilestoneTask,
};

use super::{
    error::ApiError,
    milestone_controller::parse_id,
    response::{created, ok, DataBody},
    SharedState,
};

pub async fn create(
    State(state): State<SharedState>,
    Path(milestone_id): Path<String>,
    body: Result<Json<CreateTask>, JsonRejection>,
) -> Result<(StatusCode, Json<DataBody<MilestoneTask>>), ApiError> {
    let milestone_id = parse_id("Milestone", &milestone_id)?;
    let Json(params) = body?;

    let task = state.tracker.create_task(milestone_id, &params).await?;
    Ok(created(task))
}

pub async fn update(
    State(state): State<SharedState>,
    Path((milestone_id, task_id)): Path<(String, String)>,
    body: Result<Json<UpdateTask>, JsonRejection>,
) -> Result<Json<DataBody<MilestoneTask>>, ApiError> {
    let milestone_id = parse_id("Milestone", &milestone_id)?;
    let task_id = parse_id("Task", &task_id)?;
    let Json(params) = body?;

    let result = state
        .tracker
        .update_task(milestone_id, task_id, &params)
        .await?;
    Ok(ok(result.resource))
}

pub async fn delete(
    State(state): State<SharedState>,
    Path((milestone_id, task_id)): Path<(String, String)>,
) -> Result<Json<DataBody<MilestoneTask>>, ApiError> {
    let milestone_id = parse_id("Milestone", &milestone_id)?;
    let task_id = parse_id("Task", &task_id)?;

    let task = state.tracker.delete_task(milestone_id, task_id).await?;
    Ok(ok(task))
}
