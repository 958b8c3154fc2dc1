//! Task endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tracing::info;

use super::models::{NewTask, Task};
use crate::common::{ApiError, ApiResult};
use crate::server::app::AppState;

const NOT_FOUND: ApiError = ApiError::NotFound("Task not found");

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/:id", get(get_task).delete(delete_task))
}

async fn list_tasks(State(state): State<AppState>) -> Json<Value> {
    let tasks = state.tasks.list().await;
    Json(json!({ "count": tasks.len(), "tasks": tasks }))
}

async fn create_task(
    State(state): State<AppState>,
    Json(body): Json<NewTask>,
) -> (StatusCode, Json<Value>) {
    let task = state.tasks.insert(body).await;
    info!(task_id = task.id, "Task created");
    (
        StatusCode::CREATED,
        Json(json!({ "message": "Task created!", "task": task })),
    )
}

async fn get_task(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult<Json<Task>> {
    state.tasks.get(id).await.map(Json).ok_or(NOT_FOUND)
}

async fn delete_task(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult<Json<Value>> {
    let task = state.tasks.remove(id).await.ok_or(NOT_FOUND)?;
    info!(task_id = id, "Task deleted");
    Ok(Json(json!({ "message": "Task deleted!", "task": task })))
}
