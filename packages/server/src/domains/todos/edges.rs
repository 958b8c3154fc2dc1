//! Todo endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tracing::info;

use super::models::{NewTodo, Todo, TodoPatch};
use crate::common::{read_body, ApiError, ApiResult};
use crate::server::app::AppState;

const NOT_FOUND: ApiError = ApiError::NotFound("Todo not found");

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/:id",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
}

async fn list_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    Json(state.todos.list().await)
}

/// A missing or non-JSON body is treated like a body without a title.
async fn create_todo(
    State(state): State<AppState>,
    body: Result<Json<NewTodo>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Todo>)> {
    let draft = read_body(body, "Title is required")?.validate()?;
    let todo = state.todos.insert(draft).await;
    info!(todo_id = todo.id, "Todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult<Json<Todo>> {
    state.todos.get(id).await.map(Json).ok_or(NOT_FOUND)
}

async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(patch): Json<TodoPatch>,
) -> ApiResult<Json<Todo>> {
    state
        .todos
        .update(id, Box::new(move |todo: &mut Todo| patch.apply(todo)))
        .await
        .map(Json)
        .ok_or(NOT_FOUND)
}

async fn delete_todo(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult<Json<Value>> {
    state.todos.remove(id).await.ok_or(NOT_FOUND)?;
    info!(todo_id = id, "Todo deleted");
    Ok(Json(json!({ "message": "Todo deleted" })))
}
