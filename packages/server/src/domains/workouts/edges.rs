//! Workout log endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Local;
use serde_json::{json, Value};
use tracing::info;

use super::models::{NewWorkout, Workout, WorkoutPatch};
use crate::common::{read_body, ApiError, ApiResult};
use crate::server::app::AppState;

const NOT_FOUND: ApiError = ApiError::NotFound("Workout not found");

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/workouts", get(list_workouts).post(create_workout))
        .route(
            "/workouts/:id",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
}

async fn list_workouts(State(state): State<AppState>) -> Json<Vec<Workout>> {
    Json(state.workouts.list().await)
}

/// A missing or non-JSON body is treated like a body without an exercise.
async fn create_workout(
    State(state): State<AppState>,
    body: Result<Json<NewWorkout>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Workout>)> {
    let draft = read_body(body, "Exercise name is required")?.validate(Local::now().date_naive())?;
    let workout = state.workouts.insert(draft).await;
    info!(workout_id = workout.id, exercise = ?workout.exercise, "Workout logged");
    Ok((StatusCode::CREATED, Json(workout)))
}

async fn get_workout(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<Workout>> {
    state.workouts.get(id).await.map(Json).ok_or(NOT_FOUND)
}

async fn update_workout(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(patch): Json<WorkoutPatch>,
) -> ApiResult<Json<Workout>> {
    state
        .workouts
        .update(id, Box::new(move |workout: &mut Workout| patch.apply(workout)))
        .await
        .map(Json)
        .ok_or(NOT_FOUND)
}

async fn delete_workout(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<Value>> {
    state.workouts.remove(id).await.ok_or(NOT_FOUND)?;
    info!(workout_id = id, "Workout deleted");
    Ok(Json(json!({ "message": "Workout deleted" })))
}
