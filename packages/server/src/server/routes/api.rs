use axum::Json;
use serde_json::{json, Value};

/// Endpoint directory
pub async fn api_index_handler() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Job Scraper API!",
        "endpoints": {
            "GET /api/jobs?q=": "Scrape job listings, optionally filtered",
            "GET /api/hackernews?q=&sort=": "Scrape Hacker News stories (sort: default, newest, oldest)",
            "GET /health": "Health check",
            "GET /tasks": "Get all tasks",
            "POST /tasks": "Create a task",
            "GET /tasks/<id>": "Get specific task",
            "DELETE /tasks/<id>": "Delete a task",
            "GET /todos": "Get all todos",
            "POST /todos": "Create a todo",
            "GET /todos/<id>": "Get specific todo",
            "PUT /todos/<id>": "Update a todo",
            "DELETE /todos/<id>": "Delete a todo",
            "GET /workouts": "Get all workouts",
            "POST /workouts": "Log a workout",
            "GET /workouts/<id>": "Get specific workout",
            "PUT /workouts/<id>": "Update a workout",
            "DELETE /workouts/<id>": "Delete a workout",
            "GET /motivation": "Random motivational image and quote",
        }
    }))
}
