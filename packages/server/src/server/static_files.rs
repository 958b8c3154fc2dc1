use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

// Browser pages, embedded at compile time
#[derive(RustEmbed)]
#[folder = "assets"]
pub struct PageAssets;

/// Job scraper UI
pub async fn serve_scraper_ui() -> Response {
    serve_page::<PageAssets>("index.html")
}

/// Workout log UI
pub async fn serve_workout_log() -> Response {
    serve_page::<PageAssets>("workouts.html")
}

fn serve_page<E: RustEmbed>(path: &str) -> Response {
    match E::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}
