//! Errors returned by HTTP handlers.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Handler error, rendered as `{"error": message}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(&'static str),

    /// JSON body whose fields have the wrong shape; carries the field-level reason.
    #[error("{0}")]
    InvalidBody(String),

    #[error("{0}")]
    NotFound(&'static str),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Unwrap a create body.
///
/// No body, a non-JSON content type, or text that is not JSON at all counts as
/// a body without its required field and yields `missing`. JSON whose fields
/// have the wrong types yields [`ApiError::InvalidBody`] naming the field.
pub fn read_body<T>(
    body: std::result::Result<Json<T>, JsonRejection>,
    missing: &'static str,
) -> ApiResult<T> {
    match body {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::JsonDataError(e)) => Err(ApiError::InvalidBody(e.body_text())),
        Err(_) => Err(ApiError::BadRequest(missing)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::BadRequest("Title is required").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidBody("done: invalid type".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("Todo not found").status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_message_is_the_payload() {
        assert_eq!(ApiError::NotFound("Task not found").to_string(), "Task not found");
    }

    #[test]
    fn test_read_body_passes_parsed_value_through() {
        let body: ApiResult<u32> = read_body(Ok(Json(7)), "Title is required");
        assert_eq!(body.unwrap(), 7);
    }
}
