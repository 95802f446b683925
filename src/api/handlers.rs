//! API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::api::AppState;
use crate::types::Comment;
use crate::Error;

/// Liveness check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// List every comment, newest first
pub async fn list_comments(State(state): State<AppState>) -> Result<Json<Vec<Comment>>, ApiError> {
    let comments = state
        .comments
        .list_comments()
        .await
        .map_err(|e| ApiError::from_service("Error fetching comments", e))?;

    Ok(Json(comments))
}

/// Delete a comment by id
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .comments
        .delete_comment(&comment_id)
        .await
        .map_err(|e| ApiError::from_service("Error deleting comment", e))?;

    Ok(Json(MessageResponse {
        message: "Comment deleted successfully".to_string(),
    }))
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// JSON error body: `{ "message": ..., "error": ... }`
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    error: Option<String>,
}

impl ApiError {
    /// Map a service error to a response. `context` is the message used for
    /// store failures.
    fn from_service(context: &str, err: Error) -> Self {
        match err {
            Error::NotFound(_) => Self {
                status: StatusCode::NOT_FOUND,
                message: "Comment not found".to_string(),
                error: None,
            },
            other => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: context.to_string(),
                error: Some(other.to_string()),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::warn!(status = %self.status, message = %self.message, "Request failed");
        }

        let body = Json(ErrorBody {
            message: self.message,
            error: self.error,
        });
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds_map_to_distinct_statuses() {
        let not_found = ApiError::from_service("ctx", Error::NotFound("x".into()));
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.message, "Comment not found");

        let query = ApiError::from_service(
            "Error fetching comments",
            Error::store_query(Error::storage("timeout")),
        );
        assert_eq!(query.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(query.message, "Error fetching comments");

        let store = ApiError::from_service(
            "Error deleting comment",
            Error::store_delete(Error::storage("disk full")),
        );
        assert_eq!(store.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(store.message, "Error deleting comment");
        assert_eq!(
            store.error.as_deref(),
            Some("Store delete failed: Storage error: disk full")
        );
    }
}
