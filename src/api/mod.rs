//! HTTP API server

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Default mount point for the comment routes
pub const DEFAULT_MOUNT: &str = "/api/comments";

/// Build the API router with the comment routes nested under `mount`
pub fn create_router(state: AppState, mount: &str) -> Router {
    let comments = Router::new()
        .route("/", get(handlers::list_comments))
        .route("/:comment_id", delete(handlers::delete_comment));

    let router = Router::new().route("/health", get(handlers::health));
    let router = if mount.trim_end_matches('/').is_empty() {
        router.merge(comments)
    } else {
        router.nest(mount.trim_end_matches('/'), comments)
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}
