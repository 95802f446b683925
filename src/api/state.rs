//! API server state

use std::sync::Arc;

use crate::comments::CommentService;
use crate::storage::CommentStore;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Comment access service
    pub comments: CommentService,
}

impl AppState {
    pub fn new(comments: CommentService) -> Self {
        Self { comments }
    }

    /// Build state directly on top of a store
    pub fn with_store(store: Arc<dyn CommentStore>) -> Self {
        Self::new(CommentService::new(store))
    }
}
