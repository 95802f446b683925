//! Document store abstraction
//!
//! Provides a unified interface over the in-memory and local filesystem
//! comment stores

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::types::{Comment, CommentId, SortOrder};
use crate::Result;

pub mod local;
pub mod memory;

/// Comment collection in a document store
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Find every comment, ordered by creation time
    async fn find_sorted(&self, order: SortOrder) -> Result<Vec<Comment>>;

    /// Remove a comment and return it, or `None` if it does not exist
    async fn find_by_id_and_delete(&self, id: &CommentId) -> Result<Option<Comment>>;

    /// Persist a new comment with a store-assigned id and creation time
    async fn insert(&self, body: Map<String, Value>) -> Result<Comment>;
}

/// Store configuration
#[derive(Debug, Clone)]
pub enum StoreConfig {
    Memory,
    Local { root_path: String },
}

/// Create store backend from config
pub fn create_store(config: StoreConfig) -> Result<Box<dyn CommentStore>> {
    match config {
        StoreConfig::Memory => Ok(Box::new(memory::MemoryStore::new())),
        StoreConfig::Local { root_path } => {
            let backend = local::LocalStore::new(root_path)?;
            Ok(Box::new(backend))
        }
    }
}
