//! In-memory comment store

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::types::{Comment, CommentId, SortOrder};
use crate::Result;

use super::CommentStore;

/// Comment store held in process memory
#[derive(Default)]
pub struct MemoryStore {
    comments: RwLock<HashMap<CommentId, Comment>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing records, keeping their ids and timestamps.
    pub fn with_comments(comments: impl IntoIterator<Item = Comment>) -> Self {
        let comments = comments.into_iter().map(|c| (c.id.clone(), c)).collect();
        Self {
            comments: RwLock::new(comments),
        }
    }
}

#[async_trait]
impl CommentStore for MemoryStore {
    async fn find_sorted(&self, order: SortOrder) -> Result<Vec<Comment>> {
        let mut comments: Vec<Comment> = self.comments.read().await.values().cloned().collect();
        order.sort(&mut comments);
        Ok(comments)
    }

    async fn find_by_id_and_delete(&self, id: &CommentId) -> Result<Option<Comment>> {
        Ok(self.comments.write().await.remove(id))
    }

    async fn insert(&self, body: Map<String, Value>) -> Result<Comment> {
        let comment = Comment::new(CommentId::generate(), Utc::now(), body);
        self.comments
            .write()
            .await
            .insert(comment.id.clone(), comment.clone());
        Ok(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(text: &str) -> Map<String, Value> {
        json!({ "text": text }).as_object().unwrap().clone()
    }

    #[tokio::test]
    async fn test_memory_store() {
        let store = MemoryStore::new();

        let first = store.insert(body("first")).await.unwrap();
        let second = store.insert(body("second")).await.unwrap();

        let listed = store.find_sorted(SortOrder::Descending).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed[0].created_at >= listed[1].created_at);

        let removed = store.find_by_id_and_delete(&first.id).await.unwrap();
        assert_eq!(removed.as_ref().map(|c| &c.id), Some(&first.id));

        assert!(store
            .find_by_id_and_delete(&first.id)
            .await
            .unwrap()
            .is_none());

        let remaining = store.find_sorted(SortOrder::Descending).await.unwrap();
        assert_eq!(remaining, vec![second]);
    }

    #[tokio::test]
    async fn inserted_body_does_not_duplicate_store_keys() {
        let store = MemoryStore::new();
        let body = json!({"_id": "spoofed", "createdAt": "2020-01-01T00:00:00Z"});
        let comment = store.insert(body.as_object().unwrap().clone()).await.unwrap();

        let encoded = serde_json::to_string(&comment).unwrap();
        assert_eq!(encoded.matches("\"_id\"").count(), 1);
        assert_eq!(encoded.matches("\"createdAt\"").count(), 1);
    }
}
