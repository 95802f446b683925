//! Comment access service
//!
//! Lists and deletes comments through an injected [`CommentStore`]. Every
//! operation issues exactly one store call and never retries.

use std::sync::Arc;

use crate::storage::CommentStore;
use crate::types::{Comment, CommentId, SortOrder};
use crate::{Error, Result};

#[derive(Clone)]
pub struct CommentService {
    store: Arc<dyn CommentStore>,
}

impl CommentService {
    pub fn new(store: Arc<dyn CommentStore>) -> Self {
        Self { store }
    }

    /// All comments, newest first.
    pub async fn list_comments(&self) -> Result<Vec<Comment>> {
        let comments = self
            .store
            .find_sorted(SortOrder::Descending)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to fetch comments");
                Error::store_query(e)
            })?;

        tracing::debug!(count = comments.len(), "Fetched comments");
        Ok(comments)
    }

    /// Permanently remove a comment and return the removed record.
    ///
    /// A missing record yields [`Error::NotFound`], so deleting the same id
    /// twice succeeds once and then reports not found. An id the store cannot
    /// interpret is a failed delete, not a missing record.
    pub async fn delete_comment(&self, id: &str) -> Result<Comment> {
        let id = CommentId::parse(id).map_err(|e| {
            tracing::warn!(comment_id = %id, error = %e, "Rejected comment identifier");
            Error::store_delete(e)
        })?;

        let removed = self.store.find_by_id_and_delete(&id).await.map_err(|e| {
            tracing::error!(comment_id = %id, error = %e, "Failed to delete comment");
            Error::store_delete(e)
        })?;

        match removed {
            Some(comment) => {
                tracing::info!(comment_id = %id, "Deleted comment");
                Ok(comment)
            }
            None => {
                tracing::debug!(comment_id = %id, "Comment not found for delete");
                Err(Error::NotFound(id.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use serde_json::{Map, Value};

    struct FailingStore;

    #[async_trait]
    impl CommentStore for FailingStore {
        async fn find_sorted(&self, _order: SortOrder) -> Result<Vec<Comment>> {
            Err(Error::storage("connection refused"))
        }

        async fn find_by_id_and_delete(&self, _id: &CommentId) -> Result<Option<Comment>> {
            Err(Error::storage("connection refused"))
        }

        async fn insert(&self, _body: Map<String, Value>) -> Result<Comment> {
            Err(Error::storage("connection refused"))
        }
    }

    fn comment_at(secs: i64) -> Comment {
        Comment::new(
            CommentId::generate(),
            Utc.timestamp_opt(secs, 0).unwrap(),
            Map::new(),
        )
    }

    #[tokio::test]
    async fn list_returns_newest_first() {
        let store = MemoryStore::with_comments(vec![
            comment_at(1_700_000_100),
            comment_at(1_700_000_300),
            comment_at(1_700_000_200),
        ]);
        let service = CommentService::new(Arc::new(store));

        let comments = service.list_comments().await.unwrap();
        let times: Vec<i64> = comments.iter().map(|c| c.created_at.timestamp()).collect();
        assert_eq!(times, vec![1_700_000_300, 1_700_000_200, 1_700_000_100]);
    }

    #[tokio::test]
    async fn delete_twice_succeeds_then_not_found() {
        let comment = comment_at(1_700_000_000);
        let id = comment.id.to_string();
        let service = CommentService::new(Arc::new(MemoryStore::with_comments(vec![comment])));

        let removed = service.delete_comment(&id).await.unwrap();
        assert_eq!(removed.id.as_str(), id);

        let err = service.delete_comment(&id).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(ref missing) if *missing == id));
    }

    #[tokio::test]
    async fn delete_absent_id_is_not_found() {
        let service = CommentService::new(Arc::new(MemoryStore::new()));

        for _ in 0..5 {
            let id = CommentId::generate();
            let err = service.delete_comment(id.as_str()).await.unwrap_err();
            assert!(matches!(err, Error::NotFound(_)));
        }
    }

    #[tokio::test]
    async fn malformed_identifier_is_a_failed_delete() {
        let service = CommentService::new(Arc::new(MemoryStore::new()));

        for raw in ["", "12345", "not-a-comment-id"] {
            let err = service.delete_comment(raw).await.unwrap_err();
            match err {
                Error::StoreDelete(source) => {
                    assert!(matches!(*source, Error::InvalidIdentifier(_)), "{raw:?}")
                }
                other => panic!("Unexpected error for {raw:?}: {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn store_failures_are_distinguished() {
        let service = CommentService::new(Arc::new(FailingStore));

        let err = service.list_comments().await.unwrap_err();
        assert!(matches!(err, Error::StoreQuery(_)));

        let id = CommentId::generate();
        let err = service.delete_comment(id.as_str()).await.unwrap_err();
        assert!(matches!(err, Error::StoreDelete(_)));
    }
}
