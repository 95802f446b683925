//! Local filesystem comment store
//!
//! Each comment is one JSON document at `<root>/comments/<id>.json`.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::types::{Comment, CommentId, SortOrder};
use crate::{Error, Result};

use super::CommentStore;

const COLLECTION_DIR: &str = "comments";

/// Local filesystem store
pub struct LocalStore {
    collection_path: PathBuf,
}

impl LocalStore {
    pub fn new(root_path: impl Into<PathBuf>) -> Result<Self> {
        let collection_path = root_path.into().join(COLLECTION_DIR);
        std::fs::create_dir_all(&collection_path)?;
        Ok(Self { collection_path })
    }

    fn resolve_path(&self, id: &CommentId) -> PathBuf {
        self.collection_path.join(format!("{}.json", id))
    }

    async fn read_document(path: &Path) -> Result<Option<Comment>> {
        match fs::read(path).await {
            Ok(data) => {
                let comment = serde_json::from_slice(&data).map_err(|e| {
                    Error::storage(format!("corrupt document {}: {}", path.display(), e))
                })?;
                Ok(Some(comment))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl CommentStore for LocalStore {
    async fn find_sorted(&self, order: SortOrder) -> Result<Vec<Comment>> {
        let mut comments = Vec::new();

        let mut entries = fs::read_dir(&self.collection_path).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            // A concurrent delete can remove the file between listing and reading.
            if let Some(comment) = Self::read_document(&path).await? {
                comments.push(comment);
            }
        }

        order.sort(&mut comments);
        Ok(comments)
    }

    async fn find_by_id_and_delete(&self, id: &CommentId) -> Result<Option<Comment>> {
        let path = self.resolve_path(id);

        let Some(comment) = Self::read_document(&path).await? else {
            return Ok(None);
        };

        match fs::remove_file(&path).await {
            Ok(()) => Ok(Some(comment)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn insert(&self, body: Map<String, Value>) -> Result<Comment> {
        let comment = Comment::new(CommentId::generate(), Utc::now(), body);
        let data = serde_json::to_vec_pretty(&comment)?;

        let path = self.resolve_path(&comment.id);
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, &data).await?;
        fs::rename(&temp_path, &path).await?;

        Ok(comment)
    }
}
