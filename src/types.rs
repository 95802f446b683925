//! Core types for commentd

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

use crate::{Error, Result};

/// Store-assigned comment identifier.
///
/// The canonical form is the lowercase, hyphenless UUID text. Any textual
/// UUID form is accepted on parse and normalised.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommentId(String);

impl CommentId {
    /// Assign a fresh identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidIdentifier(
                "identifier must not be empty".to_string(),
            ));
        }

        let uuid = Uuid::try_parse(trimmed)
            .map_err(|e| Error::InvalidIdentifier(format!("'{}': {}", trimmed, e)))?;

        Ok(Self(uuid.simple().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CommentId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<CommentId> for String {
    fn from(id: CommentId) -> Self {
        id.0
    }
}

/// A comment record as held by the store.
///
/// The body is whatever the writer stored, minus any `_id`/`createdAt` keys;
/// it is otherwise carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: CommentId,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub body: Map<String, Value>,
}

/// Keys owned by the store; a body never carries its own copy.
const RESERVED_KEYS: [&str; 2] = ["_id", "createdAt"];

impl Comment {
    pub fn new(id: CommentId, created_at: DateTime<Utc>, mut body: Map<String, Value>) -> Self {
        for key in RESERVED_KEYS {
            body.remove(key);
        }
        Self {
            id,
            created_at,
            body,
        }
    }
}

/// Direction for creation-time ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    /// Sort comments by creation time, breaking ties by identifier so the
    /// result is deterministic.
    pub fn sort(self, comments: &mut [Comment]) {
        comments.sort_by(|a, b| {
            let by_time = a.created_at.cmp(&b.created_at);
            let by_time = match self {
                SortOrder::Ascending => by_time,
                SortOrder::Descending => by_time.reverse(),
            };
            by_time.then_with(|| a.id.cmp(&b.id))
        });
    }
}
