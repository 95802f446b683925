//! commentd - a small comment service over a document store
//!
//! - HTTP API to list comments (newest first) and delete them by id
//! - Pluggable document stores (in-memory, local filesystem)
//! - Text case helpers: kebab-case, camelCase, dot.case

pub mod api;
pub mod case;
pub mod comments;
pub mod config;
pub mod error;
pub mod storage;
pub mod types;

pub use error::{Error, Result};
