//! Error types for commentd

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Store query failed: {0}")]
    StoreQuery(#[source] Box<Error>),

    #[error("Store delete failed: {0}")]
    StoreDelete(#[source] Box<Error>),

    #[error("Comment not found: {0}")]
    NotFound(String),

    #[error("Invalid comment identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn storage(msg: impl Into<String>) -> Self {
        Error::Storage(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Wrap a raw store failure raised while servicing a read.
    pub fn store_query(source: Error) -> Self {
        Error::StoreQuery(Box::new(source))
    }

    /// Wrap a raw store failure raised while servicing a delete.
    pub fn store_delete(source: Error) -> Self {
        Error::StoreDelete(Box::new(source))
    }
}
