//! Collaborator trait contracts
//!
//! The real object store and document catalog live in the surrounding
//! system; the deep-dive pipeline consumes them only through these
//! traits.

use crate::storage::CrawlRecord;
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by storage collaborators
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Object store error: {0}")]
    Store(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Object not found: {0}")]
    NotFound(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Object-store collaborator: blob bytes addressed by URL
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetches the bytes behind a stored object URL
    async fn get(&self, url: &str) -> StorageResult<Vec<u8>>;

    /// Stores a blob under the given key and returns its public URL
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> StorageResult<String>;
}

/// Document-catalog collaborator
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Persists one crawl record, returning its catalog id
    async fn save(&self, record: CrawlRecord) -> StorageResult<String>;
}
