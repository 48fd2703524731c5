//! Key-value persistence boundary for post records.
//!
//! The service layer only sees the [`RecordStore`] trait; the process wires
//! in a concrete implementation at startup.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::models::Post;

mod memory;

pub use memory::MemoryStore;

/// Storage-level failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Partial attribute update. `None` leaves the attribute untouched.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Key-value persistence capability for post records, keyed by post id.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Upsert by primary key. Overwrites any existing record with the same key.
    async fn put(&self, post: Post) -> Result<(), StoreError>;

    /// Fetch a single record by key.
    async fn get(&self, id: Uuid) -> Result<Option<Post>, StoreError>;

    /// All records, unordered. No pagination.
    async fn scan(&self) -> Result<Vec<Post>, StoreError>;

    /// Partial attribute update. Fails with [`StoreError::NotFound`] when the
    /// key is absent; returns the updated record.
    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Post, StoreError>;

    /// Remove a record, returning the prior record if one existed so callers
    /// can tell "deleted" from "was never there".
    async fn delete(&self, id: Uuid) -> Result<Option<Post>, StoreError>;
}
