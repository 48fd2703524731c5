use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use super::{PostPatch, RecordStore, StoreError};
use crate::models::Post;

/// In-process record store backed by a thread-safe map.
///
/// Concurrent writes to the same key resolve last-write-wins; there is no
/// optimistic concurrency token.
#[derive(Default)]
pub struct MemoryStore {
    records: DashMap<Uuid, Post>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn put(&self, post: Post) -> Result<(), StoreError> {
        self.records.insert(post.post_id, post);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        Ok(self.records.get(&id).map(|entry| entry.value().clone()))
    }

    async fn scan(&self) -> Result<Vec<Post>, StoreError> {
        Ok(self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Post, StoreError> {
        let mut entry = self.records.get_mut(&id).ok_or(StoreError::NotFound)?;

        if let Some(title) = patch.title {
            entry.title = title;
        }
        if let Some(content) = patch.content {
            entry.content = content;
        }
        if let Some(image_url) = patch.image_url {
            entry.image_url = image_url;
        }
        if let Some(created_at) = patch.created_at {
            entry.created_at = created_at;
        }

        Ok(entry.value().clone())
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        Ok(self.records.remove(&id).map(|(_, post)| post))
    }
}
