use std::sync::Arc;

use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::{CreatePostRequest, UpdatePostRequest},
    errors::ApiError,
    models::Post,
    store::{PostPatch, RecordStore},
};

/// Stateless post operations over an injected record store.
///
/// Each call is independent; a store failure surfaces immediately with no
/// retry. Same-key races resolve at store granularity, last write wins.
pub struct PostService {
    store: Arc<dyn RecordStore>,
}

impl PostService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, payload: CreatePostRequest) -> Result<Post, ApiError> {
        payload
            .validate()
            .map_err(|e| ApiError::ValidationError(e.to_string()))?;

        let post = Post::new(
            payload.title,
            payload.content,
            payload.image_url,
            payload.created_at,
        );
        self.store.put(post.clone()).await?;

        info!("Post created: {}", post.post_id);

        Ok(post)
    }

    pub async fn list(&self) -> Result<Vec<Post>, ApiError> {
        Ok(self.store.scan().await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Post, ApiError> {
        self.store.get(id).await?.ok_or(ApiError::NotFound)
    }

    pub async fn update(&self, id: Uuid, payload: UpdatePostRequest) -> Result<Post, ApiError> {
        payload
            .validate()
            .map_err(|e| ApiError::ValidationError(e.to_string()))?;

        // An update must never create a record, so confirm existence before
        // writing anything.
        self.store.get(id).await?.ok_or(ApiError::NotFound)?;

        let patch = PostPatch {
            title: Some(payload.title),
            content: Some(payload.content),
            image_url: payload.image_url,
            created_at: payload.created_at,
        };
        let post = self.store.update(id, patch).await?;

        info!("Post updated: {}", id);

        Ok(post)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        self.store.delete(id).await?.ok_or(ApiError::NotFound)?;

        info!("Post deleted: {}", id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn service() -> PostService {
        PostService::new(Arc::new(MemoryStore::new()))
    }

    fn create_request(title: &str, content: &str) -> CreatePostRequest {
        CreatePostRequest {
            title: title.to_string(),
            content: content.to_string(),
            image_url: None,
            created_at: None,
        }
    }

    fn update_request(title: &str, content: &str) -> UpdatePostRequest {
        UpdatePostRequest {
            title: title.to_string(),
            content: content.to_string(),
            image_url: None,
            created_at: None,
        }
    }

    #[tokio::test]
    async fn created_post_can_be_fetched_back() {
        let svc = service();

        let created = svc.create(create_request("A", "B")).await.unwrap();
        assert!(!created.post_id.is_nil());
        assert_eq!(created.image_url, "");

        let fetched = svc.get(created.post_id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn create_rejects_empty_title() {
        let svc = service();
        let err = svc.create(create_request("", "B")).await.unwrap_err();
        assert!(matches!(err, ApiError::ValidationError(_)));
    }

    #[tokio::test]
    async fn create_rejects_empty_content() {
        let svc = service();
        let err = svc.create(create_request("A", "")).await.unwrap_err();
        assert!(matches!(err, ApiError::ValidationError(_)));
    }

    #[tokio::test]
    async fn create_honors_caller_supplied_timestamp() {
        let svc = service();
        let stamp = "2024-05-01T12:00:00Z".parse().unwrap();

        let created = svc
            .create(CreatePostRequest {
                title: "A".to_string(),
                content: "B".to_string(),
                image_url: Some("https://example.com/a.png".to_string()),
                created_at: Some(stamp),
            })
            .await
            .unwrap();

        assert_eq!(created.created_at, stamp);
        assert_eq!(created.image_url, "https://example.com/a.png");
    }

    #[tokio::test]
    async fn update_missing_post_does_not_create_it() {
        let svc = service();

        let err = svc
            .update(Uuid::new_v4(), update_request("A", "B"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound));

        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_overwrites_mutable_fields_and_keeps_timestamp() {
        let svc = service();
        let created = svc.create(create_request("A", "B")).await.unwrap();

        let updated = svc
            .update(created.post_id, update_request("A2", "B2"))
            .await
            .unwrap();

        assert_eq!(updated.post_id, created.post_id);
        assert_eq!(updated.title, "A2");
        assert_eq!(updated.content, "B2");
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn update_rejects_empty_fields() {
        let svc = service();
        let created = svc.create(create_request("A", "B")).await.unwrap();

        let err = svc
            .update(created.post_id, update_request("", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::ValidationError(_)));
    }

    #[tokio::test]
    async fn delete_transitions_post_to_absent() {
        let svc = service();
        let created = svc.create(create_request("A", "B")).await.unwrap();

        svc.delete(created.post_id).await.unwrap();

        let err = svc.get(created.post_id).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[tokio::test]
    async fn delete_missing_post_fails() {
        let svc = service();
        let err = svc.delete(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[tokio::test]
    async fn list_on_empty_store_is_empty() {
        let svc = service();
        assert!(svc.list().await.unwrap().is_empty());
    }
}
