use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub post_id: Uuid,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Build a new post with a server-generated id. `created_at` falls back
    /// to the current time when the caller does not supply one.
    pub fn new(
        title: String,
        content: String,
        image_url: Option<String>,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            post_id: Uuid::new_v4(),
            title,
            content,
            image_url: image_url.unwrap_or_default(),
            created_at: created_at.unwrap_or_else(Utc::now),
        }
    }
}
