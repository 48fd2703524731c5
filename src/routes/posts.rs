use axum::{extract::State, http::StatusCode};
use uuid::Uuid;

use crate::{
    dto::{CreatePostRequest, MessageResponse, UpdatePostRequest},
    errors::ApiError,
    extract::{Json, Path},
    models::Post,
    states::AppState,
};

/// POST /posts
/// Body: { "title": "...", "content": "...", "imageUrl"?: "...", "createdAt"?: "..." }
pub async fn create_post(
    State(state): State<AppState>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let post = state.service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /posts
/// Returns every record, unordered. No pagination.
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, ApiError> {
    Ok(Json(state.service.list().await?))
}

/// GET /posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Post>, ApiError> {
    Ok(Json(state.service.get(id).await?))
}

/// PUT /posts/{id}
/// Body: { "title": "...", "content": "...", "imageUrl"?: "...", "createdAt"?: "..." }
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePostRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.service.update(id, payload).await?;

    Ok(Json(MessageResponse {
        message: format!("Post {} updated", id),
    }))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.service.delete(id).await?;

    Ok(Json(MessageResponse {
        message: format!("Post {} deleted", id),
    }))
}

/// OPTIONS /posts and /posts/{id}
/// Empty 200; the cross-origin headers come from the resource layers.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
