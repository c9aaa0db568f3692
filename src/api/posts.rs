//! Community feed endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use super::ApiResult;
use crate::models::{CreatePostRequest, Post};
use crate::AppState;

/// POST /api/posts - Create a new post at the head of the feed.
pub async fn create_post(
    State(state): State<AppState>,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Post>)> {
    let Json(request) = payload?;

    let post = state.store.append_post(request).await;
    tracing::info!(post_id = %post.id, author = %post.author, "Post created");

    Ok((StatusCode::CREATED, Json(post)))
}
