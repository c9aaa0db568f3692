//! Read-only collection endpoints.

use axum::{extract::State, http::Uri, Json};

use super::ApiResult;
use crate::errors::AppError;
use crate::models::Record;
use crate::AppState;

/// GET /api/{collection} - List a whole collection in insertion order.
pub async fn list_collection<T: Record>(State(state): State<AppState>) -> Json<Vec<T>> {
    Json(state.store.list::<T>().await)
}

/// Fallback for unknown paths under /api.
pub async fn api_not_found(uri: Uri) -> ApiResult<()> {
    Err(AppError::NotFound(format!("No collection at {}", uri.path())))
}
