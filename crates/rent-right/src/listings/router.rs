use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tracing::debug;

use super::domain::ListingId;
use super::repository::ListingRepository;
use crate::error::AppError;

/// Read-only listing endpoints consumed by the frontend.
pub fn listing_router<R>(repository: Arc<R>) -> Router
where
    R: ListingRepository + 'static,
{
    Router::new()
        .route("/api/", get(api_root))
        .route("/api/listings", get(list_handler::<R>))
        .route("/api/listings/:listing_id", get(detail_handler::<R>))
        .with_state(repository)
}

pub(crate) async fn api_root() -> Json<serde_json::Value> {
    Json(json!({ "message": "Welcome to the RentRightNL API." }))
}

pub(crate) async fn list_handler<R>(State(repository): State<Arc<R>>) -> Response
where
    R: ListingRepository + 'static,
{
    match repository.all() {
        Ok(mut listings) => {
            listings.sort_by_key(|listing| listing.id);
            (StatusCode::OK, Json(listings)).into_response()
        }
        Err(err) => AppError::from(err).into_response(),
    }
}

pub(crate) async fn detail_handler<R>(
    State(repository): State<Arc<R>>,
    Path(listing_id): Path<u32>,
) -> Response
where
    R: ListingRepository + 'static,
{
    let id = ListingId(listing_id);
    match repository.fetch(id) {
        Ok(Some(listing)) => (StatusCode::OK, Json(listing)).into_response(),
        Ok(None) => {
            debug!(listing_id = %id, "listing not found");
            let payload = json!({ "detail": "Listing not found" });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(err) => AppError::from(err).into_response(),
    }
}
