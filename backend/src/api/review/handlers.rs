//! Handler functions for review endpoints.

use crate::api::common::{ApiResponse, ApiResult, ReviewPayload, json_body, service_error_to_http};
use crate::database::models::{Review, ReviewRequest};
use crate::services::review_service::ReviewService;
use axum::{
    extract::{Extension, Json, Path, rejection::JsonRejection},
    http::StatusCode,
};
use sqlx::SqlitePool;

/// Handle review creation for a movie
#[axum::debug_handler]
pub async fn create_review(
    Extension(pool): Extension<SqlitePool>,
    Path(movie_id): Path<String>,
    payload: Result<Json<ReviewRequest>, JsonRejection>,
) -> ApiResult<ReviewPayload<Review>> {
    let payload = json_body(payload)?;

    let review = ReviewService::new(&pool)
        .create_review(&movie_id, payload)
        .await
        .map_err(|e| {
            tracing::warn!("Review for movie {} rejected: {}", movie_id, e);
            service_error_to_http(e)
        })?;

    tracing::info!("Review {} created for movie {}", review.id, review.movie_id);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(ReviewPayload { review }, "Review created!")),
    ))
}
