//! Handler functions for movie endpoints.
//!
//! These functions parse requests, delegate to `MovieService`, and shape the
//! JSON envelope. `GET /movies` without `?reviews=true` answers a bare array.

use crate::api::common::{
    ApiError, ApiResponse, ApiResult, MoviePayload, MoviesPayload, json_body,
    service_error_to_http,
};
use crate::database::models::{Movie, MovieRequest};
use crate::errors::ServiceError;
use crate::services::movie_service::MovieService;
use crate::utils::jwt::Claims;
use axum::{
    extract::{Extension, Json, Path, Query, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use sqlx::SqlitePool;

/// Query string accepted by the movie read endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ReviewsQuery {
    pub reviews: Option<String>,
}

impl ReviewsQuery {
    /// Only the literal `true` switches on the review join.
    pub fn include_reviews(&self) -> bool {
        self.reviews.as_deref() == Some("true")
    }
}

/// Handle movie creation request
#[axum::debug_handler]
pub async fn create_movie(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<MovieRequest>, JsonRejection>,
) -> ApiResult<MoviePayload<Movie>> {
    let payload = json_body(payload)?;

    let movie = MovieService::new(&pool)
        .create_movie(payload)
        .await
        .map_err(|e| {
            tracing::warn!("Movie creation by {} rejected: {}", claims.username(), e);
            service_error_to_http(e)
        })?;

    tracing::info!("Movie created: {} by {}", movie.id, claims.username());
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(MoviePayload { movie }, "Movie created")),
    ))
}

/// Lists movies, optionally joined with reviews and ranked by rating.
#[axum::debug_handler]
pub async fn get_movies(
    Extension(pool): Extension<SqlitePool>,
    Query(query): Query<ReviewsQuery>,
) -> Result<Response, ApiError> {
    let service = MovieService::new(&pool);

    if query.include_reviews() {
        let movies = service
            .list_movies_with_reviews()
            .await
            .map_err(service_error_to_http)?;
        return Ok(Json(ApiResponse::ok(MoviesPayload { movies })).into_response());
    }

    let movies = service.list_movies().await.map_err(service_error_to_http)?;
    Ok(Json(movies).into_response())
}

/// Retrieves a movie by its ID, optionally joined with its reviews.
#[axum::debug_handler]
pub async fn get_movie(
    Extension(pool): Extension<SqlitePool>,
    Path(id): Path<String>,
    Query(query): Query<ReviewsQuery>,
) -> Result<Response, ApiError> {
    let service = MovieService::new(&pool);

    if query.include_reviews() {
        let movie = service
            .get_movie_with_reviews(&id)
            .await
            .map_err(service_error_to_http)?;
        return Ok(Json(ApiResponse::ok(MoviePayload { movie })).into_response());
    }

    let movie = service
        .get_movie_required(&id)
        .await
        .map_err(service_error_to_http)?;
    Ok(Json(ApiResponse::ok(MoviePayload { movie })).into_response())
}

/// Replaces every field of a movie.
#[axum::debug_handler]
pub async fn update_movie(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    payload: Result<Json<MovieRequest>, JsonRejection>,
) -> ApiResult<MoviePayload<Movie>> {
    let payload = json_body(payload)?;

    let movie = MovieService::new(&pool)
        .update_movie(&id, payload)
        .await
        .map_err(|e| {
            tracing::warn!("Update of movie {} by {} failed: {}", id, claims.username(), e);
            service_error_to_http(e)
        })?;

    tracing::info!("Movie updated: {} by {}", movie.id, claims.username());
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(MoviePayload { movie }, "Movie updated")),
    ))
}

/// Deletes a movie. Its reviews are not removed.
#[axum::debug_handler]
pub async fn delete_movie(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    MovieService::new(&pool)
        .delete_movie(&id)
        .await
        .map_err(|e| {
            tracing::warn!("Delete of movie {} by {} failed: {}", id, claims.username(), e);
            service_error_to_http(e)
        })?;

    tracing::info!("Movie deleted: {} by {}", id, claims.username());
    Ok((
        StatusCode::OK,
        Json(ApiResponse::<()>::message("Movie deleted")),
    ))
}

/// Answers any method a route does not implement.
pub async fn unsupported() -> ApiError {
    service_error_to_http(ServiceError::unsupported("HTTP method not supported."))
}
