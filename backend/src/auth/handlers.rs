//! Handler functions for authentication-related API endpoints.
//!
//! These functions process signup and signin requests, parse request data,
//! and interact with `auth::service` for the core logic.

use crate::api::common::{ApiResponse, ApiResult, json_body, service_error_to_http};
use crate::auth::AuthState;
use crate::auth::models::*;
use crate::auth::service::AuthService;
use axum::{
    extract::{Extension, Json, rejection::JsonRejection},
    http::StatusCode,
};
use sqlx::SqlitePool;

/// Handle user signup request
#[axum::debug_handler]
pub async fn signup(
    Extension(pool): Extension<SqlitePool>,
    Extension(auth): Extension<AuthState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> ApiResult<()> {
    let payload = json_body(payload)?;

    let user = AuthService::new(&pool, &auth)
        .signup(payload)
        .await
        .map_err(|e| {
            tracing::warn!("Signup rejected: {}", e);
            service_error_to_http(e)
        })?;

    tracing::info!("User signed up: {}", user.username);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::<()>::message("Successfully created new user.")),
    ))
}

/// Handle user signin request
#[axum::debug_handler]
pub async fn signin(
    Extension(pool): Extension<SqlitePool>,
    Extension(auth): Extension<AuthState>,
    payload: Result<Json<SigninRequest>, JsonRejection>,
) -> ApiResult<SigninResponse> {
    let payload = json_body(payload)?;
    let username = payload.username.clone();

    let response = AuthService::new(&pool, &auth)
        .signin(payload)
        .await
        .map_err(|e| {
            tracing::warn!("Signin failed for {}: {}", username, e);
            service_error_to_http(e)
        })?;

    tracing::info!("User signed in: {}", response.username);
    Ok((StatusCode::OK, Json(ApiResponse::ok(response))))
}
