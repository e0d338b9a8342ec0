//! Router assembly.
//!
//! Every route and its authentication requirement is declared here or in the
//! router function it nests.

use crate::api::common::ApiResponse;
use crate::api::movie::routes::movie_router;
use crate::api::review::routes::review_router;
use crate::auth::AuthState;
use crate::auth::middleware::RouteAuthPolicy;
use crate::auth::routes::auth_router;
use axum::{Extension, Router, response::Json, routing::get};
use serde_json::{Value, json};
use sqlx::SqlitePool;

/// Builds the full application router with its shared collaborators.
pub fn build_router(pool: SqlitePool, auth: AuthState, policy: RouteAuthPolicy) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .merge(auth_router())
        .merge(movie_router(policy))
        .merge(review_router(policy))
        .layer(Extension(pool))
        .layer(Extension(auth))
}

async fn root_handler() -> Json<ApiResponse<Value>> {
    Json(ApiResponse::success(
        json!({
            "service": "cinereview",
            "version": env!("CARGO_PKG_VERSION")
        }),
        "Welcome to the movie review API",
    ))
}
