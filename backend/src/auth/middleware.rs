//! Middleware for protecting authenticated routes.
//!
//! This module validates `Authorization: JWT <token>` headers and declares,
//! per route, whether that check applies.

use crate::api::common::{ApiError, service_error_to_http};
use crate::auth::AuthState;
use crate::config::Config;
use crate::errors::ServiceError;
use crate::utils::jwt::JwtUtils;
use axum::{
    extract::{Extension, Request},
    http::header::AUTHORIZATION,
    middleware::{self, Next},
    response::Response,
    routing::MethodRouter,
};

/// Which of the configurable routes demand a token.
///
/// Every other protected route is always gated; routes that are never gated
/// are declared as such in their router.
#[derive(Debug, Clone, Copy)]
pub struct RouteAuthPolicy {
    /// `GET /movies/{id}`
    pub movie_detail: bool,
    /// `POST` and `GET /movies/{id}/review`
    pub review: bool,
}

impl RouteAuthPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            movie_detail: config.movie_detail_requires_auth,
            review: config.review_requires_auth,
        }
    }
}

impl Default for RouteAuthPolicy {
    fn default() -> Self {
        Self {
            movie_detail: true,
            review: true,
        }
    }
}

/// Wraps a method router in `jwt_auth` when `required` is set.
pub fn protect<S>(route: MethodRouter<S>, required: bool) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    if required {
        route.layer(middleware::from_fn(jwt_auth))
    } else {
        route
    }
}

/// JWT authentication middleware
pub async fn jwt_auth(
    Extension(auth): Extension<AuthState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| reject("Missing authorization header"))?;

    let token = JwtUtils::token_from_header(auth_header)
        .ok_or_else(|| reject("Authorization header must use the JWT scheme"))?;

    match auth.jwt.validate_token(token) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        Err(e) => {
            tracing::warn!("Rejected token on {}: {}", request.uri().path(), e);
            Err(reject("Unauthorized"))
        }
    }
}

fn reject(message: &str) -> ApiError {
    service_error_to_http(ServiceError::unauthorized(message))
}
