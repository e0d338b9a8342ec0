//! Defines the HTTP routes for reviews nested under a movie.

use super::handlers::create_review;
use crate::api::movie::handlers::unsupported;
use crate::auth::middleware::{RouteAuthPolicy, protect};
use axum::{
    Router,
    routing::{post, put},
};

pub fn review_router(policy: RouteAuthPolicy) -> Router {
    Router::new().route(
        "/movies/{id}/review",
        protect(post(create_review).get(unsupported), policy.review)
            .merge(put(unsupported).delete(unsupported)),
    )
}
