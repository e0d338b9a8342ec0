//! Defines the HTTP routes for the movie collection and single movies.

use super::handlers::{
    create_movie, delete_movie, get_movie, get_movies, unsupported, update_movie,
};
use crate::auth::middleware::{RouteAuthPolicy, protect};
use axum::{
    Router,
    routing::{get, put},
};

pub fn movie_router(policy: RouteAuthPolicy) -> Router {
    Router::new()
        .route(
            "/movies",
            protect(
                get(get_movies)
                    .post(create_movie)
                    .put(unsupported)
                    .delete(unsupported),
                true,
            ),
        )
        .route(
            "/movies/{id}",
            protect(get(get_movie), policy.movie_detail)
                .merge(protect(put(update_movie).delete(delete_movie), true)),
        )
}
