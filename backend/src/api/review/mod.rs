//! Review endpoints nested under a movie.

pub mod handlers;
pub mod routes;
