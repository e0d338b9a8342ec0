//! Data access layer.
//!
//! Each repository wraps a borrowed connection pool and exposes the SQL for
//! one table.

pub mod movie_repository;
pub mod review_repository;
pub mod user_repository;
