//! Movie-review catalog backend.
//!
//! Exposes the router and its building blocks so the binary and the
//! integration tests assemble the same application.

pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod database;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;
