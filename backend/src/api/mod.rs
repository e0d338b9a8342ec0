//! Central module for organizing the application's main API endpoints.
//!
//! This module groups the catalog endpoints (movies and their reviews).
//! Signup and signin live in the `auth` module.

pub mod common;
pub mod movie;
pub mod review;
