//! Module for core business logic services.
//!
//! Services validate requests, orchestrate repository calls, and translate
//! persistence outcomes into `ServiceError`s.

pub mod movie_service;
pub mod review_service;
pub mod user_service;
