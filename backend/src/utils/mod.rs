//! Collection of general utility functions.
//!
//! This module holds small, reusable helpers that do not fit into a specific
//! domain module.

use crate::errors::{ServiceError, ServiceResult};
use uuid::Uuid;

pub mod jwt;

/// Generates a fresh, time-ordered record identifier.
pub fn new_object_id() -> String {
    Uuid::now_v7().to_string()
}

/// Checks that `id` is a well-formed record identifier and returns its
/// canonical form.
pub fn parse_object_id(id: &str) -> ServiceResult<String> {
    Uuid::parse_str(id.trim())
        .map(|uuid| uuid.hyphenated().to_string())
        .map_err(|_| ServiceError::validation(format!("Invalid id: {}", id)))
}
