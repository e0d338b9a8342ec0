//! Authentication module for signup, signin, and access control.
//!
//! This module provides the public interface for user authentication: the
//! signup/signin endpoints, the token-checking middleware, and the shared
//! state both depend on.

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;

use crate::config::Config;
use crate::utils::jwt::JwtUtils;

/// Authentication collaborators shared by every request.
#[derive(Clone)]
pub struct AuthState {
    pub jwt: JwtUtils,
    /// bcrypt work factor for new password hashes
    pub hash_cost: u32,
}

impl AuthState {
    pub fn new(jwt: JwtUtils, hash_cost: u32) -> Self {
        Self { jwt, hash_cost }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(JwtUtils::from_config(config), config.bcrypt_cost)
    }
}
