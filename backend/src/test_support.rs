//! Shared fixtures for unit tests.

use crate::auth::AuthState;
use crate::config::Config;
use crate::database::Database;
use crate::utils::jwt::JwtUtils;
use sqlx::SqlitePool;

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
        acquire_timeout_seconds: 3,
        jwt_secret: "test-secret".to_string(),
        jwt_expires_in_seconds: 3600,
        bcrypt_cost: 4,
        server_port: 0,
        movie_detail_requires_auth: true,
        review_requires_auth: true,
    }
}

/// Fresh, migrated in-memory database.
pub async fn test_pool() -> SqlitePool {
    Database::new(&test_config())
        .await
        .expect("in-memory database")
        .pool
}

pub fn test_auth_state() -> AuthState {
    let config = test_config();
    AuthState::new(
        JwtUtils::new(&config.jwt_secret, config.jwt_expires_in_seconds),
        config.bcrypt_cost,
    )
}
