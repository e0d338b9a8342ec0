//! Central module for application-wide configuration settings.
//!
//! This module handles loading and managing configuration parameters such as
//! the database URL, token signing secret, server port, and the per-route
//! authentication policy.

use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
    pub jwt_secret: String,
    pub jwt_expires_in_seconds: u64,
    pub bcrypt_cost: u32,
    pub server_port: u16,
    /// Whether `GET /movies/{id}` requires a token.
    pub movie_detail_requires_auth: bool,
    /// Whether `POST`/`GET /movies/{id}/review` require a token.
    pub review_requires_auth: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL not set")?;

        let max_connections = lookup("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|| "5".to_string())
            .parse::<u32>()
            .context("DB_MAX_CONNECTIONS must be a valid number")?;

        let acquire_timeout_seconds = lookup("DB_ACQUIRE_TIMEOUT_SECONDS")
            .unwrap_or_else(|| "3".to_string())
            .parse::<u64>()
            .context("DB_ACQUIRE_TIMEOUT_SECONDS must be a valid number")?;

        let jwt_secret = lookup("SECRET_KEY")
            .or_else(|| lookup("JWT_SECRET"))
            .context("SECRET_KEY not set")?;

        let jwt_expires_in_seconds = lookup("JWT_EXPIRES_IN_SECONDS")
            .unwrap_or_else(|| "3600".to_string())
            .parse::<u64>()
            .context("JWT_EXPIRES_IN_SECONDS must be a valid number")?;

        let bcrypt_cost = lookup("BCRYPT_COST")
            .map(|raw| raw.parse::<u32>())
            .transpose()
            .context("BCRYPT_COST must be a valid number")?
            .unwrap_or(bcrypt::DEFAULT_COST);

        let server_port = lookup("PORT")
            .or_else(|| lookup("SERVER_PORT"))
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid number")?;

        let movie_detail_requires_auth = parse_flag(
            lookup("MOVIE_DETAIL_REQUIRES_AUTH"),
            "MOVIE_DETAIL_REQUIRES_AUTH",
        )?;
        let review_requires_auth =
            parse_flag(lookup("REVIEW_REQUIRES_AUTH"), "REVIEW_REQUIRES_AUTH")?;

        Ok(Config {
            database_url,
            max_connections,
            acquire_timeout_seconds,
            jwt_secret,
            jwt_expires_in_seconds,
            bcrypt_cost,
            server_port,
            movie_detail_requires_auth,
            review_requires_auth,
        })
    }
}

/// Unset means `true`; routes stay protected unless explicitly opened.
fn parse_flag(value: Option<String>, name: &str) -> Result<bool> {
    match value {
        None => Ok(true),
        Some(raw) => raw
            .trim()
            .to_ascii_lowercase()
            .parse::<bool>()
            .with_context(|| format!("{} must be true or false", name)),
    }
}
