//! User business logic service.
//!
//! Owns password hashing and verification for the credential store.

use crate::database::models::{CreateUser, User};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::user_repository::UserRepository;
use crate::utils::new_object_id;
use bcrypt::{hash, verify};
use sqlx::SqlitePool;

pub struct UserService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
    /// bcrypt work factor used for new hashes
    hash_cost: u32,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    /// * `hash_cost` - bcrypt cost applied when hashing passwords
    pub fn new(pool: &'a SqlitePool, hash_cost: u32) -> Self {
        Self { pool, hash_cost }
    }

    /// Creates a new user, storing only the salted hash of the password.
    ///
    /// # Errors
    /// Returns `ServiceError::AlreadyExists` when the username is taken.
    pub async fn create_user(
        &self,
        name: Option<String>,
        username: &str,
        password: &str,
    ) -> ServiceResult<User> {
        let repo = UserRepository::new(self.pool);

        if repo.username_exists(username).await? {
            return Err(ServiceError::already_exists("User", username));
        }

        let password_hash = self.hash_password(password).await?;

        let data = CreateUser {
            id: new_object_id(),
            name,
            username: username.to_string(),
            password_hash,
        };

        // A concurrent signup can still win the race to the UNIQUE index.
        repo.create_user(data).await.map_err(|e| {
            if is_unique_violation(&e) {
                ServiceError::already_exists("User", username)
            } else {
                ServiceError::from(e)
            }
        })
    }

    /// Looks up a user by username. Absence is not an error.
    pub async fn find_user_by_username(&self, username: &str) -> ServiceResult<Option<User>> {
        let repo = UserRepository::new(self.pool);
        Ok(repo.get_user_by_username(username).await?)
    }

    /// Checks a candidate password against the user's stored hash.
    pub async fn verify_password(&self, user: &User, candidate: &str) -> ServiceResult<bool> {
        let candidate = candidate.to_string();
        let password_hash = user.password_hash.clone();

        tokio::task::spawn_blocking(move || verify(candidate, &password_hash))
            .await
            .map_err(|e| ServiceError::internal_error(format!("Password task failed: {}", e)))?
            .map_err(|e| {
                ServiceError::internal_error(format!("Password verification failed: {}", e))
            })
    }

    /// Resolves a username/password pair to a user.
    ///
    /// # Errors
    /// Returns `ServiceError::Unauthorized` for an unknown user or a wrong
    /// password, without saying which.
    pub async fn authenticate_user(&self, username: &str, password: &str) -> ServiceResult<User> {
        let user = self
            .find_user_by_username(username)
            .await?
            .ok_or_else(|| ServiceError::unauthorized("Authentication failed."))?;

        if !self.verify_password(&user, password).await? {
            return Err(ServiceError::unauthorized("Authentication failed."));
        }

        Ok(user)
    }

    async fn hash_password(&self, password: &str) -> ServiceResult<String> {
        let password = password.to_string();
        let cost = self.hash_cost;

        tokio::task::spawn_blocking(move || hash(password, cost))
            .await
            .map_err(|e| ServiceError::internal_error(format!("Password task failed: {}", e)))?
            .map_err(|e| ServiceError::internal_error(format!("Password hashing failed: {}", e)))
    }
}

fn is_unique_violation(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .is_some_and(|e| e.is_unique_violation())
}
