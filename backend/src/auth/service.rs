//! Core business logic for the authentication system.

use crate::auth::AuthState;
use crate::auth::models::*;
use crate::database::models::User;
use crate::errors::{ServiceError, ServiceResult};
use crate::services::user_service::UserService;
use crate::utils::jwt::JwtUtils;
use sqlx::SqlitePool;
use validator::Validate;

/// Authentication service for signup and token issuance
pub struct AuthService<'a> {
    auth: &'a AuthState,
    user_service: UserService<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService instance
    pub fn new(pool: &'a SqlitePool, auth: &'a AuthState) -> Self {
        Self {
            auth,
            user_service: UserService::new(pool, auth.hash_cost),
        }
    }

    /// Register a new user
    pub async fn signup(&self, request: SignupRequest) -> ServiceResult<User> {
        request
            .validate()
            .map_err(ServiceError::from_validation_errors)?;

        let (Some(username), Some(password)) = (request.username, request.password) else {
            return Err(ServiceError::validation(
                "Please include both username and password to signup.",
            ));
        };

        self.user_service
            .create_user(request.name, &username, &password)
            .await
    }

    /// Authenticate a user and issue a signed token
    pub async fn signin(&self, request: SigninRequest) -> ServiceResult<SigninResponse> {
        let user = self
            .user_service
            .authenticate_user(&request.username, &request.password)
            .await?;

        let token = self.auth.jwt.generate_token(&user.id, &user.username)?;

        Ok(SigninResponse {
            token: JwtUtils::header_value(&token),
            username: user.username,
            name: user.name,
            expires_in: self.auth.jwt.expires_in_seconds(),
        })
    }
}
