//! Data structures for authentication requests and responses.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Signup request payload
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    pub name: Option<String>,

    #[validate(
        required(message = "Please include both username and password to signup."),
        length(min = 1, message = "Please include both username and password to signup.")
    )]
    pub username: Option<String>,

    #[validate(
        required(message = "Please include both username and password to signup."),
        length(min = 1, message = "Please include both username and password to signup.")
    )]
    pub password: Option<String>,
}

/// Signin request payload
///
/// Missing fields are not rejected up front; they simply fail to
/// authenticate.
#[derive(Debug, Default, Deserialize)]
pub struct SigninRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Token and user details returned by a successful signin
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SigninResponse {
    /// Ready-to-send `Authorization` value (`JWT <token>`)
    pub token: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Token lifetime in seconds
    pub expires_in: u64,
}
