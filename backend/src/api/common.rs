//! Response envelope and error mapping shared by every handler.
//!
//! Every JSON object the API returns carries a `success` flag. Failures add a
//! human-readable `message`; successes flatten their payload (`movie`,
//! `movies`, `review`, `token`) next to the flag.
//!
//! # Error Handling Flow
//! 1. Service layer returns a `ServiceError`
//! 2. `service_error_to_http` converts it to a status code and envelope
//! 3. Body rejections from axum's `Json` extractor become validation errors

use crate::errors::ServiceError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use serde::Serialize;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Indicates if the request was successful
    pub success: bool,
    /// Human-readable message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Payload fields, inlined into the envelope
    #[serde(flatten)]
    pub data: Option<T>,
}

/// Error half of every handler's return type.
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

pub type ApiResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

#[derive(Debug, Serialize)]
pub struct MoviePayload<T> {
    pub movie: T,
}

#[derive(Debug, Serialize)]
pub struct MoviesPayload<T> {
    pub movies: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct ReviewPayload<T> {
    pub review: T,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }

    /// Create a successful response without a message
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Create a successful response that carries only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Converts ServiceError to the matching status code and error envelope
pub fn service_error_to_http(error: ServiceError) -> ApiError {
    let (status, message) = match error {
        ServiceError::Validation { message } => (StatusCode::BAD_REQUEST, message),
        ServiceError::Unauthorized { message } => (StatusCode::UNAUTHORIZED, message),
        ServiceError::NotFound { entity, identifier } => (
            StatusCode::NOT_FOUND,
            format!("{} '{}' not found", entity, identifier),
        ),
        ServiceError::AlreadyExists { entity, .. } if entity == "User" => (
            StatusCode::CONFLICT,
            "A user with that username already exists.".to_string(),
        ),
        ServiceError::AlreadyExists { entity, identifier } => (
            StatusCode::CONFLICT,
            format!("{} '{}' already exists", entity, identifier),
        ),
        // Unsupported methods answer 500, not 405.
        ServiceError::Unsupported { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        ServiceError::Database { source } => {
            tracing::error!("Database error: {:#}", source);
            (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", source))
        }
        ServiceError::InternalError { message } => {
            tracing::error!("Internal error: {}", message);
            (StatusCode::INTERNAL_SERVER_ERROR, message)
        }
    };

    (status, Json(ApiResponse::<()>::error(message)))
}

/// Unwraps a JSON body, reporting malformed or mistyped bodies as 400.
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        service_error_to_http(ServiceError::validation(rejection.body_text()))
    })
}
