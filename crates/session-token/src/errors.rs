use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IssueError {
    #[error("Signing secret is not configured")]
    MissingSecret,

    #[error("Invalid token expiry: {0}")]
    InvalidExpiry(String),

    #[error("Signing error: {0}")]
    Signing(String),

    #[error("Response channel rejected cookie: {0}")]
    Channel(String),
}

impl IssueError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            IssueError::MissingSecret => "MISSING_SECRET",
            IssueError::InvalidExpiry(_) => "INVALID_EXPIRY",
            IssueError::Signing(_) => "SIGNING_ERROR",
            IssueError::Channel(_) => "CHANNEL_ERROR",
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

/// Every issuance failure is a server-side misconfiguration or fault, so the
/// client only ever sees a generic 500.
impl IntoResponse for IssueError {
    fn into_response(self) -> Response {
        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: self.code().to_string(),
                message: "An internal error occurred while issuing the session".to_string(),
            },
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(error_response)).into_response()
    }
}
