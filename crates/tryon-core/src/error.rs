//! Error types for the try-on client
//!
//! Backend, auth provider and input validation failures.

use thiserror::Error;

use crate::models::ErrorBody;

/// Failure talking to the try-on backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Backend answered with a non-success status
    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },

    /// Request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// Response body did not have the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// Endpoint URL could not be built
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Build a status error from a raw response body, keeping the backend's
    /// `detail` when the body is the usual `{ "detail": ... }` JSON.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message());
        ApiError::Status { status, detail }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Backend-provided detail, or `fallback` for anything else
    pub fn detail_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { detail: Some(detail), .. } => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure reported by (or while talking to) the auth provider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Provider returned an error object; the message is user-presentable
    #[error("{0}")]
    Provider(String),

    /// JS interop or response decoding failed
    #[error("Auth binding error: {0}")]
    Binding(String),
}

/// Input rejected before any request is made. Display text is shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please upload a photo of yourself.")]
    MissingBasePhoto,

    #[error("Please upload a garment image or fetch one from a URL.")]
    MissingGarment,

    #[error("Enter your email")]
    MissingEmail,

    #[error("Please enter a URL")]
    MissingUrl,
}
