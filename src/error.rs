// src/error.rs
//! Library error types.
//!
//! API failures are classified into a fixed sentinel vocabulary
//! (`ErrorCode`) so callers can branch on the failure kind without
//! matching message strings.

use std::fmt;
use thiserror::Error;

use crate::types::ParseError;

/// Notion API error codes as a typed vocabulary.
///
/// Each variant corresponds to one `code` string the API returns in its
/// error body. Codes this client doesn't recognize are preserved in
/// `Unknown` rather than collapsed into a generic failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    /// Request body contains invalid JSON
    InvalidJson,
    /// The request URL is not valid
    InvalidRequestUrl,
    /// The request is not supported
    InvalidRequest,
    /// Request parameters failed Notion's validation
    Validation,
    /// API token is invalid or expired
    Unauthorized,
    /// API token lacks permission for this resource
    RestrictedResource,
    /// The requested object does not exist or is inaccessible
    ObjectNotFound,
    /// Conflict with the current state of the resource
    Conflict,
    /// API rate limit exceeded
    RateLimited,
    /// Notion internal server error
    InternalServer,
    /// Notion is temporarily unavailable
    ServiceUnavailable,
    /// An error code this client doesn't recognize yet
    Unknown(String),
}

impl ErrorCode {
    /// Parse an API error code string into the typed vocabulary.
    pub fn from_code(code: &str) -> Self {
        match code {
            "invalid_json" => Self::InvalidJson,
            "invalid_request_url" => Self::InvalidRequestUrl,
            "invalid_request" => Self::InvalidRequest,
            "validation_error" => Self::Validation,
            "unauthorized" => Self::Unauthorized,
            "restricted_resource" => Self::RestrictedResource,
            "object_not_found" => Self::ObjectNotFound,
            "conflict_error" => Self::Conflict,
            "rate_limited" => Self::RateLimited,
            "internal_server_error" => Self::InternalServer,
            "service_unavailable" => Self::ServiceUnavailable,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Whether this error is transient and worth retrying.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::ServiceUnavailable | Self::InternalServer
        )
    }

    /// Whether this error means the resource simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ObjectNotFound)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidJson => write!(f, "invalid_json"),
            Self::InvalidRequestUrl => write!(f, "invalid_request_url"),
            Self::InvalidRequest => write!(f, "invalid_request"),
            Self::Validation => write!(f, "validation_error"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::RestrictedResource => write!(f, "restricted_resource"),
            Self::ObjectNotFound => write!(f, "object_not_found"),
            Self::Conflict => write!(f, "conflict_error"),
            Self::RateLimited => write!(f, "rate_limited"),
            Self::InternalServer => write!(f, "internal_server_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
            Self::Unknown(code) => write!(f, "{}", code),
        }
    }
}

/// Main library error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Caller-supplied parameters violated a required-field or
    /// mutual-exclusion rule. Raised before any network call.
    #[error("invalid request params: {0}")]
    Validation(String),

    /// Request construction or network failure, surfaced verbatim.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A non-2xx response with a structured error body.
    #[error("{message} (code: {code}, status: {status})")]
    Api {
        status: u16,
        code: ErrorCode,
        message: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode response: {0}")]
    Json(#[from] serde_json::Error),

    /// The response decoded but had an unexpected shape, e.g. an
    /// unrecognized discriminant with no forward-compatible fallback.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// A request URL could not be assembled.
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// The sentinel code of an API error, if this is one.
    pub fn api_code(&self) -> Option<&ErrorCode> {
        match self {
            Self::Api { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
