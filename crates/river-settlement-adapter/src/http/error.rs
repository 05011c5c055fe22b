/*
[INPUT]:  Error sources (HTTP, API, serialization, webhook verification)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the RLS adapter
#[derive(Error, Debug)]
pub enum RiverError {
    /// Request could not be constructed
    #[error("failed to build request: {0}")]
    Build(String),

    /// HTTP transport failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The caller's cancellation token fired before a result was produced
    #[error("request cancelled by caller")]
    Cancelled,

    /// API returned a non-success status; detail is the raw response body
    #[error("error code {status}: {detail}")]
    Api { status: u16, detail: String },

    /// Success body could not be decoded; body carries the raw text read
    #[error("failed to parse response: {source} : {body}")]
    Decode {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// URL parsing failed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Client configuration rejected
    #[error("configuration error: {0}")]
    Config(String),

    /// Webhook secret is not valid hex
    #[error("failed to verify webhook signature: failed to decode secret: {0}")]
    InvalidSecret(#[from] hex::FromHexError),

    /// Webhook signature did not match the computed digest
    #[error("webhook signature failed validation")]
    SignatureMismatch,
}

impl RiverError {
    /// Create an API error from status code and raw body detail
    pub fn api_error(status: StatusCode, detail: impl Into<String>) -> Self {
        RiverError::Api {
            status: status.as_u16(),
            detail: detail.into(),
        }
    }

    /// Check if the error is the server reporting a missing resource
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RiverError::Api {
                status: 404,
                ..
            }
        )
    }

    /// Check if the error came from webhook signature verification
    pub fn is_verification_error(&self) -> bool {
        matches!(
            self,
            RiverError::InvalidSecret(_) | RiverError::SignatureMismatch
        )
    }
}

/// Result type alias for RLS operations
pub type Result<T> = std::result::Result<T, RiverError>;
