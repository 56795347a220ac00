//! Error types for the whiteboard API client.
//!
//! # Design
//! Everything the remote can do wrong is normalized into one `ApiError`
//! enum: a response outside the 2xx range, a 2xx body that is not JSON, or
//! JSON that is missing required fields (including the widget `type`
//! discriminator). The originating `serde_json` or transport failure is kept
//! as the error source rather than flattened to a string, so callers can
//! still inspect the cause when deciding how to react.

use std::error::Error;
use std::fmt;

/// A transport-level failure: the HTTP round-trip produced no response.
pub type TransportError = Box<dyn Error + Send + Sync>;

/// Errors returned by client operations.
#[derive(Debug)]
pub enum ApiError {
    /// The HTTP round-trip failed before any response arrived
    /// (connect, timeout, TLS).
    Transport(TransportError),

    /// The server answered with a status outside the 2xx range. Carries the
    /// raw status and body for diagnostics.
    Status { status: u16, body: String },

    /// The server answered 2xx but the body was not valid JSON.
    InvalidJson {
        status: u16,
        source: serde_json::Error,
    },

    /// The body was valid JSON but did not match the expected shape: a
    /// required field was absent or mistyped, or a widget carried a missing
    /// or unrecognized `type` discriminator.
    Decode { source: serde_json::Error },

    /// The request payload could not be serialized to JSON.
    Serialize { source: serde_json::Error },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(source) => {
                write!(f, "transport failed: {source}")
            }
            ApiError::Status { status, body } => {
                write!(f, "unexpected response: HTTP {status}: {body}")
            }
            ApiError::InvalidJson { status, source } => {
                write!(f, "unexpected response: HTTP {status} body is not JSON: {source}")
            }
            ApiError::Decode { source } => {
                write!(f, "unexpected response: {source}")
            }
            ApiError::Serialize { source } => {
                write!(f, "request serialization failed: {source}")
            }
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiError::Transport(source) => Some(source.as_ref()),
            ApiError::Status { .. } => None,
            ApiError::InvalidJson { source, .. }
            | ApiError::Decode { source }
            | ApiError::Serialize { source } => Some(source),
        }
    }
}
