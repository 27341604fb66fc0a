use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the anemo workspace.
///
/// This covers the three ways a remote fetch can go wrong (the request never
/// completes, the provider rejects it, or the body does not have the expected
/// shape), plus timeouts and configuration problems.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnemoError {
    /// The request could not be sent, or no complete response was received.
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider answered with a non-success status code.
    #[error("remote rejected request: status {status}")]
    RemoteRejection {
        /// HTTP status code returned by the provider.
        status: u16,
    },

    /// The response was received but expected fields are absent or invalid.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The source call exceeded the configured timeout.
    #[error("source timed out after {after_ms} ms")]
    Timeout {
        /// Configured timeout in milliseconds.
        after_ms: u64,
    },

    /// Invalid input argument or configuration value.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A required credential was not present in the environment.
    #[error("missing credentials: {var} is not set")]
    MissingCredentials {
        /// Name of the environment variable that was looked up.
        var: String,
    },
}

impl AnemoError {
    /// Helper: build a `Transport` error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Helper: build a `MalformedResponse` error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// Helper: build a `RemoteRejection` error for a status code.
    #[must_use]
    pub const fn rejected(status: u16) -> Self {
        Self::RemoteRejection { status }
    }

    /// Helper: build a `Timeout` error from the configured duration.
    #[must_use]
    pub fn timeout(after: Duration) -> Self {
        Self::Timeout {
            after_ms: u64::try_from(after.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build a `MissingCredentials` error for an environment variable.
    pub fn missing_credentials(var: impl Into<String>) -> Self {
        Self::MissingCredentials { var: var.into() }
    }

    /// Stable short label for the error kind, suitable for log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::RemoteRejection { .. } => "remote_rejection",
            Self::MalformedResponse(_) => "malformed_response",
            Self::Timeout { .. } => "timeout",
            Self::InvalidArg(_) => "invalid_arg",
            Self::MissingCredentials { .. } => "missing_credentials",
        }
    }
}
