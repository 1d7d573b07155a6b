//! Error types for the wardrobe client.

use thiserror::Error;

/// Errors that can occur when using the wardrobe client.
///
/// Every variant's `Display` output is suitable for showing to a user
/// directly; callers needing the HTTP status or the application code can
/// go through [`ClientError::status`] and [`ClientError::code`] without
/// matching on variants.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure (connection refused, TLS, timeout).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured base URL does not parse.
    #[error("Invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    /// A header name or value could not be encoded.
    #[error("Invalid header: {name}")]
    InvalidHeader {
        /// Name of the offending header.
        name: String,
    },

    /// Server reported 401. Raised after the registered unauthorized
    /// handler (if any) has run.
    #[error("{message}")]
    Unauthorized {
        /// HTTP status, always 401.
        status: u16,
        /// Application error code from the envelope, or the HTTP status
        /// when the body carried no envelope.
        code: i64,
        /// Server-provided message, or "Unauthorized".
        message: String,
        /// Request path that was rejected.
        path: String,
    },

    /// HTTP-level or application-level failure. Envelope errors arriving
    /// under HTTP 2xx carry `status` 200 with the envelope's `code`.
    #[error("{message}")]
    Api {
        /// HTTP status the failure was observed under.
        status: u16,
        /// Application error code.
        code: i64,
        /// Best-effort message extracted from the response.
        message: String,
        /// Raw payload kept for diagnostics, when the response had one.
        body: Option<serde_json::Value>,
    },

    /// Success envelope without a payload where one was required.
    #[error("Response from {path} carried no data")]
    MissingData {
        /// Request path whose response was empty.
        path: String,
    },

    /// Payload that could not be serialized or decoded into the
    /// requested type.
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Session storage failure.
    #[error("Session storage error: {0}")]
    Storage(String),

    /// Request rejected client-side before any network traffic.
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl ClientError {
    /// HTTP status the failure was observed under, when one exists.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. } | Self::Api { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Application-level error code, when one exists.
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Unauthorized { code, .. } | Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Whether this failure is a 401 rejection.
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}
