//! The uniform response envelope used by every JSON endpoint.

use serde::{Deserialize, Serialize};

/// Application-level success sentinel.
///
/// The backend reports success with `code == 200` even when the HTTP
/// transport status differs (e.g. `201 Created`). Earlier client builds
/// also accepted `0`; this implementation recognizes `200` only.
pub const SUCCESS_CODE: i64 = 200;

/// Uniform `{code, message, data}` wrapper around every JSON response.
///
/// Decoding this struct doubles as envelope detection: `code` and
/// `message` are required, `data` is optional, and unknown fields (the
/// backend also emits a `success` boolean) are ignored. A body that fails
/// this decode is not envelope-shaped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiEnvelope<T> {
    /// Application status code; [`SUCCESS_CODE`] signals success, any
    /// other value is an application-level error even on HTTP 2xx.
    pub code: i64,
    /// Human-readable outcome, suitable for direct display.
    pub message: String,
    /// Payload; absent for no-content operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Build a success envelope around a payload.
    ///
    /// Used when the backend hands back an unwrapped body and the client
    /// normalizes it into envelope form.
    pub fn success(data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            message: "success".to_string(),
            data: Some(data),
        }
    }

    /// Whether the application-level code signals success.
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

/// Paginated collection payload carried inside a success envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total matching records across all pages.
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}
