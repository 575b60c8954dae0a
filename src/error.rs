//! API Error Type
//!
//! One error shape for everything that can go wrong talking to the API.

use serde::{Deserialize, Serialize};

/// Common result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Error from an API call: HTTP status (when a response arrived) plus a
/// human-readable message suitable for direct display. `detail` is set
/// only when the server body carried a DRF `detail` message; callers that
/// show fixed fallback texts key off its presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub status: Option<u16>,
    pub message: String,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ApiError {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            detail: None,
        }
    }

    /// HTTP error whose body carried a server-supplied `detail`
    pub fn with_detail(status: u16, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self {
            status: Some(status),
            message: detail.clone(),
            detail: Some(detail),
        }
    }

    /// Transport-level failure: no HTTP response at all
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(None, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(Some(404), message)
    }

    /// True for 5xx responses, which additionally get broadcast on the
    /// error bus so any UI surface can react.
    pub fn is_server_error(&self) -> bool {
        matches!(self.status, Some(s) if s >= 500)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} ({})", self.message, status),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_detection() {
        assert!(ApiError::new(Some(500), "boom").is_server_error());
        assert!(ApiError::new(Some(503), "down").is_server_error());
        assert!(!ApiError::new(Some(404), "missing").is_server_error());
        assert!(!ApiError::network("offline").is_server_error());
    }

    #[test]
    fn display_includes_status_when_present() {
        let err = ApiError::new(Some(500), "Internal server error");
        assert_eq!(err.to_string(), "Internal server error (500)");
        let err = ApiError::network("Network error");
        assert_eq!(err.to_string(), "Network error");
    }

    #[test]
    fn detail_is_recorded_and_displayed() {
        let err = ApiError::with_detail(400, "Title cannot be empty.");
        assert_eq!(err.detail.as_deref(), Some("Title cannot be empty."));
        assert_eq!(err.to_string(), "Title cannot be empty. (400)");

        let err = ApiError::new(Some(400), "Request failed with status 400");
        assert_eq!(err.detail, None);
    }
}
