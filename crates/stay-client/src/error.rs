//! API error taxonomy
//!
//! Every failed remote call surfaces as an [`ApiError`]. The variants are
//! deliberately coarse: the store only needs to distinguish "the server
//! answered with a status" from "the request never completed", plus helpers
//! for the two statuses it branches on (401 for the session probe, 404 for
//! the single-offer fetch).

use thiserror::Error;

/// Failure of a remote API call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server responded with a non-success status
    #[error("api responded with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The request failed before a response arrived (connect, timeout, decode)
    #[error("transport failure: {0}")]
    Transport(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ApiError::Status {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => ApiError::Transport(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_helper() {
        let err = ApiError::Status {
            status: 401,
            message: "no token".into(),
        };
        assert!(err.is_unauthorized());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_transport_is_neither_status() {
        let err = ApiError::Transport("connection refused".into());
        assert!(!err.is_unauthorized());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_display_includes_status() {
        let err = ApiError::Status {
            status: 404,
            message: "offer not found".into(),
        };
        assert!(err.to_string().contains("404"));
    }
}
