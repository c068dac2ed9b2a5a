//! Shared error response structure

use serde::{Deserialize, Serialize};

/// Error body returned by endpoints that signal failure through the status code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_shape() {
        let body = serde_json::to_value(ErrorResponse::new("Invalid token")).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Invalid token" }));
    }
}
