//! JSON envelopes for acknowledgements and failures.

use serde::{Deserialize, Serialize};

/// `{"status": "..."}` acknowledgement for mutating requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn created() -> Self {
        Self::new("created")
    }

    pub fn updated() -> Self {
        Self::new("updated")
    }

    pub fn deleted() -> Self {
        Self::new("deleted")
    }

    fn new(status: &str) -> Self {
        Self {
            status: status.to_string(),
        }
    }
}

/// `{"error": "..."}` body for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_as_single_field() {
        let json = serde_json::to_string(&StatusResponse::created()).unwrap();
        assert_eq!(json, r#"{"status":"created"}"#);
    }

    #[test]
    fn error_serializes_as_single_field() {
        let json = serde_json::to_string(&ErrorResponse::new("Book not found: 1")).unwrap();
        assert_eq!(json, r#"{"error":"Book not found: 1"}"#);
    }
}
