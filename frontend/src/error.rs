use serde::Deserialize;
use thiserror::Error;

/// Failure of a single API call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Http { status: u16, message: Option<String> },
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("failed to serialize request: {0}")]
    Encode(String),
    #[error("failed to build request: {0}")]
    Request(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl ApiError {
    /// Builds an `Http` error from a non-2xx response body, keeping the
    /// backend's `message` field when the body is JSON carrying one.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        ApiError::Http { status, message }
    }

    /// Text to show the user: the backend's message when it sent one,
    /// otherwise the page's own fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Http {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401, .. })
    }
}

/// Problems found in a form before anything is sent.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0} must be a number")]
    NotANumber(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_wins_over_fallback() {
        let err = ApiError::from_response(400, r#"{"message":"Invalid credentials"}"#);
        assert_eq!(err.user_message("Login failed"), "Invalid credentials");
    }

    #[test]
    fn fallback_when_body_has_no_message() {
        let err = ApiError::from_response(500, "<html>Internal Server Error</html>");
        assert_eq!(
            err,
            ApiError::Http {
                status: 500,
                message: None
            }
        );
        assert_eq!(err.user_message("Login failed"), "Login failed");

        let err = ApiError::from_response(400, r#"{"message":"  "}"#);
        assert_eq!(err.user_message("Registration failed"), "Registration failed");
    }

    #[test]
    fn network_errors_use_fallback() {
        let err = ApiError::Network("offline".into());
        assert_eq!(err.user_message("Login failed"), "Login failed");
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn request_and_encode_failures_are_distinct() {
        let build = ApiError::Request("bad header".into());
        let encode = ApiError::Encode("cyclic value".into());
        assert_eq!(build.to_string(), "failed to build request: bad header");
        assert_eq!(encode.to_string(), "failed to serialize request: cyclic value");
        assert_ne!(build, ApiError::Encode("bad header".into()));
        assert_eq!(build.user_message("Failed to delete goal."), "Failed to delete goal.");
    }

    #[test]
    fn display_includes_status() {
        let err = ApiError::from_response(401, r#"{"message":"No token"}"#);
        assert_eq!(err.to_string(), "HTTP 401: No token");
        assert!(err.is_unauthorized());
    }
}
