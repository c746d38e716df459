use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized - session may have expired")]
    Unauthorized,

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Error body the backend sends with non-2xx responses.
///
/// Validation failures carry `message` as an array of per-field messages;
/// everything else sends a single string.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: ErrorMessage,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl ErrorBody {
    /// Normalize `message` to a single human-readable string: the string
    /// itself, or the first element of the array.
    pub fn first_message(&self) -> &str {
        match &self.message {
            ErrorMessage::One(message) => message,
            ErrorMessage::Many(messages) => {
                messages.first().map(String::as_str).unwrap_or("Unknown error")
            }
        }
    }
}

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            format!(
                "{}... (truncated, {} total bytes)",
                &body[..MAX_ERROR_BODY_LENGTH],
                body.len()
            )
        }
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => parsed.first_message().to_string(),
            Err(_) => Self::truncate_body(body),
        };
        match status.as_u16() {
            401 => ApiError::Unauthorized,
            400 | 422 => ApiError::BadRequest(message),
            403 => ApiError::AccessDenied(message),
            404 => ApiError::NotFound(message),
            500..=599 => ApiError::ServerError(message),
            _ => ApiError::InvalidResponse(format!("Status {}: {}", status, message)),
        }
    }

    /// Whether the caller should re-authenticate.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_single_message_normalization() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message": "Employee not found", "statusCode": 404}"#)
                .unwrap();
        assert_eq!(body.first_message(), "Employee not found");
        assert_eq!(body.status_code, 404);
        assert!(body.error.is_none());
    }

    #[test]
    fn test_message_array_takes_first() {
        let json = r#"{
            "message": ["email must be an email", "name should not be empty"],
            "statusCode": 400,
            "error": "Bad Request"
        }"#;
        let body: ErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.first_message(), "email must be an email");
        assert_eq!(body.error.as_deref(), Some("Bad Request"));
    }

    #[test]
    fn test_empty_message_array() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message": [], "statusCode": 400}"#).unwrap();
        assert_eq!(body.first_message(), "Unknown error");
    }

    #[test]
    fn test_from_status_mapping() {
        let err = ApiError::from_status(
            StatusCode::NOT_FOUND,
            r#"{"message": "No such department", "statusCode": 404}"#,
        );
        assert!(matches!(err, ApiError::NotFound(message) if message == "No such department"));

        let err = ApiError::from_status(StatusCode::UNAUTHORIZED, "");
        assert!(err.is_auth_error());

        let err = ApiError::from_status(
            StatusCode::BAD_REQUEST,
            r#"{"message": ["salary must be positive"], "statusCode": 400}"#,
        );
        assert!(matches!(err, ApiError::BadRequest(message) if message == "salary must be positive"));
    }

    #[test]
    fn test_unparseable_body_is_truncated() {
        let long_body = "x".repeat(600);
        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, &long_body);
        match err {
            ApiError::ServerError(message) => {
                assert!(message.contains("truncated"));
                assert!(message.contains("600 total bytes"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
