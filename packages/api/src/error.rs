//! Errors surfaced by the LibraNet transport.

use serde::Deserialize;
use thiserror::Error;

/// A failed call to the LibraNet API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, DNS).
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status { status: u16, message: Option<String> },

    /// The backend answered 2xx with a body we could not read.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text to show inline: the backend's own message when it sent one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Failure to read a bearer credential.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("malformed credential: {0}")]
    Malformed(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
}

/// Pull a human-readable message out of an error response body.
///
/// The backend reports errors as `{"detail": "..."}`, `{"message": "..."}` or,
/// for request validation, `{"detail": [{"msg": "..."}, ...]}`.
pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let from_detail = match parsed.detail {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Array(items)) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            (!msgs.is_empty()).then(|| msgs.join("; "))
        }
        _ => None,
    };
    from_detail
        .or(parsed.message)
        .filter(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_detail_string() {
        assert_eq!(
            extract_error_message(r#"{"detail":"Book out of stock"}"#).as_deref(),
            Some("Book out of stock")
        );
    }

    #[test]
    fn test_extract_message_field() {
        assert_eq!(
            extract_error_message(r#"{"message":"Email already used"}"#).as_deref(),
            Some("Email already used")
        );
    }

    #[test]
    fn test_extract_validation_list() {
        let body = r#"{"detail":[{"loc":["body","email"],"msg":"field required"},{"msg":"bad date"}]}"#;
        assert_eq!(
            extract_error_message(body).as_deref(),
            Some("field required; bad date")
        );
    }

    #[test]
    fn test_extract_nothing_useful() {
        assert_eq!(extract_error_message("<html>502</html>"), None);
        assert_eq!(extract_error_message(r#"{"detail":""}"#), None);
        assert_eq!(extract_error_message(r#"{"other":1}"#), None);
    }

    #[test]
    fn test_user_message_prefers_backend_text() {
        let err = ApiError::Status {
            status: 400,
            message: Some("Dates overlap".to_string()),
        };
        assert_eq!(err.user_message("Reservation failed"), "Dates overlap");
        assert_eq!(err.to_string(), "request failed with status 400: Dates overlap");

        let bare = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(bare.user_message("Reservation failed"), "Reservation failed");
        assert_eq!(bare.to_string(), "request failed with status 500");
    }
}
