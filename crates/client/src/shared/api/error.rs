use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

/// Failure of a single API call.
///
/// `Http` renders as `"<status>: <body>"`, the convention the dashboard's
/// toast handling parses with [`extract_error_message`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("{status}: {body}")]
    Http { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    /// Form validation failed before anything was sent
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Message suitable for a toast
    pub fn user_message(&self) -> String {
        extract_error_message(&self.to_string())
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

static STATUS_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^\s*(\d{3}):\s*(.*)$").expect("status prefix regex is valid")
});

/// Pull a readable message out of `"<status>: <json>"`.
///
/// Looks for `message` then `error` in the JSON part; a non-JSON body is
/// returned as-is; anything else falls back to the raw input.
pub fn extract_error_message(raw: &str) -> String {
    let Some(caps) = STATUS_PREFIX.captures(raw) else {
        return raw.to_string();
    };
    let body = caps.get(2).map(|m| m.as_str().trim()).unwrap_or_default();
    if body.is_empty() {
        return raw.to_string();
    }

    match serde_json::from_str::<Value>(body) {
        Ok(json) => ["message", "error"]
            .iter()
            .find_map(|key| json.get(*key).and_then(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(|| raw.to_string()),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_message_field() {
        assert_eq!(
            extract_error_message(r#"400: {"message":"Lot number already exists"}"#),
            "Lot number already exists"
        );
    }

    #[test]
    fn test_extracts_error_field() {
        assert_eq!(
            extract_error_message(r#"403: {"error":"Forbidden"}"#),
            "Forbidden"
        );
    }

    #[test]
    fn test_plain_text_body() {
        assert_eq!(extract_error_message("502: Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_falls_back_to_raw() {
        assert_eq!(extract_error_message("connection refused"), "connection refused");
        assert_eq!(extract_error_message(r#"500: {"code":17}"#), r#"500: {"code":17}"#);
    }

    #[test]
    fn test_http_error_display_round_trip() {
        let err = ApiError::Http {
            status: 422,
            body: r#"{"message":"Park is required"}"#.into(),
        };
        assert_eq!(err.to_string(), r#"422: {"message":"Park is required"}"#);
        assert_eq!(err.user_message(), "Park is required");
        assert_eq!(err.status(), Some(422));
    }
}
