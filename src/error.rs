//! Error types for the Freshdesk MCP server.
//!
//! This module defines `FreshdeskError`, the unified error type used
//! throughout the gateway, and the decoding of Freshdesk error bodies into
//! a single human-readable message.
//!
//! # Security
//!
//! All error messages are sanitized to ensure API keys are never leaked
//! in logs or error responses. Use `sanitize_message()` when constructing
//! error messages from external sources.

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Unified error type for all gateway operations.
///
/// Each variant provides specific context about the failure, enabling
/// meaningful error messages without leaking sensitive information
/// like API keys.
#[derive(Error, Debug)]
pub enum FreshdeskError {
    /// Configuration error - missing or invalid environment variables.
    #[error("configuration error: {0}")]
    Config(String),

    /// The remote host could not be reached or the transfer failed.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// The remote API answered with a non-success status.
    #[error("Freshdesk API error {status}: {message}")]
    Api {
        /// The HTTP status code returned.
        status: StatusCode,
        /// Message extracted from the error body, or the status line.
        message: String,
    },

    /// JSON serialization or deserialization failed.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A success response did not have the expected shape.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Input validation failed before any request was sent.
    #[error("validation error: {0}")]
    Validation(String),
}

impl FreshdeskError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        FreshdeskError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        FreshdeskError::Config(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        FreshdeskError::Validation(message.into())
    }

    /// Creates an unexpected-response error.
    pub fn unexpected(message: impl Into<String>) -> Self {
        FreshdeskError::UnexpectedResponse(message.into())
    }

    /// Creates a remote API error from a status and raw response body.
    ///
    /// The body is decoded with [`ApiErrorBody`]; if that yields nothing
    /// usable the status line is used instead.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        FreshdeskError::Api {
            status,
            message: api_error_message(status, body),
        }
    }

    /// Returns true if the error was raised locally before any network call.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, FreshdeskError::Validation(_))
    }

    /// Returns the HTTP status for remote API errors.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FreshdeskError::Api { status, .. } => Some(*status),
            FreshdeskError::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Sanitizes an error message to remove any occurrence of the API key.
    ///
    /// API keys must never appear in logs, error messages, or responses.
    ///
    /// # Returns
    ///
    /// The message with any occurrence of the API key replaced with `[REDACTED]`
    #[must_use]
    pub fn sanitize_message(message: &str, api_key: &str) -> String {
        if api_key.is_empty() {
            return message.to_string();
        }
        message.replace(api_key, "[REDACTED]")
    }

    /// Creates a sanitized version of this error's display message.
    #[must_use]
    pub fn sanitized_display(&self, api_key: &str) -> String {
        Self::sanitize_message(&self.to_string(), api_key)
    }
}

/// Error body returned by the Freshdesk API.
///
/// The schema is only partially documented: the headline may come as
/// `message` or `description`, and `errors` is either a map of field name
/// to messages or a list of `{field, message, code}` items. Missing parts
/// stay `None`; shapes that match neither form contribute no details.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    /// Headline message.
    #[serde(default)]
    pub message: Option<String>,

    /// Alternative headline used by most v2 endpoints.
    #[serde(default)]
    pub description: Option<String>,

    /// Field-level validation errors, kept raw.
    #[serde(default)]
    pub errors: Option<Value>,
}

/// Renders a JSON scalar or string list as text.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(value_text).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        Value::Null | Value::Object(_) => None,
        other => Some(other.to_string()),
    }
}

/// Renders each field error as `field: message`.
fn field_error_details(errors: &Value) -> Vec<String> {
    match errors {
        // {"email": ["is invalid"]}
        Value::Object(map) => map
            .iter()
            .filter_map(|(field, messages)| {
                value_text(messages).map(|text| format!("{}: {}", field, text))
            })
            .collect(),
        // [{"field": "email", "message": "is invalid", "code": "invalid_value"}]
        Value::Array(items) => items
            .iter()
            .filter_map(|item| {
                let message = item
                    .get("message")
                    .and_then(Value::as_str)
                    .or_else(|| item.get("code").and_then(Value::as_str))?;
                Some(match item.get("field").and_then(Value::as_str) {
                    Some(field) => format!("{}: {}", field, message),
                    None => message.to_string(),
                })
            })
            .collect(),
        _ => Vec::new(),
    }
}

impl ApiErrorBody {
    /// Combines the headline and field details into one message, if any
    /// part is present.
    pub fn summary(&self) -> Option<String> {
        let headline = self
            .message
            .as_deref()
            .or(self.description.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty());
        let details = self
            .errors
            .as_ref()
            .map(field_error_details)
            .unwrap_or_default();

        match (headline, details.is_empty()) {
            (None, true) => None,
            (Some(headline), true) => Some(headline.to_string()),
            (None, false) => Some(details.join("; ")),
            (Some(headline), false) => Some(format!("{} ({})", headline, details.join("; "))),
        }
    }
}

/// Builds the caller-visible message for a non-success response.
pub fn api_error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.summary())
        .unwrap_or_else(|| status_line(status))
}

/// Formats a status as `404 Not Found`.
fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_error() {
        let err = FreshdeskError::missing_env("FRESHDESK_API_KEY");
        assert!(err.to_string().contains("FRESHDESK_API_KEY"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_validation_error() {
        let err = FreshdeskError::validation("no fields to update");
        assert_eq!(err.to_string(), "validation error: no fields to update");
        assert!(err.is_validation());
    }

    #[test]
    fn test_message_and_field_map_are_combined() {
        let body = r#"{"message":"Validation failed","errors":{"email":["is invalid"]}}"#;
        let message = api_error_message(StatusCode::BAD_REQUEST, body);
        assert!(message.contains("Validation failed"));
        assert!(message.contains("email: is invalid"));
    }

    #[test]
    fn test_description_and_error_list_are_combined() {
        let body = r#"{
            "description": "Validation failed",
            "errors": [
                {"field": "email", "message": "It should be a valid email address", "code": "invalid_value"},
                {"field": "priority", "code": "missing_field"}
            ]
        }"#;
        let message = api_error_message(StatusCode::BAD_REQUEST, body);
        assert_eq!(
            message,
            "Validation failed (email: It should be a valid email address; priority: missing_field)"
        );
    }

    #[test]
    fn test_unknown_errors_shape_keeps_headline() {
        let body = r#"{"message":"Validation failed","errors":"bad"}"#;
        let message = api_error_message(StatusCode::BAD_REQUEST, body);
        assert_eq!(message, "Validation failed");
    }

    #[test]
    fn test_headline_only() {
        let body = r#"{"message":"You have exceeded the limit"}"#;
        let message = api_error_message(StatusCode::FORBIDDEN, body);
        assert_eq!(message, "You have exceeded the limit");
    }

    #[test]
    fn test_non_json_body_falls_back_to_status_line() {
        let message = api_error_message(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
        assert_eq!(message, "502 Bad Gateway");
    }

    #[test]
    fn test_empty_json_object_falls_back_to_status_line() {
        let message = api_error_message(StatusCode::NOT_FOUND, "{}");
        assert_eq!(message, "404 Not Found");
    }

    #[test]
    fn test_from_response_keeps_status() {
        let err = FreshdeskError::from_response(StatusCode::NOT_FOUND, "");
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert!(err.to_string().contains("404 Not Found"));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_sanitize_message_removes_api_key() {
        let api_key = "super_secret_key_12345";
        let message = format!("Error connecting with key {} to server", api_key);
        let sanitized = FreshdeskError::sanitize_message(&message, api_key);
        assert!(!sanitized.contains(api_key));
        assert!(sanitized.contains("[REDACTED]"));
    }

    #[test]
    fn test_sanitize_message_empty_key() {
        let message = "Some error message";
        let sanitized = FreshdeskError::sanitize_message(message, "");
        assert_eq!(sanitized, message);
    }
}
