use crate::maybe::Maybe;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/// The error payload returned by the platform on non-2xx responses.
///
/// Sent with either `application/vnd.com.nsn.cumulocity.error+json` or
/// plain `application/json`; the shape is the same.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct C8yError {
    /// Error type, e.g. `security/Unauthorized`.
    pub error: String,

    /// Human readable details.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub message: Maybe<String>,

    /// A URL to the error documentation.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub info: Maybe<String>,
}

impl fmt::Display for C8yError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message.value() {
            Some(message) => write!(f, "{}: {}", self.error, message),
            None => write!(f, "{}", self.error),
        }
    }
}

impl std::error::Error for C8yError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_payload_keeps_all_fields() {
        let error: C8yError = serde_json::from_str(
            r#"{"error": "security/Unauthorized", "message": "Invalid credentials", "info": "https://cumulocity.com/guides/reference-guide/#error_reporting"}"#,
        )
        .unwrap();

        assert_eq!(error.error, "security/Unauthorized");
        assert_eq!(error.message.value().unwrap(), "Invalid credentials");
        assert_eq!(
            error.to_string(),
            "security/Unauthorized: Invalid credentials"
        );
    }

    #[test]
    fn message_is_optional() {
        let error: C8yError = serde_json::from_str(r#"{"error": "not found"}"#).unwrap();
        assert_eq!(error.to_string(), "not found");
    }
}
