//! Error type for the Tienda Mobil API client.
//!
//! Every failure in this crate is reported as a [`TiendaMobilError`]:
//! configuration validation, transport failures, malformed response bodies,
//! structured API errors and HTTP error statuses. There is no sub-typing by
//! cause; the message text tells them apart.
//!
//! # Message Conventions
//!
//! | Cause | Message shape |
//! |-------|---------------|
//! | Transport failure | `Connection error: <transport description>` |
//! | Malformed body | `JSON parse error: <parser description>` |
//! | `error` key in body | `Error: <value>` |
//! | `errors` key in body | `Errors: <value>` |
//! | HTTP error status | `<code> Client Error: <reason> for url: <url>` |
//!
//! # Example
//!
//! ```rust
//! use tienda_mobil::TiendaMobilError;
//!
//! let error = TiendaMobilError::new("Error: Customer cannot be empty");
//! assert_eq!(error.message(), "Error: Customer cannot be empty");
//! assert_eq!(error.to_string(), "Error: Customer cannot be empty");
//! ```

use std::error::Error as _;

use thiserror::Error;

/// The single error kind returned by every fallible operation in the crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TiendaMobilError {
    message: String,
}

impl TiendaMobilError {
    /// Creates an error carrying the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message this error was constructed with.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Wraps a transport failure (connection refused, DNS, TLS, ...).
    ///
    /// `reqwest` keeps the operating system's description in the source chain,
    /// so the chain is flattened into the message.
    pub(crate) fn connection(err: &reqwest::Error) -> Self {
        let mut message = format!("Connection error: {err}");
        let mut source = err.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        Self::new(message)
    }

    /// Wraps a failure to parse a response body as JSON.
    pub(crate) fn json_parse(err: &serde_json::Error) -> Self {
        Self::new(format!("JSON parse error: {err}"))
    }

    /// A required configuration field was never set.
    pub(crate) fn missing_field(field: &'static str) -> Self {
        Self::new(format!(
            "Missing required field: '{field}'. This field must be set before building the configuration."
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_returned_verbatim() {
        let error = TiendaMobilError::new("some unicode characters \"ó ú ü\" in response");
        assert_eq!(
            error.message(),
            "some unicode characters \"ó ú ü\" in response"
        );
        assert_eq!(error.to_string(), error.message());
    }

    #[test]
    fn test_json_parse_error_prefix() {
        let parse_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let error = TiendaMobilError::json_parse(&parse_err);

        assert!(error.message().starts_with("JSON parse error: "));
        assert!(error.message().contains("expected value"));
    }

    #[test]
    fn test_missing_field_error_names_field() {
        let error = TiendaMobilError::missing_field("api_key");
        assert!(error.message().contains("'api_key'"));
        assert!(error.message().contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = TiendaMobilError::new("boom");
        let _: &dyn std::error::Error = &error;
    }
}
