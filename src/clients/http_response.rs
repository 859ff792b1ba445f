//! HTTP response type for the Tienda Mobil API client.

use std::collections::HashMap;

/// Status code the API uses for validation failures with a structured body.
pub const UNPROCESSABLE_ENTITY: u16 = 422;

/// A completed HTTP exchange with the Tienda Mobil API.
///
/// The body is kept as raw text; interpreting it is the job of the
/// [`normalizer`](crate::clients::normalizer), which needs to tell an
/// unparseable body apart from an error status.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The URL the request was sent to.
    pub url: String,
    /// Response headers, keyed by lowercase name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(
        code: u16,
        url: impl Into<String>,
        headers: HashMap<String, Vec<String>>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            code,
            url: url.into(),
            headers,
            body: body.into(),
        }
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` for 422, the status that carries validation errors.
    #[must_use]
    pub const fn is_unprocessable(&self) -> bool {
        self.code == UNPROCESSABLE_ENTITY
    }

    /// Returns `true` for 4xx and 5xx status codes.
    #[must_use]
    pub const fn is_error_status(&self) -> bool {
        self.code >= 400 && self.code <= 599
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header, if the server sent one.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(code: u16) -> HttpResponse {
        HttpResponse::new(code, "https://tiendamobil.com.ar/orders/", HashMap::new(), "")
    }

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        assert!(response(200).is_ok());
        assert!(response(201).is_ok());
        assert!(response(204).is_ok());
        assert!(!response(301).is_ok());
        assert!(!response(422).is_ok());
    }

    #[test]
    fn test_status_classification() {
        assert!(response(422).is_unprocessable());
        assert!(response(422).is_error_status());
        assert!(response(400).is_error_status());
        assert!(response(502).is_error_status());
        assert!(!response(200).is_error_status());
        assert!(!response(400).is_unprocessable());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["abc-123".to_string()]);
        let response = HttpResponse::new(200, "http://localhost", headers, "{}");

        assert_eq!(response.header("X-Request-Id"), Some("abc-123"));
        assert_eq!(response.request_id(), Some("abc-123"));
        assert_eq!(response.header("content-type"), None);
    }
}
