//! Turns completed HTTP exchanges into payloads or a [`TiendaMobilError`].
//!
//! The API signals validation failures with `422 Unprocessable Entity` and a
//! JSON body such as `{"error": "..."}` or `{"errors": [...]}`, so a 422 is
//! never an error by status alone. [`normalize`] applies the checks in this
//! order:
//!
//! 1. error statuses (>= 400, except 422) whose body cannot be parsed fail
//!    with the conventional reason phrase (`400 Client Error: Bad Request
//!    for url: ...`);
//! 2. any other unparseable body fails with `JSON parse error: ...`;
//! 3. an `error` or `errors` key fails with `Error: ...` / `Errors: ...`;
//! 4. remaining error statuses (except 422) fail with the reason phrase;
//! 5. a 422 without error keys succeeds with an empty object;
//! 6. otherwise the `data` member is returned, or an empty object.
//!
//! Transport failures never get here: the
//! [`HttpClient`](crate::clients::HttpClient) reports them before a response
//! exists.

use serde_json::{Map, Value};

use crate::clients::http_response::HttpResponse;
use crate::error::TiendaMobilError;

/// Extracts the `data` payload of a response, or fails with the normalized error.
///
/// # Errors
///
/// Returns [`TiendaMobilError`] for error statuses other than 422, for
/// bodies that are not valid JSON, and for bodies carrying an `error` or
/// `errors` member.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use tienda_mobil::clients::{normalizer, HttpResponse};
///
/// let ok = HttpResponse::new(200, "http://x/orders/", HashMap::new(), r#"{"data": [1, 2]}"#);
/// assert_eq!(normalizer::normalize(&ok).unwrap(), serde_json::json!([1, 2]));
///
/// let bad = HttpResponse::new(400, "http://x/orders/", HashMap::new(), "");
/// let error = normalizer::normalize(&bad).unwrap_err();
/// assert!(error.message().contains("Bad Request"));
/// ```
pub fn normalize(response: &HttpResponse) -> Result<Value, TiendaMobilError> {
    let body = match parse_body(response) {
        Ok(body) => body,
        Err(parse_error) => {
            raise_for_status(response)?;
            return Err(parse_error);
        }
    };

    check_for_error(&body)?;
    raise_for_status(response)?;

    if response.is_unprocessable() {
        return Ok(Value::Object(Map::new()));
    }

    Ok(extract_data(body))
}

/// Inspects a 422 response for a structured error.
///
/// An empty body carries no error and passes. This is the only check the
/// update and create operations apply to a 422.
///
/// # Errors
///
/// Returns [`TiendaMobilError`] if the body is not valid JSON or carries an
/// `error` or `errors` member.
pub fn check_unprocessable(response: &HttpResponse) -> Result<(), TiendaMobilError> {
    if response.body.trim().is_empty() {
        return Ok(());
    }
    let body = parse_body(response)?;
    check_for_error(&body)
}

/// Parses the response body as JSON.
///
/// # Errors
///
/// Returns a `JSON parse error` [`TiendaMobilError`] if the body (including
/// an empty one) is not valid JSON.
pub fn parse_body(response: &HttpResponse) -> Result<Value, TiendaMobilError> {
    serde_json::from_str(&response.body).map_err(|e| TiendaMobilError::json_parse(&e))
}

/// Fails if a parsed body carries an `error` or `errors` member.
///
/// `error` takes precedence when both are present. The `errors` value is
/// reported exactly as received (a list keeps its JSON form) rather than
/// joined into a single sentence.
///
/// # Errors
///
/// Returns `Error: <value>` or `Errors: <value>`.
pub fn check_for_error(body: &Value) -> Result<(), TiendaMobilError> {
    let Some(object) = body.as_object() else {
        return Ok(());
    };

    if let Some(error) = object.get("error") {
        tracing::warn!("Tienda Mobil API returned an error: {}", error);
        return Err(TiendaMobilError::new(format!(
            "Error: {}",
            display_value(error)
        )));
    }

    if let Some(errors) = object.get("errors") {
        tracing::warn!("Tienda Mobil API returned errors: {}", errors);
        return Err(TiendaMobilError::new(format!(
            "Errors: {}",
            display_value(errors)
        )));
    }

    Ok(())
}

/// Fails for 4xx and 5xx statuses, except 422.
///
/// # Errors
///
/// Returns `<code> Client Error: <reason> for url: <url>` for 4xx and
/// `<code> Server Error: <reason> for url: <url>` for 5xx.
pub fn raise_for_status(response: &HttpResponse) -> Result<(), TiendaMobilError> {
    if !response.is_error_status() || response.is_unprocessable() {
        return Ok(());
    }

    let kind = if response.code < 500 {
        "Client Error"
    } else {
        "Server Error"
    };
    let reason = reason_phrase(response.code);

    tracing::warn!(
        "Tienda Mobil API responded {} {} for {} (request id: {})",
        response.code,
        reason,
        response.url,
        response.request_id().unwrap_or("none")
    );

    Err(TiendaMobilError::new(format!(
        "{} {kind}: {reason} for url: {}",
        response.code, response.url
    )))
}

fn reason_phrase(code: u16) -> &'static str {
    reqwest::StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or("Unknown Status")
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn extract_data(body: Value) -> Value {
    match body {
        Value::Object(mut object) => object
            .remove("data")
            .unwrap_or_else(|| Value::Object(Map::new())),
        _ => Value::Object(Map::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    const URL: &str = "https://tiendamobil.com.ar/api/orders/";

    fn response(code: u16, body: &str) -> HttpResponse {
        HttpResponse::new(code, URL, HashMap::new(), body)
    }

    #[test]
    fn test_success_returns_data_member() {
        let data = normalize(&response(200, r#"{"data": {"id": "1"}}"#)).unwrap();
        assert_eq!(data, json!({"id": "1"}));
    }

    #[test]
    fn test_success_without_data_returns_empty_object() {
        let data = normalize(&response(200, r#"{"meta": {}}"#)).unwrap();
        assert_eq!(data, json!({}));

        let data = normalize(&response(200, "[1, 2, 3]")).unwrap();
        assert_eq!(data, json!({}));
    }

    #[test]
    fn test_unparseable_success_body_is_json_parse_error() {
        let error = normalize(&response(200, "")).unwrap_err();
        assert!(error.message().starts_with("JSON parse error"));

        let error = normalize(&response(200, "<html>maintenance</html>")).unwrap_err();
        assert!(error.message().starts_with("JSON parse error"));
    }

    #[test]
    fn test_error_key_takes_precedence_over_errors() {
        let body = r#"{"error": "Customer cannot be empty", "errors": ["x"]}"#;
        let error = normalize(&response(200, body)).unwrap_err();
        assert_eq!(error.message(), "Error: Customer cannot be empty");
    }

    #[test]
    fn test_errors_list_keeps_original_form() {
        let error = normalize(&response(422, r#"{"errors": ["A", "B"]}"#)).unwrap_err();
        assert_eq!(error.message(), r#"Errors: ["A","B"]"#);
    }

    #[test]
    fn test_errors_string_is_printed_raw() {
        let error = normalize(&response(422, r#"{"errors": "A, B"}"#)).unwrap_err();
        assert_eq!(error.message(), "Errors: A, B");
    }

    #[test]
    fn test_structured_error_wins_over_status() {
        let error = normalize(&response(400, r#"{"error": "bad comment"}"#)).unwrap_err();
        assert_eq!(error.message(), "Error: bad comment");
    }

    #[test]
    fn test_error_status_with_empty_body_uses_reason_phrase() {
        let error = normalize(&response(400, "")).unwrap_err();
        assert_eq!(
            error.message(),
            format!("400 Client Error: Bad Request for url: {URL}")
        );

        let error = normalize(&response(401, "")).unwrap_err();
        assert!(error.message().contains("Unauthorized for url"));

        let error = normalize(&response(502, "<html>proxy</html>")).unwrap_err();
        assert_eq!(
            error.message(),
            format!("502 Server Error: Bad Gateway for url: {URL}")
        );
    }

    #[test]
    fn test_error_status_with_plain_json_body_uses_reason_phrase() {
        let error = normalize(&response(404, r#"{"status": 404}"#)).unwrap_err();
        assert!(error.message().contains("Not Found"));
    }

    #[test]
    fn test_unprocessable_without_error_keys_is_success() {
        let data = normalize(&response(422, "{}")).unwrap();
        assert_eq!(data, json!({}));
    }

    #[test]
    fn test_unprocessable_success_discards_data_member() {
        let data = normalize(&response(422, r#"{"data": {"id": "1"}}"#)).unwrap();
        assert_eq!(data, json!({}));
    }

    #[test]
    fn test_unprocessable_with_empty_body_is_parse_error_for_reads() {
        let error = normalize(&response(422, "")).unwrap_err();
        assert!(error.message().contains("JSON parse error"));
    }

    #[test]
    fn test_check_unprocessable() {
        assert!(check_unprocessable(&response(422, "")).is_ok());
        assert!(check_unprocessable(&response(422, "  \n")).is_ok());
        assert!(check_unprocessable(&response(422, "{}")).is_ok());

        let error = check_unprocessable(&response(422, r#"{"error": "x"}"#)).unwrap_err();
        assert_eq!(error.message(), "Error: x");

        let error = check_unprocessable(&response(422, "oops")).unwrap_err();
        assert!(error.message().contains("JSON parse error"));
    }

    #[test]
    fn test_raise_for_status_ignores_success_and_unprocessable() {
        assert!(raise_for_status(&response(200, "")).is_ok());
        assert!(raise_for_status(&response(204, "")).is_ok());
        assert!(raise_for_status(&response(302, "")).is_ok());
        assert!(raise_for_status(&response(422, "")).is_ok());
        assert!(raise_for_status(&response(500, "")).is_err());
    }

    #[test]
    fn test_unicode_error_message_is_preserved() {
        let body = json!({"error": "some unicode characters \"ó ú ü\" in response"}).to_string();
        let error = normalize(&response(422, &body)).unwrap_err();
        assert!(error.message().contains("ó ú ü"));
    }

    #[test]
    fn test_unknown_status_has_fallback_reason() {
        let error = raise_for_status(&response(599, "")).unwrap_err();
        assert!(error.message().starts_with("599 Server Error"));
    }
}
