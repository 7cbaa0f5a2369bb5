//! HTTP response type.
//!
//! [`HttpResponse`] holds the status, lower-cased headers and decoded JSON
//! body of one Admin API call.

use std::collections::HashMap;

/// A decoded response from the Admin API.
///
/// # Example
///
/// ```rust
/// use shopify_admin::clients::HttpResponse;
/// use serde_json::json;
/// use std::collections::HashMap;
///
/// let headers = HashMap::from([(
///     "x-request-id".to_string(),
///     vec!["abc-123".to_string()],
/// )]);
/// let response = HttpResponse::new(200, headers, json!({"shop": {"id": 1}}));
///
/// assert!(response.is_ok());
/// assert_eq!(response.request_id(), Some("abc-123"));
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// HTTP status code.
    pub code: u16,
    /// Response headers keyed by lower-case name.
    pub headers: HashMap<String, Vec<String>>,
    /// Decoded JSON body; `{}` for an empty body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the `X-Shopify-API-Deprecated-Reason` header.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.header("x-shopify-api-deprecated-reason")
    }

    /// Extracts a human-readable error message from the body.
    ///
    /// Shopify reports failures as `{"errors": ...}` (a string, a list or a
    /// field map) or `{"error": "...", "error_description": "..."}`.
    #[must_use]
    pub fn error_message(&self) -> String {
        if let Some(errors) = self.body.get("errors") {
            return match errors {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
        }

        if let Some(error) = self.body.get("error").and_then(|e| e.as_str()) {
            return match self
                .body
                .get("error_description")
                .and_then(|d| d.as_str())
            {
                Some(description) => format!("{error}: {description}"),
                None => error.to_string(),
            };
        }

        format!("Request failed with status {}", self.code)
    }
}
