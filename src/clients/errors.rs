//! HTTP-specific error types.
//!
//! - [`HttpResponseError`]: a non-2xx response from the Admin API
//! - [`InvalidHttpRequestError`]: a request that failed validation before sending
//! - [`HttpError`]: unified error type for everything the transport can report
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_admin::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {} at {}: {}", e.code, e.url, e.message);
//!     }
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Decode { url, .. }) => println!("Unreadable body from {url}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(HttpError::InvalidUrl { url }) => println!("Bad URL: {url}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the Admin API responds with a non-2xx status.
///
/// This carries everything a caller needs to report the failure: the status,
/// the request URL with credentials removed, a message extracted from the
/// body, and the decoded body itself.
///
/// # Example
///
/// ```rust
/// use shopify_admin::clients::HttpResponseError;
/// use serde_json::json;
///
/// let error = HttpResponseError {
///     code: 404,
///     url: "https://my-store.myshopify.com/admin/products/1.json".to_string(),
///     message: "Not Found".to_string(),
///     body: json!({"errors": "Not Found"}),
///     error_reference: None,
/// };
/// assert_eq!(
///     error.to_string(),
///     "HTTP 404 from https://my-store.myshopify.com/admin/products/1.json: Not Found"
/// );
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code} from {url}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code.
    pub code: u16,
    /// The request URL, without credentials.
    pub url: String,
    /// The error message, taken from the `errors`/`error` member when present.
    pub message: String,
    /// The decoded response body.
    pub body: serde_json::Value,
    /// The `X-Request-Id` header, for reporting to Shopify support.
    pub error_reference: Option<String>,
}

/// Error when an HTTP request fails validation before sending.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The body was set without a body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// POST or PUT without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for HTTP operations.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Non-2xx response from the API.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// A base URL or path could not be turned into a request URL.
    #[error("Invalid request URL '{url}'")]
    InvalidUrl {
        /// The offending URL or path, without credentials.
        url: String,
    },

    /// A successful response carried a body that is not JSON.
    #[error("Could not decode JSON response from {url}: {source}")]
    Decode {
        /// The request URL, without credentials.
        url: String,
        /// The underlying parse error.
        source: serde_json::Error,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_response_error_message_includes_code_and_url() {
        let error = HttpResponseError {
            code: 422,
            url: "https://shop.myshopify.com/admin/products.json".to_string(),
            message: "title can't be blank".to_string(),
            body: json!({"errors": {"title": ["can't be blank"]}}),
            error_reference: Some("req-1".to_string()),
        };
        let message = error.to_string();
        assert!(message.contains("422"));
        assert!(message.contains("/admin/products.json"));
        assert!(message.contains("title can't be blank"));
    }

    #[test]
    fn test_invalid_request_error_messages() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "put".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use put without specifying data.");
        assert_eq!(
            InvalidHttpRequestError::MissingBodyType.to_string(),
            "Cannot set a body without also setting body_type."
        );
    }

    #[test]
    fn test_decode_error_names_url() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let error = HttpError::Decode {
            url: "https://shop.myshopify.com/admin/shop.json".to_string(),
            source,
        };
        assert!(error.to_string().contains("shop.json"));
    }

    #[test]
    fn test_http_error_wraps_response_error() {
        let error: HttpError = HttpResponseError {
            code: 500,
            url: "https://shop.myshopify.com/admin/shop.json".to_string(),
            message: "boom".to_string(),
            body: json!({}),
            error_reference: None,
        }
        .into();
        assert!(matches!(error, HttpError::Response(ref e) if e.code == 500));
    }
}
