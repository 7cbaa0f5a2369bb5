//! HTTP request types.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! describing one call to the Admin API.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP method for Admin API requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET request for retrieving resources.
    Get,
    /// POST request for creating resources.
    Post,
    /// PUT request for updating resources.
    Put,
    /// DELETE request for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns `true` for methods whose payload travels as query parameters.
    #[must_use]
    pub const fn sends_query(self) -> bool {
        matches!(self, Self::Get | Self::Delete)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// Content type for request bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// JSON content type (`application/json`).
    Json,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
        }
    }
}

/// An HTTP request to the Admin API.
///
/// `path` is resolved against the client's base URL: `products.json` lands
/// under the admin root, `/admin/oauth/access_token` replaces the whole path.
/// Query parameters are kept sorted so the resulting URL is deterministic.
///
/// # Example
///
/// ```rust
/// use shopify_admin::clients::{HttpRequest, HttpMethod, DataType};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Put, "products/7.json")
///     .body(json!({"product": {"title": "Renamed"}}))
///     .body_type(DataType::Json)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path, "products/7.json");
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method.
    pub http_method: HttpMethod,
    /// The path relative to the base URL.
    pub path: String,
    /// Optional request body.
    pub body: Option<serde_json::Value>,
    /// Content type of the body.
    pub body_type: Option<DataType>,
    /// Query parameters.
    pub query: Option<BTreeMap<String, String>>,
    /// Extra headers for this request only.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// - [`InvalidHttpRequestError::MissingBodyType`] if a body has no body type
    /// - [`InvalidHttpRequestError::MissingBody`] for POST or PUT without a body
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.body.is_some() && self.body_type.is_none() {
            return Err(InvalidHttpRequestError::MissingBodyType);
        }

        if matches!(self.http_method, HttpMethod::Post | HttpMethod::Put) && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for [`HttpRequest`]; [`build`](Self::build) runs
/// [`HttpRequest::verify`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    request: HttpRequest,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            request: HttpRequest {
                http_method: method,
                path: path.into(),
                body: None,
                body_type: None,
                query: None,
                extra_headers: None,
            },
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.request.body = Some(body.into());
        self
    }

    /// Sets the body content type.
    #[must_use]
    pub fn body_type(mut self, body_type: DataType) -> Self {
        self.request.body_type = Some(body_type);
        self
    }

    /// Replaces all query parameters.
    #[must_use]
    pub fn query(mut self, query: BTreeMap<String, String>) -> Self {
        self.request.query = Some(query);
        self
    }

    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request
            .query
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Adds a header sent with this request only, overriding a default one.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request
            .extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Validates and returns the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if validation fails.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        self.request.verify()?;
        Ok(self.request)
    }
}
