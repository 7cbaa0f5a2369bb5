//! # Shopify Admin REST client
//!
//! A typed Rust client for the Shopify Admin REST API, for private apps
//! (`api_key:password`) and public OAuth apps (`api_key:access_token`).
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ShopifyConfig`] and [`ShopifyConfigBuilder`],
//!   or from environment variables with [`ShopifyConfig::from_env`]
//! - Validated newtypes for credentials, shop domains and API versions
//! - [`AdminClient`], which builds the authenticated base URL and exposes the
//!   product, variant, webhook, customer, order and shop endpoints
//! - OAuth install URLs, HMAC request verification and authorization code
//!   exchange via [`auth::oauth`]
//! - An async HTTP transport that returns decoded JSON or a structured error
//!
//! Requests are sent once. Pagination, rate limiting, retries and caching are
//! left to the caller.
//!
//! ## Private Apps
//!
//! ```rust,ignore
//! use shopify_admin::AdminClient;
//! use serde_json::json;
//!
//! let client = AdminClient::private("my-store", "api-key", "password")?;
//!
//! let products = client.products(json!({"limit": 10})).await?;
//! let product = client.product(632910392).await?;
//! client.update_product(632910392, json!({"title": "New title"})).await?;
//! ```
//!
//! ## Public Apps (OAuth)
//!
//! ```rust,ignore
//! use shopify_admin::{AdminClient, ApiKey, ApiSecretKey, ShopDomain, ShopifyConfig};
//! use shopify_admin::auth::oauth::{begin_install, verify_query_string};
//!
//! let config = ShopifyConfig::builder()
//!     .shop(ShopDomain::new("my-store")?)
//!     .api_key(ApiKey::new("api-key")?)
//!     .api_secret_key(ApiSecretKey::new("api-secret")?)
//!     .scopes("read_products,write_orders".parse()?)
//!     .build()?;
//! let mut client = AdminClient::new(config)?;
//!
//! // Step 1: send the merchant to Shopify
//! let install = begin_install(client.config(), "https://my-app.example.com/callback", false);
//!
//! // Step 2: on the callback, check the signature
//! assert!(verify_query_string(client.config(), callback_query)?);
//!
//! // Step 3: exchange the code; the client now uses the token
//! client.request_access_token(code).await?;
//! let shop = client.shop().await?;
//! ```
//!
//! ## Errors
//!
//! Non-2xx responses surface as [`AdminError::Http`] wrapping an
//! [`HttpResponseError`] with the status code, the request URL (credentials
//! removed), a message and the decoded body.
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Thread-safe**: all types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime
//! - **Secrets stay hidden**: `Debug` output and logs never contain credentials

pub mod admin;
pub mod auth;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use admin::{admin_base_url, AdminClient, AdminError};
pub use auth::AuthScopes;
pub use config::{
    AccessToken, ApiKey, ApiPassword, ApiSecretKey, ApiVersion, HostUrl, ShopDomain,
    ShopifyConfig, ShopifyConfigBuilder,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};

// Re-export OAuth types for convenience
pub use auth::oauth::{
    begin_install, install_url, verify_query_string, verify_request, AccessTokenResponse,
    BeginInstall, InstallUrlOptions, OAuthError, StateParam,
};
