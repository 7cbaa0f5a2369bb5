//! Configuration types for the Shopify Admin client.
//!
//! # Overview
//!
//! - [`ShopifyConfig`]: shop, credentials and API settings for one client
//! - [`ShopifyConfigBuilder`]: a builder for constructing [`ShopifyConfig`] instances
//! - [`ApiKey`], [`ApiSecretKey`], [`ApiPassword`], [`AccessToken`]: validated credentials
//! - [`ShopDomain`]: a validated `*.myshopify.com` domain
//! - [`HostUrl`]: an optional proxy host replacing the shop domain in request URLs
//! - [`ApiVersion`]: the Admin API version to target
//!
//! # Example
//!
//! ```rust
//! use shopify_admin::{ApiKey, ApiPassword, ShopDomain, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .password(ApiPassword::new("my-password").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.shop().as_ref(), "my-store.myshopify.com");
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, ApiKey, ApiPassword, ApiSecretKey, HostUrl, ShopDomain};
pub use version::ApiVersion;

use crate::auth::AuthScopes;
use crate::error::ConfigError;

/// Environment variable holding the shop domain.
pub const ENV_SHOP_DOMAIN: &str = "SHOPIFY_DOMAIN";
/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "SHOPIFY_API_KEY";
/// Environment variable holding the API secret key.
pub const ENV_API_SECRET: &str = "SHOPIFY_API_SECRET";
/// Environment variable holding the private app password.
pub const ENV_PASSWORD: &str = "SHOPIFY_PASSWORD";
/// Environment variable holding a stored OAuth access token.
pub const ENV_ACCESS_TOKEN: &str = "SHOPIFY_ACCESS_TOKEN";
/// Environment variable holding the comma-separated OAuth scopes.
pub const ENV_SCOPES: &str = "SHOPIFY_SCOPES";
/// Environment variable holding the Admin API version.
pub const ENV_API_VERSION: &str = "SHOPIFY_API_VERSION";

/// Configuration for one Shopify Admin client.
///
/// The credential fields decide how requests authenticate:
///
/// - `password` set: private app, `api_key:password` basic credentials
/// - `access_token` set: OAuth app with a token, `api_key:access_token` basic
///   credentials plus the `X-Shopify-Access-Token` header
/// - neither: OAuth app before installation, unauthenticated requests
///
/// When both are set the password wins.
///
/// # Key Rotation
///
/// The `old_api_secret_key` field lets signatures made with the previous
/// secret verify while an app rotates its secret. The primary key is always
/// tried first.
///
/// # Thread Safety
///
/// `ShopifyConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ShopifyConfig {
    shop: ShopDomain,
    api_key: ApiKey,
    api_secret_key: Option<ApiSecretKey>,
    old_api_secret_key: Option<ApiSecretKey>,
    password: Option<ApiPassword>,
    access_token: Option<AccessToken>,
    scopes: AuthScopes,
    api_version: Option<ApiVersion>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ShopifyConfig {
    /// Creates a new builder for constructing a `ShopifyConfig`.
    #[must_use]
    pub fn builder() -> ShopifyConfigBuilder {
        ShopifyConfigBuilder::new()
    }

    /// Loads the configuration from process environment variables.
    ///
    /// See [`ShopifyConfig::from_lookup`] for the variables read.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a required variable is missing or a value
    /// fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads the configuration through a variable lookup function.
    ///
    /// Reads [`ENV_SHOP_DOMAIN`] and [`ENV_API_KEY`] (required) and
    /// [`ENV_API_SECRET`], [`ENV_PASSWORD`], [`ENV_ACCESS_TOKEN`],
    /// [`ENV_SCOPES`], [`ENV_API_VERSION`] (optional). Empty and
    /// whitespace-only values count as unset.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a required variable is missing or a value
    /// fails validation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use shopify_admin::ShopifyConfig;
    ///
    /// let vars = HashMap::from([
    ///     ("SHOPIFY_DOMAIN", "my-store"),
    ///     ("SHOPIFY_API_KEY", "key"),
    ///     ("SHOPIFY_SCOPES", "read_products"),
    /// ]);
    ///
    /// let config = ShopifyConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string())).unwrap();
    /// assert_eq!(config.shop().as_ref(), "my-store.myshopify.com");
    /// assert!(config.password().is_none());
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let mut builder = Self::builder();

        if let Some(shop) = get(ENV_SHOP_DOMAIN) {
            builder = builder.shop(ShopDomain::new(shop)?);
        }
        if let Some(key) = get(ENV_API_KEY) {
            builder = builder.api_key(ApiKey::new(key)?);
        }
        if let Some(secret) = get(ENV_API_SECRET) {
            builder = builder.api_secret_key(ApiSecretKey::new(secret)?);
        }
        if let Some(password) = get(ENV_PASSWORD) {
            builder = builder.password(ApiPassword::new(password)?);
        }
        if let Some(token) = get(ENV_ACCESS_TOKEN) {
            builder = builder.access_token(AccessToken::new(token)?);
        }
        if let Some(scopes) = get(ENV_SCOPES) {
            builder = builder.scopes(scopes.parse()?);
        }
        if let Some(version) = get(ENV_API_VERSION) {
            builder = builder.api_version(version.parse()?);
        }

        builder.build()
    }

    /// Returns the shop domain.
    #[must_use]
    pub const fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API secret key, if configured.
    #[must_use]
    pub const fn api_secret_key(&self) -> Option<&ApiSecretKey> {
        self.api_secret_key.as_ref()
    }

    /// Returns the previous API secret key kept for rotation, if configured.
    #[must_use]
    pub const fn old_api_secret_key(&self) -> Option<&ApiSecretKey> {
        self.old_api_secret_key.as_ref()
    }

    /// Returns the private app password, if configured.
    #[must_use]
    pub const fn password(&self) -> Option<&ApiPassword> {
        self.password.as_ref()
    }

    /// Returns the OAuth access token, if known.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the OAuth scopes requested at installation.
    #[must_use]
    pub const fn scopes(&self) -> &AuthScopes {
        &self.scopes
    }

    /// Returns the Admin API version, if one is pinned.
    #[must_use]
    pub const fn api_version(&self) -> Option<&ApiVersion> {
        self.api_version.as_ref()
    }

    /// Returns the proxy host, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    pub(crate) fn set_shop(&mut self, shop: ShopDomain) {
        self.shop = shop;
    }

    pub(crate) fn set_access_token(&mut self, token: AccessToken) {
        self.access_token = Some(token);
    }
}

// Verify ShopifyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopifyConfig>();
};

/// Builder for constructing [`ShopifyConfig`] instances.
///
/// `shop` and `api_key` are required. Everything else is optional:
///
/// - `api_version`: `None`, requests use the unversioned `/admin/` root
/// - `scopes`: empty
/// - credentials, `api_host`, `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use shopify_admin::{ApiKey, ApiSecretKey, ApiVersion, HostUrl, ShopDomain, ShopifyConfig};
///
/// let config = ShopifyConfig::builder()
///     .shop(ShopDomain::new("my-store").unwrap())
///     .api_key(ApiKey::new("key").unwrap())
///     .api_secret_key(ApiSecretKey::new("secret").unwrap())
///     .scopes("read_products,write_orders".parse().unwrap())
///     .api_version(ApiVersion::V2025_07)
///     .api_host(HostUrl::new("http://localhost:8080").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.api_version(), Some(&ApiVersion::V2025_07));
/// ```
#[derive(Debug, Default)]
pub struct ShopifyConfigBuilder {
    shop: Option<ShopDomain>,
    api_key: Option<ApiKey>,
    api_secret_key: Option<ApiSecretKey>,
    old_api_secret_key: Option<ApiSecretKey>,
    password: Option<ApiPassword>,
    access_token: Option<AccessToken>,
    scopes: Option<AuthScopes>,
    api_version: Option<ApiVersion>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ShopifyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shop domain (required).
    #[must_use]
    pub fn shop(mut self, shop: ShopDomain) -> Self {
        self.shop = Some(shop);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API secret key used for request verification and token exchange.
    #[must_use]
    pub fn api_secret_key(mut self, key: ApiSecretKey) -> Self {
        self.api_secret_key = Some(key);
        self
    }

    /// Sets the previous API secret key for rotation.
    #[must_use]
    pub fn old_api_secret_key(mut self, key: ApiSecretKey) -> Self {
        self.old_api_secret_key = Some(key);
        self
    }

    /// Sets the private app password.
    #[must_use]
    pub fn password(mut self, password: ApiPassword) -> Self {
        self.password = Some(password);
        self
    }

    /// Sets a stored OAuth access token.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the OAuth scopes.
    #[must_use]
    pub fn scopes(mut self, scopes: AuthScopes) -> Self {
        self.scopes = Some(scopes);
        self
    }

    /// Pins the Admin API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Routes requests through a proxy host instead of the shop domain.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ShopifyConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shop` or `api_key`
    /// are not set.
    pub fn build(self) -> Result<ShopifyConfig, ConfigError> {
        let shop = self
            .shop
            .ok_or(ConfigError::MissingRequiredField { field: "shop" })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(ShopifyConfig {
            shop,
            api_key,
            api_secret_key: self.api_secret_key,
            old_api_secret_key: self.old_api_secret_key,
            password: self.password,
            access_token: self.access_token,
            scopes: self.scopes.unwrap_or_default(),
            api_version: self.api_version,
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<&str, &str> = pairs.iter().copied().collect();
        move |name| vars.get(name).map(|value| (*value).to_string())
    }

    #[test]
    fn test_builder_requires_shop() {
        let result = ShopifyConfigBuilder::new()
            .api_key(ApiKey::new("key").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "shop" })
        ));
    }

    #[test]
    fn test_builder_requires_api_key() {
        let result = ShopifyConfigBuilder::new()
            .shop(ShopDomain::new("my-store").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_defaults() {
        let config = ShopifyConfig::builder()
            .shop(ShopDomain::new("my-store").unwrap())
            .api_key(ApiKey::new("key").unwrap())
            .build()
            .unwrap();

        assert!(config.api_secret_key().is_none());
        assert!(config.old_api_secret_key().is_none());
        assert!(config.password().is_none());
        assert!(config.access_token().is_none());
        assert!(config.scopes().is_empty());
        assert!(config.api_version().is_none());
        assert!(config.api_host().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_debug_output_hides_credentials() {
        let config = ShopifyConfig::builder()
            .shop(ShopDomain::new("my-store").unwrap())
            .api_key(ApiKey::new("key").unwrap())
            .api_secret_key(ApiSecretKey::new("very-secret").unwrap())
            .password(ApiPassword::new("hunter2").unwrap())
            .access_token(AccessToken::new("shpat_token").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("ShopifyConfig"));
        assert!(!debug_str.contains("very-secret"));
        assert!(!debug_str.contains("hunter2"));
        assert!(!debug_str.contains("shpat_token"));
    }

    #[test]
    fn test_from_lookup_reads_all_variables() {
        let config = ShopifyConfig::from_lookup(lookup_from(&[
            (ENV_SHOP_DOMAIN, "my-store.myshopify.com"),
            (ENV_API_KEY, "key"),
            (ENV_API_SECRET, "secret"),
            (ENV_PASSWORD, "password"),
            (ENV_ACCESS_TOKEN, "token"),
            (ENV_SCOPES, "read_products,write_orders"),
            (ENV_API_VERSION, "2025-01"),
        ]))
        .unwrap();

        assert_eq!(config.shop().shop_name(), "my-store");
        assert_eq!(config.api_key().as_ref(), "key");
        assert_eq!(config.api_secret_key().unwrap().as_ref(), "secret");
        assert_eq!(config.password().unwrap().as_ref(), "password");
        assert_eq!(config.access_token().unwrap().as_ref(), "token");
        assert!(config.scopes().contains("write_orders"));
        assert_eq!(config.api_version(), Some(&ApiVersion::V2025_01));
    }

    #[test]
    fn test_from_lookup_treats_blank_values_as_unset() {
        let config = ShopifyConfig::from_lookup(lookup_from(&[
            (ENV_SHOP_DOMAIN, "my-store"),
            (ENV_API_KEY, "key"),
            (ENV_PASSWORD, ""),
            (ENV_ACCESS_TOKEN, "   "),
        ]))
        .unwrap();

        assert!(config.password().is_none());
        assert!(config.access_token().is_none());
    }

    #[test]
    fn test_from_lookup_reports_missing_and_invalid_values() {
        let missing = ShopifyConfig::from_lookup(lookup_from(&[(ENV_API_KEY, "key")]));
        assert!(matches!(
            missing,
            Err(ConfigError::MissingRequiredField { field: "shop" })
        ));

        let invalid = ShopifyConfig::from_lookup(lookup_from(&[
            (ENV_SHOP_DOMAIN, "my-store"),
            (ENV_API_KEY, "key"),
            (ENV_API_VERSION, "soon"),
        ]));
        assert!(matches!(
            invalid,
            Err(ConfigError::InvalidApiVersion { .. })
        ));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ShopifyConfig>();
    }
}
