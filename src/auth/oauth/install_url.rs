//! App installation URL generation.
//!
//! Installing an app starts by sending the merchant to the shop's OAuth
//! authorize page:
//!
//! ```text
//! https://{shop}/admin/oauth/authorize?client_id={api_key}&scope={scopes}
//!     [&redirect_uri={form-encoded uri}][&state={nonce}][&grant_options[]=per-user]
//! ```
//!
//! Scopes are written comma-separated and unencoded.
//!
//! # Example
//!
//! ```rust
//! use shopify_admin::{ApiKey, ShopDomain, ShopifyConfig};
//! use shopify_admin::auth::oauth::{install_url, InstallUrlOptions};
//!
//! let config = ShopifyConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .api_key(ApiKey::new("abc123").unwrap())
//!     .scopes("read_products,write_orders".parse().unwrap())
//!     .build()
//!     .unwrap();
//!
//! let url = install_url(
//!     &config,
//!     &InstallUrlOptions::new().redirect_uri("https://app.example.com/auth/callback"),
//! );
//! assert_eq!(
//!     url,
//!     "https://my-store.myshopify.com/admin/oauth/authorize?client_id=abc123\
//!      &scope=read_orders,read_products,write_orders\
//!      &redirect_uri=https%3A%2F%2Fapp.example.com%2Fauth%2Fcallback"
//! );
//! ```

use crate::auth::oauth::hmac::form_urlencode;
use crate::auth::oauth::state::StateParam;
use crate::auth::AuthScopes;
use crate::config::ShopifyConfig;

/// Optional parts of an install URL.
#[derive(Clone, Debug, Default)]
pub struct InstallUrlOptions {
    /// Scopes to request instead of the configured ones.
    pub scopes: Option<AuthScopes>,
    /// Where Shopify redirects after the merchant approves. Empty means none.
    pub redirect_uri: Option<String>,
    /// CSRF state echoed back on the callback.
    pub state: Option<StateParam>,
    /// Request an online (per-user) access token.
    pub online: bool,
}

impl InstallUrlOptions {
    /// Creates options that request the configured scopes and nothing else.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the requested scopes.
    #[must_use]
    pub fn scopes(mut self, scopes: AuthScopes) -> Self {
        self.scopes = Some(scopes);
        self
    }

    /// Sets the redirect URI.
    #[must_use]
    pub fn redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    /// Sets the state parameter.
    #[must_use]
    pub fn state(mut self, state: StateParam) -> Self {
        self.state = Some(state);
        self
    }

    /// Requests an online access token.
    #[must_use]
    pub const fn online(mut self, online: bool) -> Self {
        self.online = online;
        self
    }
}

/// Result of [`begin_install`]: the URL to redirect to and the state to remember.
#[derive(Clone, Debug)]
pub struct BeginInstall {
    /// The authorize URL.
    pub url: String,
    /// The generated state; compare it with the callback's `state`.
    pub state: StateParam,
}

// Verify BeginInstall is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BeginInstall>();
};

/// Builds the OAuth authorize URL for the configured shop.
#[must_use]
pub fn install_url(config: &ShopifyConfig, options: &InstallUrlOptions) -> String {
    let scopes = options.scopes.as_ref().unwrap_or_else(|| config.scopes());

    let mut url = format!(
        "https://{}/admin/oauth/authorize?client_id={}&scope={}",
        config.shop(),
        form_urlencode(config.api_key().as_ref()),
        scopes
    );

    if let Some(redirect_uri) = options.redirect_uri.as_deref().filter(|r| !r.is_empty()) {
        url.push_str("&redirect_uri=");
        url.push_str(&form_urlencode(redirect_uri));
    }

    if let Some(state) = &options.state {
        url.push_str("&state=");
        url.push_str(&form_urlencode(state.nonce()));
    }

    if options.online {
        url.push_str("&grant_options[]=per-user");
    }

    url
}

/// Generates a fresh state and the install URL carrying it.
#[must_use]
pub fn begin_install(config: &ShopifyConfig, redirect_uri: &str, online: bool) -> BeginInstall {
    let state = StateParam::new();
    let options = InstallUrlOptions::new()
        .redirect_uri(redirect_uri)
        .state(state.clone())
        .online(online);

    BeginInstall {
        url: install_url(config, &options),
        state,
    }
}
