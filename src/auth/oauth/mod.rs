//! OAuth support for public apps.
//!
//! Installing a public app on a shop takes three steps:
//!
//! 1. **Install URL** ([`install_url`], [`begin_install`]): send the merchant
//!    to the shop's authorize page with the requested scopes.
//! 2. **Callback verification** ([`verify_request`], [`verify_query_string`]):
//!    check the HMAC signature and freshness of the redirect back.
//! 3. **Code exchange** ([`exchange_code`], or
//!    [`AdminClient::request_access_token`](crate::AdminClient::request_access_token)):
//!    trade the one-time `code` for an access token.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_admin::AdminClient;
//! use shopify_admin::auth::oauth::{begin_install, verify_query_string};
//!
//! // 1. Redirect the merchant
//! let install = begin_install(client.config(), "https://app.example.com/callback", false);
//! // remember install.state, redirect to install.url
//!
//! // 2. On the callback
//! if !verify_query_string(client.config(), raw_query)? {
//!     return Err("forged callback".into());
//! }
//!
//! // 3. Obtain the token; the client is authenticated from here on
//! let token = client.request_access_token(&code).await?;
//! ```

mod access_token;
mod error;
pub mod hmac;
mod install_url;
mod state;

pub use access_token::{exchange_code, AccessTokenResponse, ACCESS_TOKEN_PATH};
pub use error::OAuthError;
pub use hmac::{verify_query_string, verify_request, verify_request_at, MAX_REQUEST_AGE_SECS};
pub use install_url::{begin_install, install_url, BeginInstall, InstallUrlOptions};
pub use state::StateParam;
