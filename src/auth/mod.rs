//! Authentication types for the Shopify Admin client.
//!
//! - [`AuthScopes`]: a set of OAuth scopes with implied scope handling
//! - [`oauth`]: install URLs, request signature verification and code exchange
//!
//! Private apps need nothing from this module: their `api_key:password`
//! credentials go straight into [`ShopifyConfig`](crate::ShopifyConfig).

pub mod oauth;
mod scopes;

pub use scopes::AuthScopes;
