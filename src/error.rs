//! Configuration errors.
//!
//! Every validated newtype and [`ShopifyConfigBuilder::build`] report failures
//! through [`ConfigError`]. Messages name the `SHOPIFY_*` variable that feeds
//! the value when loading with [`ShopifyConfig::from_env`].
//!
//! [`ShopifyConfigBuilder::build`]: crate::ShopifyConfigBuilder::build
//! [`ShopifyConfig::from_env`]: crate::ShopifyConfig::from_env
//!
//! ```rust
//! use shopify_admin::{ApiPassword, ConfigError};
//!
//! assert_eq!(ApiPassword::new("").unwrap_err(), ConfigError::EmptyPassword);
//! ```

use thiserror::Error;

/// A configuration value was missing or malformed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Empty API key.
    #[error("API key is empty (SHOPIFY_API_KEY)")]
    EmptyApiKey,

    /// Empty API secret key.
    #[error("API secret key is empty (SHOPIFY_API_SECRET)")]
    EmptyApiSecretKey,

    /// Empty private app password.
    #[error("Private app password is empty (SHOPIFY_PASSWORD)")]
    EmptyPassword,

    /// Empty OAuth access token.
    #[error("Access token is empty (SHOPIFY_ACCESS_TOKEN)")]
    EmptyAccessToken,

    /// The shop is neither `name` nor `name.myshopify.com`.
    #[error("Invalid shop domain '{domain}': expected 'my-store' or 'my-store.myshopify.com' (SHOPIFY_DOMAIN)")]
    InvalidShopDomain {
        /// The rejected input.
        domain: String,
    },

    /// The version is neither `YYYY-MM` nor `unstable`.
    #[error("Invalid API version '{version}': expected 'YYYY-MM' or 'unstable' (SHOPIFY_API_VERSION)")]
    InvalidApiVersion {
        /// The rejected input.
        version: String,
    },

    /// A scope list entry that is not a scope name.
    #[error("Invalid scopes (SHOPIFY_SCOPES): {reason}")]
    InvalidScopes {
        /// Which scope was rejected and why.
        reason: String,
    },

    /// The builder was missing `shop` or `api_key`.
    #[error("Missing required setting '{field}'")]
    MissingRequiredField {
        /// Builder method that was never called.
        field: &'static str,
    },

    /// An `api_host` override that is not `scheme://host[:port][/path]`.
    #[error("Invalid API host '{url}': expected e.g. 'https://proxy.example.com/shopify' or 'http://127.0.0.1:8080'")]
    InvalidHostUrl {
        /// The rejected input.
        url: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_environment_variables() {
        let cases = [
            (ConfigError::EmptyApiKey, "SHOPIFY_API_KEY"),
            (ConfigError::EmptyApiSecretKey, "SHOPIFY_API_SECRET"),
            (ConfigError::EmptyPassword, "SHOPIFY_PASSWORD"),
            (ConfigError::EmptyAccessToken, "SHOPIFY_ACCESS_TOKEN"),
            (
                ConfigError::InvalidApiVersion {
                    version: "2024-13".to_string(),
                },
                "SHOPIFY_API_VERSION",
            ),
        ];

        for (error, variable) in cases {
            assert!(error.to_string().contains(variable), "{error}");
        }
    }

    #[test]
    fn test_messages_echo_rejected_input() {
        let error = ConfigError::InvalidShopDomain {
            domain: "bad shop!".to_string(),
        };
        assert!(error.to_string().contains("'bad shop!'"));

        let error = ConfigError::MissingRequiredField { field: "api_key" };
        assert_eq!(error.to_string(), "Missing required setting 'api_key'");
    }
}
