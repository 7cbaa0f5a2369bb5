//! Error type for the Admin resource layer.
//!
//! [`AdminError`] wraps transport failures and adds the few failures that
//! belong to the resource calls themselves.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_admin::{AdminError, clients::HttpError};
//!
//! match client.product(42).await {
//!     Ok(product) => println!("{}", product["title"]),
//!     Err(AdminError::Http(HttpError::Response(e))) if e.code == 404 => {
//!         println!("no such product ({})", e.url);
//!     }
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use crate::clients::HttpError;
use crate::error::ConfigError;
use thiserror::Error;

/// Errors returned by [`AdminClient`](crate::AdminClient) operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// The response did not contain the expected top-level member.
    #[error("Response is missing the '{key}' member")]
    MissingKey {
        /// The member that was expected.
        key: String,
    },

    /// Parameters could not be turned into a query string.
    #[error("Invalid request parameters: {reason}")]
    InvalidParams {
        /// Why the parameters were rejected.
        reason: String,
    },

    /// A replacement base URL could not be used.
    #[error("Invalid base URL: {url}")]
    InvalidBaseUrl {
        /// The offending URL, without credentials.
        url: String,
    },

    /// A configuration value failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Wrapped HTTP error, including non-2xx responses.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl AdminError {
    /// Returns the HTTP status of a failed response, if this is one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(HttpError::Response(e)) => Some(e.code),
            _ => None,
        }
    }
}

// Verify AdminError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AdminError>();
};
