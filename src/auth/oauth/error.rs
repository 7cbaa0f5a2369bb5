//! OAuth-specific error types.
//!
//! # Error Types
//!
//! - [`OAuthError::MissingApiSecretKey`]: verification or token exchange without a secret
//! - [`OAuthError::InvalidCallback`]: callback parameters are malformed
//! - [`OAuthError::TokenExchangeFailed`]: the access token request was rejected
//! - [`OAuthError::Config`]: a returned value failed validation
//! - [`OAuthError::Http`]: wrapped HTTP client error
//!
//! # Example
//!
//! ```rust
//! use shopify_admin::auth::oauth::OAuthError;
//!
//! let error = OAuthError::MissingApiSecretKey;
//! assert!(error.to_string().contains("API secret key"));
//! ```

use crate::clients::HttpError;
use crate::error::ConfigError;
use thiserror::Error;

/// Errors that can occur during OAuth operations.
///
/// A signature that simply does not match is not an error: verification
/// returns `Ok(false)` for it. Errors are reserved for requests that cannot
/// be checked at all or for failed token exchanges.
#[derive(Debug, Error)]
pub enum OAuthError {
    /// No API secret key is configured.
    #[error("An API secret key must be configured to verify requests or exchange tokens")]
    MissingApiSecretKey,

    /// Callback parameters are invalid or malformed.
    #[error("Invalid callback: {reason}")]
    InvalidCallback {
        /// Description of what's invalid about the callback.
        reason: String,
    },

    /// The access token request returned a non-success status or an
    /// unusable body.
    #[error("Token exchange failed with status {status}: {message}")]
    TokenExchangeFailed {
        /// The HTTP status code returned.
        status: u16,
        /// The error message from the response.
        message: String,
    },

    /// A value returned by Shopify failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Wrapped HTTP client error.
    #[error(transparent)]
    Http(#[from] HttpError),
}

// Verify OAuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::InvalidHttpRequestError;

    #[test]
    fn test_token_exchange_failed_includes_status_and_message() {
        let error = OAuthError::TokenExchangeFailed {
            status: 400,
            message: "invalid_request".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("400"));
        assert!(message.contains("invalid_request"));
    }

    #[test]
    fn test_invalid_callback_includes_reason() {
        let error = OAuthError::InvalidCallback {
            reason: "missing hmac".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid callback: missing hmac");
    }

    #[test]
    fn test_wraps_lower_layer_errors() {
        let http = HttpError::InvalidRequest(InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        });
        let error: OAuthError = http.into();
        assert!(matches!(error, OAuthError::Http(_)));

        let error: OAuthError = ConfigError::EmptyAccessToken.into();
        assert!(error.to_string().contains("Access token is empty"));
    }
}
