//! Authorization code exchange.
//!
//! After the merchant approves the install, Shopify redirects back with a
//! one-time `code`. The app trades it for a permanent access token by
//! POSTing its credentials to `/admin/oauth/access_token` on the shop.

use serde::{Deserialize, Serialize};

use crate::auth::oauth::error::OAuthError;
use crate::auth::AuthScopes;
use crate::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::config::ShopifyConfig;
use crate::error::ConfigError;

/// Path of the token endpoint, absolute so API version prefixes do not apply.
pub const ACCESS_TOKEN_PATH: &str = "/admin/oauth/access_token";

#[derive(Debug, Serialize)]
struct AccessTokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    code: &'a str,
}

/// Successful response of the token endpoint.
///
/// # Example
///
/// ```rust
/// use shopify_admin::auth::oauth::AccessTokenResponse;
///
/// let response: AccessTokenResponse = serde_json::from_str(
///     r#"{"access_token": "shpat_abc", "scope": "write_orders,read_customers"}"#,
/// ).unwrap();
///
/// assert_eq!(response.access_token, "shpat_abc");
/// assert!(response.scopes().unwrap().contains("read_orders"));
/// ```
#[derive(Clone, Deserialize)]
pub struct AccessTokenResponse {
    /// The access token.
    pub access_token: String,
    /// Comma-separated scopes actually granted.
    #[serde(default)]
    pub scope: String,
    /// Lifetime in seconds, present for online tokens.
    #[serde(default)]
    pub expires_in: Option<u64>,
    /// Scopes of the associated user, present for online tokens.
    #[serde(default)]
    pub associated_user_scope: Option<String>,
}

impl AccessTokenResponse {
    /// Parses the granted scopes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidScopes`] if Shopify returned a malformed scope list.
    pub fn scopes(&self) -> Result<AuthScopes, ConfigError> {
        self.scope.parse()
    }
}

impl std::fmt::Debug for AccessTokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessTokenResponse")
            .field("access_token", &"*****")
            .field("scope", &self.scope)
            .field("expires_in", &self.expires_in)
            .field("associated_user_scope", &self.associated_user_scope)
            .finish()
    }
}

/// Exchanges an authorization code for an access token.
///
/// The request goes to [`ACCESS_TOKEN_PATH`] on the host `http` points at,
/// behind the `api_host` path prefix when one is configured.
///
/// # Errors
///
/// - [`OAuthError::InvalidCallback`] if `code` is empty
/// - [`OAuthError::MissingApiSecretKey`] if no secret is configured
/// - [`OAuthError::TokenExchangeFailed`] on a non-2xx status or an unusable body
/// - [`OAuthError::Http`] on transport failures
pub async fn exchange_code(
    http: &HttpClient,
    config: &ShopifyConfig,
    code: &str,
) -> Result<AccessTokenResponse, OAuthError> {
    if code.trim().is_empty() {
        return Err(OAuthError::InvalidCallback {
            reason: "authorization code is empty".to_string(),
        });
    }

    let secret = config
        .api_secret_key()
        .ok_or(OAuthError::MissingApiSecretKey)?;

    let body = serde_json::to_value(AccessTokenRequest {
        client_id: config.api_key().as_ref(),
        client_secret: secret.as_ref(),
        code,
    })
    .map_err(|e| OAuthError::TokenExchangeFailed {
        status: 0,
        message: format!("Failed to encode token request: {e}"),
    })?;

    let path = format!(
        "{}{ACCESS_TOKEN_PATH}",
        config.api_host().map_or("", |host| host.path_prefix())
    );
    let request = HttpRequest::builder(HttpMethod::Post, path)
        .body(body)
        .body_type(DataType::Json)
        .build()
        .map_err(HttpError::from)?;

    tracing::debug!(shop = %config.shop(), "Exchanging authorization code for access token");

    let response = match http.request(request).await {
        Ok(response) => response,
        Err(HttpError::Response(e)) => {
            return Err(OAuthError::TokenExchangeFailed {
                status: e.code,
                message: e.message,
            });
        }
        Err(e) => return Err(e.into()),
    };

    serde_json::from_value(response.body).map_err(|e| OAuthError::TokenExchangeFailed {
        status: response.code,
        message: format!("Failed to parse token response: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_expected_fields() {
        let body = serde_json::to_value(AccessTokenRequest {
            client_id: "key",
            client_secret: "secret",
            code: "abc",
        })
        .unwrap();

        assert_eq!(
            body,
            json!({"client_id": "key", "client_secret": "secret", "code": "abc"})
        );
    }

    #[test]
    fn test_response_parses_offline_token() {
        let response: AccessTokenResponse =
            serde_json::from_value(json!({"access_token": "tok", "scope": "read_products"}))
                .unwrap();

        assert_eq!(response.access_token, "tok");
        assert!(response.expires_in.is_none());
        assert!(response.scopes().unwrap().contains("read_products"));
    }

    #[test]
    fn test_response_parses_online_token_extras() {
        let response: AccessTokenResponse = serde_json::from_value(json!({
            "access_token": "tok",
            "scope": "write_orders",
            "expires_in": 86399,
            "associated_user_scope": "write_orders",
            "associated_user": {"id": 1}
        }))
        .unwrap();

        assert_eq!(response.expires_in, Some(86399));
        assert_eq!(response.associated_user_scope.as_deref(), Some("write_orders"));
    }

    #[test]
    fn test_response_debug_masks_token() {
        let response: AccessTokenResponse =
            serde_json::from_value(json!({"access_token": "shpat_secret"})).unwrap();
        let debug = format!("{response:?}");
        assert!(!debug.contains("shpat_secret"));
        assert_eq!(response.scope, "");
    }
}
