//! HMAC-SHA256 request verification.
//!
//! Shopify signs the query string of OAuth callbacks and app requests. The
//! signed message is every parameter except the signature itself, sorted by
//! key and form-encoded (`a=1&b=two+words`). The signature is the lowercase
//! hex HMAC-SHA256 of that message keyed with the app's API secret.
//!
//! A request is accepted when:
//!
//! - a signature was supplied,
//! - its `timestamp` parameter is an integer less than an hour old,
//! - the signature matches under the current secret or, during rotation,
//!   the old one.
//!
//! Signatures are compared in constant time.
//!
//! # Example
//!
//! ```rust
//! use shopify_admin::auth::oauth::hmac::{compute_signature, signable_query};
//!
//! let query = signable_query([
//!     ("timestamp", "1337178173"),
//!     ("shop", "some-shop.myshopify.com"),
//!     ("hmac", "ignored"),
//!     ("code", "0907a61c0c8d55e99db179b68161bc00"),
//! ]);
//! assert_eq!(
//!     query,
//!     "code=0907a61c0c8d55e99db179b68161bc00&shop=some-shop.myshopify.com&timestamp=1337178173"
//! );
//! assert_eq!(compute_signature(&query, "hush").len(), 64);
//! ```

use std::collections::BTreeMap;

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::auth::oauth::error::OAuthError;
use crate::config::ShopifyConfig;

type HmacSha256 = Hmac<Sha256>;

/// Maximum age of a signed request, in seconds.
pub const MAX_REQUEST_AGE_SECS: i64 = 3600;

/// Parameters that carry a signature and are never part of the signed message.
const SIGNATURE_PARAMS: [&str; 2] = ["hmac", "signature"];

/// Computes the lowercase hex HMAC-SHA256 of `message` keyed with `secret`.
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn compute_signature(message: &str, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Compares two strings without short-circuiting on the first difference.
#[must_use]
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Form-encodes a string: space becomes `+`, `A-Z a-z 0-9 . _ -` are kept,
/// every other byte becomes upper-case `%XX`.
#[must_use]
pub fn form_urlencode(value: &str) -> String {
    urlencoding::encode(value)
        .replace("%20", "+")
        .replace('~', "%7E")
}

/// Builds the message Shopify signs from request parameters.
///
/// Keys are sorted, `hmac` and `signature` are dropped, and each pair is
/// form-encoded. A repeated key keeps its last value.
pub fn signable_query<I, K, V>(params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    signable_from_sorted(&collect_params(params))
}

/// Verifies a signed request against the current time.
///
/// See [`verify_request_at`].
///
/// # Errors
///
/// Returns [`OAuthError::MissingApiSecretKey`] if no secret is configured.
pub fn verify_request<I, K, V>(
    config: &ShopifyConfig,
    signature: Option<&str>,
    params: I,
) -> Result<bool, OAuthError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    verify_request_at(config, signature, params, chrono::Utc::now().timestamp())
}

/// Verifies a signed request as of `now` (Unix seconds).
///
/// Returns `Ok(false)` when no signature is supplied, when `timestamp` is
/// missing, not an integer or at least [`MAX_REQUEST_AGE_SECS`] old, and when
/// the signature matches neither secret.
///
/// # Errors
///
/// Returns [`OAuthError::MissingApiSecretKey`] if a signature is supplied
/// but no secret is configured.
pub fn verify_request_at<I, K, V>(
    config: &ShopifyConfig,
    signature: Option<&str>,
    params: I,
    now: i64,
) -> Result<bool, OAuthError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let Some(signature) = signature else {
        return Ok(false);
    };

    let secret = config
        .api_secret_key()
        .ok_or(OAuthError::MissingApiSecretKey)?;

    let params = collect_params(params);

    let Some(timestamp) = params.get("timestamp").and_then(|t| t.trim().parse::<i64>().ok())
    else {
        tracing::debug!("Rejecting signed request without a valid timestamp");
        return Ok(false);
    };

    if now.saturating_sub(timestamp) >= MAX_REQUEST_AGE_SECS {
        tracing::debug!(timestamp, now, "Rejecting stale signed request");
        return Ok(false);
    }

    let message = signable_from_sorted(&params);

    if constant_time_compare(&compute_signature(&message, secret.as_ref()), signature) {
        return Ok(true);
    }

    if let Some(old_secret) = config.old_api_secret_key() {
        if constant_time_compare(&compute_signature(&message, old_secret.as_ref()), signature) {
            return Ok(true);
        }
    }

    tracing::debug!("Rejecting signed request with mismatched signature");
    Ok(false)
}

/// Verifies a raw callback query string such as
/// `code=...&hmac=...&shop=...&timestamp=...`.
///
/// The `hmac` parameter is taken as the signature; a missing one yields
/// `Ok(false)`. A leading `?` is ignored.
///
/// # Errors
///
/// - [`OAuthError::InvalidCallback`] if a component is not valid UTF-8 once decoded
/// - [`OAuthError::MissingApiSecretKey`] if no secret is configured
pub fn verify_query_string(config: &ShopifyConfig, raw_query: &str) -> Result<bool, OAuthError> {
    let pairs = parse_query(raw_query)?;
    let signature = pairs
        .iter()
        .rev()
        .find(|(key, _)| key == "hmac")
        .map(|(_, value)| value.clone());

    verify_request(config, signature.as_deref(), pairs)
}

/// Splits and decodes an `application/x-www-form-urlencoded` string.
pub(crate) fn parse_query(raw_query: &str) -> Result<Vec<(String, String)>, OAuthError> {
    let decode = |component: &str| {
        urlencoding::decode(&component.replace('+', " "))
            .map(std::borrow::Cow::into_owned)
            .map_err(|_| OAuthError::InvalidCallback {
                reason: format!("query component '{component}' is not valid UTF-8"),
            })
    };

    raw_query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            Ok((decode(key)?, decode(value)?))
        })
        .collect()
}

fn collect_params<I, K, V>(params: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    params
        .into_iter()
        .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
        .collect()
}

fn signable_from_sorted(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .filter(|(key, _)| !SIGNATURE_PARAMS.contains(&key.as_str()))
        .map(|(key, value)| format!("{}={}", form_urlencode(key), form_urlencode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

mod hex {
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        let bytes = bytes.as_ref();
        let mut result = String::with_capacity(bytes.len() * 2);
        for &byte in bytes {
            result.push(HEX_CHARS[(byte >> 4) as usize] as char);
            result.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
        }
        result
    }
}
