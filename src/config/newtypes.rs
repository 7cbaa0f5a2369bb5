//! Validated configuration values.
//!
//! Credentials are opaque non-empty strings. Everything except the API key
//! prints as `Type(*****)` under `Debug`, so a config can be logged whole.

use std::fmt;

use reqwest::Url;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ConfigError;

macro_rules! credential {
    ($(#[$meta:meta])* $name:ident, $empty:ident, masked) => {
        credential!(@define $(#[$meta])* $name, $empty);

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(concat!(stringify!($name), "(*****)"))
            }
        }
    };
    ($(#[$meta:meta])* $name:ident, $empty:ident, visible) => {
        credential!(@define $(#[$meta])* $name, $empty);

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0).finish()
            }
        }
    };
    (@define $(#[$meta:meta])* $name:ident, $empty:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Wraps a non-empty `", stringify!($name), "`.")]
            ///
            /// # Errors
            ///
            #[doc = concat!("Returns [`ConfigError::", stringify!($empty), "`] for an empty string.")]
            pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
                let value = value.into();
                if value.is_empty() {
                    return Err(ConfigError::$empty);
                }
                Ok(Self(value))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

credential!(
    /// The app's API key.
    ///
    /// It is the OAuth `client_id` and the user name in the admin base URL.
    ///
    /// ```rust
    /// use shopify_admin::ApiKey;
    ///
    /// let key = ApiKey::new("my-api-key").unwrap();
    /// assert_eq!(key.as_ref(), "my-api-key");
    /// ```
    ApiKey,
    EmptyApiKey,
    visible
);

credential!(
    /// The app's API secret, used to sign callbacks and to exchange codes.
    ///
    /// ```rust
    /// use shopify_admin::ApiSecretKey;
    ///
    /// let secret = ApiSecretKey::new("my-secret").unwrap();
    /// assert_eq!(format!("{:?}", secret), "ApiSecretKey(*****)");
    /// ```
    ApiSecretKey,
    EmptyApiSecretKey,
    masked
);

credential!(
    /// A private app password (`api_key:password` authentication).
    ApiPassword,
    EmptyPassword,
    masked
);

credential!(
    /// An OAuth access token.
    ///
    /// ```rust
    /// use shopify_admin::AccessToken;
    ///
    /// let token = AccessToken::new("shpat_123").unwrap();
    /// assert_eq!(token.as_ref(), "shpat_123");
    /// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
    /// ```
    AccessToken,
    EmptyAccessToken,
    masked
);

/// A shop's `*.myshopify.com` domain.
///
/// Both `my-store` and `my-store.myshopify.com` are accepted (case and
/// surrounding whitespace are ignored) and stored in the full form. The shop
/// name may hold lowercase letters, digits and inner hyphens.
///
/// ```rust
/// use shopify_admin::ShopDomain;
///
/// let domain = ShopDomain::new("My-Store").unwrap();
/// assert_eq!(domain.as_ref(), "my-store.myshopify.com");
/// assert_eq!(domain.shop_name(), "my-store");
///
/// let json = serde_json::to_string(&domain).unwrap();
/// assert_eq!(json, r#""my-store.myshopify.com""#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopDomain(String);

impl ShopDomain {
    const SUFFIX: &'static str = ".myshopify.com";

    /// Validates and normalizes a shop domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopDomain`] for anything that is not a
    /// shop name or a `*.myshopify.com` domain.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let input: String = domain.into();
        let normalized = input.trim().to_ascii_lowercase();
        let name = normalized.strip_suffix(Self::SUFFIX).unwrap_or(&normalized);

        if !is_shop_name(name) {
            return Err(ConfigError::InvalidShopDomain { domain: input });
        }

        Ok(Self(format!("{name}{}", Self::SUFFIX)))
    }

    /// The part before `.myshopify.com`.
    #[must_use]
    pub fn shop_name(&self) -> &str {
        self.0.strip_suffix(Self::SUFFIX).unwrap_or(&self.0)
    }
}

fn is_shop_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && !name.ends_with('-')
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

impl AsRef<str> for ShopDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShopDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ShopDomain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ShopDomain {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(de::Error::custom)
    }
}

/// A host that replaces `https://{shop}` in admin URLs.
///
/// Used for proxies and local test servers. A path becomes a prefix in front
/// of `/admin/`. Credentials, queries and fragments are rejected because the
/// admin base URL supplies its own.
///
/// ```rust
/// use shopify_admin::HostUrl;
///
/// let url = HostUrl::new("http://localhost:3000/shopify/").unwrap();
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), "localhost");
/// assert_eq!(url.authority(), "localhost:3000");
/// assert_eq!(url.path_prefix(), "/shopify");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    raw: String,
    scheme: String,
    host: String,
    authority: String,
    path_prefix: String,
}

impl HostUrl {
    /// Parses a host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] unless the input is an absolute
    /// URL with a host and without user info, query or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw: String = url.into();
        let raw = raw.trim().to_string();
        let invalid = || ConfigError::InvalidHostUrl { url: raw.clone() };

        let parsed = Url::parse(&raw).map_err(|_| invalid())?;
        let host = parsed
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(invalid)?
            .to_string();
        if !parsed.username().is_empty()
            || parsed.password().is_some()
            || parsed.query().is_some()
            || parsed.fragment().is_some()
        {
            return Err(invalid());
        }

        let authority = parsed
            .port()
            .map_or_else(|| host.clone(), |port| format!("{host}:{port}"));

        Ok(Self {
            scheme: parsed.scheme().to_string(),
            path_prefix: parsed.path().trim_end_matches('/').to_string(),
            host,
            authority,
            raw,
        })
    }

    /// `http` or `https`, usually.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The host without port.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.host
    }

    /// Host plus `:port` when a non-default port was given.
    #[must_use]
    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// The path without trailing slash, `""` for a bare host.
    #[must_use]
    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}
