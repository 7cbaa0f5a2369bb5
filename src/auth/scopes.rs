//! OAuth access scopes.
//!
//! [`AuthScopes`] is the set of permissions an app requests when a merchant
//! installs it, rendered as the comma-separated `scope` parameter of the
//! install URL.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A set of OAuth scopes.
///
/// Scopes are deduplicated and kept in sorted order. Write scopes imply the
/// matching read scope:
///
/// - `write_products` implies `read_products`
/// - `unauthenticated_write_checkouts` implies `unauthenticated_read_checkouts`
///
/// # Example
///
/// ```rust
/// use shopify_admin::AuthScopes;
///
/// let scopes: AuthScopes = "write_products, read_orders".parse().unwrap();
/// assert_eq!(scopes.to_string(), "read_orders,read_products,write_products");
///
/// let required: AuthScopes = "read_products".parse().unwrap();
/// assert!(scopes.covers(&required));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AuthScopes {
    scopes: BTreeSet<String>,
}

impl AuthScopes {
    /// Creates an empty scope set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the scope set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Returns `true` if `scope` is in the set, including implied scopes.
    #[must_use]
    pub fn contains(&self, scope: &str) -> bool {
        self.scopes.contains(scope)
    }

    /// Returns `true` if every scope in `other` is also in this set.
    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        other.scopes.is_subset(&self.scopes)
    }

    /// Returns the scopes in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.scopes.iter().map(String::as_str)
    }

    fn with_implied(mut scopes: BTreeSet<String>) -> Self {
        let implied: Vec<String> = scopes.iter().filter_map(|s| implied_read(s)).collect();
        scopes.extend(implied);
        Self { scopes }
    }
}

fn implied_read(scope: &str) -> Option<String> {
    if let Some(rest) = scope.strip_prefix("unauthenticated_write_") {
        return Some(format!("unauthenticated_read_{rest}"));
    }
    scope.strip_prefix("write_").map(|rest| format!("read_{rest}"))
}

impl FromStr for AuthScopes {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut scopes = BTreeSet::new();

        for scope in s.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if !scope.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(ConfigError::InvalidScopes {
                    reason: format!("Invalid characters in scope: '{scope}'"),
                });
            }
            scopes.insert(scope.to_string());
        }

        Ok(Self::with_implied(scopes))
    }
}

impl From<Vec<String>> for AuthScopes {
    fn from(scopes: Vec<String>) -> Self {
        Self::with_implied(
            scopes
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }
}

impl fmt::Display for AuthScopes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self.iter().collect::<Vec<_>>().join(",");
        f.write_str(&joined)
    }
}

impl Serialize for AuthScopes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AuthScopes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
