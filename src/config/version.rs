//! Admin API version selection.
//!
//! Shopify publishes a new Admin API version every quarter. When a version is
//! configured, resource paths are served from `/admin/api/{version}/`;
//! without one the unversioned `/admin/` root is used.

use crate::error::ConfigError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Shopify Admin API version.
///
/// # Example
///
/// ```rust
/// use shopify_admin::ApiVersion;
///
/// let version: ApiVersion = "2025-07".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2025_07);
/// assert_eq!(version.to_string(), "2025-07");
///
/// let future: ApiVersion = "2027-04".parse().unwrap();
/// assert!(!future.is_stable());
/// assert!(future > ApiVersion::latest());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// 2024-01
    V2024_01,
    /// 2024-04
    V2024_04,
    /// 2024-07
    V2024_07,
    /// 2024-10
    V2024_10,
    /// 2025-01
    V2025_01,
    /// 2025-04
    V2025_04,
    /// 2025-07
    V2025_07,
    /// 2025-10
    V2025_10,
    /// The `unstable` preview channel.
    Unstable,
    /// Any other well-formed `YYYY-MM` release.
    Custom(String),
}

impl ApiVersion {
    const STABLE: [Self; 8] = [
        Self::V2024_01,
        Self::V2024_04,
        Self::V2024_07,
        Self::V2024_10,
        Self::V2025_01,
        Self::V2025_04,
        Self::V2025_07,
        Self::V2025_10,
    ];

    /// Returns the newest stable version known to this crate.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2025_10
    }

    /// Returns `true` for the named quarterly releases.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        !matches!(self, Self::Unstable | Self::Custom(_))
    }

    /// Returns the version string as it appears in request paths.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::V2024_01 => "2024-01",
            Self::V2024_04 => "2024-04",
            Self::V2024_07 => "2024-07",
            Self::V2024_10 => "2024-10",
            Self::V2025_01 => "2025-01",
            Self::V2025_04 => "2025-04",
            Self::V2025_07 => "2025-07",
            Self::V2025_10 => "2025-10",
            Self::Unstable => "unstable",
            Self::Custom(s) => s,
        }
    }

    const fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    fn is_release_format(s: &str) -> bool {
        let Some((year, month)) = s.split_once('-') else {
            return false;
        };

        year.len() == 4
            && year.bytes().all(|b| b.is_ascii_digit())
            && matches!(month, "01" | "04" | "07" | "10")
    }
}

impl PartialOrd for ApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ApiVersion {
    // Dated versions (named or custom) sort chronologically; unstable sorts last.
    // A named version sorts before a custom one with the same date, so only
    // equal values compare equal.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Unstable, Self::Unstable) => Ordering::Equal,
            (Self::Unstable, _) => Ordering::Greater,
            (_, Self::Unstable) => Ordering::Less,
            _ => self
                .as_str()
                .cmp(other.as_str())
                .then_with(|| self.is_custom().cmp(&other.is_custom())),
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        if s == "unstable" {
            return Ok(Self::Unstable);
        }
        if let Some(known) = Self::STABLE.into_iter().find(|v| v.as_str() == s) {
            return Ok(known);
        }
        if Self::is_release_format(&s) {
            return Ok(Self::Custom(s));
        }

        Err(ConfigError::InvalidApiVersion { version: s })
    }
}
