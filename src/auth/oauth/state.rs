//! OAuth `state` parameter for CSRF protection.
//!
//! An app puts a fresh [`StateParam`] in the install URL, remembers it in the
//! merchant's session, and compares it with the `state` Shopify echoes back
//! on the callback.
//!
//! # Example
//!
//! ```rust
//! use shopify_admin::auth::oauth::StateParam;
//!
//! let state = StateParam::new();
//! assert_eq!(state.nonce().len(), 15);
//! assert!(state.matches(&state.to_string()));
//! assert!(!state.matches("something-else"));
//! ```

use rand::distributions::Alphanumeric;
use rand::Rng;
use std::fmt;

use super::hmac::constant_time_compare;

/// A state value carried through the OAuth redirect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateParam {
    value: String,
}

// Verify StateParam is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StateParam>();
};

impl StateParam {
    const NONCE_LENGTH: usize = 15;

    /// Generates a random 15-character alphanumeric nonce.
    #[must_use]
    pub fn new() -> Self {
        let value = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(Self::NONCE_LENGTH)
            .map(char::from)
            .collect();

        Self { value }
    }

    /// Wraps an existing state value, such as one restored from a session.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self { value: raw.into() }
    }

    /// Returns the state value.
    #[must_use]
    pub fn nonce(&self) -> &str {
        &self.value
    }

    /// Compares a received state with this one in constant time.
    #[must_use]
    pub fn matches(&self, received: &str) -> bool {
        constant_time_compare(&self.value, received)
    }
}

impl Default for StateParam {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StateParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for StateParam {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
