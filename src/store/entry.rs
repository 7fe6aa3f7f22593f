//! Registration value type and key derivation
//!
//! This module defines the record stored for each registered user and the
//! function that derives the storage key from a user's account and username.

use serde::{Deserialize, Serialize};

/// A registered user: account, username, display name, access token and
/// the caller id handed back to clients.
///
/// The default instance (all fields empty) doubles as the "not found"
/// sentinel returned by [`get`](super::storage::KeyValueStorage::get) for
/// absent keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// Account (tenant) the user belongs to
    pub account: String,
    /// Username within the account
    pub user_name: String,
    /// Display name, ignored for validation
    pub full_name: String,
    /// Access token issued at registration time
    pub token: String,
    /// Identifier clients use to address this user in call requests
    pub caller_id: String,
}

impl Registration {
    /// Create a new registration
    pub fn new(
        account: impl Into<String>,
        user_name: impl Into<String>,
        full_name: impl Into<String>,
        token: impl Into<String>,
        caller_id: impl Into<String>,
    ) -> Self {
        Self {
            account: account.into(),
            user_name: user_name.into(),
            full_name: full_name.into(),
            token: token.into(),
            caller_id: caller_id.into(),
        }
    }

    /// The storage key derived from this registration's account and username
    pub fn key(&self) -> String {
        create_key(&self.account, &self.user_name)
    }
}

/// Derive the storage key for an account/username pair.
///
/// The key is the plain concatenation of the two parts, with no separator.
/// Clients use it to address each other, so it must stay stable across
/// implementations.
///
/// Note: without a separator the mapping is ambiguous — `("ab", "c")` and
/// `("a", "bc")` derive the same key. Inherited behavior; changing it would
/// change the keyspace every client depends on.
pub fn create_key(account: &str, user_name: &str) -> String {
    let mut key = String::with_capacity(account.len() + user_name.len());
    key.push_str(account);
    key.push_str(user_name);
    key
}
