//! User directory operations
//!
//! Registration, lookup and deregistration flows layered over any
//! [`KeyValueStorage`] backend. The directory never hands one user's token
//! to another: listings go out with tokens blanked.

use std::sync::Arc;

use crate::store::{KeyValueStorage, Registration};

/// Directory of registered users over a pluggable storage backend
pub struct UserDirectory {
    store: Arc<dyn KeyValueStorage>,
}

impl UserDirectory {
    /// Create a directory over the given storage backend
    pub fn new(store: Arc<dyn KeyValueStorage>) -> Self {
        Self { store }
    }

    /// Register a user, or return their existing registration
    ///
    /// If the account/username pair is already registered and `force` is
    /// false, the stored registration (with its existing token) is returned
    /// and nothing is written. With `force` set, the given registration
    /// replaces the stored one. Either way the returned registration carries
    /// the derived key as its caller id, which clients use to address this
    /// user.
    pub async fn register(&self, registration: Registration, force: bool) -> Registration {
        let key = registration.key();

        tracing::info!(
            account = %registration.account,
            user = %registration.user_name,
            force,
            "Received registration request"
        );

        let existing = self.store.get(&key).await;
        if !force && !existing.token.is_empty() {
            // Already registered; keep the token that was issued before.
            return existing;
        }

        let stored = Registration {
            caller_id: key.clone(),
            ..registration
        };
        self.store.put(key, stored.clone()).await;
        stored
    }

    /// List the other registered users of the requester's account
    ///
    /// Returns an empty list unless `credentials` validate against a stored
    /// registration. The requester is excluded from the result, and each
    /// entry has its token blanked and its caller id set to the entry's
    /// derived key.
    pub async fn users_for_account(&self, credentials: &Registration) -> Vec<Registration> {
        tracing::info!(user = %credentials.full_name, "Received request to obtain user list");

        if !self.store.is_valid_entry(credentials).await {
            tracing::info!("Request was invalid due to missing information or an unregistered user");
            return Vec::new();
        }

        let users: Vec<Registration> = self
            .store
            .get_key_contains(&credentials.account)
            .await
            .into_iter()
            .filter(|entry| entry.user_name != credentials.user_name)
            .map(|entry| {
                let caller_id = entry.key();
                Registration {
                    token: String::new(),
                    caller_id,
                    ..entry
                }
            })
            .collect();

        tracing::info!(
            account = %credentials.account,
            count = users.len(),
            "Users registered for the given account"
        );
        users
    }

    /// Remove the requester's registration
    ///
    /// Returns the removed registration, or `None` if the credentials did
    /// not validate (nothing is removed in that case).
    pub async fn deregister(&self, credentials: &Registration) -> Option<Registration> {
        tracing::info!(user = %credentials.full_name, "Received request to remove a registration");

        if !self.store.is_valid_entry(credentials).await {
            return None;
        }

        let key = credentials.key();
        let removed = self.store.get(&key).await;
        self.store.remove(&key).await;
        Some(removed)
    }
}
