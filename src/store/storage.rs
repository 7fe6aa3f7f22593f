//! Storage contract for registration stores
//!
//! The trait every backing implementation must satisfy, whether the bounded
//! in-memory store of this crate or a future remote object-storage backend.
//! Callers hold an `Arc<dyn KeyValueStorage>` and stay implementation
//! agnostic.
//!
//! # Absence is not an error
//!
//! None of these operations fail for a missing key. `get` returns the empty
//! [`Registration`] sentinel, `contains_key` and `is_valid_entry` return a
//! bool, and `remove` of an absent key is a silent no-op. Callers have
//! historically relied on receiving a concrete (if empty) value rather than
//! an absent-value marker, so implementations must preserve this shape even
//! where an `Option` would be the more natural signature.

use async_trait::async_trait;

use super::entry::Registration;

/// Contract for a registration key-value store
///
/// Each operation is atomic with respect to the others; no atomicity is
/// guaranteed across a sequence of calls (a `contains_key` followed by a
/// `get` may observe an intervening `remove`). Validation that needs a
/// consistent check-then-read therefore goes through [`is_valid_entry`],
/// which implementations must perform as a single locked read.
///
/// [`is_valid_entry`]: KeyValueStorage::is_valid_entry
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Insert or overwrite the entry at `key`
    ///
    /// Bounded implementations may evict their oldest entry as a side
    /// effect.
    async fn put(&self, key: String, value: Registration);

    /// Get the value stored at `key`, or the empty sentinel if absent
    async fn get(&self, key: &str) -> Registration;

    /// Delete the entry at `key` if present; no-op otherwise
    async fn remove(&self, key: &str);

    /// Whether an entry exists at `key`
    async fn contains_key(&self, key: &str) -> bool;

    /// Snapshot of the current keys
    ///
    /// The ordering carries no meaning for callers.
    async fn keys(&self) -> Vec<String>;

    /// Whether `candidate` matches a stored registration
    ///
    /// The key is derived from `candidate.account` and
    /// `candidate.user_name`; the result is true iff an entry exists for
    /// that key and its token equals `candidate.token`. The other fields of
    /// `candidate` are ignored.
    async fn is_valid_entry(&self, candidate: &Registration) -> bool;

    /// Registrations stored under keys containing `filter` as a substring
    ///
    /// The match is case-sensitive and unanchored; results follow key
    /// enumeration order.
    async fn get_key_contains(&self, filter: &str) -> Vec<Registration>;
}
