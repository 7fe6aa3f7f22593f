//! Bounded in-memory store implementation
//!
//! An insertion-ordered map behind a `tokio::sync::RwLock`, capped at a
//! fixed number of entries. When a `put` grows the map past the cap, the
//! earliest-inserted entry still present is evicted — strict FIFO by
//! insertion order, not LRU: overwriting an existing key does not move it.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::config::StoreConfig;
use super::entry::{create_key, Registration};
use super::error::StoreError;
use super::storage::KeyValueStorage;

/// Map plus eviction order, updated together under one lock
struct Inner {
    entries: HashMap<String, Registration>,
    order: VecDeque<String>,
}

impl Inner {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        }
    }
}

/// Bounded, thread-safe in-memory registration store
///
/// Thread-safe via `RwLock`; lookups take the read lock, `put` and `remove`
/// the write lock. Every operation acquires the lock exactly once, so each
/// call is atomic with respect to concurrent callers.
pub struct MemoryStore {
    /// Entries and their insertion order
    inner: RwLock<Inner>,

    /// Configuration
    config: StoreConfig,
}

impl MemoryStore {
    /// Create a new store with default configuration
    pub fn new() -> Self {
        let config = StoreConfig::default();
        Self {
            inner: RwLock::new(Inner::with_capacity(config.initial_capacity())),
            config,
        }
    }

    /// Create a new store with custom configuration
    ///
    /// Returns an error if the configured capacity ceiling is zero.
    pub fn with_config(config: StoreConfig) -> Result<Self, StoreError> {
        config.validate()?;
        Ok(Self {
            inner: RwLock::new(Inner::with_capacity(config.initial_capacity())),
            config,
        })
    }

    /// Get the store configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Insert or overwrite the entry at `key`
    ///
    /// If the insert pushes the entry count past the capacity ceiling, the
    /// oldest-inserted entry is evicted. An overwrite keeps the key's
    /// original position in the eviction order.
    pub async fn put(&self, key: String, value: Registration) {
        let mut inner = self.inner.write().await;

        if inner.entries.insert(key.clone(), value).is_none() {
            inner.order.push_back(key);

            if inner.entries.len() > self.config.max_capacity {
                if let Some(oldest) = inner.order.pop_front() {
                    inner.entries.remove(&oldest);

                    tracing::debug!(
                        key = %oldest,
                        max_capacity = self.config.max_capacity,
                        "Evicted oldest registration at capacity"
                    );
                }
            }
        }
    }

    /// Get the value stored at `key`
    ///
    /// Returns the empty [`Registration`] sentinel if the key is absent;
    /// callers rely on getting a concrete value back rather than an
    /// `Option` (see the [`storage`](super::storage) module docs).
    pub async fn get(&self, key: &str) -> Registration {
        let inner = self.inner.read().await;
        inner.entries.get(key).cloned().unwrap_or_default()
    }

    /// Delete the entry at `key` if present; no-op otherwise
    pub async fn remove(&self, key: &str) {
        let mut inner = self.inner.write().await;

        if inner.entries.remove(key).is_some() {
            if let Some(pos) = inner.order.iter().position(|k| k == key) {
                inner.order.remove(pos);
            }

            tracing::debug!(key = %key, "Removed registration");
        }
    }

    /// Whether an entry exists at `key`
    pub async fn contains_key(&self, key: &str) -> bool {
        let inner = self.inner.read().await;
        inner.entries.contains_key(key)
    }

    /// Snapshot of the current keys, in insertion order
    pub async fn keys(&self) -> Vec<String> {
        let inner = self.inner.read().await;
        inner.order.iter().cloned().collect()
    }

    /// Whether `candidate` matches a stored registration
    ///
    /// Derives the key from `candidate.account` and `candidate.user_name`
    /// and compares tokens. Lookup and comparison happen under a single
    /// read-lock acquisition, so a concurrent `remove` cannot slip between
    /// the existence check and the read.
    pub async fn is_valid_entry(&self, candidate: &Registration) -> bool {
        let key = create_key(&candidate.account, &candidate.user_name);
        let inner = self.inner.read().await;

        // The key encodes account and username, so only the token is left
        // to compare.
        match inner.entries.get(&key) {
            Some(stored) => stored.token == candidate.token,
            None => false,
        }
    }

    /// Registrations stored under keys containing `filter` as a substring
    ///
    /// Case-sensitive, unanchored. Results follow insertion order.
    pub async fn get_key_contains(&self, filter: &str) -> Vec<Registration> {
        let inner = self.inner.read().await;

        inner
            .order
            .iter()
            .filter(|key| key.contains(filter))
            .filter_map(|key| inner.entries.get(key).cloned())
            .collect()
    }

    /// Number of entries currently stored
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    /// Whether the store holds no entries
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.entries.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStorage for MemoryStore {
    async fn put(&self, key: String, value: Registration) {
        MemoryStore::put(self, key, value).await
    }

    async fn get(&self, key: &str) -> Registration {
        MemoryStore::get(self, key).await
    }

    async fn remove(&self, key: &str) {
        MemoryStore::remove(self, key).await
    }

    async fn contains_key(&self, key: &str) -> bool {
        MemoryStore::contains_key(self, key).await
    }

    async fn keys(&self) -> Vec<String> {
        MemoryStore::keys(self).await
    }

    async fn is_valid_entry(&self, candidate: &Registration) -> bool {
        MemoryStore::is_valid_entry(self, candidate).await
    }

    async fn get_key_contains(&self, filter: &str) -> Vec<Registration> {
        MemoryStore::get_key_contains(self, filter).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn registration(account: &str, user: &str, token: &str) -> Registration {
        Registration::new(
            account,
            user,
            format!("{} {}", user, "Example"),
            token,
            create_key(account, user),
        )
    }

    #[tokio::test]
    async fn test_get_absent_returns_empty_sentinel() {
        let store = MemoryStore::new();

        assert_eq!(store.get("missing").await, Registration::default());
        assert_eq!(store.get("").await, Registration::default());
    }

    #[tokio::test]
    async fn test_put_then_get_round_trip() {
        let store = MemoryStore::new();
        let reg = registration("acme", "alice", "tok-1");

        store.put(reg.key(), reg.clone()).await;

        assert_eq!(store.get(&reg.key()).await, reg);
        assert!(store.contains_key(&reg.key()).await);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_empty_store_has_no_keys() {
        let store = MemoryStore::new();

        assert!(store.is_empty().await);
        assert!(store.keys().await.is_empty());
    }

    #[tokio::test]
    async fn test_fifo_eviction_at_capacity() {
        let store = MemoryStore::with_config(StoreConfig::default().max_capacity(2)).unwrap();

        store.put("k1".into(), registration("a", "1", "t1")).await;
        store.put("k2".into(), registration("a", "2", "t2")).await;
        assert_eq!(store.len().await, 2);

        // Third insert exceeds the cap; the earliest entry goes.
        store.put("k3".into(), registration("a", "3", "t3")).await;
        assert_eq!(store.len().await, 2);
        assert!(!store.contains_key("k1").await);
        assert!(store.contains_key("k2").await);
        assert!(store.contains_key("k3").await);

        // One more insert and the next-oldest follows.
        store.put("k4".into(), registration("a", "4", "t4")).await;
        assert_eq!(store.len().await, 2);
        assert!(!store.contains_key("k2").await);
        assert!(store.contains_key("k3").await);
        assert!(store.contains_key("k4").await);
    }

    #[tokio::test]
    async fn test_eviction_removes_exactly_one() {
        let max = 5;
        let store = MemoryStore::with_config(StoreConfig::default().max_capacity(max)).unwrap();

        for i in 0..=max {
            store.put(format!("key{}", i), registration("a", &i.to_string(), "t")).await;
        }

        assert_eq!(store.len().await, max);
        assert!(!store.contains_key("key0").await);
        assert!(store.contains_key(&format!("key{}", max)).await);
    }

    #[tokio::test]
    async fn test_overwrite_keeps_eviction_position() {
        let store = MemoryStore::with_config(StoreConfig::default().max_capacity(2)).unwrap();

        store.put("k1".into(), registration("a", "1", "t1")).await;
        store.put("k2".into(), registration("a", "2", "t2")).await;

        // Overwriting k1 must not move it to the back of the order.
        store.put("k1".into(), registration("a", "1", "t1-renewed")).await;
        assert_eq!(store.get("k1").await.token, "t1-renewed");

        store.put("k3".into(), registration("a", "3", "t3")).await;
        assert!(!store.contains_key("k1").await);
        assert!(store.contains_key("k2").await);
        assert!(store.contains_key("k3").await);
    }

    #[tokio::test]
    async fn test_remove_then_reinsert_goes_to_back() {
        let store = MemoryStore::with_config(StoreConfig::default().max_capacity(2)).unwrap();

        store.put("k1".into(), registration("a", "1", "t1")).await;
        store.put("k2".into(), registration("a", "2", "t2")).await;

        // Removing and re-inserting k1 makes it the newest entry.
        store.remove("k1").await;
        store.put("k1".into(), registration("a", "1", "t1")).await;

        store.put("k3".into(), registration("a", "3", "t3")).await;
        assert!(store.contains_key("k1").await);
        assert!(!store.contains_key("k2").await);
        assert!(store.contains_key("k3").await);
    }

    #[tokio::test]
    async fn test_remove_absent_is_noop() {
        let store = MemoryStore::new();

        store.remove("missing").await;
        assert!(!store.contains_key("missing").await);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_keys_snapshot_in_insertion_order() {
        let store = MemoryStore::new();

        store.put("k1".into(), registration("a", "1", "t1")).await;
        store.put("k2".into(), registration("a", "2", "t2")).await;
        store.put("k3".into(), registration("a", "3", "t3")).await;
        store.remove("k2").await;

        assert_eq!(store.keys().await, vec!["k1".to_string(), "k3".to_string()]);

        for key in store.keys().await {
            assert!(store.contains_key(&key).await);
        }
    }

    #[tokio::test]
    async fn test_is_valid_entry_compares_token_only() {
        let store = MemoryStore::new();
        let reg = registration("acme", "alice", "tok-1");
        store.put(reg.key(), reg.clone()).await;

        assert!(store.is_valid_entry(&reg).await);

        // full_name and caller_id play no part in validation.
        let mut cosmetic = reg.clone();
        cosmetic.full_name = "Someone Else".into();
        cosmetic.caller_id = "bogus".into();
        assert!(store.is_valid_entry(&cosmetic).await);

        // A wrong token fails even though the key matches.
        let mut wrong_token = reg.clone();
        wrong_token.token = "tok-2".into();
        assert!(!store.is_valid_entry(&wrong_token).await);

        // Never registered at all.
        assert!(!store.is_valid_entry(&registration("acme", "bob", "tok-1")).await);
    }

    #[tokio::test]
    async fn test_get_key_contains_substring_match() {
        let store = MemoryStore::new();
        let alice = registration("acme", "alice", "t1");
        let bob = registration("acme", "bob", "t2");
        let carol = registration("other", "carol", "t3");

        store.put(alice.key(), alice.clone()).await;
        store.put(bob.key(), bob.clone()).await;
        store.put(carol.key(), carol.clone()).await;

        assert_eq!(store.get_key_contains("alice").await, vec![alice.clone()]);
        assert_eq!(store.get_key_contains("acme").await, vec![alice, bob]);
        assert!(store.get_key_contains("ACME").await.is_empty());
        assert_eq!(store.get_key_contains("zzz").await.len(), 0);
    }

    #[tokio::test]
    async fn test_zero_capacity_rejected() {
        let result = MemoryStore::with_config(StoreConfig::default().max_capacity(0));

        assert!(matches!(result, Err(StoreError::InvalidCapacity(0))));
    }

    #[tokio::test]
    async fn test_concurrent_puts_respect_capacity() {
        let max = 8;
        let store = Arc::new(
            MemoryStore::with_config(StoreConfig::default().max_capacity(max)).unwrap(),
        );

        let mut handles = Vec::new();
        for i in 0..32 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                let key = format!("key{}", i);
                store.put(key, registration("a", &i.to_string(), "t")).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.len().await, max);

        // A write after all the evicting writes must survive.
        store.put("last".into(), registration("a", "last", "t")).await;
        assert!(store.contains_key("last").await);
        assert_eq!(store.len().await, max);
    }

    #[tokio::test]
    async fn test_usable_as_trait_object() {
        let store: Arc<dyn KeyValueStorage> = Arc::new(MemoryStore::new());
        let reg = registration("acme", "alice", "tok-1");

        store.put(reg.key(), reg.clone()).await;

        assert!(store.contains_key(&reg.key()).await);
        assert_eq!(store.get(&reg.key()).await, reg);
        assert!(store.is_valid_entry(&reg).await);
        assert_eq!(store.keys().await.len(), 1);

        store.remove(&reg.key()).await;
        assert_eq!(store.get(&reg.key()).await, Registration::default());
    }
}
