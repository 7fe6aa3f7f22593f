//! Bounded concurrent key-value store for user registrations
//!
//! Registrations (account, username, full name, access token, caller id)
//! are stored under a composite account+username key. The in-memory store
//! is capped: once `max_capacity` entries are held, the next insert evicts
//! the oldest-inserted entry (FIFO by insertion, not LRU).
//!
//! The storage contract is a trait, [`KeyValueStorage`], so a remote
//! backend (e.g. object storage) can replace [`MemoryStore`] without
//! touching callers.
//!
//! # Example
//!
//! ```
//! use regstore::{create_key, MemoryStore, Registration, StoreConfig};
//!
//! # tokio_test::block_on(async {
//! let store = MemoryStore::with_config(StoreConfig::default().max_capacity(100)).unwrap();
//!
//! let reg = Registration::new("acme", "alice", "Alice Adams", "tok-1", "");
//! store.put(reg.key(), reg.clone()).await;
//!
//! assert!(store.is_valid_entry(&reg).await);
//! assert_eq!(store.get(&create_key("acme", "alice")).await.full_name, "Alice Adams");
//!
//! // Absent keys come back as the empty sentinel, never an error.
//! assert_eq!(store.get("nosuchkey").await, Registration::default());
//! # });
//! ```

pub mod directory;
pub mod store;

pub use directory::UserDirectory;
pub use store::{
    create_key, KeyValueStorage, MemoryStore, Registration, StoreConfig, StoreError,
    DEFAULT_MAX_CAPACITY,
};
