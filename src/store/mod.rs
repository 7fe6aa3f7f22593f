//! Bounded registration store
//!
//! The store maps a composite account+username key to a [`Registration`]
//! and caps the number of entries it holds, evicting the oldest-inserted
//! entry when a `put` exceeds the cap.
//!
//! # Architecture
//!
//! ```text
//!                  Arc<dyn KeyValueStorage>
//!            ┌──────────────┴───────────────┐
//!            │                              │
//!            ▼                              ▼
//!      [MemoryStore]                (remote backend,
//!   RwLock<                          e.g. object storage —
//!     entries: HashMap<Key, Reg>     same contract,
//!     order:   VecDeque<Key>         out of scope here)
//!   >
//! ```
//!
//! Lookups (`get`, `contains_key`, `is_valid_entry`, `get_key_contains`)
//! take the read lock; `put` and `remove` take the write lock. Each call
//! holds the lock for its full duration, so individual operations are
//! atomic, while sequences of calls are not.

pub mod config;
pub mod entry;
pub mod error;
pub mod memory;
pub mod storage;

pub use config::{StoreConfig, DEFAULT_MAX_CAPACITY};
pub use entry::{create_key, Registration};
pub use error::StoreError;
pub use memory::MemoryStore;
pub use storage::KeyValueStorage;
