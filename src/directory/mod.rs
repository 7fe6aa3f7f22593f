//! User directory built on the registration store
//!
//! In-process request flows (register, list users, deregister) expressed
//! against the [`KeyValueStorage`](crate::store::KeyValueStorage) contract,
//! so they work unchanged over any backend.

pub mod service;

pub use service::UserDirectory;
