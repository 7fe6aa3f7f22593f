//! Registration and validation flow example
//!
//! Run with: cargo run --example login_flow
//!
//! Walks through the life of a registration: a user registers, re-registers
//! (keeping their token), forces a token refresh, and finally deregisters.

use std::sync::Arc;

use regstore::{MemoryStore, Registration, StoreConfig, UserDirectory};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("regstore=debug".parse()?),
        )
        .init();

    let store = Arc::new(MemoryStore::with_config(
        StoreConfig::default().max_capacity(100),
    )?);
    let directory = UserDirectory::new(store.clone());

    // First registration issues caller id = account + username.
    let alice = directory
        .register(
            Registration::new("acme", "alice", "Alice Adams", "token-v1", ""),
            false,
        )
        .await;
    println!("registered: {}", serde_json::to_string_pretty(&alice)?);

    // Re-registering without force keeps the original token.
    let kept = directory
        .register(
            Registration::new("acme", "alice", "Alice Adams", "token-v2", ""),
            false,
        )
        .await;
    println!("re-register (no force) kept token: {}", kept.token);

    // Forcing re-authentication replaces it.
    let refreshed = directory
        .register(
            Registration::new("acme", "alice", "Alice Adams", "token-v2", ""),
            true,
        )
        .await;
    println!("re-register (force) new token:     {}", refreshed.token);

    assert!(store.is_valid_entry(&refreshed).await);

    // Deregistration requires the current token.
    match directory.deregister(&refreshed).await {
        Some(removed) => println!("deregistered {}", removed.caller_id),
        None => println!("deregistration rejected"),
    }
    println!("store is now empty: {}", store.is_empty().await);

    Ok(())
}
