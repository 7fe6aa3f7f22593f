//! Call routing lookup example
//!
//! Run with: cargo run --example call_routing
//!
//! Shows how a routing layer uses the store: clients obtain a user list for
//! their account, then address a peer by caller id (the derived key) to look
//! up the recipient's registration.

use std::sync::Arc;

use regstore::{create_key, KeyValueStorage, MemoryStore, Registration, UserDirectory};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("regstore=debug".parse()?),
        )
        .init();

    // The routing layer only sees the storage contract, not the concrete
    // store, so a remote backend could be swapped in here.
    let store: Arc<dyn KeyValueStorage> = Arc::new(MemoryStore::new());
    let directory = UserDirectory::new(store.clone());

    let alice = directory
        .register(
            Registration::new("acme", "alice", "Alice Adams", "tok-a", ""),
            false,
        )
        .await;
    directory
        .register(
            Registration::new("acme", "bob", "Bob Brown", "tok-b", ""),
            false,
        )
        .await;
    directory
        .register(
            Registration::new("globex", "carol", "Carol Cruz", "tok-c", ""),
            false,
        )
        .await;

    // Alice asks who else is reachable on her account. Tokens are blanked
    // in the listing; only the caller ids are shared.
    let peers = directory.users_for_account(&alice).await;
    for peer in &peers {
        println!("reachable: {} ({})", peer.full_name, peer.caller_id);
    }

    // Alice calls Bob: the routing layer resolves his caller id to a
    // registration.
    let callee = store.get(&create_key("acme", "bob")).await;
    if callee == Registration::default() {
        println!("no such user, call dropped");
    } else {
        println!("routing call to {} <{}>", callee.full_name, callee.caller_id);
    }

    Ok(())
}
