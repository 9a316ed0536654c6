//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//

// This is an example program showing the basic Orchestrate operations: it
// stores a few items, reads and updates them with version checks, lists and
// searches the collection, links two items, and finally deletes the
// collection.

// To run this example (with ORCHESTRATE_API_KEY set):
//    cargo run --example quickstart
//
// for extra output:
//    RUST_LOG=debug cargo run --example quickstart
//
// or, for a LOT of tracing output:
//    RUST_LOG=trace cargo run --example quickstart

use orchestrate_rust_sdk::{
    Client, DeleteOptions, ErrorCode, GraphNode, HistoryOptions, OrchestrateError,
    PatchOperation, SearchOptions,
};
use serde_derive::{Deserialize, Serialize};
use std::error::Error;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct User {
    name: String,
    email: String,
    visits: u32,
}

// This method shows various ways to configure a Client.
fn get_client() -> Result<Client, OrchestrateError> {
    // Note: later methods called on this builder will override earlier methods.
    // This allows for setting desired defaults that can be overridden by, for example,
    // .from_environment().
    Client::builder()
        // For a non-default data center:
        // .host("https://api.aws-eu-west-1.orchestrate.io/v0")?
        //
        // Using a credentials file:
        // .api_key_from_file("~/.orchestrate/config")?
        //
        // To read all of the above from environment variables:
        // or, to override above from environment;
        .from_environment()?
        //
        // Optional: set a different default timeout (default is 30 seconds)
        .timeout(Duration::from_secs(15))?
        //
        // Build the client
        .build()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Set up a tracing subscriber to see output based on RUST_LOG environment setting
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_ansi(false)
        .compact()
        .init();

    // Create a client. This should be used throughout the program
    info!("Creating new client...");
    let client = get_client()?;
    client.ping().await?;

    let users = client.collection("quickstart_users")?;

    // Store a new item, only if the key is not already used
    let jane = User {
        name: "Jane".to_string(),
        email: "jane@example.com".to_string(),
        visits: 0,
    };
    let meta = match users.try_add("jane", &jane).await {
        Ok(m) => m,
        Err(e) if e.code == ErrorCode::PreconditionFailed => {
            info!("jane already exists, overwriting");
            users.add_or_update("jane", &jane, None).await?
        }
        Err(e) => return Err(e.into()),
    };
    println!("stored jane: {:?}", meta);

    // Store an item with a generated key
    let generated = users
        .add(&User {
            name: "John".to_string(),
            email: "john@example.com".to_string(),
            visits: 3,
        })
        .await?;
    println!("stored john under key {}", generated.key);

    // Read it back
    let current = users.get::<User>("jane").await?;
    println!("read jane: {:?} (version {})", current.value, current.version_reference);

    // Compare-and-swap update: fails if someone else changed jane in between
    let mut updated = current.value.clone();
    updated.visits += 1;
    let meta = users
        .update("jane", &updated, Some(&current.version_reference))
        .await?;
    println!("updated jane, new version {}", meta.version_reference);

    // Partial updates
    users
        .merge("jane", &serde_json::json!({"email": "jane@example.org"}), None)
        .await?;
    users
        .patch("jane", &[PatchOperation::inc("/visits", Some(10))], None)
        .await?;

    // Stale versions are rejected
    match users
        .update("jane", &updated, Some(&current.version_reference))
        .await
    {
        Err(e) if e.code == ErrorCode::PreconditionFailed => println!("stale update rejected"),
        other => return Err(format!("expected a precondition failure, got {:?}", other).into()),
    }

    // List all items, page by page
    let mut page = users.list::<User>(10).await?;
    loop {
        for item in page.results.iter() {
            println!("list: {} -> {:?}", item.path.key, item.value);
        }
        match users.next_list_page(&page).await? {
            Some(p) => page = p,
            None => break,
        }
    }

    // Search; newly written items may take a moment to be indexed
    tokio::time::sleep(Duration::from_secs(2)).await;
    let found = users
        .search_with_options::<User>("value.name:Jane", &SearchOptions::new().limit(5))
        .await?;
    println!("search found {} of {} items", found.count, found.total_count);

    // Link jane to john
    users
        .add_link("jane", "friend", &GraphNode::new(users.name(), &generated.key))
        .await?;
    let friends = users
        .get_links::<User>("jane", "friend", &Default::default())
        .await?;
    println!("jane has {} friend(s)", friends.count);

    // Revision history
    let history = users
        .history::<User>("jane", &HistoryOptions::new().values(true))
        .await?;
    for item in history.results.iter() {
        println!(
            "history: ref={} at {:?}: {:?}",
            item.path.version_reference,
            item.path.reftime(),
            item.value
        );
    }

    // Delete one item, then the whole collection
    users.delete(&generated.key, &DeleteOptions::default()).await?;
    client.delete_collection(users.name()).await?;
    info!("done");
    Ok(())
}
