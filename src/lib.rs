//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Orchestrate Rust SDK
//!
//! This is the Rust SDK for the Orchestrate database service. Orchestrate
//! stores JSON items in named collections and exposes them through a REST API
//! offering key/value storage with versioning, full-text and geo search, graph
//! relations between items and per-item revision history.
//!
//! This SDK supplies and uses Rust `async` methods throughout, using the [tokio](https://crates.io/crates/tokio) runtime. There is currently no blocking support.
//!
//! The general flow for an application using Orchestrate is:
//! - Create a [`ClientBuilder`] with all needed parameters
//! - Create a [`Client`] from the [`ClientBuilder`] that will be used throughout the application, across all threads
//! - Get a [`Collection`] from the [`Client`] and call its methods, such as
//!   [`Collection::try_add()`], [`Collection::get()`] or [`Collection::search()`]
//!
//! ## Simple Example
//! The following code creates a [`Client`] from values in the current environment and then reads a single item from a collection.
//! ```no_run
//! use orchestrate_rust_sdk::Client;
//! use serde_json::Value;
//! use std::error::Error;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn Error>> {
//!     let client = Client::builder()
//!         .from_environment()?
//!         .build()?;
//!     let users = client.collection("users")?;
//!     let item = users.get::<Value>("jdoe").await?;
//!     println!("version={} value={}", item.version_reference, item.value);
//!     Ok(())
//! }
//! ```
//!
//! ## Configuring the SDK
//!
//! Every request is authenticated with an API key, sent as the user name of
//! an HTTP Basic `Authorization` header. The key can be given directly with
//! [`ClientBuilder::api_key()`], read from a credentials file with
//! [`ClientBuilder::api_key_from_file()`], or taken from the environment with
//! [`ClientBuilder::from_environment()`].
//!
//! A credentials file uses ini syntax, with one section per profile:
//! ```ini
//! [DEFAULT]
//! api_key=<your-api-key>
//! ```
//!
//! The service endpoint defaults to [`DEFAULT_HOST`]. Use
//! [`ClientBuilder::host()`] to target another data center or a local test server:
//! ```no_run
//! # use orchestrate_rust_sdk::Client;
//! # fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::builder()
//!     .api_key_from_file("~/.orchestrate/config")?
//!     .host("https://api.aws-eu-west-1.orchestrate.io/v0")?
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Items
//!
//! Items are any type implementing serde's `Serialize` (for writes) and
//! `DeserializeOwned` (for reads). [`serde_json::Value`] can be used for
//! untyped access. A value that serializes to JSON `null` is rejected.
//! To change the representation of every item, for example to send
//! camelCase field names, give the builder a [`JsonSerializer`] with a
//! [`JsonConverter`] such as [`CamelCaseConverter`].
//!
//! ## Conditional writes
//!
//! Every successful write returns a [`KvMetadata`] whose `version_reference`
//! identifies the revision it created. Writes that take an optional
//! reference only succeed if the stored revision still matches it, and
//! [`Collection::try_add()`] only succeeds if the key has no value. In both
//! cases a failed condition is reported as [`ErrorCode::PreconditionFailed`]
//! and the stored value is left unchanged:
//! ```no_run
//! # use orchestrate_rust_sdk::{Client, ErrorCode};
//! # use serde_json::json;
//! # async fn run(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
//! let accounts = client.collection("accounts")?;
//! let current = accounts.get::<serde_json::Value>("a1").await?;
//! let updated = json!({"balance": 90});
//! match accounts
//!     .add_or_update("a1", &updated, Some(&current.version_reference))
//!     .await
//! {
//!     Ok(meta) => println!("new version {}", meta.version_reference),
//!     Err(e) if e.code == ErrorCode::PreconditionFailed => println!("lost the race, retry"),
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! All operations return [`OrchestrateError`]. Its `code` is one of a closed set of
//! [`ErrorCode`]s; failures reported by the service also carry the HTTP status
//! and the collection and key the request was made for. Invalid arguments are
//! reported as [`ErrorCode::IllegalArgument`] before any request is sent.
//!
//! ## Logging
//!
//! The SDK logs through the [tracing](https://crates.io/crates/tracing) crate:
//! one `debug` event per request and response, and `trace` events with the
//! full request line and preconditions. The API key is never logged.
//! Install any tracing subscriber to see them, for example:
//! ```no_run
//! tracing_subscriber::fmt()
//!     .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
//!     .init();
//! ```
//!
//! ## Quickstart
//!
//! See `demos/quickstart/main.rs` in the source repository for a complete
//! program that stores, reads, updates, searches and deletes items.


pub(crate) mod client;
pub use crate::client::Client;

pub(crate) mod client_builder;
pub use crate::client_builder::{ClientBuilder, DEFAULT_HOST};

pub(crate) mod collection;
pub use crate::collection::{near_query, Collection};

pub(crate) mod conditional;


pub(crate) mod error;
pub use crate::error::{ErrorCode, OrchestrateError, INVALID_CREDENTIALS_MESSAGE};

pub(crate) mod file_utils;

pub mod options;
pub use crate::options::{
    DeleteOptions, ExclusiveListOptions, HistoryOptions, InclusiveListOptions, LinkOptions,
    SearchOptions,
};

pub(crate) mod response;

pub mod serializer;
pub use crate::serializer::{CamelCaseConverter, JsonConverter, JsonSerializer};


pub mod types;
pub use crate::types::{
    GraphNode, KvMetadata, KvObject, ListItem, ListResults, OrchestratePath, PatchOperation,
    SearchItem, SearchResults,
};

pub(crate) mod url_builder;
