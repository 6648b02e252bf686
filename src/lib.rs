// ABOUTME: Main library entry point for the Cookbook recipe catalog client
// ABOUTME: Provides typed REST operations, collection state, and form workflows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cookbook Client Contributors

#![deny(unsafe_code)]

//! # Cookbook Client
//!
//! A client library for the Cookbook recipe catalog REST API. It keeps an
//! in-memory recipe collection consistent with the remote authoritative
//! store across create, read, update, delete, and search operations.
//!
//! ## Architecture
//!
//! The library follows a layered architecture, leaves first:
//! - **Transport**: HTTP round trips against the configured base endpoint
//! - **Client**: typed repository operations over the transport
//! - **Collection**: exclusively owned in-memory recipe state
//! - **Workflow**: draft shaping, validation, and submission state machine
//!
//! The remote store is the single source of truth: local state mutates only
//! after the corresponding remote operation has succeeded, so no rollback
//! path exists.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use cookbook_client::client::RecipeClient;
//! use cookbook_client::collection::RecipeCollection;
//! use cookbook_client::config::ClientConfig;
//! use cookbook_client::errors::RecipeResult;
//!
//! #[tokio::main]
//! async fn main() -> RecipeResult<()> {
//!     let config = ClientConfig::from_env();
//!     let client = RecipeClient::new(&config);
//!
//!     let mut collection = RecipeCollection::new();
//!     collection.load(&client).await?;
//!
//!     for recipe in collection.search("tarte") {
//!         println!("{}: {}", recipe.id, recipe.title);
//!     }
//!     Ok(())
//! }
//! ```

/// Typed repository operations (list, get, create, update, delete)
pub mod client;

/// In-memory recipe collection state and derived search views
pub mod collection;

/// Environment-based client configuration
pub mod config;

/// Error taxonomy shared across all layers
pub mod errors;

/// Shared pooled HTTP client
pub mod http_client;

/// Structured logging setup
pub mod logging;

/// Recipe data contracts (canonical, draft, partial update)
pub mod models;

/// HTTP transport adapter over the configured base endpoint
pub mod transport;

/// Form mutation workflow driving create and edit round trips
pub mod workflow;
