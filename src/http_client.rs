// ABOUTME: Shared HTTP client with connection pooling for recipe store calls
// ABOUTME: Built once per process from the resolved client configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cookbook Client Contributors

use std::sync::OnceLock;
use std::time::Duration;

use reqwest::{Client, ClientBuilder};

use crate::config::ClientConfig;

/// Global shared HTTP client, constructed on first use
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get the shared HTTP client for recipe store calls.
///
/// The client uses connection pooling and the timeouts carried by `config`.
/// The first caller's configuration wins; later calls return the same
/// client, which matches the one-resolution-per-process rule for the base
/// endpoint.
pub fn shared_client(config: &ClientConfig) -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}
