// ABOUTME: Environment-based configuration for the recipe catalog client
// ABOUTME: Resolves the base endpoint and HTTP timeouts once at process start
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cookbook Client Contributors

//! Environment-based configuration, resolved once at startup.
//!
//! | variable | default |
//! |---|---|
//! | `COOKBOOK_API_URL` | `http://localhost:8000/api/v1` |
//! | `COOKBOOK_HTTP_TIMEOUT_SECS` | `30` |
//! | `COOKBOOK_HTTP_CONNECT_TIMEOUT_SECS` | `10` |

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use tracing::{info, warn};
use url::Url;

/// Default base endpoint of the recipe store (local development server)
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Client configuration, read from the environment once at startup
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base endpoint of the recipe store, without a trailing slash
    pub base_url: Url,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Never fails: missing or malformed values fall back to the documented
    /// defaults with a logged warning, so the client always starts.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = match env::var("COOKBOOK_API_URL") {
            Ok(raw) => match Url::parse(raw.trim_end_matches('/')) {
                Ok(url) => url,
                Err(e) => {
                    warn!("Invalid COOKBOOK_API_URL {raw:?}: {e}, using default");
                    default_base_url()
                }
            },
            Err(_) => {
                info!("COOKBOOK_API_URL not set, using default: {DEFAULT_API_URL}");
                default_base_url()
            }
        };

        Self {
            base_url,
            timeout_secs: parse_env_or("COOKBOOK_HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
            connect_timeout_secs: parse_env_or(
                "COOKBOOK_HTTP_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            ),
        }
    }
}

// The constant is a valid URL; parsing it cannot fail.
#[allow(clippy::expect_used)]
fn default_base_url() -> Url {
    Url::parse(DEFAULT_API_URL).expect("default API URL is valid")
}

fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display + Copy,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default {default}");
            default
        }),
        Err(_) => default,
    }
}
