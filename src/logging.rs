// ABOUTME: Logging configuration and structured logging setup for the client
// ABOUTME: Configures log level filtering and output format from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cookbook Client Contributors

//! Tracing subscriber setup for the CLI and for anyone embedding the
//! library who wants the same defaults. `RUST_LOG` controls filtering;
//! `LOG_FORMAT=compact` switches away from the pretty developer format.

use std::env;

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Pretty format for development
    Pretty,
    /// Compact single-line format
    Compact,
}

impl LogFormat {
    /// Read the format from `LOG_FORMAT`, defaulting to pretty
    #[must_use]
    pub fn from_env() -> Self {
        match env::var("LOG_FORMAT").as_deref() {
            Ok("compact") => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// Filtering comes from `RUST_LOG`, falling back to `info` for this crate
/// and `warn` for dependencies (reqwest internals are noisy at info).
///
/// # Errors
///
/// Returns an error if a subscriber is already installed or `RUST_LOG`
/// contains an invalid directive.
pub fn init_logging() -> Result<()> {
    let filter = match env::var("RUST_LOG") {
        Ok(directives) => EnvFilter::try_new(directives)?,
        Err(_) => EnvFilter::try_new("warn,cookbook_client=info,cookbook_cli=info")?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    match LogFormat::from_env() {
        LogFormat::Pretty => registry.with(fmt::layer().with_target(false)).try_init()?,
        LogFormat::Compact => registry.with(fmt::layer().compact()).try_init()?,
    }

    Ok(())
}
