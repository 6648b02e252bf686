// ABOUTME: Error taxonomy for recipe catalog operations
// ABOUTME: Tagged variants let callers branch on NotFound vs Rejected vs Transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cookbook Client Contributors

//! # Recipe Error Types
//!
//! Every failure a repository operation can produce is a distinct variant,
//! annotated with the operation name for diagnostics. Client-side validation
//! failures never reach the network; everything else wraps the HTTP outcome.

use serde_json::Value;

/// Result alias used throughout the crate
pub type RecipeResult<T> = Result<T, RecipeError>;

/// Common error type for recipe catalog operations
#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    /// A required field failed client-side validation before submission
    #[error("{field} is invalid: {reason}")]
    Validation {
        /// Name of the offending field
        field: &'static str,
        /// Reason the field was rejected
        reason: String,
    },

    /// The remote store has no recipe with the requested id
    #[error("{operation}: recipe {id} not found")]
    NotFound {
        /// Repository operation that failed
        operation: &'static str,
        /// Recipe id that was requested
        id: i64,
    },

    /// The remote store rejected the request with a non-404 error status
    #[error("{operation}: server rejected request with status {status}")]
    Rejected {
        /// Repository operation that failed
        operation: &'static str,
        /// HTTP status code returned by the store
        status: u16,
        /// Machine-readable detail from the error body, when present
        detail: Option<Value>,
    },

    /// No usable response was received (connection, timeout, body read)
    #[error("{operation}: request failed before a response was received")]
    Transport {
        /// Repository operation that failed
        operation: &'static str,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// The store answered with a success status but an undecodable body
    #[error("{operation}: response body could not be decoded")]
    Decode {
        /// Repository operation that failed
        operation: &'static str,
        /// Underlying decode error
        #[source]
        source: reqwest::Error,
    },
}

impl RecipeError {
    /// Whether this error reports a missing remote resource.
    ///
    /// Delete treats remote absence as already-successful, so callers use
    /// this to decide whether local removal should still proceed.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// HTTP status carried by this error, if one was received
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Rejected { status, .. } => Some(*status),
            Self::Validation { .. } | Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }

    /// Human-readable message suitable for direct display in the UI.
    ///
    /// Surfaces the server-provided `detail` verbatim when present, falling
    /// back to a generic message otherwise. Transport failures suggest a
    /// retry since no request reached the store.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { field, reason } => format!("{field}: {reason}"),
            Self::NotFound { id, .. } => format!("Recipe {id} was not found on the server"),
            Self::Rejected { status, detail, .. } => match detail {
                Some(Value::String(text)) => format!("Error {status}: {text}"),
                Some(other) => format!("Error {status}: {other}"),
                None => format!("Error {status}: the server rejected the request"),
            },
            Self::Transport { .. } => {
                "Could not reach the recipe server. Please try again.".into()
            }
            Self::Decode { .. } => "The server returned an unreadable response.".into(),
        }
    }
}
