// ABOUTME: Recipe data contracts shared between the client and the remote store
// ABOUTME: Defines canonical Recipe, creation draft, and partial update payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cookbook Client Contributors

//! # Recipe Data Model
//!
//! Three shapes of one entity:
//! - [`Recipe`] — the canonical record, always carrying a store-assigned id
//! - [`RecipeDraft`] — a recipe without an id, submitted for creation
//! - [`RecipeUpdate`] — a partial payload where omitted fields stay unchanged

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A canonical recipe as returned by the remote store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Store-assigned identifier, immutable once created
    pub id: i64,
    /// Recipe title, never empty in a persisted record
    pub title: String,
    /// Optional free-text description
    #[serde(default)]
    pub description: Option<String>,
    /// Ordered ingredient lines; order is display order
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Preparation steps as newline-delimited free text, never empty
    pub instructions: String,
    /// Preparation time in minutes; absent means unknown, not zero
    #[serde(default)]
    pub prep_time: Option<u32>,
    /// Cooking time in minutes
    #[serde(default)]
    pub cook_time: Option<u32>,
    /// Number of servings, at least 1 when present
    #[serde(default)]
    pub servings: Option<u32>,
    /// Creation timestamp set by the store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-modification timestamp set by the store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A recipe-shaped payload without a server-assigned id, submitted for creation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDraft {
    /// Recipe title, validated non-empty before submission
    pub title: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Ordered ingredient lines, already shaped (trimmed, no empties)
    pub ingredients: Vec<String>,
    /// Preparation steps, validated non-empty before submission
    pub instructions: String,
    /// Preparation time in minutes
    pub prep_time: Option<u32>,
    /// Cooking time in minutes
    pub cook_time: Option<u32>,
    /// Number of servings
    pub servings: Option<u32>,
}

/// Partial update payload: omitted fields are left unchanged by the store.
///
/// Every field is optional and skipped during serialization when `None`, so
/// the PATCH body contains exactly the fields the caller intends to change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeUpdate {
    /// New title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description; `Some(None)` is not representable, send the full
    /// value to clear it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replacement ingredient list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    /// New instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// New preparation time in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<u32>,
    /// New cooking time in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<u32>,
    /// New serving count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
}

impl RecipeUpdate {
    /// Whether this update would change nothing on the store
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.ingredients.is_none()
            && self.instructions.is_none()
            && self.prep_time.is_none()
            && self.cook_time.is_none()
            && self.servings.is_none()
    }
}
