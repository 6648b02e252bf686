// ABOUTME: In-memory recipe collection kept consistent with the remote store
// ABOUTME: Mutations apply only after the corresponding remote operation succeeds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cookbook Client Contributors

//! # Collection State Controller
//!
//! [`RecipeCollection`] exclusively owns the ordered recipe list the
//! presentation layer renders from. Order is most-recently-created-first
//! for entries added locally, otherwise the load order of the last
//! successful fetch.
//!
//! There is no optimistic update and no rollback path: every mutation
//! happens after the matching remote call has already succeeded, so a
//! failure short-circuits before any local change.

use tracing::debug;

use crate::client::{ListParams, RecipeClient};
use crate::errors::RecipeResult;
use crate::models::Recipe;

/// Exclusively owned, ordered recipe collection
#[derive(Debug, Default)]
pub struct RecipeCollection {
    items: Vec<Recipe>,
}

impl RecipeCollection {
    /// Create an empty collection (pre-load state)
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Replace the collection wholesale with the store's current contents.
    ///
    /// # Errors
    ///
    /// On failure the collection is left exactly as it was; no partial
    /// merge is attempted and the error propagates to the caller.
    pub async fn load(&mut self, client: &RecipeClient) -> RecipeResult<()> {
        self.load_with(client, ListParams::default()).await
    }

    /// [`Self::load`] with an explicit pagination window.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::load`].
    pub async fn load_with(
        &mut self,
        client: &RecipeClient,
        params: ListParams,
    ) -> RecipeResult<()> {
        let fetched = client.list_recipes(params).await?;
        debug!("Collection reloaded with {} recipes", fetched.len());
        self.items = fetched;
        Ok(())
    }

    /// Prepend a canonical, server-confirmed recipe.
    ///
    /// Never called with a draft: creation hands the store's returned
    /// record here, so the entry always carries its assigned id.
    pub fn add(&mut self, recipe: Recipe) {
        debug!("Collection add: recipe {}", recipe.id);
        self.items.insert(0, recipe);
    }

    /// Substitute the entry with a matching id, preserving its position.
    ///
    /// A missing id is a no-op; under correct sequencing it cannot occur.
    pub fn replace(&mut self, id: i64, recipe: Recipe) {
        if let Some(slot) = self.items.iter_mut().find(|r| r.id == id) {
            debug!("Collection replace: recipe {id}");
            *slot = recipe;
        }
    }

    /// Remove the entry with a matching id, if present
    pub fn remove(&mut self, id: i64) {
        let before = self.items.len();
        self.items.retain(|r| r.id != id);
        if self.items.len() < before {
            debug!("Collection remove: recipe {id}");
        }
    }

    /// Case-insensitive substring search on titles.
    ///
    /// Pure and recomputed on every call: does not mutate the collection,
    /// preserves relative order, and an empty term returns every entry.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&Recipe> {
        let needle = term.to_lowercase();
        self.items
            .iter()
            .filter(|r| needle.is_empty() || r.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Read-only view of the full collection in display order
    #[must_use]
    pub fn items(&self) -> &[Recipe] {
        &self.items
    }

    /// Look up a recipe by id
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&Recipe> {
        self.items.iter().find(|r| r.id == id)
    }

    /// Number of recipes currently held
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
