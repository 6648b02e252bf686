// ABOUTME: Form mutation workflow for creating and editing recipes
// ABOUTME: Shapes free-text input, validates required fields, drives submission
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cookbook Client Contributors

//! # Form Mutation Workflow
//!
//! [`RecipeForm`] holds the raw text a user entered and drives it through
//! shaping, validation, and a create-or-update round trip:
//!
//! ```text
//! Closed -> Open(editing draft) -> Submitting -> Closed   (success)
//!                              \-> Open(error shown)      (failure)
//! ```
//!
//! Validation failures never issue a network request. A failed submission
//! retains every entered value unchanged, so reopening the form shows the
//! user's input intact.

use tracing::warn;

use crate::client::RecipeClient;
use crate::collection::RecipeCollection;
use crate::errors::{RecipeError, RecipeResult};
use crate::models::{Recipe, RecipeDraft, RecipeUpdate};

/// Lifecycle phase of a single form instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Editable; the user may change fields and submit
    #[default]
    Open,
    /// A submission is in flight; re-submission is refused
    Submitting,
    /// A submission succeeded and the draft was cleared
    Closed,
}

/// Raw user-entered recipe fields plus submission state
#[derive(Debug, Clone, Default)]
pub struct RecipeForm {
    /// Recipe title
    pub title: String,
    /// Free-text description
    pub description: String,
    /// Newline-delimited ingredient lines
    pub ingredients_text: String,
    /// Preparation steps
    pub instructions: String,
    /// Preparation time in minutes, as entered
    pub prep_time_text: String,
    /// Cooking time in minutes, as entered
    pub cook_time_text: String,
    /// Serving count, as entered
    pub servings_text: String,
    phase: FormPhase,
}

impl RecipeForm {
    /// Open an empty form (add flow)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a form prefilled from an existing recipe (edit flow)
    #[must_use]
    pub fn for_recipe(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            description: recipe.description.clone().unwrap_or_default(),
            ingredients_text: recipe.ingredients.join("\n"),
            instructions: recipe.instructions.clone(),
            prep_time_text: recipe.prep_time.map_or_else(String::new, |m| m.to_string()),
            cook_time_text: recipe.cook_time.map_or_else(String::new, |m| m.to_string()),
            servings_text: recipe.servings.map_or_else(String::new, |s| s.to_string()),
            phase: FormPhase::Open,
        }
    }

    /// Current lifecycle phase
    #[must_use]
    pub const fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Shape the entered fields into a creation draft.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::Validation`] for an empty title or
    /// instructions, or an unparseable numeric field. Nothing reaches the
    /// network on a validation failure.
    pub fn build_draft(&self) -> RecipeResult<RecipeDraft> {
        let title = require_text("title", &self.title)?;
        let instructions = require_text("instructions", &self.instructions)?;
        let description = self.description.trim();

        Ok(RecipeDraft {
            title,
            description: (!description.is_empty()).then(|| description.to_owned()),
            ingredients: split_ingredients(&self.ingredients_text),
            instructions,
            prep_time: parse_minutes("prep_time", &self.prep_time_text)?,
            cook_time: parse_minutes("cook_time", &self.cook_time_text)?,
            servings: parse_servings(&self.servings_text)?,
        })
    }

    /// Shape the entered fields into an update payload.
    ///
    /// Mirrors the edit dialog: every mutable field is sent, not a diff, so
    /// clearing a field on the form clears it on the store.
    ///
    /// # Errors
    ///
    /// Same validation rules as [`Self::build_draft`].
    pub fn build_update(&self) -> RecipeResult<RecipeUpdate> {
        let draft = self.build_draft()?;
        Ok(RecipeUpdate {
            title: Some(draft.title),
            description: draft.description,
            ingredients: Some(draft.ingredients),
            instructions: Some(draft.instructions),
            prep_time: draft.prep_time,
            cook_time: draft.cook_time,
            servings: draft.servings,
        })
    }

    /// Submit the form as a new recipe and prepend the canonical result.
    ///
    /// On success the entered values are cleared and the form closes. On
    /// failure the values and the collection are left untouched and the
    /// form stays open with the error surfaced to the caller.
    ///
    /// # Errors
    ///
    /// Client-side [`RecipeError::Validation`] before any request, or any
    /// repository failure afterwards.
    pub async fn submit_create(
        &mut self,
        client: &RecipeClient,
        collection: &mut RecipeCollection,
    ) -> RecipeResult<Recipe> {
        self.ensure_open()?;
        let draft = self.build_draft()?;

        self.phase = FormPhase::Submitting;
        match client.create_recipe(&draft).await {
            Ok(recipe) => {
                collection.add(recipe.clone());
                self.clear();
                Ok(recipe)
            }
            Err(e) => {
                warn!("Recipe creation failed: {e}");
                self.phase = FormPhase::Open;
                Err(e)
            }
        }
    }

    /// Submit the form as an update to recipe `id` and replace the local
    /// entry with the canonical result.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::submit_create`], plus
    /// [`RecipeError::NotFound`] when the store no longer has the id.
    pub async fn submit_update(
        &mut self,
        client: &RecipeClient,
        collection: &mut RecipeCollection,
        id: i64,
    ) -> RecipeResult<Recipe> {
        self.ensure_open()?;
        let update = self.build_update()?;

        self.phase = FormPhase::Submitting;
        match client.update_recipe(id, &update).await {
            Ok(recipe) => {
                collection.replace(id, recipe.clone());
                self.clear();
                Ok(recipe)
            }
            Err(e) => {
                warn!("Recipe update failed: {e}");
                self.phase = FormPhase::Open;
                Err(e)
            }
        }
    }

    /// Refuse submission unless the form is open for editing.
    ///
    /// `&mut self` already rules out interleaved submissions on one form;
    /// this guards the remaining misuse of submitting a closed form.
    fn ensure_open(&self) -> RecipeResult<()> {
        match self.phase {
            FormPhase::Open => Ok(()),
            FormPhase::Submitting | FormPhase::Closed => Err(RecipeError::Validation {
                field: "form",
                reason: "no editable draft is open".into(),
            }),
        }
    }

    fn clear(&mut self) {
        *self = Self {
            phase: FormPhase::Closed,
            ..Self::default()
        };
    }
}

/// Split free text into shaped ingredient lines.
///
/// Lines are trimmed, blank lines dropped, order preserved.
#[must_use]
pub fn split_ingredients(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

fn require_text(field: &'static str, raw: &str) -> RecipeResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RecipeError::Validation {
            field,
            reason: "must not be empty".into(),
        });
    }
    Ok(trimmed.to_owned())
}

/// Parse an optional minutes field; empty text means absent, not zero
fn parse_minutes(field: &'static str, raw: &str) -> RecipeResult<Option<u32>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| RecipeError::Validation {
            field,
            reason: format!("{trimmed:?} is not a non-negative number of minutes"),
        })
}

fn parse_servings(raw: &str) -> RecipeResult<Option<u32>> {
    match parse_minutes("servings", raw)? {
        Some(0) => Err(RecipeError::Validation {
            field: "servings",
            reason: "must be at least 1".into(),
        }),
        other => Ok(other),
    }
}
