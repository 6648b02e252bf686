// ABOUTME: Typed repository operations against the recipe store REST API
// ABOUTME: One method per endpoint, each a thin mapping onto the transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cookbook Client Contributors

//! # Recipe Repository Client
//!
//! Five operations, each one round trip, no client-side caching:
//!
//! | operation | method | path |
//! |---|---|---|
//! | [`RecipeClient::list_recipes`] | GET | `/recipes/` |
//! | [`RecipeClient::get_recipe`] | GET | `/recipes/{id}` |
//! | [`RecipeClient::create_recipe`] | POST | `/recipes/` |
//! | [`RecipeClient::update_recipe`] | PATCH | `/recipes/{id}` |
//! | [`RecipeClient::delete_recipe`] | DELETE | `/recipes/{id}` |

use reqwest::Method;
use tracing::info;

use crate::config::ClientConfig;
use crate::errors::{RecipeError, RecipeResult};
use crate::models::{Recipe, RecipeDraft, RecipeUpdate};
use crate::transport::ApiTransport;

/// Optional pagination window for listing recipes.
///
/// The store defaults to `skip = 0`, `limit = 20` when the parameters are
/// omitted; `None` fields are left out of the query string entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Number of leading records to skip
    pub skip: Option<u32>,
    /// Maximum number of records to return
    pub limit: Option<u32>,
}

impl ListParams {
    fn to_query(self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(skip) = self.skip {
            query.push(("skip", skip.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        query
    }
}

/// Client for the recipe store, bound to one base endpoint
#[derive(Debug, Clone)]
pub struct RecipeClient {
    transport: ApiTransport,
}

impl RecipeClient {
    /// Create a client from the resolved configuration
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            transport: ApiTransport::new(config),
        }
    }

    /// Fetch recipes from the store.
    ///
    /// An empty collection is a valid, non-error result.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::Transport`] when no response arrives,
    /// [`RecipeError::Rejected`] on an error status, or
    /// [`RecipeError::Decode`] when the body is not a recipe array.
    pub async fn list_recipes(&self, params: ListParams) -> RecipeResult<Vec<Recipe>> {
        let recipes: Vec<Recipe> = self
            .transport
            .request(
                "list_recipes",
                Method::GET,
                "/recipes/",
                &params.to_query(),
                Option::<&()>::None,
            )
            .await?;
        info!("Fetched {} recipes", recipes.len());
        Ok(recipes)
    }

    /// Fetch a single recipe by id.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::NotFound`] when the store has no such id, in
    /// addition to the transport-level failures.
    pub async fn get_recipe(&self, id: i64) -> RecipeResult<Recipe> {
        self.transport
            .request(
                "get_recipe",
                Method::GET,
                &format!("/recipes/{id}"),
                &[],
                Option::<&()>::None,
            )
            .await
            .map_err(|e| mark_not_found(e, id))
    }

    /// Submit a draft for creation and return the canonical record.
    ///
    /// The store assigns the id; the caller must hand the returned record,
    /// not the draft, to the collection.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::Rejected`] when the store refuses the payload
    /// (HTTP 422 carries the validation detail), plus transport failures.
    pub async fn create_recipe(&self, draft: &RecipeDraft) -> RecipeResult<Recipe> {
        let recipe: Recipe = self
            .transport
            .request("create_recipe", Method::POST, "/recipes/", &[], Some(draft))
            .await?;
        info!("Created recipe {} ({:?})", recipe.id, recipe.title);
        Ok(recipe)
    }

    /// Patch a recipe with any subset of mutable fields and return the full
    /// canonical record.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::NotFound`] for an unknown id or
    /// [`RecipeError::Rejected`] for a refused payload, plus transport
    /// failures.
    pub async fn update_recipe(&self, id: i64, update: &RecipeUpdate) -> RecipeResult<Recipe> {
        let recipe: Recipe = self
            .transport
            .request(
                "update_recipe",
                Method::PATCH,
                &format!("/recipes/{id}"),
                &[],
                Some(update),
            )
            .await
            .map_err(|e| mark_not_found(e, id))?;
        info!("Updated recipe {}", recipe.id);
        Ok(recipe)
    }

    /// Delete a recipe by id.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::NotFound`] when the store no longer has the
    /// id; callers treating deletion as idempotent can check
    /// [`RecipeError::is_not_found`] and proceed.
    pub async fn delete_recipe(&self, id: i64) -> RecipeResult<()> {
        self.transport
            .request_empty(
                "delete_recipe",
                Method::DELETE,
                &format!("/recipes/{id}"),
                Option::<&()>::None,
            )
            .await
            .map_err(|e| mark_not_found(e, id))?;
        info!("Deleted recipe {id}");
        Ok(())
    }
}

/// Promote an HTTP 404 rejection to the dedicated not-found variant.
///
/// The transport cannot know which resource a path refers to, so the
/// id-bearing operations reattach the id here.
fn mark_not_found(error: RecipeError, id: i64) -> RecipeError {
    match error {
        RecipeError::Rejected {
            operation,
            status: 404,
            ..
        } => RecipeError::NotFound { operation, id },
        other => other,
    }
}
