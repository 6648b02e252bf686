// ABOUTME: Command implementations for cookbook-cli
// ABOUTME: Drives the collection and form workflow and renders results as text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cookbook Client Contributors

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, Result};
use cookbook_client::client::{ListParams, RecipeClient};
use cookbook_client::collection::RecipeCollection;
use cookbook_client::errors::RecipeError;
use cookbook_client::models::Recipe;
use cookbook_client::workflow::RecipeForm;

/// Raw field values for `add`, passed through form validation untouched
pub struct AddArgs {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: String,
}

/// Field overrides for `edit`; `None` keeps the current value
pub struct EditArgs {
    pub title: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<String>,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub servings: Option<String>,
}

/// List recipes, applying the local search filter when a term is given
pub async fn list(
    client: &RecipeClient,
    search: Option<&str>,
    skip: Option<u32>,
    limit: Option<u32>,
) -> Result<()> {
    let mut collection = RecipeCollection::new();
    collection
        .load_with(client, ListParams { skip, limit })
        .await
        .map_err(friendly)?;

    let term = search.unwrap_or("");
    let matches = collection.search(term);

    if matches.is_empty() {
        if term.is_empty() {
            println!("No recipes found. Add one with `cookbook-cli add`.");
        } else {
            println!("No recipes match {term:?}.");
        }
        return Ok(());
    }

    for recipe in matches {
        println!("{}", summary_line(recipe));
    }
    Ok(())
}

/// Show one recipe in full
pub async fn show(client: &RecipeClient, id: i64) -> Result<()> {
    let recipe = client.get_recipe(id).await.map_err(friendly)?;

    println!("#{} {}", recipe.id, recipe.title);
    if let Some(description) = &recipe.description {
        println!("{description}");
    }
    println!();
    print_optional_minutes("Prep time", recipe.prep_time);
    print_optional_minutes("Cook time", recipe.cook_time);
    if let Some(servings) = recipe.servings {
        println!("Servings:  {servings}");
    }
    if !recipe.ingredients.is_empty() {
        println!("\nIngredients:");
        for line in &recipe.ingredients {
            println!("  - {line}");
        }
    }
    println!("\nInstructions:");
    for step in recipe.instructions.lines() {
        println!("  {step}");
    }
    Ok(())
}

/// Create a recipe from the given fields
pub async fn add(client: &RecipeClient, args: AddArgs) -> Result<()> {
    let mut collection = RecipeCollection::new();
    let mut form = RecipeForm::new();
    form.title = args.title;
    form.description = args.description;
    form.ingredients_text = args.ingredients.join("\n");
    form.instructions = args.instructions;
    form.prep_time_text = args.prep_time;
    form.cook_time_text = args.cook_time;
    form.servings_text = args.servings;

    let recipe = form
        .submit_create(client, &mut collection)
        .await
        .map_err(friendly)?;
    println!("Recipe {:?} created with id {}.", recipe.title, recipe.id);
    Ok(())
}

/// Edit an existing recipe; unset flags keep the stored values
pub async fn edit(client: &RecipeClient, id: i64, args: EditArgs) -> Result<()> {
    let current = client.get_recipe(id).await.map_err(friendly)?;

    let mut collection = RecipeCollection::new();
    collection.add(current.clone());

    let mut form = RecipeForm::for_recipe(&current);
    if let Some(title) = args.title {
        form.title = title;
    }
    if let Some(description) = args.description {
        form.description = description;
    }
    if let Some(ingredients) = args.ingredients {
        form.ingredients_text = ingredients.join("\n");
    }
    if let Some(instructions) = args.instructions {
        form.instructions = instructions;
    }
    if let Some(prep_time) = args.prep_time {
        form.prep_time_text = prep_time;
    }
    if let Some(cook_time) = args.cook_time {
        form.cook_time_text = cook_time;
    }
    if let Some(servings) = args.servings {
        form.servings_text = servings;
    }

    let recipe = form
        .submit_update(client, &mut collection, id)
        .await
        .map_err(friendly)?;
    println!("Recipe {} updated.", recipe.id);
    Ok(())
}

/// Delete a recipe after confirmation.
///
/// A store that reports the id as already absent still counts as success:
/// from the caller's perspective the recipe is gone either way.
pub async fn delete(client: &RecipeClient, id: i64, yes: bool) -> Result<()> {
    if !yes && !confirm(&format!("Delete recipe {id}? This cannot be undone."))? {
        println!("Aborted.");
        return Ok(());
    }

    match client.delete_recipe(id).await {
        Ok(()) => {
            println!("Recipe {id} deleted.");
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            println!("Recipe {id} was already gone.");
            Ok(())
        }
        Err(e) => Err(friendly(e)),
    }
}

fn summary_line(recipe: &Recipe) -> String {
    let prep = recipe
        .prep_time
        .map_or_else(|| "N/A".to_owned(), |m| format!("{m} min"));
    let description = recipe.description.as_deref().unwrap_or("No description");
    format!("#{:<4} {:<30} {:>8}  {}", recipe.id, recipe.title, prep, description)
}

fn print_optional_minutes(label: &str, minutes: Option<u32>) {
    let text = minutes.map_or_else(|| "N/A".to_owned(), |m| format!("{m} min"));
    println!("{label}: {text}");
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn friendly(error: RecipeError) -> anyhow::Error {
    anyhow!(error.user_message())
}
