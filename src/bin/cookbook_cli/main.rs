// ABOUTME: Cookbook CLI - command-line presentation layer for the recipe catalog
// ABOUTME: Lists, shows, creates, edits, deletes, and searches recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cookbook Client Contributors
//!
//! Usage:
//! ```bash
//! # List every recipe (optionally filtered)
//! cookbook-cli list
//! cookbook-cli list --search tarte
//!
//! # Show one recipe in full
//! cookbook-cli show 3
//!
//! # Create a recipe
//! cookbook-cli add --title "Pancakes" --instructions $'Whisk.\nFry.' \
//!     --ingredient Flour --ingredient Milk --ingredient Eggs --prep-time 10
//!
//! # Edit selected fields of a recipe
//! cookbook-cli edit 3 --title "Fluffy Pancakes"
//!
//! # Delete a recipe (asks for confirmation without --yes)
//! cookbook-cli delete 3 --yes
//! ```

mod commands;

use clap::{Parser, Subcommand};
use cookbook_client::client::RecipeClient;
use cookbook_client::config::ClientConfig;
use cookbook_client::logging::init_logging;

#[derive(Parser)]
#[command(
    name = "cookbook-cli",
    about = "Cookbook recipe catalog CLI",
    long_about = "Command-line client for the Cookbook recipe catalog REST API."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List recipes, optionally filtered by a title search term
    List {
        /// Case-insensitive substring to match against titles
        #[arg(long)]
        search: Option<String>,

        /// Number of leading records to skip
        #[arg(long)]
        skip: Option<u32>,

        /// Maximum number of records to fetch
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Search recipes by title (shorthand for `list --search`)
    Search {
        /// Case-insensitive substring to match against titles
        term: String,
    },

    /// Show one recipe in full
    Show {
        /// Recipe id
        id: i64,
    },

    /// Create a new recipe
    Add {
        /// Recipe title (required, must not be blank)
        #[arg(long)]
        title: String,

        /// Optional description
        #[arg(long, default_value = "")]
        description: String,

        /// Ingredient line; repeat the flag to add more, order is kept
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,

        /// Preparation steps (required, must not be blank)
        #[arg(long)]
        instructions: String,

        /// Preparation time in minutes
        #[arg(long, default_value = "")]
        prep_time: String,

        /// Cooking time in minutes
        #[arg(long, default_value = "")]
        cook_time: String,

        /// Number of servings (at least 1)
        #[arg(long, default_value = "")]
        servings: String,
    },

    /// Edit an existing recipe; omitted flags keep their current value
    Edit {
        /// Recipe id
        id: i64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description (pass an empty string to clear it)
        #[arg(long)]
        description: Option<String>,

        /// Replacement ingredient line; repeating the flag replaces the list
        #[arg(long = "ingredient")]
        ingredients: Option<Vec<String>>,

        /// New preparation steps
        #[arg(long)]
        instructions: Option<String>,

        /// New preparation time in minutes (empty string clears it)
        #[arg(long)]
        prep_time: Option<String>,

        /// New cooking time in minutes (empty string clears it)
        #[arg(long)]
        cook_time: Option<String>,

        /// New serving count (empty string clears it)
        #[arg(long)]
        servings: Option<String>,
    },

    /// Delete a recipe
    Delete {
        /// Recipe id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = ClientConfig::from_env();
    let client = RecipeClient::new(&config);

    match Cli::parse().command {
        Command::List {
            search,
            skip,
            limit,
        } => commands::list(&client, search.as_deref(), skip, limit).await,
        Command::Search { term } => commands::list(&client, Some(&term), None, None).await,
        Command::Show { id } => commands::show(&client, id).await,
        Command::Add {
            title,
            description,
            ingredients,
            instructions,
            prep_time,
            cook_time,
            servings,
        } => {
            commands::add(
                &client,
                commands::AddArgs {
                    title,
                    description,
                    ingredients,
                    instructions,
                    prep_time,
                    cook_time,
                    servings,
                },
            )
            .await
        }
        Command::Edit {
            id,
            title,
            description,
            ingredients,
            instructions,
            prep_time,
            cook_time,
            servings,
        } => {
            commands::edit(
                &client,
                id,
                commands::EditArgs {
                    title,
                    description,
                    ingredients,
                    instructions,
                    prep_time,
                    cook_time,
                    servings,
                },
            )
            .await
        }
        Command::Delete { id, yes } => commands::delete(&client, id, yes).await,
    }
}
