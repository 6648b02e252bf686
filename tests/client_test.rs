// ABOUTME: End-to-end tests for the recipe repository client
// ABOUTME: Exercises all five operations and error mapping against a fake store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cookbook Client Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use cookbook_client::client::ListParams;
use cookbook_client::errors::RecipeError;
use cookbook_client::models::{RecipeDraft, RecipeUpdate};

#[tokio::test]
async fn test_list_empty_store_returns_empty_vec() {
    let (client, _store) = common::spawn_fake_store().await;
    let recipes = client.list_recipes(ListParams::default()).await.unwrap();
    assert!(recipes.is_empty());
}

#[tokio::test]
async fn test_list_respects_pagination_window() {
    let (client, store) = common::spawn_fake_store().await;
    for i in 1..=5 {
        store.insert(common::draft(&format!("Recipe {i}")));
    }

    let page = client
        .list_recipes(ListParams {
            skip: Some(1),
            limit: Some(2),
        })
        .await
        .unwrap();

    let titles: Vec<&str> = page.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Recipe 2", "Recipe 3"]);
}

#[tokio::test]
async fn test_create_returns_canonical_record() {
    let (client, store) = common::spawn_fake_store().await;

    let draft = RecipeDraft {
        title: "Ratatouille".into(),
        description: Some("Provencal classic".into()),
        ingredients: vec!["Aubergine".into(), "Courgette".into(), "Tomato".into()],
        instructions: "Slice.\nLayer.\nBake.".into(),
        prep_time: Some(30),
        cook_time: Some(45),
        servings: Some(4),
    };
    let recipe = client.create_recipe(&draft).await.unwrap();

    assert!(recipe.id > 0);
    assert_eq!(recipe.title, "Ratatouille");
    assert_eq!(recipe.ingredients.len(), 3);
    assert!(recipe.created_at.is_some());
    assert_eq!(store.recipes().len(), 1);
}

#[tokio::test]
async fn test_get_round_trips_created_recipe() {
    let (client, store) = common::spawn_fake_store().await;
    let created = store.insert(common::draft("Gazpacho"));

    let fetched = client.get_recipe(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let (client, _store) = common::spawn_fake_store().await;

    let err = client.get_recipe(12345).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(
        err,
        RecipeError::NotFound {
            operation: "get_recipe",
            id: 12345,
        }
    ));
}

#[tokio::test]
async fn test_update_patches_only_sent_fields() {
    let (client, _store) = common::spawn_fake_store().await;
    let created = client
        .create_recipe(&RecipeDraft {
            prep_time: Some(10),
            ..common::draft("Frittata")
        })
        .await
        .unwrap();

    let updated = client
        .update_recipe(
            created.id,
            &RecipeUpdate {
                title: Some("Herb Frittata".into()),
                ..RecipeUpdate::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Herb Frittata");
    // Untouched fields keep their stored values.
    assert_eq!(updated.prep_time, Some(10));
    assert_eq!(updated.instructions, created.instructions);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let (client, _store) = common::spawn_fake_store().await;

    let err = client
        .update_recipe(
            777,
            &RecipeUpdate {
                title: Some("Nope".into()),
                ..RecipeUpdate::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RecipeError::NotFound {
            operation: "update_recipe",
            id: 777,
        }
    ));
}

#[tokio::test]
async fn test_server_side_rejection_carries_detail() {
    let (client, store) = common::spawn_fake_store().await;

    // Bypass client-side validation to exercise the server's rejection.
    let err = client
        .create_recipe(&RecipeDraft {
            title: String::new(),
            instructions: "Cook.".into(),
            ..RecipeDraft::default()
        })
        .await
        .unwrap_err();

    match err {
        RecipeError::Rejected {
            operation,
            status,
            detail,
        } => {
            assert_eq!(operation, "create_recipe");
            assert_eq!(status, 422);
            assert_eq!(detail.unwrap(), "title must not be empty");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
    assert!(store.recipes().is_empty());
}

#[tokio::test]
async fn test_delete_removes_recipe() {
    let (client, store) = common::spawn_fake_store().await;
    let created = store.insert(common::draft("Crumble"));

    client.delete_recipe(created.id).await.unwrap();

    assert!(store.recipes().is_empty());
    assert!(client.get_recipe(created.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_delete_unknown_id_reports_not_found() {
    let (client, _store) = common::spawn_fake_store().await;

    let err = client.delete_recipe(31).await.unwrap_err();
    assert!(matches!(
        err,
        RecipeError::NotFound {
            operation: "delete_recipe",
            id: 31,
        }
    ));
}

#[tokio::test]
async fn test_server_error_maps_to_rejected_with_status() {
    let (client, store) = common::spawn_fake_store().await;
    store.fail_with(500);

    let err = client.list_recipes(ListParams::default()).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.user_message(), "Error 500: forced failure");
}

#[tokio::test]
async fn test_unreachable_store_maps_to_transport_error() {
    // Port 9 (discard) refuses connections on loopback.
    let client = common::client_for("http://127.0.0.1:9/api/v1");

    let err = client.list_recipes(ListParams::default()).await.unwrap_err();
    assert!(matches!(
        err,
        RecipeError::Transport {
            operation: "list_recipes",
            ..
        }
    ));
    assert_eq!(err.status(), None);
    assert_eq!(
        err.user_message(),
        "Could not reach the recipe server. Please try again."
    );
}
