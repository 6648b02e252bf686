// ABOUTME: Shared test utilities for cookbook-client integration tests
// ABOUTME: Runs an in-process fake recipe store speaking the REST contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cookbook Client Contributors
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value
)]
//! Shared test utilities for `cookbook_client`
//!
//! The fake store mirrors the real backend's observable behavior: JSON
//! bodies, `detail` error payloads, 201 on create, 204 on delete, 404 with
//! a detail message for unknown ids, and 422 for rejected payloads.

use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use url::Url;

use cookbook_client::client::RecipeClient;
use cookbook_client::config::ClientConfig;
use cookbook_client::models::{Recipe, RecipeDraft};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .init();
    });
}

/// In-memory recipe store backing the fake REST API
pub struct FakeStore {
    recipes: Mutex<Vec<Recipe>>,
    next_id: AtomicI64,
    requests: AtomicUsize,
    fail_status: Mutex<Option<u16>>,
}

impl FakeStore {
    fn new() -> Self {
        Self {
            recipes: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            requests: AtomicUsize::new(0),
            fail_status: Mutex::new(None),
        }
    }

    /// Recipes currently persisted, in insertion order
    pub fn recipes(&self) -> Vec<Recipe> {
        self.recipes.lock().unwrap().clone()
    }

    /// Seed a recipe directly, bypassing the API
    pub fn insert(&self, draft: RecipeDraft) -> Recipe {
        let recipe = self.materialize(draft);
        self.recipes.lock().unwrap().push(recipe.clone());
        recipe
    }

    /// Number of HTTP requests the store has served
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// Make every subsequent request fail with the given status
    pub fn fail_with(&self, status: u16) {
        *self.fail_status.lock().unwrap() = Some(status);
    }

    /// Stop injecting failures
    pub fn heal(&self) {
        *self.fail_status.lock().unwrap() = None;
    }

    fn materialize(&self, draft: RecipeDraft) -> Recipe {
        let now = Utc::now();
        Recipe {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title: draft.title,
            description: draft.description,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            prep_time: draft.prep_time,
            cook_time: draft.cook_time,
            servings: draft.servings,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    fn forced_failure(&self) -> Option<Response> {
        self.fail_status.lock().unwrap().map(|status| {
            (
                StatusCode::from_u16(status).unwrap(),
                Json(json!({ "detail": "forced failure" })),
            )
                .into_response()
        })
    }
}

type Shared = Arc<FakeStore>;

/// Start the fake store and return a client pointed at it
pub async fn spawn_fake_store() -> (RecipeClient, Shared) {
    init_test_logging();

    let store = Arc::new(FakeStore::new());
    let app = Router::new()
        .route("/api/v1/recipes/", get(list_recipes).post(create_recipe))
        .route(
            "/api/v1/recipes/:id",
            get(get_recipe).patch(update_recipe).delete(delete_recipe),
        )
        .with_state(Arc::clone(&store));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake store");
    let addr = listener.local_addr().expect("fake store address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve fake store");
    });

    (client_for(&format!("http://{addr}/api/v1")), store)
}

/// Build a client against an arbitrary base URL (e.g. an unreachable one)
pub fn client_for(base: &str) -> RecipeClient {
    let config = ClientConfig {
        base_url: Url::parse(base).expect("valid test base URL"),
        timeout_secs: 5,
        connect_timeout_secs: 2,
    };
    RecipeClient::new(&config)
}

/// A minimal valid draft for tests that only care about identity
pub fn draft(title: &str) -> RecipeDraft {
    RecipeDraft {
        title: title.to_owned(),
        instructions: "Cook it.".to_owned(),
        ..RecipeDraft::default()
    }
}

#[derive(Deserialize)]
struct ListQuery {
    skip: Option<usize>,
    limit: Option<usize>,
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "detail": "Recipe not found" })),
    )
        .into_response()
}

fn rejected(reason: &str) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "detail": reason })),
    )
        .into_response()
}

async fn list_recipes(State(store): State<Shared>, Query(query): Query<ListQuery>) -> Response {
    store.requests.fetch_add(1, Ordering::SeqCst);
    if let Some(failure) = store.forced_failure() {
        return failure;
    }
    let recipes = store.recipes.lock().unwrap();
    let page: Vec<Recipe> = recipes
        .iter()
        .skip(query.skip.unwrap_or(0))
        .take(query.limit.unwrap_or(20))
        .cloned()
        .collect();
    Json(page).into_response()
}

async fn get_recipe(State(store): State<Shared>, Path(id): Path<i64>) -> Response {
    store.requests.fetch_add(1, Ordering::SeqCst);
    if let Some(failure) = store.forced_failure() {
        return failure;
    }
    let recipes = store.recipes.lock().unwrap();
    recipes
        .iter()
        .find(|r| r.id == id)
        .map_or_else(not_found, |recipe| Json(recipe.clone()).into_response())
}

async fn create_recipe(State(store): State<Shared>, Json(body): Json<RecipeDraft>) -> Response {
    store.requests.fetch_add(1, Ordering::SeqCst);
    if let Some(failure) = store.forced_failure() {
        return failure;
    }
    if body.title.trim().is_empty() {
        return rejected("title must not be empty");
    }
    if body.instructions.trim().is_empty() {
        return rejected("instructions must not be empty");
    }
    let recipe = store.materialize(body);
    store.recipes.lock().unwrap().push(recipe.clone());
    (StatusCode::CREATED, Json(recipe)).into_response()
}

async fn update_recipe(
    State(store): State<Shared>,
    Path(id): Path<i64>,
    Json(patch): Json<Value>,
) -> Response {
    store.requests.fetch_add(1, Ordering::SeqCst);
    if let Some(failure) = store.forced_failure() {
        return failure;
    }
    if let Some(title) = patch.get("title").and_then(Value::as_str) {
        if title.trim().is_empty() {
            return rejected("title must not be empty");
        }
    }

    let mut recipes = store.recipes.lock().unwrap();
    let Some(slot) = recipes.iter_mut().find(|r| r.id == id) else {
        return not_found();
    };

    let mut merged = serde_json::to_value(&*slot).unwrap();
    if let (Value::Object(target), Value::Object(fields)) = (&mut merged, patch) {
        for (key, value) in fields {
            target.insert(key, value);
        }
    }
    merged["updated_at"] = json!(Utc::now());
    *slot = serde_json::from_value(merged).unwrap();
    Json(slot.clone()).into_response()
}

async fn delete_recipe(State(store): State<Shared>, Path(id): Path<i64>) -> Response {
    store.requests.fetch_add(1, Ordering::SeqCst);
    if let Some(failure) = store.forced_failure() {
        return failure;
    }
    let mut recipes = store.recipes.lock().unwrap();
    let before = recipes.len();
    recipes.retain(|r| r.id != id);
    if recipes.len() == before {
        return not_found();
    }
    StatusCode::NO_CONTENT.into_response()
}
