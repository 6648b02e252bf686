// ABOUTME: HTTP transport adapter for the recipe store REST API
// ABOUTME: Performs one request per call and maps outcomes to tagged errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cookbook Client Contributors

//! # Transport Adapter
//!
//! One layer above reqwest: given a method, a path relative to the
//! configured base endpoint, and an optional payload, performs the round
//! trip and returns a decoded body or a structured failure. No retries, no
//! caching; timeouts come from the shared client configuration.

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::errors::{RecipeError, RecipeResult};
use crate::http_client::shared_client;

/// Transport adapter bound to one base endpoint for the process lifetime
#[derive(Debug, Clone)]
pub struct ApiTransport {
    client: &'static Client,
    base_url: String,
}

impl ApiTransport {
    /// Create a transport against the configured base endpoint
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: shared_client(config),
            base_url: config.base_url.as_str().trim_end_matches('/').to_owned(),
        }
    }

    /// Absolute URL for a path relative to the base endpoint
    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Perform a request and decode the response body as `T`.
    ///
    /// `operation` names the repository operation for diagnostics and is
    /// carried on every error variant.
    ///
    /// # Errors
    ///
    /// [`RecipeError::Transport`] when no response arrives,
    /// [`RecipeError::Rejected`] on an error status, and
    /// [`RecipeError::Decode`] when a success body does not parse as `T`.
    pub async fn request<T, B>(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> RecipeResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.execute(operation, method, path, query, body).await?;
        response
            .json()
            .await
            .map_err(|source| RecipeError::Decode { operation, source })
    }

    /// Perform a request and discard any response body (DELETE)
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::request`], minus the decode failure.
    pub async fn request_empty<B>(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> RecipeResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.execute(operation, method, path, &[], body).await?;
        Ok(())
    }

    /// Send the request and verify the status, leaving the body untouched
    async fn execute<B>(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> RecipeResult<reqwest::Response>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path);
        debug!("{operation}: {method} {url}");

        let mut request = self.client.request(method, &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(payload) = body {
            request = request.json(payload);
        }

        let response = request
            .send()
            .await
            .map_err(|source| RecipeError::Transport { operation, source })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        Err(Self::error_from_status(operation, status, response).await)
    }

    /// Decode an error response into the matching taxonomy variant.
    ///
    /// The store reports errors as a JSON object with an optional `detail`
    /// field, either a plain string or a structured validation payload. An
    /// unreadable body degrades to a detail-less rejection rather than a
    /// decode failure, since the status already tells the story.
    async fn error_from_status(
        operation: &'static str,
        status: StatusCode,
        response: reqwest::Response,
    ) -> RecipeError {
        let detail = response
            .json::<Value>()
            .await
            .ok()
            .map(|body| {
                if let Value::Object(fields) = &body {
                    if let Some(detail) = fields.get("detail") {
                        return detail.clone();
                    }
                }
                body
            })
            .filter(|value| !value.is_null());

        RecipeError::Rejected {
            operation,
            status: status.as_u16(),
            detail,
        }
    }
}
