/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 * http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use std::sync::Arc;
use std::time::Duration;

use askama::Template;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::ConsoleError;
use crate::backend::ConsoleBackend;

mod credentials;
mod events;
mod host;

/// Shared by all handlers
pub struct AppState {
    pub backend: Arc<dyn ConsoleBackend>,
    /// Upper bound for fetches that degrade to a loading state
    pub fetch_timeout: Duration,
    pub loading_refresh: Duration,
}

pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route(
            "/cluster/{cluster_id}/credentials",
            get(credentials::show_html),
        )
        .route(
            "/cluster/{cluster_id}/kubeconfig",
            get(credentials::download_kubeconfig),
        )
        .route("/cluster/{cluster_id}/host/{host_id}", get(host::detail))
        .route(
            "/cluster/{cluster_id}/host/{host_id}/events",
            get(events::show_html),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> &'static str {
    "Cluster console"
}

/// Parses a path segment as an ID, or builds the 400 response to return.
fn parse_id(kind: &str, raw: &str) -> Result<Uuid, Response> {
    raw.parse().map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            format!("Invalid {kind} ID {raw}: {e}"),
        )
            .into_response()
    })
}

fn not_found_response(id: String) -> Response {
    (StatusCode::NOT_FOUND, format!("Not found: {id}")).into_response()
}

fn render_html(template: impl Template) -> Response {
    match template.render() {
        Ok(html) => (StatusCode::OK, Html(html)).into_response(),
        Err(err) => ConsoleError::from(err).into_response(),
    }
}

impl IntoResponse for ConsoleError {
    fn into_response(self) -> Response {
        tracing::error!(err = %self, "request failed");
        let status = match &self {
            ConsoleError::UpstreamStatus { .. } | ConsoleError::Http(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}
