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

use askama::Template;
use axum::extract::{Path as AxumPath, State as AxumState};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use console_model::{ClusterFileKind, Credentials, CredentialsView, DisplayState};
use uuid::Uuid;

use super::AppState;

#[derive(Template)]
#[template(path = "cluster_credentials.html")]
struct ClusterCredentials {
    view: CredentialsView,
    refresh_secs: u64,
}

/// Credentials panel of a cluster
pub async fn show_html(
    AxumState(state): AxumState<Arc<AppState>>,
    AxumPath(cluster_id): AxumPath<String>,
) -> Response {
    let cluster_id = match super::parse_id("Cluster", &cluster_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let credentials = fetch_credentials(&state, cluster_id).await;
    super::render_html(ClusterCredentials {
        view: CredentialsView::new(cluster_id.to_string(), credentials),
        refresh_secs: state.loading_refresh.as_secs().max(1),
    })
}

async fn fetch_credentials(state: &AppState, cluster_id: Uuid) -> DisplayState<Credentials> {
    let fetch = state.backend.fetch_credentials(cluster_id);
    match tokio::time::timeout(state.fetch_timeout, fetch).await {
        // The client's own request timeout can beat ours to it
        Ok(Err(err)) if err.is_timeout() => {
            tracing::warn!(
                %err,
                %cluster_id,
                "fetch_credentials timed out, rendering loading state"
            );
            DisplayState::Loading
        }
        Ok(result) => {
            if let Err(err) = &result {
                tracing::error!(%err, %cluster_id, "fetch_credentials");
            }
            result.into()
        }
        Err(_) => {
            tracing::warn!(
                %cluster_id,
                timeout = ?state.fetch_timeout,
                "fetch_credentials timed out, rendering loading state"
            );
            DisplayState::Loading
        }
    }
}

/// Sends the browser to the kubeconfig download. Every request resolves the
/// URL again, so the action can be repeated.
pub async fn download_kubeconfig(
    AxumState(state): AxumState<Arc<AppState>>,
    AxumPath(cluster_id): AxumPath<String>,
) -> Response {
    let cluster_id = match super::parse_id("Cluster", &cluster_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .backend
        .cluster_file_url(cluster_id, ClusterFileKind::Kubeconfig)
    {
        Ok(url) => Redirect::to(url.as_str()).into_response(),
        Err(err) => {
            tracing::error!(%err, %cluster_id, "cluster_file_url");
            (
                StatusCode::BAD_GATEWAY,
                "Error resolving kubeconfig download",
            )
                .into_response()
        }
    }
}
