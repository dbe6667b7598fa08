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
use axum::response::{Html, IntoResponse, Response};
use console_model::{DisplayState, EventListView};
use uuid::Uuid;

use super::AppState;
use crate::ConsoleResult;

/// Event list of one host. Rendered on its own and embedded in the host
/// detail page.
#[derive(Template)]
#[template(path = "host_events.html")]
struct HostEvents {
    host_id: String,
    events: DisplayState<EventListView>,
}

pub(super) async fn render_event_list(
    state: &AppState,
    cluster_id: Uuid,
    host_id: Uuid,
) -> ConsoleResult<String> {
    let events = match state.backend.fetch_host_events(cluster_id, host_id).await {
        Ok(events) => DisplayState::Ready(EventListView::new(host_id.to_string(), events)),
        Err(err) => {
            tracing::error!(%err, %cluster_id, %host_id, "fetch_host_events");
            DisplayState::Error
        }
    };

    let fragment = HostEvents {
        host_id: host_id.to_string(),
        events,
    };
    Ok(fragment.render()?)
}

pub async fn show_html(
    AxumState(state): AxumState<Arc<AppState>>,
    AxumPath((cluster_id, host_id)): AxumPath<(String, String)>,
) -> Response {
    let cluster_id = match super::parse_id("Cluster", &cluster_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let host_id = match super::parse_id("Host", &host_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match render_event_list(&state, cluster_id, host_id).await {
        Ok(html) => Html(html).into_response(),
        Err(err) => err.into_response(),
    }
}
