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
use axum::Json;
use axum::extract::{Path as AxumPath, State as AxumState};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use console_model::HostDetail;
use console_model::host_detail::{DISK_COLUMNS, NIC_COLUMNS};

use super::AppState;

#[derive(Template)]
#[template(path = "host_detail.html")]
struct HostDetailPage {
    detail: HostDetail,
    disk_columns: [&'static str; 6],
    nic_columns: [&'static str; 5],
    events_html: String,
}

/// View host
pub async fn detail(
    AxumState(state): AxumState<Arc<AppState>>,
    AxumPath((cluster_id, host_id)): AxumPath<(String, String)>,
) -> Response {
    let (show_json, host_id_string) = match host_id.strip_suffix(".json") {
        Some(host_id) => (true, host_id.to_string()),
        None => (false, host_id),
    };

    let cluster_id = match super::parse_id("Cluster", &cluster_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let host_id = match super::parse_id("Host", &host_id_string) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let inventory = match state
        .backend
        .fetch_host_inventory(cluster_id, host_id)
        .await
    {
        Ok(Some(inventory)) => inventory,
        Ok(None) => return super::not_found_response(host_id_string),
        Err(err) => {
            tracing::error!(%err, %cluster_id, %host_id, "fetch_host_inventory");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Error loading host").into_response();
        }
    };

    let detail = HostDetail::new(host_id.to_string(), &inventory);
    if show_json {
        return (StatusCode::OK, Json(detail)).into_response();
    }

    let events_html = match super::events::render_event_list(&state, cluster_id, host_id).await {
        Ok(html) => html,
        Err(err) => return err.into_response(),
    };

    super::render_html(HostDetailPage {
        detail,
        disk_columns: DISK_COLUMNS,
        nic_columns: NIC_COLUMNS,
        events_html,
    })
}
