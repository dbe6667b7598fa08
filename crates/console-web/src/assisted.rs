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

use async_trait::async_trait;
use console_model::{ClusterFileKind, Credentials, HostEvent, Inventory};
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;
use uuid::Uuid;

use crate::backend::ConsoleBackend;
use crate::cfg::file::ConsoleConfig;
use crate::{ConsoleError, ConsoleResult};

/// Client for the installer service REST API
pub struct AssistedClient {
    http: reqwest::Client,
    api_url: Url,
    download_url: Url,
}

/// The parts of a host record the console reads
#[derive(Debug, Deserialize)]
struct HostRecord {
    /// The agent reports its inventory as an embedded JSON document
    #[serde(default)]
    inventory: Option<String>,
}

impl AssistedClient {
    pub fn new(config: &ConsoleConfig) -> ConsoleResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.fetch_timeout)
            .build()?;
        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            download_url: config.download_base().clone(),
        })
    }

    fn cluster_path(base: &Url, cluster_id: Uuid, rest: &str) -> ConsoleResult<Url> {
        Ok(base.join(&format!("clusters/{cluster_id}/{rest}"))?)
    }

    /// GETs `url` and decodes the JSON body. Responses with one of the
    /// `absent` status codes mean "nothing there (yet)" and map to `None`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        absent: &[StatusCode],
    ) -> ConsoleResult<Option<T>> {
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if absent.contains(&status) {
            tracing::debug!(%url, %status, "resource not available");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ConsoleError::upstream_status(status, &url));
        }
        Ok(Some(response.json().await?))
    }
}

#[async_trait]
impl ConsoleBackend for AssistedClient {
    async fn fetch_credentials(&self, cluster_id: Uuid) -> ConsoleResult<Option<Credentials>> {
        let url = Self::cluster_path(&self.api_url, cluster_id, "credentials")?;
        // Conflict: the cluster has not finished installing
        self.get_json(url, &[StatusCode::NOT_FOUND, StatusCode::CONFLICT])
            .await
    }

    fn cluster_file_url(&self, cluster_id: Uuid, kind: ClusterFileKind) -> ConsoleResult<Url> {
        let mut url = Self::cluster_path(&self.download_url, cluster_id, "downloads/files")?;
        url.query_pairs_mut()
            .append_pair("file_name", kind.as_ref());
        Ok(url)
    }

    async fn fetch_host_inventory(
        &self,
        cluster_id: Uuid,
        host_id: Uuid,
    ) -> ConsoleResult<Option<Inventory>> {
        let url = Self::cluster_path(&self.api_url, cluster_id, &format!("hosts/{host_id}"))?;
        let Some(host) = self
            .get_json::<HostRecord>(url, &[StatusCode::NOT_FOUND])
            .await?
        else {
            return Ok(None);
        };

        let inventory = Inventory::from_json(host.inventory.as_deref().unwrap_or_default())
            .map_err(|source| ConsoleError::InvalidInventory {
                host_id: host_id.to_string(),
                source,
            })?;
        Ok(Some(inventory))
    }

    async fn fetch_host_events(
        &self,
        cluster_id: Uuid,
        host_id: Uuid,
    ) -> ConsoleResult<Vec<HostEvent>> {
        let mut url = Self::cluster_path(&self.api_url, cluster_id, "events")?;
        url.query_pairs_mut()
            .append_pair("host_id", &host_id.to_string());
        Ok(self.get_json(url, &[]).await?.unwrap_or_default())
    }
}
