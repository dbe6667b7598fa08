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
use url::Url;
use uuid::Uuid;

use crate::ConsoleResult;

/// Where the console gets its data from.
///
/// Pages only ever read through this trait, so a page render never mutates
/// anything and can be repeated freely.
#[async_trait]
pub trait ConsoleBackend: Send + Sync {
    /// Login credentials of an installed cluster. `None` while the cluster
    /// has not produced credentials yet.
    async fn fetch_credentials(&self, cluster_id: Uuid) -> ConsoleResult<Option<Credentials>>;

    /// Browser facing URL that downloads a cluster file.
    fn cluster_file_url(&self, cluster_id: Uuid, kind: ClusterFileKind) -> ConsoleResult<Url>;

    /// Hardware inventory of a host. `None` if the host is unknown.
    async fn fetch_host_inventory(
        &self,
        cluster_id: Uuid,
        host_id: Uuid,
    ) -> ConsoleResult<Option<Inventory>>;

    async fn fetch_host_events(
        &self,
        cluster_id: Uuid,
        host_id: Uuid,
    ) -> ConsoleResult<Vec<HostEvent>>;
}
