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

use console_model::InventoryError;

pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("Installer API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Installer API returned {status} for {url}")]
    UpstreamStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Host {host_id} reported an invalid inventory: {source}")]
    InvalidInventory {
        host_id: String,
        source: InventoryError,
    },

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl ConsoleError {
    pub fn upstream_status(status: reqwest::StatusCode, url: &url::Url) -> Self {
        Self::UpstreamStatus {
            status,
            url: url.to_string(),
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(err) if err.is_timeout())
    }
}
