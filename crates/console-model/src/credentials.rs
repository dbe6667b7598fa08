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

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::display_state::DisplayState;

/// Shown instead of the password; the real value is only reachable through
/// the copy action.
pub const MASKED_PASSWORD: &str = "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}";

pub const CREDENTIALS_ERROR_TITLE: &str = "Failed to fetch cluster credentials.";

/// Login credentials of an installed cluster
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub console_url: String,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("console_url", &self.console_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Files the installer service serves for a cluster
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display, strum_macros::AsRefStr)]
pub enum ClusterFileKind {
    #[strum(serialize = "kubeconfig")]
    Kubeconfig,
}

/// Everything the credentials panel needs to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CredentialsView {
    pub cluster_id: String,
    pub credentials: DisplayState<Credentials>,
    pub download: ClusterFileKind,
}

impl CredentialsView {
    pub fn new(cluster_id: impl Into<String>, credentials: DisplayState<Credentials>) -> Self {
        Self {
            cluster_id: cluster_id.into(),
            credentials,
            download: ClusterFileKind::Kubeconfig,
        }
    }

    pub fn masked_password(&self) -> &'static str {
        MASKED_PASSWORD
    }

    pub fn error_title(&self) -> &'static str {
        CREDENTIALS_ERROR_TITLE
    }
}
