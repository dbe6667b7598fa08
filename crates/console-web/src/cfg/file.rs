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

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::ConsoleResult;

const DEFAULT_API_URL: &str = "http://localhost:8090/api/assisted-install/v1/";

/// Console configuration
///
/// Loaded from defaults, then the optional TOML file, then `CONSOLE_`
/// prefixed environment variables (`__` separates nested keys, e.g.
/// `CONSOLE_LOG__FORMAT=json`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Address the HTTP server binds to
    pub listen: SocketAddr,

    /// Base URL of the installer REST API
    pub api_url: Url,

    /// Browser facing base URL for file downloads. Defaults to `api_url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<Url>,

    /// Upper bound for fetching credentials before the page falls back to
    /// its loading state
    #[serde(with = "humantime_serde")]
    pub fetch_timeout: Duration,

    /// How often a page in its loading state reloads itself
    #[serde(with = "humantime_serde")]
    pub loading_refresh: Duration,

    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directives. `RUST_LOG` takes precedence.
    pub filter: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], 8080)),
            api_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            download_url: None,
            fetch_timeout: Duration::from_secs(10),
            loading_refresh: Duration::from_secs(5),
            log: LogConfig::default(),
        }
    }
}

impl ConsoleConfig {
    pub fn load(path: Option<&Path>) -> ConsoleResult<Self> {
        let mut figment = Figment::from(Serialized::defaults(ConsoleConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment = figment.merge(Env::prefixed("CONSOLE_").split("__"));

        let mut config: ConsoleConfig = figment.extract().map_err(Box::new)?;
        config.api_url = with_trailing_slash(config.api_url);
        config.download_url = config.download_url.map(with_trailing_slash);
        Ok(config)
    }

    pub fn download_base(&self) -> &Url {
        self.download_url.as_ref().unwrap_or(&self.api_url)
    }
}

// Url::join replaces the last path segment unless the base ends in '/'
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
