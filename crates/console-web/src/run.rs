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

use crate::assisted::AssistedClient;
use crate::cfg::command_line::{Command, Options};
use crate::cfg::file::ConsoleConfig;
use crate::logging::setup_logging;
use crate::web::{self, AppState};

pub async fn run(opts: Options) -> eyre::Result<()> {
    let mut config = ConsoleConfig::load(opts.config_path.as_deref())?;
    if let Some(listen) = opts.listen {
        config.listen = listen;
    }

    match opts.sub_cmd {
        Command::ShowConfig => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        Command::Run => serve(config).await,
    }
}

async fn serve(config: ConsoleConfig) -> eyre::Result<()> {
    setup_logging(&config.log)?;

    let backend = AssistedClient::new(&config)?;
    let state = Arc::new(AppState {
        backend: Arc::new(backend),
        fetch_timeout: config.fetch_timeout,
        loading_refresh: config.loading_refresh,
    });

    let listener = tokio::net::TcpListener::bind(config.listen).await?;
    tracing::info!(
        listen = %config.listen,
        api_url = %config.api_url,
        "Console listening"
    );

    axum::serve(listener, web::routes(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Console stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "Failed to listen for shutdown signal");
    }
}
