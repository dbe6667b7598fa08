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
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "console-web")]
#[command(about = "Cluster credentials and host inventory web console")]
pub struct Options {
    /// Path to the TOML configuration file
    #[arg(long, short, global = true, env = "CONSOLE_CONFIG_PATH")]
    pub config_path: Option<PathBuf>,

    /// Overrides the configured listen address
    #[arg(long, global = true)]
    pub listen: Option<SocketAddr>,

    #[command(subcommand)]
    pub sub_cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the console
    Run,
    /// Print the effective configuration as JSON and exit
    ShowConfig,
}
