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

//!
//! The cluster console web server library.
//!

// NOTE on pub vs non-pub mods:
//
// console-web is a binary crate. lib.rs only exists so main.rs stays small and the in-crate tests
// can build a full router. Keep modules private so dead-code detection keeps working.

mod assisted;
mod backend;
mod cfg;
mod errors;
mod logging;
mod run;
#[cfg(test)]
mod tests;
mod web;

// Save typing
pub(crate) use errors::{ConsoleError, ConsoleResult};

// Stuff needed by main.rs
pub use crate::{cfg::command_line::Command, cfg::command_line::Options, run::run};
