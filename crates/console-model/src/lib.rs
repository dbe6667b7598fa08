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
//! Presentation model for the cluster console.
//!
//! Everything in here is a pure function of its inputs: raw inventory and
//! credential snapshots go in, displayable view records come out. Fetching,
//! templating and serving live in `console-web`.
//!

pub mod collate;
pub mod credentials;
pub mod display_state;
pub mod events;
pub mod hardware;
pub mod host_detail;
pub mod humanize;
pub mod inventory;

pub use credentials::{ClusterFileKind, Credentials, CredentialsView};
pub use display_state::DisplayState;
pub use events::{EventListView, HostEvent};
pub use hardware::{HardwareSummary, derive_hardware_summary};
pub use host_detail::{DiskRow, HostDetail, NicRow};
pub use inventory::{Disk, Inventory, InventoryError, Nic};

/// Rendered in place of any optional field that is absent.
pub const PLACEHOLDER: &str = "\u{2014}";
