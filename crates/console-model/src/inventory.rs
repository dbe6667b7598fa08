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

use serde::{Deserialize, Serialize};

/// Hardware inventory reported by the discovery agent running on a host.
///
/// Every field is optional. A host that has not finished discovery reports a
/// partial (or empty) inventory, and that is a valid state to display.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inventory {
    pub system_vendor: Option<SystemVendor>,
    pub cpu: Option<Cpu>,
    pub memory: Option<Memory>,
    pub bmc_address: Option<String>,
    pub bmc_v6address: Option<String>,
    pub boot: Option<Boot>,
    pub disks: Option<Vec<Disk>>,
    pub interfaces: Option<Vec<Nic>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemVendor {
    pub manufacturer: Option<String>,
    pub product_name: Option<String>,
    pub serial_number: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cpu {
    pub architecture: Option<String>,
    pub model_name: Option<String>,
    pub clock_speed_hz: Option<u64>,
    /// Number of logical cores
    pub count: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Memory {
    pub total_bytes: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Boot {
    pub current_boot_mode: Option<String>,
    pub pxe_interface: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Disk {
    pub name: Option<String>,
    pub drive_type: Option<String>,
    pub size_bytes: Option<u64>,
    pub serial: Option<String>,
    pub model: Option<String>,
    pub wwn: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Nic {
    pub name: Option<String>,
    pub mac_address: Option<String>,
    pub ipv4_addresses: Option<Vec<String>>,
    pub ipv6_addresses: Option<Vec<String>>,
    pub speed_mbps: Option<u64>,
}

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Inventory is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl Inventory {
    /// Parses the inventory document a host reports.
    ///
    /// Hosts that have not reported yet carry an empty document, which maps
    /// to an empty inventory rather than an error.
    pub fn from_json(raw: &str) -> Result<Self, InventoryError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    pub fn disks(&self) -> &[Disk] {
        self.disks.as_deref().unwrap_or_default()
    }

    pub fn interfaces(&self) -> &[Nic] {
        self.interfaces.as_deref().unwrap_or_default()
    }
}
