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

use itertools::Itertools;
use serde::Serialize;

use crate::PLACEHOLDER;
use crate::collate::locale_cmp;
use crate::hardware::{HardwareSummary, derive_hardware_summary};
use crate::humanize;
use crate::inventory::{Disk, Inventory, Nic};

pub const DISK_COLUMNS: [&str; 6] = ["Name", "Drive type", "Size", "Serial", "Model", "WWN"];

pub const NIC_COLUMNS: [&str; 5] = [
    "Name",
    "MAC address",
    "IPv4 address",
    "IPv6 address",
    "Speed",
];

/// A labeled value in one of the host detail field groups
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DetailItem {
    pub title: &'static str,
    pub value: String,
}

impl DetailItem {
    fn new(title: &'static str, value: Option<&str>) -> Self {
        Self {
            title,
            value: or_placeholder(value),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiskRow {
    pub name: String,
    pub drive_type: String,
    pub size: String,
    pub serial: String,
    pub model: String,
    pub wwn: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NicRow {
    pub name: String,
    pub mac_address: String,
    pub ipv4_addresses: String,
    pub ipv6_addresses: String,
    pub speed: String,
}

/// Everything the host detail page shows, derived from a host's inventory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HostDetail {
    pub host_id: String,
    pub summary: HardwareSummary,
    /// Field groups, rendered side by side under "Host Details"
    pub field_groups: Vec<Vec<DetailItem>>,
    pub disks_title: String,
    pub disks: Vec<DiskRow>,
    pub nics_title: String,
    pub nics: Vec<NicRow>,
}

impl HostDetail {
    pub fn new(host_id: impl Into<String>, inventory: &Inventory) -> Self {
        let summary = derive_hardware_summary(inventory);

        let vendor = inventory.system_vendor.as_ref();
        let cpu = inventory.cpu.as_ref();
        let boot = inventory.boot.as_ref();

        let system_group = vec![
            DetailItem::new(
                "Manufacturer",
                vendor.and_then(|v| v.manufacturer.as_deref()),
            ),
            DetailItem::new("Product", vendor.and_then(|v| v.product_name.as_deref())),
            DetailItem::new("Serial number", Some(summary.serial_number.as_str())),
        ];

        let cpu_group = vec![
            DetailItem::new("CPU architecture", cpu.and_then(|c| c.architecture.as_deref())),
            DetailItem::new("CPU model name", cpu.and_then(|c| c.model_name.as_deref())),
            DetailItem::new("CPU clock speed", Some(summary.cpu_speed.as_str())),
        ];

        let mut platform_group = vec![
            DetailItem::new("Memory capacity", Some(summary.memory.title.as_str())),
            DetailItem {
                title: "BMC address",
                value: bmc_address(
                    inventory.bmc_address.as_deref(),
                    inventory.bmc_v6address.as_deref(),
                ),
            },
            DetailItem::new("Boot mode", boot.and_then(|b| b.current_boot_mode.as_deref())),
        ];
        // Only hosts that network booted report a PXE interface
        if let Some(pxe_interface) = boot
            .and_then(|b| b.pxe_interface.as_deref())
            .filter(|pxe| !pxe.is_empty())
        {
            platform_group.push(DetailItem::new("PXE interface", Some(pxe_interface)));
        }

        let disks = disk_rows(inventory.disks());
        let nics = nic_rows(inventory.interfaces());

        Self {
            host_id: host_id.into(),
            summary,
            field_groups: vec![system_group, cpu_group, platform_group],
            disks_title: format!("{} Disks", disks.len()),
            disks,
            nics_title: format!("{} NICs", nics.len()),
            nics,
        }
    }
}

/// Combines the IPv4 and IPv6 BMC addresses into one display value, IPv4 first.
pub fn bmc_address(v4: Option<&str>, v6: Option<&str>) -> String {
    let v4 = v4.filter(|addr| !addr.is_empty());
    let v6 = v6.filter(|addr| !addr.is_empty());
    match (v4, v6) {
        (Some(v4), Some(v6)) => format!("{v4}, {v6}"),
        (Some(addr), None) | (None, Some(addr)) => addr.to_string(),
        (None, None) => PLACEHOLDER.to_string(),
    }
}

pub fn disk_rows(disks: &[Disk]) -> Vec<DiskRow> {
    disks
        .iter()
        .sorted_by(|a, b| locale_cmp(sort_name(&a.name), sort_name(&b.name)))
        .map(|disk| DiskRow {
            name: or_placeholder(disk.name.as_deref()),
            drive_type: or_placeholder(disk.drive_type.as_deref()),
            size: humanize::file_size(disk.size_bytes.unwrap_or_default()),
            serial: or_placeholder(disk.serial.as_deref()),
            model: or_placeholder(disk.model.as_deref()),
            wwn: or_placeholder(disk.wwn.as_deref()),
        })
        .collect()
}

pub fn nic_rows(interfaces: &[Nic]) -> Vec<NicRow> {
    interfaces
        .iter()
        .sorted_by(|a, b| locale_cmp(sort_name(&a.name), sort_name(&b.name)))
        .map(|nic| NicRow {
            name: or_placeholder(nic.name.as_deref()),
            mac_address: or_placeholder(nic.mac_address.as_deref()),
            ipv4_addresses: nic.ipv4_addresses.as_deref().unwrap_or_default().join(", "),
            ipv6_addresses: nic.ipv6_addresses.as_deref().unwrap_or_default().join(", "),
            speed: nic
                .speed_mbps
                .filter(|speed| *speed > 0)
                .map(|speed| format!("{speed} Mbps"))
                .unwrap_or_default(),
        })
        .collect()
}

fn sort_name(name: &Option<String>) -> &str {
    name.as_deref().unwrap_or_default()
}

fn or_placeholder(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(PLACEHOLDER)
        .to_string()
}
