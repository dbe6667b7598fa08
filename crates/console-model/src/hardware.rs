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

use serde::Serialize;

use crate::PLACEHOLDER;
use crate::humanize;
use crate::inventory::Inventory;

/// A display string together with the raw value it was rendered from, so that
/// host lists can sort on the number rather than the text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SummaryValue {
    pub title: String,
    pub sortable_value: u64,
}

impl SummaryValue {
    fn absent() -> Self {
        Self {
            title: PLACEHOLDER.to_string(),
            sortable_value: 0,
        }
    }
}

/// Normalized hardware summary of a host
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HardwareSummary {
    pub serial_number: String,
    pub cpu_speed: String,
    pub cores: SummaryValue,
    pub memory: SummaryValue,
    /// Combined capacity of all disks
    pub disk: SummaryValue,
}

pub fn derive_hardware_summary(inventory: &Inventory) -> HardwareSummary {
    let serial_number = inventory
        .system_vendor
        .as_ref()
        .and_then(|vendor| vendor.serial_number.clone())
        .filter(|serial| !serial.is_empty())
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    let cpu_speed = inventory
        .cpu
        .as_ref()
        .and_then(|cpu| cpu.clock_speed_hz)
        .filter(|hz| *hz > 0)
        .map(humanize::clock_speed)
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    let cores = inventory
        .cpu
        .as_ref()
        .and_then(|cpu| cpu.count)
        .map(|count| SummaryValue {
            title: count.to_string(),
            sortable_value: count.into(),
        })
        .unwrap_or_else(SummaryValue::absent);

    let memory = inventory
        .memory
        .as_ref()
        .and_then(|memory| memory.total_bytes)
        .map(|bytes| SummaryValue {
            title: humanize::file_size(bytes),
            sortable_value: bytes,
        })
        .unwrap_or_else(SummaryValue::absent);

    let disk = if inventory.disks().is_empty() {
        SummaryValue::absent()
    } else {
        let total = inventory
            .disks()
            .iter()
            .map(|disk| disk.size_bytes.unwrap_or_default())
            .fold(0u64, u64::saturating_add);
        SummaryValue {
            title: humanize::file_size(total),
            sortable_value: total,
        }
    };

    HardwareSummary {
        serial_number,
        cpu_speed,
        cores,
        memory,
        disk,
    }
}
