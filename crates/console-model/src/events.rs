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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const EVENT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EventSeverity {
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

/// An entry of the installer service event feed
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostEvent {
    #[serde(default)]
    pub host_id: Option<String>,
    #[serde(default)]
    pub severity: EventSeverity,
    pub event_time: DateTime<Utc>,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EventRow {
    pub time: String,
    pub severity: EventSeverity,
    pub message: String,
}

/// The event list embedded in a host detail page, newest first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EventListView {
    pub host_id: String,
    pub rows: Vec<EventRow>,
}

impl EventListView {
    pub fn new(host_id: impl Into<String>, mut events: Vec<HostEvent>) -> Self {
        events.sort_by(|a, b| b.event_time.cmp(&a.event_time));
        Self {
            host_id: host_id.into(),
            rows: events
                .into_iter()
                .map(|event| EventRow {
                    time: event.event_time.format(EVENT_TIME_FORMAT).to_string(),
                    severity: event.severity,
                    message: event.message,
                })
                .collect(),
        }
    }
}
