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

/// What a view shows for a fetched resource.
///
/// Derived from the fetch result on every render and never stored. An error
/// always wins: a view never shows stale data next to a failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum DisplayState<T> {
    Loading,
    Error,
    Ready(T),
}

impl<T> DisplayState<T> {
    pub fn from_parts(data: Option<T>, has_error: bool) -> Self {
        match (data, has_error) {
            (_, true) => Self::Error,
            (None, false) => Self::Loading,
            (Some(data), false) => Self::Ready(data),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// `Ok(None)` means the resource is not available yet.
impl<T, E> From<Result<Option<T>, E>> for DisplayState<T> {
    fn from(result: Result<Option<T>, E>) -> Self {
        match result {
            Ok(data) => Self::from_parts(data, false),
            Err(_) => Self::Error,
        }
    }
}
