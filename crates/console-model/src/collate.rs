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

use std::cmp::Ordering;

/// ASCII punctuation and symbols in root collation order. All of them sort
/// before digits, and digits sort before letters.
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Primary weight of an already case-folded character.
fn primary_weight(c: char) -> (u8, u32) {
    if c.is_whitespace() {
        (0, c as u32)
    } else if c.is_alphabetic() {
        (3, c as u32)
    } else if c.is_numeric() {
        (2, c as u32)
    } else {
        match PUNCTUATION_ORDER.find(c) {
            Some(position) => (1, position as u32),
            None => (1, 0x100 + c as u32),
        }
    }
}

/// Compares two strings the way a user expects a name column to sort.
///
/// Case is ignored first (`"eth1" < "ETH2" < "eth3"`), and punctuation sorts
/// before digits and letters (`"eth_1" < "eth-1" < "eth0"`). Strings that only
/// differ by case put lowercase first, and anything still equal falls back
/// to code point order so the result is a total order.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let primary = |s: &str| {
        s.chars()
            .flat_map(char::to_lowercase)
            .map(primary_weight)
            .collect::<Vec<_>>()
    };

    primary(a)
        .cmp(&primary(b))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}
