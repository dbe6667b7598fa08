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

//! Unit-scaled, human readable renderings of raw byte and Hz counts.

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;

const KHZ: u64 = 1_000;
const MHZ: u64 = KHZ * 1_000;
const GHZ: u64 = MHZ * 1_000;

/// Renders a byte count as a file size.
///
/// Thresholds are binary, labels are the familiar `KB`/`MB`/`GB`:
/// - `>= 1024^3`: two decimals, no thousands separator (`"931.32 GB"`)
/// - `>= 1024^2`: two decimals, no thousands separator (`"15.26 MB"`)
/// - `>= 1024`: no decimals, `,` separator (`"1,000 KB"`)
/// - otherwise a byte count (`"1 byte"`, `"512 bytes"`)
pub fn file_size(bytes: u64) -> String {
    if bytes >= GIB {
        format!("{} GB", format_number(bytes as f64 / GIB as f64, 2, ""))
    } else if bytes >= MIB {
        format!("{} MB", format_number(bytes as f64 / MIB as f64, 2, ""))
    } else if bytes >= KIB {
        format!("{} KB", format_number(bytes as f64 / KIB as f64, 0, ","))
    } else {
        let unit = if bytes == 1 { "byte" } else { "bytes" };
        format!("{} {unit}", format_number(bytes as f64, 0, ","))
    }
}

/// Renders a clock frequency with decimal (SI) units and two decimals.
pub fn clock_speed(hz: u64) -> String {
    let (scaled, unit) = if hz >= GHZ {
        (hz as f64 / GHZ as f64, "GHz")
    } else if hz >= MHZ {
        (hz as f64 / MHZ as f64, "MHz")
    } else if hz >= KHZ {
        (hz as f64 / KHZ as f64, "KHz")
    } else {
        return format!("{hz} Hz");
    };
    format!("{} {unit}", format_number(scaled, 2, ""))
}

/// Formats a non-negative number with a fixed number of decimals and the
/// given thousands separator on the integer part.
///
/// Rounds half-up at the requested precision.
pub fn format_number(value: f64, precision: usize, thousand_sep: &str) -> String {
    let fixed = to_fixed(value.abs(), precision);
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + integer.len() / 3 * thousand_sep.len());
    if value < 0.0 {
        out.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push_str(thousand_sep);
        }
        out.push(digit);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn to_fixed(value: f64, precision: usize) -> String {
    let power = 10f64.powi(precision as i32);
    format!("{:.*}", precision, (value * power).round() / power)
}
