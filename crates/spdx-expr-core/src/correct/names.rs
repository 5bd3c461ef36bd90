// Dweve spdx-expr - SPDX License Expression Toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Matching free text against full license names.
//!
//! License names are written with many small variations: with or without
//! "GNU", "v3" or "version 3.0", "or later" or "or greater". The input is
//! expanded into every such spelling and each one is compared with the
//! normalized official names.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::licenses::{normalize_name, reference_data, License};

static NAME_PARTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:gnu\s+)?(?P<core>.+?)(?:,?\s+(?:version\s*|v)?(?P<version>\d+(?:\.\d+)*))?(?:(?P<later>\s*\+|\s+or\s+(?:later|greater|newer))|\s+(?P<only>only))?$",
    )
    .unwrap()
});

const VERSION_FORMS: [&str; 5] = [" v", " version ", " ", ", version ", ", v"];
const LATER_SUFFIXES: [&str; 4] = [" or later", " or greater", " or newer", "+"];

/// Spellings of `text` to compare against normalized license names.
///
/// The normalized text itself comes first. With `upgrade`, a name without
/// an "or later" part is also tried with an explicit " only".
pub fn variations_of(text: &str, upgrade: bool) -> Vec<String> {
    let text = normalize_name(text);
    let mut out = vec![text.clone()];
    let Some(caps) = NAME_PARTS.captures(&text) else {
        return out;
    };
    let core = &caps["core"];
    let versions = caps
        .name("version")
        .map(|v| version_variants(v.as_str()))
        .unwrap_or_default();
    let suffixes: Vec<&str> = if caps.name("later").is_some() {
        LATER_SUFFIXES.to_vec()
    } else if caps.name("only").is_some() {
        vec![" only"]
    } else if upgrade {
        vec!["", " only"]
    } else {
        vec![""]
    };

    let mut push = |candidate: String| {
        if !out.contains(&candidate) {
            out.push(candidate);
        }
    };
    for prefix in ["", "gnu "] {
        if versions.is_empty() {
            for suffix in &suffixes {
                push(format!("{prefix}{core}{suffix}"));
            }
        }
        for version in &versions {
            for form in VERSION_FORMS {
                for suffix in &suffixes {
                    push(format!("{prefix}{core}{form}{version}{suffix}"));
                }
            }
        }
    }
    out
}

/// `3`, `3.0` and `3.0.0` are the same version.
fn version_variants(version: &str) -> Vec<String> {
    let mut stripped = version;
    while let Some(rest) = stripped.strip_suffix(".0") {
        stripped = rest;
    }
    let mut out = Vec::new();
    for v in [
        version.to_string(),
        stripped.to_string(),
        format!("{stripped}.0"),
        format!("{stripped}.0.0"),
    ] {
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}

/// The license whose full name matches `text` under some variation.
///
/// When several licenses match, the one listed first wins.
pub fn find_license_by_name(text: &str, upgrade: bool) -> Option<&'static License> {
    let data = reference_data();
    variations_of(text, upgrade)
        .iter()
        .filter_map(|candidate| data.license_rank(candidate))
        .min()
        .map(|rank| &data.licenses()[rank])
}
