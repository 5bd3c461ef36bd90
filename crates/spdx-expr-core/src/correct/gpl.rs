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

//! Normalization of the GNU license families (GPL, LGPL, AGPL, GFDL).
//!
//! These families are written in many ways: `GPLv3+`, `GPL-2`,
//! `LGPL 2.1 or later`, `GPL-3.0-and-later`. All of them collapse to the
//! dashed SPDX form with an `-or-later` or `-only` suffix.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::licenses::reference_data;

static GNU_FAMILY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:GNU[\s,-]*)?(AGPL|LGPL|GPL|GFDL)[\s,-]*(?:version[\s,-]*|v)?(\d+(?:\.\d+)?)?(\+|[\s,-]*(?:or|and)[\s,-]*later|[\s,-]*only)?$",
    )
    .unwrap()
});

static BARE_GPL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[AL]?GPL-\d+\.\d+$").unwrap());

/// The SPDX id for a GNU-family spelling, if it names a known license.
///
/// A bare family name means the latest version (`GPL` is `GPL-3.0`,
/// `GFDL` is `GFDL-1.3`), and a bare major version gains a `.0`.
pub(crate) fn normalize_gnu_family(text: &str) -> Option<String> {
    let caps = GNU_FAMILY.captures(text.trim())?;
    let family = caps[1].to_uppercase();
    let version = match caps.get(2).map(|m| m.as_str()) {
        Some(v) if v.contains('.') => v.to_string(),
        Some(v) => format!("{v}.0"),
        None if family == "GFDL" => "1.3".to_string(),
        None => "3.0".to_string(),
    };
    let suffix = match caps.get(3).map(|m| m.as_str().to_lowercase()) {
        Some(s) if s.ends_with("only") => "-only",
        Some(_) => "-or-later",
        None => "",
    };
    let id = format!("{family}-{version}{suffix}");
    reference_data().is_exact_license_id(&id).then_some(id)
}

/// `GPL-3.0` becomes `GPL-3.0-or-later`, for ids that were guessed from
/// free text rather than written explicitly.
pub(crate) fn or_later_variant(id: &str) -> Option<String> {
    if !BARE_GPL.is_match(id) {
        return None;
    }
    let later = format!("{id}-or-later");
    reference_data().is_exact_license_id(&later).then_some(later)
}
