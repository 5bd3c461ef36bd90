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

//! License id correction.

use super::{aliases, exceptions, gpl, spelling};
use crate::expression::{LicenseInfo, ParsedExpression};
use crate::licenses::reference_data;

/// Map a possibly misspelled license id onto an official SPDX id.
///
/// The input is returned unchanged when nothing matches. With `upgrade`,
/// ids that have an explicit `-only` form (`GPL-2.0`, `LGPL-2.1`) are
/// rewritten to it.
///
/// # Examples
///
/// ```
/// use spdx_expr_core::correct_license_id;
///
/// assert_eq!(correct_license_id("Apache 2", false), "Apache-2.0");
/// assert_eq!(correct_license_id("GPLv2+", false), "GPL-2.0-or-later");
/// assert_eq!(correct_license_id("GPL-2.0", true), "GPL-2.0-only");
/// ```
pub fn correct_license_id(id: &str, upgrade: bool) -> String {
    let corrected = resolve(id, upgrade).unwrap_or_else(|| id.to_string());
    let corrected = if upgrade {
        only_variant(&corrected).unwrap_or(corrected)
    } else {
        corrected
    };
    if corrected != id {
        tracing::trace!(from = id, to = %corrected, "corrected license id");
    }
    corrected
}

fn resolve(id: &str, upgrade: bool) -> Option<String> {
    if let Some(alias) = aliases::license_alias(id) {
        return Some(alias.to_string());
    }
    if let Some(id) = gpl::normalize_gnu_family(id) {
        return Some(id);
    }
    if let Some(expanded) = expand_plus(id) {
        return Some(expanded);
    }
    if let Some(found) = reference_data().find_license_id(id) {
        return Some(found.to_string());
    }
    spelling::correct_spelling(id, upgrade)
}

/// `X+` becomes `X-or-later` when that id exists.
fn expand_plus(id: &str) -> Option<String> {
    let base = id.strip_suffix('+')?;
    let later = format!("{base}-or-later");
    reference_data()
        .find_license_id(&later)
        .map(String::from)
}

fn only_variant(id: &str) -> Option<String> {
    let only = format!("{id}-only");
    reference_data().is_exact_license_id(&only).then_some(only)
}

/// Split an unknown id with an embedded `-with-` into license and
/// exception, e.g. `GPL-3.0-with-bison-exception`.
///
/// Returns `None` unless the license half corrects to a known id.
pub fn split_embedded_exception(info: &LicenseInfo, upgrade: bool) -> Option<ParsedExpression> {
    if info.exception.is_some() || reference_data().is_known_license_id(&info.license) {
        return None;
    }
    let at = info.license.to_ascii_lowercase().find("-with-")?;
    let (license, rest) = info.license.split_at(at);
    let exception = &rest["-with-".len()..];
    let license = correct_license_id(license, upgrade);
    if !reference_data().is_known_license_id(&license) {
        return None;
    }
    let exception = exceptions::correct_exception_id(exception, Some(&license));
    Some(ParsedExpression::license_with(license, exception))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Direct lookups =====

    #[test]
    fn test_known_ids_are_kept() {
        assert_eq!(correct_license_id("MIT", false), "MIT");
        assert_eq!(correct_license_id("Apache-2.0", false), "Apache-2.0");
        assert_eq!(
            correct_license_id("GPL-2.0-with-classpath-exception", false),
            "GPL-2.0-with-classpath-exception"
        );
    }

    #[test]
    fn test_case_is_fixed() {
        assert_eq!(correct_license_id("mit", false), "MIT");
        assert_eq!(correct_license_id("bsd-2-CLAUSE", false), "BSD-2-Clause");
    }

    #[test]
    fn test_aliases() {
        assert_eq!(correct_license_id("Apache Software License", false), "Apache-1.1");
        assert_eq!(correct_license_id("frEeBsD", false), "BSD-2-Clause");
        assert_eq!(correct_license_id("The Unlicense", false), "Unlicense");
    }

    // ===== GNU families =====

    #[test]
    fn test_gpl_plus() {
        assert_eq!(correct_license_id("GPL-1.0+", false), "GPL-1.0-or-later");
        assert_eq!(correct_license_id("GPL-3.0-or-later", true), "GPL-3.0-or-later");
    }

    #[test]
    fn test_upgrade_to_only() {
        assert_eq!(correct_license_id("GPL-3.0", true), "GPL-3.0-only");
        assert_eq!(correct_license_id("Gpl", true), "GPL-3.0-only");
        assert_eq!(correct_license_id("LGPL-2.0", false), "LGPL-2.0");
        assert_eq!(correct_license_id("GFDL-1.1", true), "GFDL-1.1-only");
        assert_eq!(correct_license_id("MIT", true), "MIT");
    }

    #[test]
    fn test_guessed_gpl_is_or_later_when_upgrading() {
        assert_eq!(
            correct_license_id("Lesser General Public License v3.0", true),
            "LGPL-3.0-or-later"
        );
        assert_eq!(
            correct_license_id("General Public License v3.0", true),
            "General Public License v3.0"
        );
    }

    // ===== Misses =====

    #[test]
    fn test_unknown_is_unchanged() {
        assert_eq!(correct_license_id("No Such License", false), "No Such License");
        assert_eq!(correct_license_id("Apache-2.6", false), "Apache-2.6");
    }

    #[test]
    fn test_idempotent_on_corrected_ids() {
        for input in ["GPLv2+", "Apache 2", "bsd-3-clause", "GPL-3.0"] {
            let once = correct_license_id(input, true);
            assert_eq!(correct_license_id(&once, true), once, "{input}");
        }
    }

    // ===== Embedded exceptions =====

    #[test]
    fn test_split_embedded_exception() {
        let info = LicenseInfo {
            license: "GPL-3+-with-bison-exception".into(),
            exception: None,
        };
        assert_eq!(
            split_embedded_exception(&info, false),
            Some(ParsedExpression::license_with(
                "GPL-3.0-or-later",
                "Bison-exception-2.2"
            ))
        );
    }

    #[test]
    fn test_split_leaves_known_ids() {
        let info = LicenseInfo {
            license: "GPL-2.0-with-classpath-exception".into(),
            exception: None,
        };
        assert_eq!(split_embedded_exception(&info, false), None);
    }
}
