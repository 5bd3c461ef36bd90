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

//! Lint rules
//!
//! Every rule inspects one license leaf at a time. References
//! (`LicenseRef-*`, `DocumentRef-*:LicenseRef-*`) have no central registry
//! and are never passed to a rule.

use crate::diagnostic::{Diagnostic, DiagnosticKind};
use once_cell::sync::Lazy;
use regex::Regex;
use spdx_expr_core::licenses::reference_data;
use spdx_expr_core::{correct_license_id, LicenseInfo};

/// Configuration for a single rule
#[derive(Debug, Clone)]
pub struct RuleConfig {
    /// Whether the rule is enabled
    pub enabled: bool,
    /// Whether to treat warnings as errors
    pub error: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            error: false,
        }
    }
}

/// Trait for lint rules
pub trait LintRule: Send + Sync {
    /// Rule identifier
    fn id(&self) -> &str;

    /// Rule description
    fn description(&self) -> &str;

    /// Run the rule on a single license leaf
    fn check(&self, leaf: &LicenseInfo) -> Vec<Diagnostic>;
}

/// JSON string quoting, as used in every identifier message.
fn quoted(id: &str) -> String {
    serde_json::to_string(id).unwrap_or_else(|_| format!("\"{}\"", id))
}

/// Rule: license id must be on the SPDX license list
pub struct UnknownLicenseRule;

impl LintRule for UnknownLicenseRule {
    fn id(&self) -> &str {
        "unknown-license"
    }
    fn description(&self) -> &str {
        "License identifiers must be on the SPDX license list"
    }

    fn check(&self, leaf: &LicenseInfo) -> Vec<Diagnostic> {
        if reference_data().is_known_license_id(&leaf.license) {
            return Vec::new();
        }

        let mut diag = Diagnostic::error(
            DiagnosticKind::UnknownLicense,
            format!("Unknown SPDX license identifier: {}", quoted(&leaf.license)),
            self.id(),
        );
        let corrected = correct_license_id(&leaf.license, false);
        if corrected != leaf.license && reference_data().is_known_license_id(&corrected) {
            diag = diag.with_suggestion(format!("did you mean {}?", quoted(&corrected)));
        }
        vec![diag]
    }
}

/// Rule: exception id must be on the SPDX exception list
pub struct UnknownExceptionRule;

impl LintRule for UnknownExceptionRule {
    fn id(&self) -> &str {
        "unknown-exception"
    }
    fn description(&self) -> &str {
        "Exception identifiers must be on the SPDX exception list"
    }

    fn check(&self, leaf: &LicenseInfo) -> Vec<Diagnostic> {
        match &leaf.exception {
            Some(exception) if !reference_data().is_known_exception_id(exception) => {
                vec![Diagnostic::error(
                    DiagnosticKind::UnknownException,
                    format!("Unknown SPDX exception identifier: {}", quoted(exception)),
                    self.id(),
                )]
            }
            _ => Vec::new(),
        }
    }
}

/// Rule: a known exception must be attached to one of its related licenses
///
/// Exceptions without a related-license list may be used with any license.
pub struct ExceptionAssociationRule;

impl LintRule for ExceptionAssociationRule {
    fn id(&self) -> &str {
        "exception-association"
    }
    fn description(&self) -> &str {
        "Exceptions must be used with a license they were written for"
    }

    fn check(&self, leaf: &LicenseInfo) -> Vec<Diagnostic> {
        let Some(exception_id) = leaf.exception.as_deref() else {
            return Vec::new();
        };
        let Some(exception) = reference_data().exception(exception_id) else {
            return Vec::new();
        };

        let accepted = accepted_licenses(&exception.related_licenses);
        if accepted.is_empty() || accepted.iter().any(|id| id.eq_ignore_ascii_case(&leaf.license)) {
            return Vec::new();
        }

        vec![Diagnostic::error(
            DiagnosticKind::IncompatibleException,
            format!(
                "Exception associated with unrelated license: \"{} WITH {}\" (expected one of: {})",
                leaf.license,
                exception_id,
                accepted.join(", ")
            ),
            self.id(),
        )]
    }
}

/// Rule: identifiers marked deprecated on the SPDX lists
pub struct DeprecatedIdentifierRule;

impl LintRule for DeprecatedIdentifierRule {
    fn id(&self) -> &str {
        "deprecated-identifier"
    }
    fn description(&self) -> &str {
        "Prefer current identifiers over deprecated ones"
    }

    fn check(&self, leaf: &LicenseInfo) -> Vec<Diagnostic> {
        let data = reference_data();
        let mut diagnostics = Vec::new();

        if data.license(&leaf.license).is_some_and(|l| l.deprecated) {
            let mut diag = Diagnostic::warning(
                DiagnosticKind::DeprecatedIdentifier,
                format!("Deprecated SPDX license identifier: {}", quoted(&leaf.license)),
                self.id(),
            );
            let replacement = correct_license_id(&leaf.license, true);
            if data.license(&replacement).is_some_and(|l| !l.deprecated) {
                diag = diag.with_suggestion(format!("use {}", quoted(&replacement)));
            }
            diagnostics.push(diag);
        }

        if let Some(exception) = leaf.exception.as_deref() {
            if data.exception(exception).is_some_and(|e| e.deprecated) {
                diagnostics.push(Diagnostic::warning(
                    DiagnosticKind::DeprecatedIdentifier,
                    format!("Deprecated SPDX exception identifier: {}", quoted(exception)),
                    self.id(),
                ));
            }
        }

        diagnostics
    }
}

static BARE_GPL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[AL]?GPL-\d(\.\d)+$").unwrap());
static OR_LATER_GPL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([AL]?GPL)-(\d(?:\.\d)+)-(?:or|and)-later$").unwrap());
static GPL_FAMILY_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([AL]?GPL)-(\d(?:\.\d)+)(?:-or-later|-only|\+)?$").unwrap());

/// License ids an exception with these related licenses accepts, in
/// list order and possibly repeated.
///
/// A bare GPL-family version also accepts its `-only` and `-or-later`
/// forms. An `-or-later` (or `-and-later`) relation accepts every id of
/// the same family at that version or above.
pub fn accepted_licenses<S: AsRef<str>>(related: &[S]) -> Vec<String> {
    let mut ids = Vec::new();
    for license in related {
        let license = license.as_ref();
        ids.push(license.to_string());

        if BARE_GPL.is_match(license) {
            ids.push(format!("{license}-only"));
            ids.push(format!("{license}-or-later"));
        }

        if let Some(caps) = OR_LATER_GPL.captures(license) {
            let family = &caps[1];
            let minimum = version_parts(&caps[2]);
            ids.extend(
                reference_data()
                    .license_ids()
                    .iter()
                    .filter(|id| {
                        GPL_FAMILY_ID.captures(id).is_some_and(|c| {
                            &c[1] == family && version_parts(&c[2]) >= minimum
                        })
                    })
                    .cloned(),
            );
        }
    }
    ids
}

fn version_parts(version: &str) -> Vec<u32> {
    version.split('.').filter_map(|part| part.parse().ok()).collect()
}

/// The rules every runner starts with, in reporting order.
pub fn default_rules() -> Vec<Box<dyn LintRule>> {
    vec![
        Box::new(UnknownLicenseRule),
        Box::new(UnknownExceptionRule),
        Box::new(ExceptionAssociationRule),
        Box::new(DeprecatedIdentifierRule),
    ]
}
