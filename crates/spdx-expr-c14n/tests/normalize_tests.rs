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

//! Normalization of whole expressions.

use spdx_expr_c14n::{normalize, normalize_with_config, NormalizeConfig};

// ==================== Invalid input ====================

#[test]
fn test_invalid_expression_is_returned_as_is() {
    assert_eq!(normalize("NOT A VALID EXPRESSION"), "NOT A VALID EXPRESSION");
    assert_eq!(
        normalize("NOT; A \nVALID', EXPRESSION"),
        "NOT; A \nVALID', EXPRESSION"
    );
    assert_eq!(normalize(""), "");
}

#[test]
fn test_strict_config_returns_liberal_input_unchanged() {
    let config = NormalizeConfig::new().with_strict(true);
    assert_eq!(normalize_with_config("mit or isc", &config), "mit or isc");
    assert_eq!(normalize_with_config("MIT OR ISC", &config), "ISC OR MIT");
}

// ==================== Parentheses ====================

#[test]
fn test_outer_parentheses_are_removed() {
    assert_eq!(normalize("MIT"), "MIT");
    assert_eq!(normalize("(MIT)"), "MIT");
    assert_eq!(
        normalize("(GPL-3.0-only WITH Autoconf-exception-2.0)"),
        "GPL-3.0-only WITH Autoconf-exception-2.0"
    );
    assert_eq!(normalize("(Apache-2.0 OR MIT)"), "Apache-2.0 OR MIT");
}

#[test]
fn test_inner_parentheses_are_kept() {
    assert_eq!(
        normalize("(Apache-2.0 OR (BSD-2-Clause AND MIT))"),
        "Apache-2.0 OR (BSD-2-Clause AND MIT)"
    );
    assert_eq!(
        normalize("(Apache-2.0 OR (MIT AND (BSD-2-Clause OR BSD-3-Clause)))"),
        "Apache-2.0 OR (MIT AND (BSD-2-Clause OR BSD-3-Clause))"
    );
}

#[test]
fn test_implicit_grouping_is_made_explicit() {
    assert_eq!(normalize("MIT OR ISC OR Apache-2.0"), "MIT OR (Apache-2.0 OR ISC)");
}

// ==================== Ordering ====================

#[test]
fn test_alphabetical_order() {
    assert_eq!(normalize("Apache-2.0 OR MIT"), "Apache-2.0 OR MIT");
    assert_eq!(normalize("MIT OR Apache-2.0"), "Apache-2.0 OR MIT");
    assert_eq!(normalize("alf AND (charlie OR bob)"), "alf AND (bob OR charlie)");
}

#[test]
fn test_simple_before_compound() {
    assert_eq!(normalize("a AND (b OR c)"), "a AND (b OR c)");
    assert_eq!(normalize("c AND (a OR b)"), "c AND (a OR b)");
    assert!(normalize("(a OR b) AND c").starts_with("c AND "));
    assert!(normalize("(c OR b) AND a").starts_with("a AND"));
}

#[test]
fn test_licenses_before_references() {
    assert_eq!(
        normalize("SomeLicense AND DocumentRef-X:LicenseRef-Y"),
        "SomeLicense AND DocumentRef-X:LicenseRef-Y"
    );
    assert_eq!(normalize("SomeLicense AND LicenseRef-Z"), "SomeLicense AND LicenseRef-Z");
    assert_eq!(
        normalize("DocumentRef-X:LicenseRef-Y AND SomeLicense"),
        "SomeLicense AND DocumentRef-X:LicenseRef-Y"
    );
    assert_eq!(normalize("LicenseRef-Z AND SomeLicense"), "SomeLicense AND LicenseRef-Z");
}

#[test]
fn test_reference_exception_not_kept() {
    assert_eq!(normalize("LicenseRef-a WITH foo"), "LicenseRef-a");
    assert_eq!(normalize("MIT OR LicenseRef-a WITH foo"), "MIT OR LicenseRef-a");
}

// ==================== Correction ====================

#[test]
fn test_identifiers_are_corrected() {
    assert_eq!(normalize("apache 2 or mit"), "Apache-2.0 OR MIT");
    assert_eq!(
        normalize("GPL-2.0 w/ Classpath exception 2.0"),
        "GPL-2.0 WITH Classpath-exception-2.0"
    );
    let config = NormalizeConfig::new().with_upgrade_gpl_variants(true);
    assert_eq!(normalize_with_config("GPL-2.0 OR MIT", &config), "GPL-2.0-only OR MIT");
}
