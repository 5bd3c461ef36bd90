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

//! # spdx-expr - SPDX License Expressions
//!
//! Parse, validate and normalize SPDX license expressions such as
//! `MIT OR (Apache-2.0 AND GPL-2.0-only WITH Classpath-exception-2.0)`.
//! Free-form license names the way they appear in package metadata
//! ("Apache License 2.0", "GNU GPL v3 or later", "GPL-2.0 w/ Classpath
//! exception") are mapped onto official SPDX identifiers.
//!
//! ## Quick Start
//!
//! ```rust
//! use spdx_expr::{normalize, parse, validate, ParsedExpression};
//!
//! let expr = parse("Apache License 2.0 OR mit").unwrap();
//! assert_eq!(
//!     expr,
//!     ParsedExpression::or(
//!         ParsedExpression::license("Apache-2.0"),
//!         ParsedExpression::license("MIT"),
//!     )
//! );
//!
//! assert!(validate("GPL-2.0-only WITH Classpath-exception-2.0").valid);
//! assert!(!validate("LGPL-3.0 WITH FLTK-exception").valid);
//!
//! assert_eq!(normalize("(MIT OR Apache-2.0)"), "Apache-2.0 OR MIT");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: parser, data model, identifier correction, reference data
//! - [`c14n`](mod@c14n): canonical rendering
//! - [`lint`](mod@lint): validation as configurable lint rules

pub use spdx_expr_core::{
    is_spdx_syntax, Conjunction, ConjunctionInfo, LicenseInfo, LicenseRef, Limits, ParseDetails,
    ParseOptions, ParseOptionsBuilder, ParseStrategy, ParsedExpression, SpdxError, SpdxErrorKind,
    SpdxResult,
};
pub use spdx_expr_lint::ValidationResult;

pub mod core {
    //! Parser, data model and identifier correction
    pub use spdx_expr_core::*;
}

pub mod c14n {
    //! Canonical rendering
    pub use spdx_expr_c14n::{
        normalize, normalize_with_config, render, sort_operands, ExpressionWriter,
        NormalizeConfig, NormalizeConfigBuilder,
    };
}

pub mod lint {
    //! Validation and linting
    pub use spdx_expr_lint::{
        accepted_licenses, default_rules, lint, lint_input, lint_with_config, validate,
        validate_with, validation_parse_options, Diagnostic, DiagnosticKind, LintConfig,
        LintConfigError, LintRule, LintRunner, RuleConfig, Severity, ValidationResult,
    };
}

/// Parse an expression in liberal mode without GPL upgrades.
///
/// Fails only when no strategy derives an expression at all; unknown
/// identifiers are kept and reported by [`validate`].
///
/// # Examples
///
/// ```rust
/// use spdx_expr::{parse, ParsedExpression};
///
/// assert_eq!(parse("mit").unwrap(), ParsedExpression::license("MIT"));
/// assert!(parse("MIT (OR Apache-2.0)").is_err());
/// ```
#[inline]
pub fn parse(input: &str) -> SpdxResult<ParsedExpression> {
    spdx_expr_core::parse(input, &ParseOptions::default())
}

/// Parse an expression with explicit options.
///
/// # Examples
///
/// ```rust
/// use spdx_expr::{parse_with, ParseOptions, ParsedExpression};
///
/// let options = ParseOptions::builder().upgrade_gpl_variants(true).build();
/// assert_eq!(
///     parse_with("LGPL-2.0", &options).unwrap(),
///     ParsedExpression::license("LGPL-2.0-only")
/// );
/// assert!(parse_with("mit", &ParseOptions::strict()).is_err());
/// ```
#[inline]
pub fn parse_with(input: &str, options: &ParseOptions) -> SpdxResult<ParsedExpression> {
    spdx_expr_core::parse(input, options)
}

/// Parse an expression, reporting failure as data instead of `Err`.
#[inline]
pub fn parse_with_details(input: &str, options: &ParseOptions) -> ParseDetails {
    spdx_expr_core::parse_with_details(input, options)
}

/// Validate identifiers and exception associations of an expression.
#[inline]
pub fn validate(input: &str) -> ValidationResult {
    spdx_expr_lint::validate(input)
}

/// The canonical form of an expression; unparseable input is returned
/// unchanged.
#[inline]
pub fn normalize(input: &str) -> String {
    spdx_expr_c14n::normalize(input)
}
