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

//! SPDX expression linting and validation
//!
//! Checks the identifiers of a parsed expression against the SPDX license
//! and exception lists, and every exception against the licenses it was
//! written for.
//!
//! ## Quick Start
//!
//! ```rust
//! use spdx_expr_lint::validate;
//!
//! let result = validate("MIT OR GPL-2.0 WITH Classpath-exception-2.0");
//! assert!(result.valid);
//!
//! let result = validate("Apache-2.4");
//! assert_eq!(result.errors, vec!["Unknown SPDX license identifier: \"Apache-2.4\""]);
//! ```
//!
//! ## Custom Configuration
//!
//! ```rust
//! use spdx_expr_core::ParsedExpression;
//! use spdx_expr_lint::{lint_with_config, LintConfig, Severity};
//!
//! let mut config = LintConfig::default();
//! config.set_rule_error("deprecated-identifier");
//!
//! let diagnostics = lint_with_config(&ParsedExpression::license("GPL-2.0+"), config)?;
//! assert_eq!(diagnostics[0].severity(), Severity::Error);
//! # Ok::<(), spdx_expr_lint::LintConfigError>(())
//! ```
//!
//! ## Custom Rules
//!
//! ```rust
//! use spdx_expr_core::{LicenseInfo, ParsedExpression};
//! use spdx_expr_lint::{Diagnostic, DiagnosticKind, LintConfig, LintRule, LintRunner};
//!
//! struct NoExceptions;
//!
//! impl LintRule for NoExceptions {
//!     fn id(&self) -> &str { "no-exceptions" }
//!     fn description(&self) -> &str { "Exceptions are not allowed" }
//!     fn check(&self, leaf: &LicenseInfo) -> Vec<Diagnostic> {
//!         match &leaf.exception {
//!             Some(_) => vec![Diagnostic::warning(
//!                 DiagnosticKind::Custom("no-exceptions".into()),
//!                 "exception used",
//!                 self.id(),
//!             )],
//!             None => vec![],
//!         }
//!     }
//! }
//!
//! let mut runner = LintRunner::new(LintConfig::default())?;
//! runner.add_rule(Box::new(NoExceptions));
//!
//! let expr = ParsedExpression::license_with("GPL-2.0-only", "Classpath-exception-2.0");
//! assert_eq!(runner.run(&expr).len(), 1);
//! # Ok::<(), spdx_expr_lint::LintConfigError>(())
//! ```

mod diagnostic;
mod error;
mod rules;
mod runner;

pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};
pub use error::LintConfigError;
pub use rules::{
    accepted_licenses, default_rules, DeprecatedIdentifierRule, ExceptionAssociationRule, LintRule,
    RuleConfig, UnknownExceptionRule, UnknownLicenseRule,
};
pub use runner::{LintConfig, LintRunner};

use serde::{Deserialize, Serialize};
use spdx_expr_core::{parse, ParseOptions, ParsedExpression};

/// Message for input that is empty or only whitespace.
pub const EMPTY_INPUT_MESSAGE: &str = "Unknown SPDX identifier: \"\"";

/// Outcome of [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        let errors: Vec<String> = diagnostics
            .into_iter()
            .filter(|d| d.severity() == Severity::Error)
            .map(|d| d.message().to_string())
            .collect();
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Run all default lint rules on an expression
pub fn lint(expr: &ParsedExpression) -> Vec<Diagnostic> {
    LintRunner::default().run(expr)
}

/// Run lint with custom configuration
pub fn lint_with_config(
    expr: &ParsedExpression,
    config: LintConfig,
) -> Result<Vec<Diagnostic>, LintConfigError> {
    let runner = LintRunner::new(config)?;
    Ok(runner.run(expr))
}

/// Parse `input` and lint the result.
///
/// Empty input and parse failures come back as a single
/// [`DiagnosticKind::Syntax`] error from the `syntax` rule. The
/// configuration is checked first, whatever the input.
pub fn lint_input(
    input: &str,
    options: &ParseOptions,
    config: LintConfig,
) -> Result<Vec<Diagnostic>, LintConfigError> {
    let runner = LintRunner::new(config)?;
    Ok(lint_input_with(&runner, input, options))
}

fn lint_input_with(runner: &LintRunner, input: &str, options: &ParseOptions) -> Vec<Diagnostic> {
    if input.trim().is_empty() {
        return vec![Diagnostic::error(DiagnosticKind::Syntax, EMPTY_INPUT_MESSAGE, "syntax")];
    }

    match parse(input, options) {
        Ok(expr) => runner.run(&expr),
        Err(error) => {
            tracing::debug!(input, kind = %error.kind, "validation stopped at parse error");
            vec![Diagnostic::error(DiagnosticKind::Syntax, error.message, "syntax")]
        }
    }
}

/// Parse options used by [`validate`]: liberal, with GPL-family ids
/// upgraded to their `-only`/`-or-later` forms.
pub fn validation_parse_options() -> ParseOptions {
    ParseOptions::builder().upgrade_gpl_variants(true).build()
}

/// Validate an SPDX expression.
///
/// Unknown identifiers and exceptions attached to unrelated licenses are
/// reported; they never stop [`spdx_expr_core::parse`] itself. Only
/// error-severity diagnostics count, in expression order.
pub fn validate(input: &str) -> ValidationResult {
    ValidationResult::from_diagnostics(lint_input_with(
        &LintRunner::default(),
        input,
        &validation_parse_options(),
    ))
}

/// [`validate`] with explicit parse options and lint configuration.
pub fn validate_with(
    input: &str,
    options: &ParseOptions,
    config: LintConfig,
) -> Result<ValidationResult, LintConfigError> {
    lint_input(input, options, config).map(ValidationResult::from_diagnostics)
}
