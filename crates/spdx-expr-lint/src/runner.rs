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

//! Lint runner

use crate::diagnostic::{Diagnostic, DiagnosticKind, Severity};
use crate::error::LintConfigError;
use crate::rules::{default_rules, LintRule, RuleConfig};
use spdx_expr_core::ParsedExpression;
use std::collections::HashMap;

/// Maximum number of diagnostics to collect before stopping.
///
/// Each leaf can produce a handful of diagnostics and the expression length
/// is already bounded by the parser, so this is only reached with custom
/// limits or custom rules.
const MAX_DIAGNOSTICS: usize = 10_000;

const MAX_RULE_ID_LENGTH: usize = 100;
const MAX_RULES: usize = 1000;

/// Configuration for the lint runner
#[derive(Debug, Clone)]
pub struct LintConfig {
    /// Rule configurations by rule ID; rules not listed run with defaults
    pub rules: HashMap<String, RuleConfig>,
    /// Minimum severity to report
    pub min_severity: Severity,
    /// Maximum number of diagnostics to collect (default: 10,000)
    pub max_diagnostics: usize,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            rules: HashMap::new(),
            min_severity: Severity::Hint,
            max_diagnostics: MAX_DIAGNOSTICS,
        }
    }
}

impl LintConfig {
    /// Validate configuration (checks rule ID lengths and limits).
    pub fn validate(&self) -> Result<(), LintConfigError> {
        if self.rules.len() > MAX_RULES {
            return Err(LintConfigError::TooManyRules {
                count: self.rules.len(),
                max: MAX_RULES,
            });
        }

        for id in self.rules.keys() {
            if id.is_empty() {
                return Err(LintConfigError::EmptyRuleId);
            }
            if id.len() > MAX_RULE_ID_LENGTH {
                return Err(LintConfigError::RuleIdTooLong {
                    length: id.len(),
                    max: MAX_RULE_ID_LENGTH,
                });
            }
        }

        if self.max_diagnostics == 0 {
            return Err(LintConfigError::ZeroDiagnosticLimit);
        }

        Ok(())
    }

    /// Disable a specific rule
    pub fn disable_rule(&mut self, rule_id: &str) {
        self.rules.insert(
            rule_id.to_string(),
            RuleConfig {
                enabled: false,
                error: false,
            },
        );
    }

    /// Enable a specific rule
    pub fn enable_rule(&mut self, rule_id: &str) {
        self.rules.insert(
            rule_id.to_string(),
            RuleConfig {
                enabled: true,
                error: false,
            },
        );
    }

    /// Set a rule to error level
    pub fn set_rule_error(&mut self, rule_id: &str) {
        self.rules.insert(
            rule_id.to_string(),
            RuleConfig {
                enabled: true,
                error: true,
            },
        );
    }
}

/// Lint runner
pub struct LintRunner {
    config: LintConfig,
    rules: Vec<Box<dyn LintRule>>,
}

impl Default for LintRunner {
    fn default() -> Self {
        Self {
            config: LintConfig::default(),
            rules: default_rules(),
        }
    }
}

impl LintRunner {
    /// Create a new lint runner with default rules.
    ///
    /// Fails when `config` does not pass [`LintConfig::validate`].
    pub fn new(config: LintConfig) -> Result<Self, LintConfigError> {
        Self::with_rules(config, default_rules())
    }

    /// Create a lint runner with custom rules
    pub fn with_rules(
        config: LintConfig,
        rules: Vec<Box<dyn LintRule>>,
    ) -> Result<Self, LintConfigError> {
        config.validate()?;
        Ok(Self { config, rules })
    }

    /// Add a custom rule
    pub fn add_rule(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }

    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Run all enabled rules on every license leaf of `expr`.
    ///
    /// Diagnostics come out errors first; within one severity they keep
    /// leaf order, and for one leaf the order the rules were registered in.
    /// Once `config.max_diagnostics` is reached collection stops and a
    /// `diagnostic-limit-exceeded` warning is appended.
    pub fn run(&self, expr: &ParsedExpression) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut limit_exceeded = false;

        'leaves: for (index, leaf) in expr.licenses().into_iter().enumerate() {
            for rule in &self.rules {
                let rule_config = self.config.rules.get(rule.id()).cloned().unwrap_or_default();
                if !rule_config.enabled {
                    continue;
                }

                for mut diag in rule.check(leaf) {
                    if rule_config.error && diag.severity() == Severity::Warning {
                        diag.escalate_to_error();
                    }
                    if diag.severity() < self.config.min_severity {
                        continue;
                    }
                    if diagnostics.len() >= self.config.max_diagnostics {
                        limit_exceeded = true;
                        break 'leaves;
                    }
                    diagnostics.push(diag.with_leaf(index));
                }
            }
        }

        if limit_exceeded {
            diagnostics.push(Diagnostic::warning(
                DiagnosticKind::Custom("diagnostic-limit-exceeded".to_string()),
                format!(
                    "Diagnostic limit of {} exceeded. Further diagnostics have been suppressed.",
                    self.config.max_diagnostics
                ),
                "lint-runner",
            ));
        }

        // Stable, so leaf order survives within each severity
        diagnostics.sort_by(|a, b| b.severity().cmp(&a.severity()));

        tracing::debug!(count = diagnostics.len(), limit_exceeded, "lint finished");
        diagnostics
    }

    /// Check if any errors were found
    pub fn has_errors(&self, diagnostics: &[Diagnostic]) -> bool {
        diagnostics.iter().any(|d| d.severity() == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spdx_expr_core::LicenseInfo;

    fn or(left: ParsedExpression, right: ParsedExpression) -> ParsedExpression {
        ParsedExpression::or(left, right)
    }

    // ==================== LintConfig tests ====================

    #[test]
    fn test_lint_config_default() {
        let config = LintConfig::default();
        assert_eq!(config.min_severity, Severity::Hint);
        assert_eq!(config.max_diagnostics, MAX_DIAGNOSTICS);
        assert!(config.rules.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rule_toggles() {
        let mut config = LintConfig::default();
        config.disable_rule("unknown-license");
        assert!(!config.rules["unknown-license"].enabled);

        config.enable_rule("unknown-license");
        assert!(config.rules["unknown-license"].enabled);
        assert!(!config.rules["unknown-license"].error);

        config.set_rule_error("deprecated-identifier");
        assert!(config.rules["deprecated-identifier"].enabled);
        assert!(config.rules["deprecated-identifier"].error);
    }

    #[test]
    fn test_config_validate_rejects() {
        let mut config = LintConfig::default();
        config.disable_rule("");
        assert_eq!(config.validate(), Err(LintConfigError::EmptyRuleId));

        let mut config = LintConfig::default();
        config.disable_rule(&"x".repeat(101));
        assert_eq!(
            config.validate(),
            Err(LintConfigError::RuleIdTooLong {
                length: 101,
                max: MAX_RULE_ID_LENGTH
            })
        );

        let config = LintConfig {
            max_diagnostics: 0,
            ..LintConfig::default()
        };
        assert_eq!(config.validate(), Err(LintConfigError::ZeroDiagnosticLimit));
    }

    #[test]
    fn test_runner_rejects_invalid_config() {
        let mut config = LintConfig::default();
        config.set_rule_error("");
        assert!(matches!(LintRunner::new(config), Err(LintConfigError::EmptyRuleId)));

        let mut config = LintConfig::default();
        for i in 0..=MAX_RULES {
            config.disable_rule(&format!("rule-{i}"));
        }
        assert!(matches!(
            LintRunner::with_rules(config, Vec::new()),
            Err(LintConfigError::TooManyRules { count: 1001, max: 1000 })
        ));
    }

    // ==================== LintRunner tests ====================

    #[test]
    fn test_run_clean_expression() {
        let runner = LintRunner::default();
        let expr = or(ParsedExpression::license("MIT"), ParsedExpression::license("Apache-2.0"));
        assert!(runner.run(&expr).is_empty());
    }

    #[test]
    fn test_run_skips_references() {
        let runner = LintRunner::default();
        let expr = ParsedExpression::license_ref(Some("DocumentRef-Foo".into()), "LicenseRef-Bar");
        assert!(runner.run(&expr).is_empty());
    }

    #[test]
    fn test_run_leaf_order_and_index() {
        let runner = LintRunner::default();
        let expr = or(
            ParsedExpression::license_with("Foo", "Bar"),
            ParsedExpression::license("Baz"),
        );
        let diags = runner.run(&expr);
        let messages: Vec<_> = diags.iter().map(|d| d.message()).collect();
        assert_eq!(
            messages,
            vec![
                "Unknown SPDX license identifier: \"Foo\"",
                "Unknown SPDX exception identifier: \"Bar\"",
                "Unknown SPDX license identifier: \"Baz\"",
            ]
        );
        assert_eq!(diags[0].leaf(), Some(0));
        assert_eq!(diags[2].leaf(), Some(1));
    }

    #[test]
    fn test_run_errors_before_warnings() {
        let runner = LintRunner::default();
        let expr = or(ParsedExpression::license("GPL-2.0+"), ParsedExpression::license("Foo"));
        let diags = runner.run(&expr);
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].severity(), Severity::Error);
        assert_eq!(diags[1].severity(), Severity::Warning);
        assert!(runner.has_errors(&diags));
    }

    #[test]
    fn test_run_disabled_rule() {
        let mut config = LintConfig::default();
        config.disable_rule("unknown-license");
        let runner = LintRunner::new(config).unwrap();
        assert!(runner.run(&ParsedExpression::license("Foo")).is_empty());
    }

    #[test]
    fn test_run_escalation() {
        let mut config = LintConfig::default();
        config.set_rule_error("deprecated-identifier");
        let runner = LintRunner::new(config).unwrap();
        let diags = runner.run(&ParsedExpression::license("GPL-2.0+"));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity(), Severity::Error);
    }

    #[test]
    fn test_run_min_severity() {
        let config = LintConfig {
            min_severity: Severity::Error,
            ..LintConfig::default()
        };
        let runner = LintRunner::new(config).unwrap();
        assert!(runner.run(&ParsedExpression::license("GPL-2.0+")).is_empty());
    }

    #[test]
    fn test_run_diagnostic_limit() {
        let config = LintConfig {
            max_diagnostics: 2,
            ..LintConfig::default()
        };
        let runner = LintRunner::new(config).unwrap();
        let expr = or(
            ParsedExpression::license("A1"),
            or(ParsedExpression::license("A2"), ParsedExpression::license("A3")),
        );
        let diags = runner.run(&expr);
        assert_eq!(diags.len(), 3);
        assert_eq!(
            diags[2].kind(),
            &DiagnosticKind::Custom("diagnostic-limit-exceeded".to_string())
        );
    }

    #[test]
    fn test_custom_rule() {
        struct NoMit;
        impl LintRule for NoMit {
            fn id(&self) -> &str {
                "no-mit"
            }
            fn description(&self) -> &str {
                "MIT is not allowed here"
            }
            fn check(&self, leaf: &LicenseInfo) -> Vec<Diagnostic> {
                if leaf.license == "MIT" {
                    vec![Diagnostic::hint(
                        DiagnosticKind::Custom("no-mit".into()),
                        "MIT found",
                        self.id(),
                    )]
                } else {
                    Vec::new()
                }
            }
        }

        let runner =
            LintRunner::with_rules(LintConfig::default(), vec![Box::new(NoMit)]).unwrap();
        let diags = runner.run(&or(
            ParsedExpression::license("MIT"),
            ParsedExpression::license("Foo"),
        ));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].rule_id(), "no-mit");
        assert_eq!(diags[0].severity(), Severity::Hint);
    }
}
