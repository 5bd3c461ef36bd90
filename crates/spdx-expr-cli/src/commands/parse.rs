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

//! Parse command - expression tree plus validation errors

use crate::error::CliError;
use serde::Serialize;
use spdx_expr_core::{ParseOptions, ParsedExpression};

/// JSON document printed by the parse command.
#[derive(Debug, Serialize)]
pub struct ParseOutput {
    /// The parsed tree, `null` when parsing failed
    pub expression: Option<ParsedExpression>,
    /// Validation errors of the input, or the parse error
    pub errors: Vec<String>,
}

/// Parse `expression` and render the tree and its validation errors as
/// pretty JSON.
///
/// Validation always runs with its own settings, so `--strict` and
/// `--upgrade` only affect the printed tree.
///
/// # Examples
///
/// ```
/// use spdx_expr_cli::commands::parse;
///
/// let json = parse("mit", false, false).unwrap();
/// assert!(json.contains("\"license\": \"MIT\""));
/// ```
pub fn parse(expression: &str, strict: bool, upgrade: bool) -> Result<String, CliError> {
    let options = ParseOptions::builder()
        .strict(strict)
        .upgrade_gpl_variants(upgrade)
        .build();

    let output = match spdx_expr_core::parse(expression, &options) {
        Ok(tree) => ParseOutput {
            expression: Some(tree),
            errors: spdx_expr_lint::validate(expression).errors,
        },
        Err(err) => ParseOutput {
            expression: None,
            errors: vec![err.message],
        },
    };

    Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn run(expression: &str, strict: bool, upgrade: bool) -> Value {
        serde_json::from_str(&parse(expression, strict, upgrade).unwrap()).unwrap()
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!(
            run("MIT OR Apache-2.0", false, false),
            json!({
                "expression": {
                    "left": {"license": "MIT"},
                    "conjunction": "or",
                    "right": {"license": "Apache-2.0"}
                },
                "errors": []
            })
        );
    }

    #[test]
    fn test_parse_reports_validation_errors() {
        let out = run("No-Such-License", false, false);
        assert_eq!(out["expression"], json!({"license": "No-Such-License"}));
        assert_eq!(
            out["errors"],
            json!(["Unknown SPDX license identifier: \"No-Such-License\""])
        );
    }

    #[test]
    fn test_parse_strict_failure() {
        let out = run("mit", true, false);
        assert_eq!(out["expression"], Value::Null);
        assert_eq!(out["errors"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_parse_upgrade() {
        let out = run("GPL-2.0+", false, true);
        assert_eq!(out["expression"], json!({"license": "GPL-2.0-or-later"}));
        let out = run("GPL-2.0", false, true);
        assert_eq!(out["expression"], json!({"license": "GPL-2.0-only"}));
    }
}
