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

//! Canonical form for SPDX license expressions.
//!
//! Two expressions that mean the same license choice render to the same
//! string, which makes the canonical form suitable for comparison,
//! de-duplication and storage.
//!
//! Canonicalization:
//!
//! - parses the input (liberal mode by default, so identifiers are corrected)
//! - orders the two operands of every conjunction: licenses before license
//!   references, both before nested conjunctions, ties alphabetically
//! - drops redundant outer parentheses and keeps every grouping that
//!   nesting requires
//!
//! Normalization is best-effort: input that cannot be parsed is returned
//! unchanged.
//!
//! # Examples
//!
//! ```
//! use spdx_expr_c14n::{normalize, normalize_with_config, NormalizeConfig};
//!
//! assert_eq!(normalize("(MIT OR Apache-2.0)"), "Apache-2.0 OR MIT");
//! assert_eq!(normalize("mit and (isc or apache 2)"), "MIT AND (Apache-2.0 OR ISC)");
//! assert_eq!(normalize("NOT; AN EXPRESSION"), "NOT; AN EXPRESSION");
//!
//! let config = NormalizeConfig::new().with_sort_operands(false);
//! assert_eq!(normalize_with_config("(MIT OR Apache-2.0)", &config), "MIT OR Apache-2.0");
//! ```

mod config;
mod writer;

pub use config::{NormalizeConfig, NormalizeConfigBuilder};
pub use writer::{sort_operands, ExpressionWriter};

use spdx_expr_core::{parse, ParsedExpression};

/// Normalize an SPDX expression with the default configuration.
pub fn normalize(input: &str) -> String {
    normalize_with_config(input, &NormalizeConfig::default())
}

/// Normalize an SPDX expression.
///
/// Returns `input` unchanged when it cannot be parsed.
pub fn normalize_with_config(input: &str, config: &NormalizeConfig) -> String {
    match parse(input, &config.parse_options) {
        Ok(expr) => render(&expr, config),
        Err(err) => {
            tracing::debug!(input, error = %err, "not normalizing unparseable expression");
            input.to_string()
        }
    }
}

/// Render an already parsed expression in canonical form.
pub fn render(expr: &ParsedExpression, config: &NormalizeConfig) -> String {
    ExpressionWriter::new(config.clone()).write_expression(expr)
}
