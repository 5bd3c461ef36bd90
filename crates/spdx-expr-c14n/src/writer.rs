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

//! Canonical expression writer.
//!
//! Orders conjunction operands and renders the expression with the
//! fewest parentheses that keep its grouping.

use std::cmp::Ordering;

use crate::config::NormalizeConfig;
use spdx_expr_core::{ConjunctionInfo, LicenseInfo, LicenseRef, ParsedExpression};

// ==================== Sort Key Constants ====================

/// Key prefix for license leaves; sorts before references.
const LICENSE_KEY_PREFIX: &str = "_0_";

/// Key prefix for license references.
const REFERENCE_KEY_PREFIX: &str = "_1_";

/// Initial buffer capacity for rendered output.
const INITIAL_OUTPUT_BUFFER_CAPACITY: usize = 128;

/// Writer for canonical SPDX expression text.
pub struct ExpressionWriter {
    config: NormalizeConfig,
    output: String,
}

impl ExpressionWriter {
    /// Creates a new writer with the given configuration.
    pub fn new(config: NormalizeConfig) -> Self {
        Self {
            config,
            output: String::with_capacity(INITIAL_OUTPUT_BUFFER_CAPACITY),
        }
    }

    /// Render `expr` in canonical form.
    ///
    /// The outermost expression is never parenthesized; a conjunction
    /// nested in another conjunction always is.
    pub fn write_expression(&mut self, expr: &ParsedExpression) -> String {
        self.output.clear();
        if self.config.sort_operands {
            let sorted = sort_operands(expr);
            self.write_node(&sorted, false);
        } else {
            self.write_node(expr, false);
        }
        std::mem::take(&mut self.output)
    }

    fn write_node(&mut self, expr: &ParsedExpression, inner: bool) {
        match expr {
            ParsedExpression::License(info) => self.write_license(info),
            ParsedExpression::LicenseRef(reference) => self.write_reference(reference),
            ParsedExpression::Conjunction(conj) => self.write_conjunction(conj, inner),
        }
    }

    fn write_license(&mut self, info: &LicenseInfo) {
        self.output.push_str(&info.license);
        if let Some(exception) = &info.exception {
            self.output.push_str(" WITH ");
            self.output.push_str(exception);
        }
    }

    fn write_reference(&mut self, reference: &LicenseRef) {
        if let Some(document) = &reference.document_ref {
            self.output.push_str(document);
            self.output.push(':');
        }
        self.output.push_str(&reference.license_ref);
    }

    fn write_conjunction(&mut self, conj: &ConjunctionInfo, inner: bool) {
        if inner {
            self.output.push('(');
        }
        self.write_node(&conj.left, true);
        self.output.push(' ');
        self.output.push_str(conj.conjunction.keyword());
        self.output.push(' ');
        self.write_node(&conj.right, true);
        if inner {
            self.output.push(')');
        }
    }
}

/// Render without sorting or outer parentheses. Used for sort keys.
fn render_plain(expr: &ParsedExpression) -> String {
    let config = NormalizeConfig::new().with_sort_operands(false);
    ExpressionWriter::new(config).write_expression(expr)
}

/// Sort key of a subtree. Independent of the order of operands inside
/// the subtree, so `A OR B` and `B OR A` share a key.
pub(crate) fn sort_key(expr: &ParsedExpression) -> String {
    match expr {
        ParsedExpression::License(_) => format!("{LICENSE_KEY_PREFIX}{}", render_plain(expr)),
        ParsedExpression::LicenseRef(_) => format!("{REFERENCE_KEY_PREFIX}{}", render_plain(expr)),
        ParsedExpression::Conjunction(conj) => {
            let mut children = [sort_key(&conj.left), sort_key(&conj.right)];
            children.sort_by(|a, b| compare_keys(a, b));
            format!("{}({},{})", conj.conjunction.as_str(), children[0], children[1])
        }
    }
}

/// Case-insensitive order; among keys equal but for case, lower case
/// sorts first.
pub(crate) fn compare_keys(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// A new tree with the operands of every conjunction in canonical order.
pub fn sort_operands(expr: &ParsedExpression) -> ParsedExpression {
    match expr {
        ParsedExpression::Conjunction(conj) => {
            let swap =
                compare_keys(&sort_key(&conj.left), &sort_key(&conj.right)) == Ordering::Greater;
            let (left, right) = if swap {
                (&conj.right, &conj.left)
            } else {
                (&conj.left, &conj.right)
            };
            ParsedExpression::conjunction(
                sort_operands(left),
                conj.conjunction,
                sort_operands(right),
            )
        }
        other => other.clone(),
    }
}
