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

//! The parse orchestrator.
//!
//! Input is first cleaned and parsed with the strict grammar. Unless
//! strict-only mode was asked for, failures fall back to the liberal
//! grammar with identifier correction, then to matching the whole input
//! against full license names, and finally to the identifier inside a
//! trailing parenthetical (`Some License (MIT)`).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::correct::{correct_expression, find_license_by_name};
use crate::error::{SpdxError, SpdxResult};
use crate::expression::ParsedExpression;
use crate::grammar::liberal::LiberalGrammar;
use crate::grammar::strict::StrictGrammar;
use crate::grammar::{self, GrammarOutcome};
use crate::licenses::reference_data;
use crate::limits::Limits;
use crate::reduce::{reduce_liberal, reduce_strict};

/// Text before a trailing parenthetical must be shorter than this for the
/// parenthetical to be tried on its own. Longer than any license name.
pub const PARENTHETICAL_PRETEXT_LIMIT: usize = 100;

/// Bound on nested fallbacks; each level resolves to a canonical id, so
/// real inputs never get close.
const MAX_FALLBACK_DEPTH: usize = 4;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static W_SLASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+[wW]/\s*").unwrap());
static CDDL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)Common\s+Development\s+and\s+Distribution\s+License(?:\s*\(CDDL\))?",
        r"(?:,?\s*(?:version\s*|v)?(1\.[01]))?",
    ))
    .unwrap()
});
static LIBRARY_OR_LESSER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)GNU\s+Library\s+or\s+Lesser\s+General\s+Public\s+License(?:\s*\(LGPL\))?")
        .unwrap()
});
static PARENTHETICAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+?)\s*\((.+)\)$").unwrap());

/// Parse options.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Accept only SPDX-conformant syntax and identifiers.
    pub strict_syntax: bool,
    /// Rewrite ids that have an explicit `-only` form (`GPL-2.0` to
    /// `GPL-2.0-only`).
    pub upgrade_gpl_variants: bool,
    /// Input limits.
    pub limits: Limits,
}

impl ParseOptions {
    /// Create a new builder for ParseOptions.
    ///
    /// # Examples
    ///
    /// ```
    /// use spdx_expr_core::ParseOptions;
    ///
    /// let opts = ParseOptions::builder()
    ///     .strict(true)
    ///     .upgrade_gpl_variants(true)
    ///     .build();
    /// assert!(opts.strict_syntax);
    /// ```
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }

    /// Options for strict-only parsing.
    pub fn strict() -> Self {
        Self::builder().strict(true).build()
    }
}

/// Builder for [`ParseOptions`].
#[derive(Debug, Clone, Default)]
pub struct ParseOptionsBuilder {
    options: ParseOptions,
}

impl ParseOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set strict-only mode (default: false).
    pub fn strict(mut self, strict: bool) -> Self {
        self.options.strict_syntax = strict;
        self
    }

    /// Set GPL-variant upgrading (default: false).
    pub fn upgrade_gpl_variants(mut self, upgrade: bool) -> Self {
        self.options.upgrade_gpl_variants = upgrade;
        self
    }

    /// Set the maximum expression length in bytes.
    pub fn max_expression_length(mut self, length: usize) -> Self {
        self.options.limits.max_expression_length = length;
        self
    }

    /// Set the maximum parenthesis nesting depth.
    pub fn max_nesting_depth(mut self, depth: usize) -> Self {
        self.options.limits.max_nesting_depth = depth;
        self
    }

    /// Replace all limits.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.options.limits = limits;
        self
    }

    pub fn build(self) -> ParseOptions {
        self.options
    }
}

/// Which stage produced a parse result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParseStrategy {
    /// The strict grammar.
    Strict,
    /// The liberal grammar with identifier correction.
    Liberal,
    /// The whole input is the full name of a license.
    LicenseName,
    /// The identifier inside a trailing parenthetical.
    Parenthetical,
}

/// The outcome of [`parse_with_details`]. Exactly one of `expression` and
/// `error` is set.
#[derive(Debug, Clone, Serialize)]
pub struct ParseDetails {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<ParsedExpression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<ParseStrategy>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "error_message")]
    pub error: Option<SpdxError>,
}

fn error_message<S: serde::Serializer>(
    error: &Option<SpdxError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match error {
        Some(err) => serializer.serialize_str(&err.message),
        None => serializer.serialize_none(),
    }
}

impl ParseDetails {
    pub fn is_ok(&self) -> bool {
        self.expression.is_some()
    }

    /// Convert into the expression or the error.
    pub fn into_result(self) -> SpdxResult<ParsedExpression> {
        match (self.expression, self.error) {
            (Some(expression), _) => Ok(expression),
            (None, Some(err)) => Err(err),
            (None, None) => Err(SpdxError::internal(format!(
                "no result for {}",
                quote(&self.input)
            ))),
        }
    }
}

/// Parse an SPDX license expression.
///
/// # Examples
///
/// ```
/// use spdx_expr_core::{parse, ParseOptions, ParsedExpression};
///
/// let expr = parse("MIT OR Apache-2.0", &ParseOptions::default()).unwrap();
/// assert_eq!(
///     expr,
///     ParsedExpression::or(
///         ParsedExpression::license("MIT"),
///         ParsedExpression::license("Apache-2.0"),
///     )
/// );
///
/// let fixed = parse("Apache License 2.0", &ParseOptions::default()).unwrap();
/// assert_eq!(fixed, ParsedExpression::license("Apache-2.0"));
///
/// assert!(parse("mit", &ParseOptions::strict()).is_err());
/// ```
pub fn parse(input: &str, options: &ParseOptions) -> SpdxResult<ParsedExpression> {
    parse_with_details(input, options).into_result()
}

/// Parse an SPDX license expression, reporting failure as data.
pub fn parse_with_details(input: &str, options: &ParseOptions) -> ParseDetails {
    match parse_at_depth(input, options, 0) {
        Ok((expression, strategy)) => ParseDetails {
            input: input.to_string(),
            expression: Some(expression),
            strategy: Some(strategy),
            error: None,
        },
        Err(error) => ParseDetails {
            input: input.to_string(),
            expression: None,
            strategy: None,
            error: Some(error),
        },
    }
}

fn parse_at_depth(
    input: &str,
    options: &ParseOptions,
    depth: usize,
) -> SpdxResult<(ParsedExpression, ParseStrategy)> {
    options.limits.check(input)?;
    let cleaned = clean(input, options.strict_syntax);
    let upgrade = options.upgrade_gpl_variants;

    let strict = grammar::parse::<StrictGrammar>(&cleaned);
    if let Some(ast) = &strict.ast {
        let expression = reduce_strict(ast)?;
        tracing::debug!(input, "strict grammar matched");
        if options.strict_syntax {
            check_case(input, &expression)?;
            return Ok((expression, ParseStrategy::Strict));
        }
        return Ok((correct_expression(&expression, upgrade), ParseStrategy::Strict));
    }
    if options.strict_syntax {
        return Err(syntax_failure("strict", input, strict));
    }

    let prepared = prepare_liberal(&cleaned);
    let liberal = grammar::parse::<LiberalGrammar>(&prepared);
    if let Some(ast) = &liberal.ast {
        let expression = reduce_liberal(ast, upgrade);
        if depth < MAX_FALLBACK_DEPTH {
            if let Some(id) = license_id_by_name(&cleaned, upgrade) {
                tracing::debug!(input, id, "full license name overrides liberal result");
                return parse_at_depth(id, options, depth + 1)
                    .map(|(expr, _)| (expr, ParseStrategy::LicenseName));
            }
        }
        tracing::debug!(input, "liberal grammar matched");
        return Ok((expression, ParseStrategy::Liberal));
    }

    if depth < MAX_FALLBACK_DEPTH {
        if let Some(id) = license_id_by_name(&cleaned, upgrade) {
            tracing::debug!(input, id, "matched full license name");
            return parse_at_depth(id, options, depth + 1)
                .map(|(expr, _)| (expr, ParseStrategy::LicenseName));
        }
        if let Some(expression) = parenthetical(&cleaned, options, depth) {
            tracing::debug!(input, "resolved trailing parenthetical");
            return Ok((expression, ParseStrategy::Parenthetical));
        }
    }

    Err(syntax_failure("strict", input, strict))
}

/// Whether `input` is well-formed SPDX expression syntax. Identifiers
/// are not checked against the license list.
pub fn is_spdx_syntax(input: &str) -> bool {
    grammar::test::<StrictGrammar>(input)
}

/// Trim and collapse whitespace. Outside strict-only mode, also accept
/// lower-case keywords, `w/` for `WITH` and `plus` for `AND`.
fn clean(input: &str, strict: bool) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(input.trim(), " ");
    if strict {
        return collapsed.into_owned();
    }
    let with = W_SLASH.replace_all(&collapsed, " WITH ");
    with.split(' ')
        .map(|word| match word {
            "plus" => "AND",
            w if w.eq_ignore_ascii_case("and") => "AND",
            w if w.eq_ignore_ascii_case("or") => "OR",
            w if w.eq_ignore_ascii_case("with") => "WITH",
            w => w,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rewrite license names whose words would read as operators.
fn prepare_liberal(cleaned: &str) -> String {
    let text = CDDL.replace_all(cleaned, |caps: &regex::Captures<'_>| {
        match caps.get(1).map(|m| m.as_str()) {
            Some("1.0") => "CDDL-1.0",
            _ => "CDDL-1.1",
        }
    });
    LIBRARY_OR_LESSER
        .replace_all(&text, "LGPL-2.0-or-later")
        .into_owned()
}

fn license_id_by_name(text: &str, upgrade: bool) -> Option<&'static str> {
    find_license_by_name(text, upgrade).map(|license| license.license_id.as_str())
}

/// `Some License (MIT)`: the parenthetical alone, if it resolves to known
/// licenses or names one.
fn parenthetical(cleaned: &str, options: &ParseOptions, depth: usize) -> Option<ParsedExpression> {
    let caps = PARENTHETICAL.captures(cleaned)?;
    let pretext = caps.get(1)?.as_str();
    let inner = caps.get(2)?.as_str();
    if pretext.chars().count() >= PARENTHETICAL_PRETEXT_LIMIT {
        return None;
    }

    if let Ok((expression, _)) = parse_at_depth(inner, options, depth + 1) {
        let data = reference_data();
        if expression
            .licenses()
            .iter()
            .all(|info| data.is_known_license_id(&info.license))
        {
            return Some(expression);
        }
    }
    let id = license_id_by_name(inner, options.upgrade_gpl_variants)?;
    parse_at_depth(id, options, depth + 1)
        .ok()
        .map(|(expression, _)| expression)
}

/// In strict-only mode ids must match the official spelling exactly.
fn check_case(input: &str, expression: &ParsedExpression) -> SpdxResult<()> {
    let data = reference_data();
    for info in expression.licenses() {
        if !data.is_exact_license_id(&info.license) {
            if let Some(official) = data.license(&info.license) {
                return Err(case_failure(input, &info.license, &official.license_id));
            }
        }
        if let Some(exception) = &info.exception {
            if !data.is_exact_exception_id(exception) {
                if let Some(official) = data.exception(exception) {
                    return Err(case_failure(
                        input,
                        exception,
                        &official.license_exception_id,
                    ));
                }
            }
        }
    }
    Ok(())
}

fn case_failure(input: &str, written: &str, official: &str) -> SpdxError {
    SpdxError::case(
        format!(
            "strict parsing for {} failed\nIdentifier {} must be written as {}",
            quote(input),
            quote(written),
            quote(official)
        ),
        input,
    )
}

fn syntax_failure(mode: &str, input: &str, outcome: GrammarOutcome) -> SpdxError {
    let mut message = format!("{mode} parsing for {} failed", quote(input));
    if let Some(error) = outcome.error {
        message.push('\n');
        message.push_str(&error.to_string());
    }
    SpdxError::syntax(message, input)
}

fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{text}\""))
}
