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

//! Reduction of grammar parse trees to [`ParsedExpression`]s.
//!
//! Parenthesized nodes are transparent. The strict reducer keeps ids as
//! written; the liberal reducer joins free-form words and corrects each
//! leaf as it goes.

use crate::correct::{correct_license_id, correct_license_info};
use crate::error::{SpdxError, SpdxResult};
use crate::expression::{LicenseInfo, ParsedExpression};
use crate::grammar::Node;

/// Words that, as the right side of an `OR`, mean "or a later version".
const LATER_WORDS: [&str; 3] = ["later", "newer", "greater"];

pub(crate) fn reduce_strict(node: &Node) -> SpdxResult<ParsedExpression> {
    Ok(match node {
        Node::License { id, exception } => ParsedExpression::License(LicenseInfo {
            license: id.clone(),
            exception: exception.clone(),
        }),
        Node::LicenseRef {
            document_ref,
            license_ref,
        } => ParsedExpression::license_ref(document_ref.clone(), license_ref.clone()),
        Node::Words { words, .. } => {
            return Err(SpdxError::internal(format!(
                "free-form words \"{}\" in a strict parse tree",
                words.join(" ")
            )))
        }
        Node::Wrapped(inner) => reduce_strict(inner)?,
        Node::And(left, right) => {
            ParsedExpression::and(reduce_strict(left)?, reduce_strict(right)?)
        }
        Node::Or(left, right) => ParsedExpression::or(reduce_strict(left)?, reduce_strict(right)?),
    })
}

pub(crate) fn reduce_liberal(node: &Node, upgrade: bool) -> ParsedExpression {
    match node {
        Node::License { id, exception } => correct_license_info(
            &LicenseInfo {
                license: id.clone(),
                exception: exception.clone(),
            },
            upgrade,
        ),
        Node::LicenseRef {
            document_ref,
            license_ref,
        } => ParsedExpression::license_ref(document_ref.clone(), license_ref.clone()),
        Node::Words { words, exception } => correct_license_info(
            &LicenseInfo {
                license: words.join(" "),
                exception: exception.as_ref().map(|words| words.join(" ")),
            },
            upgrade,
        ),
        Node::Wrapped(inner) => reduce_liberal(inner, upgrade),
        Node::And(left, right) => {
            ParsedExpression::and(reduce_liberal(left, upgrade), reduce_liberal(right, upgrade))
        }
        Node::Or(left, right) => {
            if let Some(merged) = merge_or_later(left, right, upgrade) {
                return merged;
            }
            ParsedExpression::or(reduce_liberal(left, upgrade), reduce_liberal(right, upgrade))
        }
    }
}

/// `X OR later` is one license, `X or later`, not a choice of two.
fn merge_or_later(left: &Node, right: &Node, upgrade: bool) -> Option<ParsedExpression> {
    let name = if is_later_word(right) {
        plain_words(left)?
    } else if is_later_word(left) {
        plain_words(right)?
    } else {
        return None;
    };
    let corrected = correct_license_id(&name, upgrade);
    if corrected.ends_with("-or-later") {
        return Some(ParsedExpression::license(corrected));
    }
    Some(ParsedExpression::license(correct_license_id(
        &format!("{name} or later"),
        upgrade,
    )))
}

fn is_later_word(node: &Node) -> bool {
    matches!(
        plain_words(node),
        Some(text) if LATER_WORDS.iter().any(|w| w.eq_ignore_ascii_case(&text))
    )
}

/// The text of a words node without an exception.
fn plain_words(node: &Node) -> Option<String> {
    match node {
        Node::Words {
            words,
            exception: None,
        } => Some(words.join(" ")),
        _ => None,
    }
}
