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

//! The uniform expression model every grammar reduces to.
//!
//! Trees are immutable once built: corrections and normalization always
//! produce a new tree, so a tree can be shared between fallback attempts.

use serde::{Deserialize, Serialize};

/// A parsed SPDX expression.
///
/// Serializes to the same JSON shape the CLI prints, e.g.
/// `{"license":"MIT"}` or
/// `{"left":{...},"conjunction":"or","right":{...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParsedExpression {
    License(LicenseInfo),
    LicenseRef(LicenseRef),
    Conjunction(ConjunctionInfo),
}

/// A single license identifier with an optional exception.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LicenseInfo {
    pub license: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception: Option<String>,
}

/// A reference to a license defined outside the SPDX list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseRef {
    /// `DocumentRef-*` qualifier, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_ref: Option<String>,
    /// Always starts with `LicenseRef-`.
    pub license_ref: String,
}

/// A binary `AND`/`OR` combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConjunctionInfo {
    pub left: Box<ParsedExpression>,
    pub conjunction: Conjunction,
    pub right: Box<ParsedExpression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Conjunction {
    And,
    Or,
}

impl Conjunction {
    /// The upper-case keyword used in expression text.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }

    /// The lower-case tag used in the expression model.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

impl ParsedExpression {
    pub fn license(id: impl Into<String>) -> Self {
        Self::License(LicenseInfo {
            license: id.into(),
            exception: None,
        })
    }

    pub fn license_with(id: impl Into<String>, exception: impl Into<String>) -> Self {
        Self::License(LicenseInfo {
            license: id.into(),
            exception: Some(exception.into()),
        })
    }

    pub fn license_ref(document_ref: Option<String>, license_ref: impl Into<String>) -> Self {
        Self::LicenseRef(LicenseRef {
            document_ref,
            license_ref: license_ref.into(),
        })
    }

    pub fn conjunction(left: Self, conjunction: Conjunction, right: Self) -> Self {
        Self::Conjunction(ConjunctionInfo {
            left: Box::new(left),
            conjunction,
            right: Box::new(right),
        })
    }

    pub fn and(left: Self, right: Self) -> Self {
        Self::conjunction(left, Conjunction::And, right)
    }

    pub fn or(left: Self, right: Self) -> Self {
        Self::conjunction(left, Conjunction::Or, right)
    }

    /// All license leaves, left to right. References are skipped.
    pub fn licenses(&self) -> Vec<&LicenseInfo> {
        let mut out = Vec::new();
        self.collect_licenses(&mut out);
        out
    }

    fn collect_licenses<'a>(&'a self, out: &mut Vec<&'a LicenseInfo>) {
        match self {
            Self::License(info) => out.push(info),
            Self::LicenseRef(_) => {}
            Self::Conjunction(conj) => {
                conj.left.collect_licenses(out);
                conj.right.collect_licenses(out);
            }
        }
    }

    /// Build a new tree with every license leaf replaced by `f(leaf)`.
    pub fn map_licenses<F>(&self, f: &mut F) -> Self
    where
        F: FnMut(&LicenseInfo) -> ParsedExpression,
    {
        match self {
            Self::License(info) => f(info),
            Self::LicenseRef(r) => Self::LicenseRef(r.clone()),
            Self::Conjunction(conj) => Self::Conjunction(ConjunctionInfo {
                left: Box::new(conj.left.map_licenses(f)),
                conjunction: conj.conjunction,
                right: Box::new(conj.right.map_licenses(f)),
            }),
        }
    }

    pub fn is_conjunction(&self) -> bool {
        matches!(self, Self::Conjunction(_))
    }

    /// The license leaf, if this expression is exactly one license.
    pub fn as_license(&self) -> Option<&LicenseInfo> {
        match self {
            Self::License(info) => Some(info),
            _ => None,
        }
    }
}
