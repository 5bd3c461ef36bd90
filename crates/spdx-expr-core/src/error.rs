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

//! Error types for SPDX expression parsing.

use std::fmt;
use thiserror::Error;

use crate::position::ParsePosition;

/// The kind of error that occurred during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpdxErrorKind {
    /// No grammar could derive the input.
    Syntax,
    /// Strict mode: an identifier only matches a known one when ignoring case.
    Case,
    /// Input exceeds a configured limit.
    Limit,
    /// A reducer received a node its grammar never produces.
    Internal,
}

impl fmt::Display for SpdxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => write!(f, "SyntaxError"),
            Self::Case => write!(f, "CaseError"),
            Self::Limit => write!(f, "LimitError"),
            Self::Internal => write!(f, "InternalError"),
        }
    }
}

/// An error that occurred while parsing an SPDX expression.
///
/// The `Display` form is the human-readable message only; the kind is
/// available for programmatic matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SpdxError {
    /// The kind of error.
    pub kind: SpdxErrorKind,
    /// Human-readable error message, possibly spanning several lines.
    pub message: String,
    /// The expression that failed, as given by the caller.
    pub input: String,
}

impl SpdxError {
    /// Create a new error.
    pub fn new(kind: SpdxErrorKind, message: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            input: input.into(),
        }
    }

    pub fn syntax(message: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(SpdxErrorKind::Syntax, message, input)
    }

    pub fn case(message: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(SpdxErrorKind::Case, message, input)
    }

    pub fn limit(message: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(SpdxErrorKind::Limit, message, input)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(SpdxErrorKind::Internal, message, "")
    }
}

/// Result type for SPDX expression operations.
pub type SpdxResult<T> = Result<T, SpdxError>;

/// The furthest point a grammar reached before failing, with every literal
/// that would have been accepted there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Position of the furthest failure.
    pub pos: ParsePosition,
    /// Deduplicated expectations in the order they were first recorded.
    pub expected: Vec<Expectation>,
}

/// A single literal the grammar would have accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expectation {
    /// A regex literal, shown quoted.
    Literal(String),
    /// A literal that must *not* appear.
    Not(String),
    /// End of input.
    Eof,
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(lit) => write!(f, "'{}'", lit),
            Self::Not(lit) => write!(f, "not '{}'", lit),
            Self::Eof => write!(f, "$EOF"),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expected: Vec<String> = self.expected.iter().map(|e| e.to_string()).collect();
        write!(
            f,
            "Syntax Error at line {}:{}. Expected one of {}",
            self.pos.line,
            self.pos.column,
            expected.join(", ")
        )
    }
}

impl std::error::Error for SyntaxError {}
