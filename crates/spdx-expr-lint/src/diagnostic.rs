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

//! Lint diagnostic types

use serde::Serialize;

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational hint
    Hint,
    /// Warning - valid, but worth changing
    Warning,
    /// Error - the expression is invalid
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hint => write!(f, "hint"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Kind of diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// The expression could not be parsed at all
    Syntax,
    /// License id not on the SPDX license list
    UnknownLicense,
    /// Exception id not on the SPDX exception list
    UnknownException,
    /// Exception attached to a license it was not written for
    IncompatibleException,
    /// Identifier the SPDX list marks as deprecated
    DeprecatedIdentifier,
    /// Custom rule violation
    Custom(String),
}

/// A lint diagnostic
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    severity: Severity,
    kind: DiagnosticKind,
    message: String,
    /// Index of the license leaf, left to right
    #[serde(skip_serializing_if = "Option::is_none")]
    leaf: Option<usize>,
    rule_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<String>,
}

impl Diagnostic {
    fn new(
        severity: Severity,
        kind: DiagnosticKind,
        message: impl Into<String>,
        rule_id: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            kind,
            message: message.into(),
            leaf: None,
            rule_id: rule_id.into(),
            suggestion: None,
        }
    }

    pub fn warning(
        kind: DiagnosticKind,
        message: impl Into<String>,
        rule_id: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Warning, kind, message, rule_id)
    }

    pub fn error(
        kind: DiagnosticKind,
        message: impl Into<String>,
        rule_id: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Error, kind, message, rule_id)
    }

    pub fn hint(
        kind: DiagnosticKind,
        message: impl Into<String>,
        rule_id: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Hint, kind, message, rule_id)
    }

    pub fn with_leaf(mut self, leaf: usize) -> Self {
        self.leaf = Some(leaf);
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn kind(&self) -> &DiagnosticKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn leaf(&self) -> Option<usize> {
        self.leaf
    }

    pub fn rule_id(&self) -> &str {
        &self.rule_id
    }

    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    /// Escalate the severity to error level (used by lint runner).
    pub fn escalate_to_error(&mut self) {
        self.severity = Severity::Error;
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(leaf) = self.leaf {
            write!(f, "license #{}: ", leaf + 1)?;
        }

        write!(f, "[{}] {}: {}", self.rule_id, self.severity, self.message)?;

        if let Some(ref suggestion) = self.suggestion {
            write!(f, " ({})", suggestion)?;
        }

        Ok(())
    }
}
