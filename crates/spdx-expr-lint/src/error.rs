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

//! Lint configuration errors

use thiserror::Error;

/// Why a [`LintConfig`](crate::LintConfig) was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LintConfigError {
    #[error("Too many rule configurations: {count} (max: {max})")]
    TooManyRules { count: usize, max: usize },

    #[error("Empty rule ID not allowed")]
    EmptyRuleId,

    #[error("Rule ID too long: {length} bytes (max: {max})")]
    RuleIdTooLong { length: usize, max: usize },

    #[error("max_diagnostics must be at least 1")]
    ZeroDiagnosticLimit,
}
