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

//! Validate command

use crate::error::CliError;

/// Validate `expression` and render `{ "valid": ..., "errors": [...] }` as
/// pretty JSON.
pub fn validate(expression: &str) -> Result<String, CliError> {
    let result = spdx_expr_lint::validate(expression);
    tracing::debug!(valid = result.valid, errors = result.errors.len(), "validated");
    Ok(serde_json::to_string_pretty(&result)?)
}
