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

//! Input limits for expression parsing.

use crate::error::{SpdxError, SpdxResult};

/// Configurable limits checked before any grammar runs.
///
/// The grammar engine backtracks and recurses on parentheses, so these
/// bound both the work and the stack depth of a single parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum expression length in bytes (default: 16KB).
    pub max_expression_length: usize,
    /// Maximum parenthesis nesting depth (default: 64).
    pub max_nesting_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_expression_length: 16 * 1024, // 16KB
            max_nesting_depth: 64,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_expression_length: usize::MAX,
            max_nesting_depth: usize::MAX,
        }
    }

    /// Reject `input` if it exceeds any limit.
    pub fn check(&self, input: &str) -> SpdxResult<()> {
        if input.len() > self.max_expression_length {
            return Err(SpdxError::limit(
                format!(
                    "expression length {} exceeds the limit of {} bytes",
                    input.len(),
                    self.max_expression_length
                ),
                input,
            ));
        }

        let depth = nesting_depth(input);
        if depth > self.max_nesting_depth {
            return Err(SpdxError::limit(
                format!(
                    "parenthesis nesting depth {} exceeds the limit of {}",
                    depth, self.max_nesting_depth
                ),
                input,
            ));
        }
        Ok(())
    }
}

/// Deepest run of unclosed `(`. Unbalanced closers are ignored.
fn nesting_depth(input: &str) -> usize {
    let mut depth = 0usize;
    let mut max = 0usize;
    for b in input.bytes() {
        match b {
            b'(' => {
                depth += 1;
                max = max.max(depth);
            }
            b')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    max
}
