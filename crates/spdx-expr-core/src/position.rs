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

//! Cursor positions inside an expression.

/// A position in the input: byte offset, 1-based line, and the number of
/// characters consumed since the last newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ParsePosition {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl ParsePosition {
    /// The start of the input.
    pub const fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 0,
        }
    }

    pub const fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Position after consuming `text`.
    pub fn advance(self, text: &str) -> Self {
        let mut line = self.line;
        let mut column = self.column;
        for ch in text.chars() {
            if ch == '\n' {
                line += 1;
                column = 0;
            } else {
                column += 1;
            }
        }
        Self {
            offset: self.offset + text.len(),
            line,
            column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start() {
        assert_eq!(ParsePosition::start(), ParsePosition::new(0, 1, 0));
    }

    #[test]
    fn test_advance_single_line() {
        let pos = ParsePosition::start().advance("MIT OR");
        assert_eq!(pos, ParsePosition::new(6, 1, 6));
    }

    #[test]
    fn test_advance_across_newline_resets_column() {
        let pos = ParsePosition::start().advance("MIT\n  OR");
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 4);
        assert_eq!(pos.offset, 8);
    }

    #[test]
    fn test_advance_counts_chars_not_bytes() {
        let pos = ParsePosition::start().advance("Québec");
        assert_eq!(pos.column, 6);
        assert_eq!(pos.offset, 7);
    }
}
