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

//! Furthest-failure error recording.

use crate::error::{Expectation, SyntaxError};
use crate::position::ParsePosition;

/// Observes every literal attempt and keeps only the failures at the
/// furthest position reached.
#[derive(Debug, Default)]
pub(crate) struct ErrorTracker {
    furthest: Option<ParsePosition>,
    expected: Vec<Expectation>,
}

impl ErrorTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record an attempt made at `pos`.
    ///
    /// Only failures count: a plain literal that did not match, or a
    /// literal that matched while under negation.
    pub(crate) fn record(
        &mut self,
        pos: ParsePosition,
        matched: bool,
        negated: bool,
        expectation: Expectation,
    ) {
        if matched != negated {
            return;
        }
        let expectation = match (negated, expectation) {
            (true, Expectation::Literal(lit)) => Expectation::Not(lit),
            (_, other) => other,
        };
        match self.furthest {
            Some(furthest) if pos.offset < furthest.offset => {}
            Some(furthest) if pos.offset == furthest.offset => {
                if !self.expected.contains(&expectation) {
                    self.expected.push(expectation);
                }
            }
            _ => {
                self.furthest = Some(pos);
                self.expected.clear();
                self.expected.push(expectation);
            }
        }
    }

    pub(crate) fn into_error(self) -> Option<SyntaxError> {
        self.furthest.map(|pos| SyntaxError {
            pos,
            expected: self.expected,
        })
    }
}
