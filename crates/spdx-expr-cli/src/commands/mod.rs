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

//! CLI command implementations
//!
//! Each command takes the joined expression and returns the text to print.

mod normalize;
mod parse;
mod validate;

pub use normalize::normalize;
pub use parse::{parse, ParseOutput};
pub use validate::validate;

use crate::error::CliError;

/// Join expression words with single spaces.
///
/// Fails with [`CliError::MissingExpression`] when nothing but whitespace
/// remains.
pub fn join_expression(words: &[String]) -> Result<String, CliError> {
    let expression = words.join(" ");
    if expression.trim().is_empty() {
        return Err(CliError::MissingExpression);
    }
    Ok(expression)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_expression() {
        let words = vec!["MIT".to_string(), "OR".to_string(), "ISC".to_string()];
        assert_eq!(join_expression(&words).unwrap(), "MIT OR ISC");
    }

    #[test]
    fn test_join_expression_empty() {
        assert_eq!(join_expression(&[]), Err(CliError::MissingExpression));
        assert_eq!(
            join_expression(&[" ".to_string(), String::new()]),
            Err(CliError::MissingExpression)
        );
    }
}
