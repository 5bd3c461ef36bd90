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

//! Normalize command

use crate::error::CliError;

/// The canonical form of `expression`, or `expression` itself when it
/// does not parse.
pub fn normalize(expression: &str) -> Result<String, CliError> {
    Ok(spdx_expr_c14n::normalize(expression))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_output() {
        assert_eq!(normalize("(MIT OR Apache-2.0)").unwrap(), "Apache-2.0 OR MIT");
        assert_eq!(normalize("MIT (OR Apache-2.0)").unwrap(), "MIT (OR Apache-2.0)");
    }
}
