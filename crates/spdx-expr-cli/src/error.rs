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

//! Structured error types for the spdx-expr CLI.
//!
//! Only usage problems are errors. An expression that fails to parse or
//! validate is ordinary output and is printed as JSON.

use thiserror::Error;

/// The error type for spdx-expr CLI operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// No expression words were given, or they were all blank.
    #[error("No SPDX expression given")]
    MissingExpression,

    /// The result could not be rendered as JSON.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },
}

impl CliError {
    /// Exit code for this error: 2 for usage problems, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingExpression => 2,
            Self::JsonFormat { .. } => 1,
        }
    }

    /// Whether the usage text should accompany the message.
    pub fn shows_usage(&self) -> bool {
        matches!(self, Self::MissingExpression)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: err.to_string(),
        }
    }
}
