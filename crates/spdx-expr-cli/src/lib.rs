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

//! Library behind the `spdx-expr` command-line tool.
//!
//! # Commands
//!
//! - **parse** (default, `-p`): print the expression tree and the
//!   validation errors of the input as JSON
//! - **validate** (`-v`): print `{ "valid": ..., "errors": [...] }`
//! - **normalize** (`-n`, `--normalise`): print the canonical expression
//!
//! Failing expressions are regular output. Only a missing expression or
//! a bad option makes the tool exit non-zero.
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use spdx_expr_cli::cli::Cli;
//!
//! let cli = Cli::try_parse_from(["spdx-expr", "-n", "mit", "OR", "isc"]).unwrap();
//! assert_eq!(cli.execute().unwrap(), "ISC OR MIT");
//! ```
//!
//! # Logging
//!
//! Set `SPDX_EXPR_LOG` (or `RUST_LOG`) to e.g. `spdx_expr_core=debug` to see
//! which parse strategy was used. Logs go to stderr.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;

pub use error::CliError;
