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

//! CLI command definitions and argument parsing.
//!
//! Commands are selected either by name (`validate`) or by flag
//! (`-v`, `--validate`). Without a command the arguments are parsed as
//! for `parse`:
//!
//! ```text
//! spdx-expr [parse|-p|--parse] [-s|--strict] [-u|--upgrade] <EXPRESSION>...
//! spdx-expr validate|-v|--validate <EXPRESSION>...
//! spdx-expr normalize|-n|--normalize|--normalise <EXPRESSION>...
//! ```

use crate::commands;
use crate::error::CliError;
use clap::{Args, Parser, Subcommand};

/// spdx-expr - parse, validate and normalize SPDX license expressions
///
/// # Examples
///
/// ```bash
/// # Parse, correcting free-form names
/// spdx-expr "Apache License 2.0 OR mit"
///
/// # Validate identifiers and exception associations
/// spdx-expr -v "GPL-2.0 WITH Classpath-exception-2.0"
///
/// # Canonical form
/// spdx-expr --normalise "(MIT OR Apache-2.0)"
/// ```
#[derive(Parser, Debug)]
#[command(name = "spdx-expr")]
#[command(
    version,
    about = "spdx-expr - parse, validate and normalize SPDX license expressions",
    long_about = None,
    args_conflicts_with_subcommands = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Arguments of the default `parse` command
    #[command(flatten)]
    pub parse: ParseArgs,
}

/// The three commands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Parse an expression and print its tree with validation errors (default)
    #[command(short_flag = 'p', long_flag = "parse")]
    Parse(ParseArgs),

    /// Validate an expression against the SPDX license and exception lists
    #[command(short_flag = 'v', long_flag = "validate")]
    Validate(ExpressionArgs),

    /// Print the canonical form of an expression
    #[command(
        short_flag = 'n',
        long_flag = "normalize",
        long_flag_alias = "normalise",
        alias = "normalise"
    )]
    Normalize(ExpressionArgs),
}

/// Options of the `parse` command.
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct ParseArgs {
    /// Accept only exact SPDX syntax and identifiers
    #[arg(short, long)]
    pub strict: bool,

    /// Rewrite GPL-family ids to their -only / -or-later forms
    #[arg(short, long)]
    pub upgrade: bool,

    #[command(flatten)]
    pub expression: ExpressionArgs,
}

/// The expression, possibly split over several shell words.
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct ExpressionArgs {
    /// SPDX expression; words are joined with single spaces
    #[arg(value_name = "EXPRESSION", trailing_var_arg = true)]
    pub words: Vec<String>,
}

impl Cli {
    /// The selected command, defaulting to `parse`.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Parse(self.parse))
    }

    /// Run the selected command and return the text to print.
    pub fn execute(self) -> Result<String, CliError> {
        self.into_command().execute()
    }
}

impl Command {
    /// Run the command and return the text to print.
    ///
    /// # Errors
    ///
    /// [`CliError::MissingExpression`] when no expression was given.
    pub fn execute(self) -> Result<String, CliError> {
        match self {
            Command::Parse(args) => {
                let expression = commands::join_expression(&args.expression.words)?;
                tracing::debug!(%expression, strict = args.strict, upgrade = args.upgrade, "parse");
                commands::parse(&expression, args.strict, args.upgrade)
            }
            Command::Validate(args) => {
                let expression = commands::join_expression(&args.words)?;
                commands::validate(&expression)
            }
            Command::Normalize(args) => {
                let expression = commands::join_expression(&args.words)?;
                commands::normalize(&expression)
            }
        }
    }
}
