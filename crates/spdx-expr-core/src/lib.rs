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

//! Core parser, identifier correction and data model for SPDX license
//! expressions.
//!
//! Parsing runs in two modes. Strict mode accepts exactly the SPDX
//! expression syntax. The default liberal mode also accepts the way
//! licenses are written in the wild ("Apache License 2.0",
//! "GPL-2.0 w/ Classpath exception", "GNU GPL v3 or later") and maps every
//! name onto an official identifier:
//!
//! ```
//! use spdx_expr_core::{parse, ParseOptions, ParsedExpression};
//!
//! let expr = parse("GNU GPL v3 or later AND mit", &ParseOptions::default()).unwrap();
//! assert_eq!(
//!     expr,
//!     ParsedExpression::and(
//!         ParsedExpression::license("GPL-3.0-or-later"),
//!         ParsedExpression::license("MIT"),
//!     )
//! );
//! ```
//!
//! # Modules
//!
//! - [`correct`]: the identifier correction engine, usable on its own
//! - [`licenses`]: the embedded SPDX license and exception lists

pub mod correct;
mod error;
mod expression;
mod grammar;
pub mod licenses;
mod limits;
mod parser;
mod position;
mod reduce;

pub use correct::{correct_exception_id, correct_license_id};
pub use error::{Expectation, SpdxError, SpdxErrorKind, SpdxResult, SyntaxError};
pub use expression::{Conjunction, ConjunctionInfo, LicenseInfo, LicenseRef, ParsedExpression};
pub use limits::Limits;
pub use parser::{
    is_spdx_syntax, parse, parse_with_details, ParseDetails, ParseOptions, ParseOptionsBuilder,
    ParseStrategy, PARENTHETICAL_PRETEXT_LIMIT,
};
pub use position::ParsePosition;
