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

//! Parse-tree nodes shared by the strict and liberal grammars.

use std::rc::Rc;

/// A grammar parse tree.
///
/// Both grammars build from this one closed set of node kinds, so the
/// reducers can match exhaustively. Children are reference counted because
/// the left-recursion memo table hands out the same subtree many times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Node {
    /// A single SPDX identifier (strict grammar), `+` included.
    License { id: String, exception: Option<String> },
    /// `[DocumentRef-x:]LicenseRef-y`. The grammar accepts a trailing
    /// exception but does not keep it: the expression model has no place
    /// for one on a reference.
    LicenseRef {
        document_ref: Option<String>,
        license_ref: String,
    },
    /// Free-form words (liberal grammar only).
    Words {
        words: Vec<String>,
        exception: Option<Vec<String>>,
    },
    /// A parenthesized value.
    Wrapped(Rc<Node>),
    And(Rc<Node>, Rc<Node>),
    Or(Rc<Node>, Rc<Node>),
}
