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

//! The SPDX expression grammar, exactly as specified.
//!
//! ```text
//! complete   := value $
//! value      := compound | wrapped | simple
//! compound   := and_expr | or_expr
//! and_expr   := ws? value ws 'AND' ws value ws?
//! or_expr    := ws? value ws 'OR' ws value ws?
//! wrapped    := '(' ws? value ws? ')'
//! simple     := license_ref | idstring '+'? exception?
//! exception  := ws 'WITH' ws idstring
//! ```

use std::rc::Rc;

use super::{exception, license_ref, Grammar, Node, Parser, Token};

static IDSTRING: Token = Token::new(r"[a-zA-Z0-9](?:[a-zA-Z0-9.\-]*[a-zA-Z0-9])?\+{0,2}");
static PLUS: Token = Token::new(r"\+");

/// The strict SPDX grammar.
pub(crate) struct StrictGrammar;

impl Grammar for StrictGrammar {
    const PADDED: bool = false;

    fn simple(p: &mut Parser<'_>) -> Option<Rc<Node>> {
        if let Some(node) = license_ref::<Self>(p) {
            return Some(node);
        }
        license_id(p)
    }

    fn exception_name(p: &mut Parser<'_>) -> Option<String> {
        p.accept(&IDSTRING).map(str::to_string)
    }
}

fn license_id(p: &mut Parser<'_>) -> Option<Rc<Node>> {
    p.attempt(|p| {
        let mut id = p.accept(&IDSTRING)?.to_string();
        if let Some(plus) = p.accept(&PLUS) {
            id.push_str(plus);
        }
        let exception = p.attempt(exception::<StrictGrammar>);
        Some(Rc::new(Node::License { id, exception }))
    })
}
