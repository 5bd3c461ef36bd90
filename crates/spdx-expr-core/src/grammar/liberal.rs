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

//! A superset of the strict grammar that accepts free-form names.
//!
//! Wherever the strict grammar wants one identifier, this grammar takes a
//! run of words. Whether those words name a known license is decided later,
//! by the correction engine.
//!
//! ```text
//! complete  := ws? value ws? $
//! simple    := license_ref | words exception?
//! exception := ws 'WITH' ws words
//! words     := word (ws word)*
//! word      := !keyword [^\s()/;]+
//! keyword   := ('AND' | 'OR' | 'WITH') followed by whitespace, ')' or end
//! ```

use std::rc::Rc;

use super::{license_ref, spaced_keyword, Grammar, Node, Parser, Token, WHITESPACE, WITH};

static WORD: Token = Token::new(r"[^\s()/;]+");
static KEYWORD: Token = Token::new(r"(?:AND|OR|WITH)(?:[\s)]|$)");

/// The liberal grammar.
pub(crate) struct LiberalGrammar;

impl Grammar for LiberalGrammar {
    const PADDED: bool = true;

    fn simple(p: &mut Parser<'_>) -> Option<Rc<Node>> {
        if let Some(node) = license_ref::<Self>(p) {
            return Some(node);
        }
        p.attempt(|p| {
            let words = words(p)?;
            let exception = p.attempt(|p| {
                spaced_keyword(p, &WITH)?;
                self::words(p)
            });
            Some(Rc::new(Node::Words { words, exception }))
        })
    }

    fn exception_name(p: &mut Parser<'_>) -> Option<String> {
        words(p).map(|words| words.join(" "))
    }
}

fn words(p: &mut Parser<'_>) -> Option<Vec<String>> {
    let mut words = vec![word(p)?.to_string()];
    while let Some(next) = p.attempt(|p| {
        p.accept(&WHITESPACE)?;
        word(p)
    }) {
        words.push(next.to_string());
    }
    Some(words)
}

fn word<'i>(p: &mut Parser<'i>) -> Option<&'i str> {
    if !p.not_ahead(|p| p.accept(&KEYWORD)) {
        return None;
    }
    p.accept(&WORD)
}
