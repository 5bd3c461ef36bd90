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

//! Backtracking PEG engine shared by the strict and liberal grammars.
//!
//! Every rule is a plain function from `&mut Parser` to `Option<T>`: `None`
//! is failure, and a failing rule leaves the cursor where it started. The
//! combinators on [`Parser`] cover the rest:
//!
//! - [`Parser::attempt`]: a sequence that rewinds on failure
//! - [`Parser::accept`]: an anchored regex literal at the cursor
//! - [`Parser::not_ahead`]: negative lookahead
//! - [`Parser::left_recursive`]: seed-growing memoization for rules that
//!   refer to themselves in leftmost position
//!
//! Grammars only differ in what a simple expression and an exception look
//! like, so the shared skeleton lives here and each grammar implements
//! [`Grammar`].

pub(crate) mod liberal;
pub(crate) mod node;
pub(crate) mod strict;
pub(crate) mod tracker;

use std::collections::HashMap;
use std::rc::Rc;

use once_cell::sync::OnceCell;
use regex::Regex;

use crate::error::{Expectation, SyntaxError};
use crate::position::ParsePosition;
pub(crate) use node::Node;
use tracker::ErrorTracker;

/// A regex literal, compiled on first use and anchored at the cursor.
pub(crate) struct Token {
    pattern: &'static str,
    regex: OnceCell<Regex>,
}

impl Token {
    pub(crate) const fn new(pattern: &'static str) -> Self {
        Self {
            pattern,
            regex: OnceCell::new(),
        }
    }

    fn find<'i>(&self, text: &'i str) -> Option<&'i str> {
        let regex = self
            .regex
            .get_or_init(|| Regex::new(&format!("^(?:{})", self.pattern)).unwrap());
        regex.find(text).map(|m| m.as_str())
    }
}

static WHITESPACE: Token = Token::new(r"[\s\t\n]+");
static AND: Token = Token::new("AND");
static OR: Token = Token::new("OR");
static WITH: Token = Token::new("WITH");
static OPEN: Token = Token::new(r"\(");
static CLOSE: Token = Token::new(r"\)");
static COLON: Token = Token::new(":");
static DOCUMENT_REF: Token = Token::new("DocumentRef-");
static LICENSE_REF: Token = Token::new("LicenseRef-");
static REF_VALUE: Token = Token::new(r"[a-zA-Z0-9\-\.]+");

/// Cursor, memo table and optional error recorder for one parse.
pub(crate) struct Parser<'i> {
    input: &'i str,
    pos: ParsePosition,
    negating: bool,
    tracker: Option<ErrorTracker>,
    memo: HashMap<(&'static str, usize), (Option<Rc<Node>>, ParsePosition)>,
}

impl<'i> Parser<'i> {
    fn new(input: &'i str, tracker: Option<ErrorTracker>) -> Self {
        Self {
            input,
            pos: ParsePosition::start(),
            negating: false,
            tracker,
            memo: HashMap::new(),
        }
    }

    /// Run `rule` as a sequence: on failure the cursor is rewound.
    pub(crate) fn attempt<T>(&mut self, rule: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let start = self.pos;
        let result = rule(self);
        if result.is_none() {
            self.pos = start;
        }
        result
    }

    /// Match `token` at the cursor and advance past it.
    pub(crate) fn accept(&mut self, token: &Token) -> Option<&'i str> {
        let input = self.input;
        let found = token.find(&input[self.pos.offset..]);
        if let Some(tracker) = self.tracker.as_mut() {
            tracker.record(
                self.pos,
                found.is_some(),
                self.negating,
                Expectation::Literal(token.pattern.to_string()),
            );
        }
        let text = found?;
        self.pos = self.pos.advance(text);
        Some(text)
    }

    /// End-of-input assertion.
    pub(crate) fn eof(&mut self) -> bool {
        let at_end = self.pos.offset == self.input.len();
        if let Some(tracker) = self.tracker.as_mut() {
            tracker.record(self.pos, at_end, self.negating, Expectation::Eof);
        }
        at_end
    }

    /// Negative lookahead: succeeds when `rule` fails. Never consumes.
    pub(crate) fn not_ahead<T>(&mut self, rule: impl FnOnce(&mut Self) -> Option<T>) -> bool {
        let start = self.pos;
        self.negating = !self.negating;
        let result = rule(self);
        self.negating = !self.negating;
        self.pos = start;
        result.is_none()
    }

    /// Evaluate a left-recursive rule by growing a seed.
    ///
    /// The memo entry for `(rule, offset)` starts as a failure, so the
    /// leftmost self-reference fails on the first pass. Each further pass
    /// sees the previous best result; growth stops at the first pass that
    /// does not end strictly further along.
    pub(crate) fn left_recursive(
        &mut self,
        rule: &'static str,
        body: fn(&mut Parser<'i>) -> Option<Rc<Node>>,
    ) -> Option<Rc<Node>> {
        let start = self.pos;
        if let Some((result, end)) = self.memo.get(&(rule, start.offset)) {
            let result = result.clone();
            self.pos = *end;
            return result;
        }

        self.memo.insert((rule, start.offset), (None, start));
        let mut best: Option<Rc<Node>> = None;
        let mut best_end = start;
        loop {
            self.pos = start;
            let Some(result) = body(self) else { break };
            let end = self.pos;
            if end.offset <= best_end.offset {
                break;
            }
            best = Some(result);
            best_end = end;
            self.memo.insert((rule, start.offset), (best.clone(), best_end));
        }
        self.pos = best_end;
        best
    }
}

/// The parts of a grammar that differ between strict and liberal parsing.
pub(crate) trait Grammar {
    /// Whether whitespace may surround the whole expression.
    const PADDED: bool;

    /// A license (or reference) with its optional exception.
    fn simple(p: &mut Parser<'_>) -> Option<Rc<Node>>;

    /// The exception name after `WITH`.
    fn exception_name(p: &mut Parser<'_>) -> Option<String>;
}

/// Result of running a grammar over one input.
#[derive(Debug)]
pub(crate) struct GrammarOutcome {
    pub(crate) ast: Option<Rc<Node>>,
    pub(crate) error: Option<SyntaxError>,
}

/// Parse `input` completely with grammar `G`.
///
/// The first pass runs without error recording. Only when it fails is the
/// input parsed again, on a fresh memo table, with the recorder attached.
pub(crate) fn parse<G: Grammar>(input: &str) -> GrammarOutcome {
    let mut parser = Parser::new(input, None);
    if let Some(ast) = complete::<G>(&mut parser) {
        return GrammarOutcome {
            ast: Some(ast),
            error: None,
        };
    }

    let mut parser = Parser::new(input, Some(ErrorTracker::new()));
    let _ = complete::<G>(&mut parser);
    GrammarOutcome {
        ast: None,
        error: parser.tracker.and_then(ErrorTracker::into_error),
    }
}

/// Whether grammar `G` derives the whole of `input`.
pub(crate) fn test<G: Grammar>(input: &str) -> bool {
    complete::<G>(&mut Parser::new(input, None)).is_some()
}

// complete := ws? value ws? $        (padding only when G::PADDED)
fn complete<G: Grammar>(p: &mut Parser<'_>) -> Option<Rc<Node>> {
    p.attempt(|p| {
        if G::PADDED {
            p.accept(&WHITESPACE);
        }
        let value = value::<G>(p)?;
        if G::PADDED {
            p.accept(&WHITESPACE);
        }
        p.eof().then_some(value)
    })
}

// value := compound | wrapped | simple
fn value<G: Grammar>(p: &mut Parser<'_>) -> Option<Rc<Node>> {
    if let Some(node) = compound::<G>(p) {
        return Some(node);
    }
    if let Some(node) = wrapped::<G>(p) {
        return Some(node);
    }
    G::simple(p)
}

// compound := and_expression | or_expression
fn compound<G: Grammar>(p: &mut Parser<'_>) -> Option<Rc<Node>> {
    p.left_recursive("compound_expression", compound_body::<G>)
}

fn compound_body<G: Grammar>(p: &mut Parser<'_>) -> Option<Rc<Node>> {
    if let Some(node) = binary::<G>(p, &AND, Node::And) {
        return Some(node);
    }
    binary::<G>(p, &OR, Node::Or)
}

// X_expression := ws? left=value X right=value ws?
fn binary<G: Grammar>(
    p: &mut Parser<'_>,
    keyword: &Token,
    build: fn(Rc<Node>, Rc<Node>) -> Node,
) -> Option<Rc<Node>> {
    p.attempt(|p| {
        p.accept(&WHITESPACE);
        let left = value::<G>(p)?;
        spaced_keyword(p, keyword)?;
        let right = value::<G>(p)?;
        p.accept(&WHITESPACE);
        Some(Rc::new(build(left, right)))
    })
}

// wrapped := '(' ws? value ws? ')'
fn wrapped<G: Grammar>(p: &mut Parser<'_>) -> Option<Rc<Node>> {
    p.attempt(|p| {
        p.accept(&OPEN)?;
        p.accept(&WHITESPACE);
        let inner = value::<G>(p)?;
        p.accept(&WHITESPACE);
        p.accept(&CLOSE)?;
        Some(Rc::new(Node::Wrapped(inner)))
    })
}

// KEYWORD := ws 'KEYWORD' ws
fn spaced_keyword(p: &mut Parser<'_>, keyword: &Token) -> Option<()> {
    p.attempt(|p| {
        p.accept(&WHITESPACE)?;
        p.accept(keyword)?;
        p.accept(&WHITESPACE)?;
        Some(())
    })
}

// exception := WITH <grammar-specific name>
fn exception<G: Grammar>(p: &mut Parser<'_>) -> Option<String> {
    p.attempt(|p| {
        spaced_keyword(p, &WITH)?;
        G::exception_name(p)
    })
}

// license_ref := DocumentRef-x ':' LicenseRef-y exception?
//              | LicenseRef-y exception?
fn license_ref<G: Grammar>(p: &mut Parser<'_>) -> Option<Rc<Node>> {
    let qualified = p.attempt(|p| {
        let document_ref = prefixed(p, &DOCUMENT_REF)?;
        p.accept(&COLON)?;
        let license_ref = prefixed(p, &LICENSE_REF)?;
        Some((Some(document_ref), license_ref))
    });
    let (document_ref, license_ref) = match qualified {
        Some(parts) => parts,
        None => (None, prefixed(p, &LICENSE_REF)?),
    };
    if let Some(exception) = p.attempt(exception::<G>) {
        tracing::debug!(%license_ref, %exception, "dropped exception on license reference");
    }
    Some(Rc::new(Node::LicenseRef {
        document_ref,
        license_ref,
    }))
}

fn prefixed(p: &mut Parser<'_>, prefix: &Token) -> Option<String> {
    p.attempt(|p| {
        let prefix = p.accept(prefix)?;
        let value = p.accept(&REF_VALUE)?;
        Some(format!("{}{}", prefix, value))
    })
}
