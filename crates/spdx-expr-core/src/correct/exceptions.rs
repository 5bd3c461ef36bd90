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

//! Exception id correction and the exception-to-license relation.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::aliases;
use super::permutations::permutations_of;
use crate::licenses::reference_data;

/// How widely [`expand_related_licenses`] reads a related license.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RelationScope {
    /// Also relate an `-or-later` license to its bare version.
    #[default]
    Weak,
    /// Only the license itself and its explicit suffixed forms.
    Strong,
}

static BARE_GPL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([AL]?GPL-\d+(?:\.\d+)+)$").unwrap());
static LATER_GPL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([AL]?GPL-\d+(?:\.\d+)+)(?:\+|-or-later|-and-later)$").unwrap());
static VERSION_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s+version\s+(\d)").unwrap());
static VERSION_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s*\bversion\b").unwrap());
static BARE_TRAILING_INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(^|[^\d.])(\d+)$").unwrap());
static GNU_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^gnu\s+(?:the\s+)?").unwrap());
static TRAILING_PARENTHETICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\([^)]*\)$").unwrap());
static TRAILING_VERSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(?:\.\d+)*$").unwrap());
static THE_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^the\s+").unwrap());

/// Expand license ids to the set of spellings an exception relation may
/// use for them, sorted and de-duplicated.
///
/// `GPL-2.0` also stands for `GPL-2.0-only`, `GPL-2.0-or-later` and
/// `GPL-2.0-and-later`. `GPL-2.0+` and the other later forms stand for
/// each other, and under [`RelationScope::Weak`] for `GPL-2.0` as well.
pub fn expand_related_licenses<S: AsRef<str>>(ids: &[S], scope: RelationScope) -> Vec<String> {
    let mut out = BTreeSet::new();
    for id in ids {
        let id = id.as_ref();
        out.insert(id.to_string());
        if let Some(caps) = BARE_GPL.captures(id) {
            let base = &caps[1];
            for suffix in ["-only", "-or-later", "-and-later"] {
                out.insert(format!("{base}{suffix}"));
            }
        } else if let Some(caps) = LATER_GPL.captures(id) {
            let base = &caps[1];
            out.insert(format!("{base}-or-later"));
            out.insert(format!("{base}-and-later"));
            if scope == RelationScope::Weak {
                out.insert(base.to_string());
            }
        }
    }
    out.into_iter().collect()
}

/// Map a possibly misspelled exception id onto an official SPDX id.
///
/// `license` is the license the exception is attached to. When several
/// exceptions fit the text it picks the one written for that license.
/// The input is returned unchanged when nothing matches.
pub fn correct_exception_id(id: &str, license: Option<&str>) -> String {
    let base = remove_extras(id);
    if let Some(found) = lookup(&base) {
        return found;
    }

    let mut variants = vec![base.clone()];
    let mut matches: Vec<String> = Vec::new();
    for mutations in permutations_of(&MUTATIONS, 3) {
        let candidate = mutations.iter().fold(base.clone(), |text, mutate| mutate(&text));
        if let Some(found) = lookup(&candidate) {
            if !matches.contains(&found) {
                matches.push(found);
            }
        }
        if !variants.contains(&candidate) {
            variants.push(candidate);
        }
    }

    if matches.is_empty() && !TRAILING_VERSION.is_match(&base) {
        for variant in &variants {
            for found in versioned_ids_with_prefix(variant) {
                if !matches.contains(&found) {
                    matches.push(found);
                }
            }
        }
    }

    match choose(matches, license) {
        Some(found) => {
            tracing::trace!(from = id, to = %found, "corrected exception id");
            found
        }
        None => id.to_string(),
    }
}

fn remove_extras(text: &str) -> String {
    let text = THE_PREFIX.replace(text.trim(), "");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn lookup(candidate: &str) -> Option<String> {
    if candidate.is_empty() {
        return None;
    }
    aliases::exception_alias(candidate)
        .or_else(|| aliases::exception_alias(&VERSION_NUMBER.replace_all(candidate, " $1")))
        .map(String::from)
        .or_else(|| reference_data().find_exception_id(candidate).map(String::from))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn drop_version_word(text: &str) -> String {
    collapse_whitespace(&VERSION_WORD.replace_all(text, ""))
}

fn append_minor_version(text: &str) -> String {
    BARE_TRAILING_INTEGER.replace(text, "${1}${2}.0").into_owned()
}

fn strip_gnu_prefix(text: &str) -> String {
    GNU_PREFIX.replace(text, "").into_owned()
}

fn strip_parenthetical(text: &str) -> String {
    TRAILING_PARENTHETICAL.replace(text, "").into_owned()
}

const MUTATIONS: [fn(&str) -> String; 5] = [
    collapse_whitespace,
    drop_version_word,
    append_minor_version,
    strip_gnu_prefix,
    strip_parenthetical,
];

/// Exception ids that start with `text` (dashed, any case) followed by a
/// version, e.g. `autoconf exception` finds `Autoconf-exception-2.0`.
fn versioned_ids_with_prefix(text: &str) -> Vec<String> {
    let dashed = text.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-");
    let prefix = format!("{dashed}-");
    if prefix.len() < 2 {
        return Vec::new();
    }
    reference_data()
        .exception_ids()
        .iter()
        .filter(|id| {
            let lower = id.to_lowercase();
            lower
                .strip_prefix(&prefix)
                .and_then(|rest| rest.chars().next())
                .is_some_and(|c| c.is_ascii_digit())
        })
        .cloned()
        .collect()
}

fn choose(mut candidates: Vec<String>, license: Option<&str>) -> Option<String> {
    if candidates.len() <= 1 {
        return candidates.pop();
    }
    if let Some(license) = license {
        for scope in [RelationScope::Strong, RelationScope::Weak] {
            if let Some(found) = candidates.iter().find(|c| relates_to(c, license, scope)) {
                return Some(found.clone());
            }
        }
    }
    candidates.sort();
    candidates.into_iter().next()
}

fn relates_to(exception: &str, license: &str, scope: RelationScope) -> bool {
    reference_data().exception(exception).is_some_and(|e| {
        expand_related_licenses(&e.related_licenses, scope)
            .iter()
            .any(|related| related.eq_ignore_ascii_case(license))
    })
}
