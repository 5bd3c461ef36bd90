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

//! Last-chance recovery of license ids from free text.
//!
//! Runs only after every direct lookup failed. The input goes through a
//! fixed sequence of rewrites (long license names to their abbreviations,
//! then cumulative clean-ups) and is looked up after each one. Failing
//! that, a few distinctive words are mapped to their usual license, and
//! finally an id one edit away is accepted.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{aliases, gpl};
use crate::licenses::{mutilate, reference_data};

/// Long license names and the abbreviation their SPDX ids start with.
/// Longer phrases come first so they win over their own suffixes.
const TRANSPOSITIONS: &[(&str, &str)] = &[
    ("GNU AFFERO GENERAL PUBLIC LICENSE", "AGPL"),
    ("AFFERO GENERAL PUBLIC LICENSE", "AGPL"),
    ("GNU LESSER GENERAL PUBLIC LICENSE", "LGPL"),
    ("GNU LIBRARY GENERAL PUBLIC LICENSE", "LGPL"),
    ("LESSER GENERAL PUBLIC LICENSE", "LGPL"),
    ("LIBRARY GENERAL PUBLIC LICENSE", "LGPL"),
    ("GNU GENERAL PUBLIC LICENSE", "GPL"),
    ("GNU FREE DOCUMENTATION LICENSE", "GFDL"),
    ("FREE DOCUMENTATION LICENSE", "GFDL"),
    ("MOZILLA PUBLIC LICENSE", "MPL"),
    ("ECLIPSE PUBLIC LICENSE", "EPL"),
    ("COMMON PUBLIC LICENSE", "CPL"),
    ("ACADEMIC FREE LICENSE", "AFL"),
    ("OPEN SOFTWARE LICENSE", "OSL"),
    ("EUROPEAN UNION PUBLIC LICENSE", "EUPL"),
    ("ARTISTIC LICENSE", "Artistic"),
    ("APACHE SOFTWARE LICENSE", "Apache"),
    ("APACHE LICENSE", "Apache"),
    ("LICENCE", "LICENSE"),
];

static TRANSPOSITION_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    TRANSPOSITIONS
        .iter()
        .map(|(phrase, replacement)| {
            let words: Vec<String> = phrase
                .split(' ')
                .map(|w| if w == "LICENSE" { "LICEN[CS]E".to_string() } else { w.to_string() })
                .collect();
            let pattern = format!(r"(?i)\b{}\b", words.join(r"\s+"));
            (Regex::new(&pattern).unwrap(), *replacement)
        })
        .collect()
});

static DOTTED_VERSION_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"-\d+(?:\.\d+)+$").unwrap());
static DOCUMENTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bgfdl\b|documentation").unwrap());
static THE_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^the\s+").unwrap());
static LICENSE_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s*\blicen[cs]e\b").unwrap());
static VERSION_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bversion\b\s*").unwrap());
static V_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bv(\d)").unwrap());
static LETTER_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Za-z])(\d)").unwrap());
static DASH_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").unwrap());
static DASH_DIGIT_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"-(\d)$").unwrap());

fn trim(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_the(text: &str) -> String {
    THE_PREFIX.replace(text, "").into_owned()
}

fn drop_license_word(text: &str) -> String {
    trim(&LICENSE_WORD.replace_all(text, ""))
}

fn drop_commas(text: &str) -> String {
    trim(&text.replace(',', " "))
}

fn drop_version_word(text: &str) -> String {
    let text = VERSION_WORD.replace_all(text, "");
    trim(&V_PREFIX.replace_all(&text, "$1"))
}

fn dash_letters_and_digits(text: &str) -> String {
    LETTER_DIGIT.replace_all(text, "$1-$2").into_owned()
}

fn dash_spaces(text: &str) -> String {
    DASH_RUN
        .replace_all(&text.replace(' ', "-"), "-")
        .into_owned()
}

fn append_clause(text: &str) -> String {
    DASH_DIGIT_END.replace(text, "-$1-Clause").into_owned()
}

/// Cumulative rewrites; the id is looked up after each.
const REWRITES: &[fn(&str) -> String] = &[
    trim,
    strip_the,
    drop_license_word,
    drop_commas,
    drop_version_word,
    dash_letters_and_digits,
    dash_spaces,
    append_clause,
];

/// Words distinctive enough to stand for one license on their own.
const LAST_RESORTS: &[(&str, &str)] = &[
    ("APACHE", "Apache-2.0"),
    ("MIT", "MIT"),
    ("ISC", "ISC"),
    ("ZLIB", "Zlib"),
    ("UNLICENSE", "Unlicense"),
    ("WTFPL", "WTFPL"),
    ("CC0", "CC0-1.0"),
    ("BOOST", "BSL-1.0"),
    ("LGPL", "LGPL-3.0"),
    ("AGPL", "AGPL-3.0"),
    ("GPL", "GPL-3.0"),
    ("GNU", "GPL-3.0"),
    ("MPL", "MPL-2.0"),
];

/// Best-effort license id for free text, or `None`.
///
/// Text that already carries a dotted version (`Apache-2.6`) is left
/// alone, since guessing would silently change the version. So is text
/// with an embedded `-with-`, which is split into license and exception
/// elsewhere. A GNU Free Documentation License is never turned into a GPL.
pub(crate) fn correct_spelling(text: &str, upgrade: bool) -> Option<String> {
    if DOTTED_VERSION_SUFFIX.is_match(text) || text.to_lowercase().contains("-with-") {
        return None;
    }
    let id = recover(text)?;
    if DOCUMENTATION.is_match(text) && is_gpl_family(&id) {
        tracing::trace!(text, id = %id, "refusing GPL guess for documentation license");
        return None;
    }
    if upgrade {
        if let Some(later) = gpl::or_later_variant(&id) {
            return Some(later);
        }
    }
    Some(id)
}

fn recover(text: &str) -> Option<String> {
    let mut current = text.to_string();
    for (pattern, replacement) in TRANSPOSITION_PATTERNS.iter() {
        current = pattern.replace_all(&current, *replacement).into_owned();
    }
    if let Some(id) = lookup(&current) {
        return Some(id);
    }
    for rewrite in REWRITES {
        current = rewrite(&current);
        if let Some(id) = lookup(&current) {
            return Some(id);
        }
    }
    last_resort(text)
        .map(String::from)
        .or_else(|| nearest_id(text).map(String::from))
}

fn lookup(candidate: &str) -> Option<String> {
    if candidate.is_empty() {
        return None;
    }
    aliases::license_alias(candidate)
        .map(String::from)
        .or_else(|| reference_data().find_license_id(candidate).map(String::from))
        .or_else(|| gpl::normalize_gnu_family(candidate))
}

fn is_gpl_family(id: &str) -> bool {
    ["GPL-", "LGPL-", "AGPL-"].iter().any(|p| id.starts_with(p))
}

fn last_resort(text: &str) -> Option<&'static str> {
    let upper = text.to_uppercase();
    let words: Vec<&str> = upper
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    let has = |word: &str| words.contains(&word);
    if has("BSD") {
        return Some(if has("3") { "BSD-3-Clause" } else { "BSD-2-Clause" });
    }
    LAST_RESORTS
        .iter()
        .find(|(word, _)| has(*word))
        .map(|(_, id)| *id)
}

/// A known id one edit away from `text`, with the same version digits.
fn nearest_id(text: &str) -> Option<&'static str> {
    let needle = mutilate(text);
    if needle.chars().count() < 6 {
        return None;
    }
    let digits = |s: &str| s.chars().filter(char::is_ascii_digit).collect::<String>();
    let needle_digits = digits(&needle);
    reference_data()
        .license_ids()
        .iter()
        .find(|id| {
            let candidate = mutilate(id);
            digits(&candidate) == needle_digits && strsim::levenshtein(&candidate, &needle) <= 1
        })
        .map(|id| id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fix(text: &str) -> Option<String> {
        correct_spelling(text, false)
    }

    // ===== Rewrites =====

    #[test]
    fn test_long_names() {
        assert_eq!(fix("Apache License, version 2.0").as_deref(), Some("Apache-2.0"));
        assert_eq!(fix("Common Public License Version 1.0").as_deref(), Some("CPL-1.0"));
        assert_eq!(fix("Artistic License 2.0").as_deref(), Some("Artistic-2.0"));
        assert_eq!(fix("BSD 3-clause License").as_deref(), Some("BSD-3-Clause"));
        assert_eq!(fix("Mozilla Public Licence 2.0").as_deref(), Some("MPL-2.0"));
    }

    #[test]
    fn test_the_prefix() {
        assert_eq!(fix("The Unlicense").as_deref(), Some("Unlicense"));
    }

    #[test]
    fn test_lesser_gpl() {
        assert_eq!(
            fix("GNU Lesser General Public License v2.1").as_deref(),
            Some("LGPL-2.1")
        );
        assert_eq!(
            correct_spelling("Lesser General Public License v3.0", true).as_deref(),
            Some("LGPL-3.0-or-later")
        );
    }

    #[test]
    fn test_documentation_license() {
        assert_eq!(
            fix("GNU Free Documentation License v1.1").as_deref(),
            Some("GFDL-1.1")
        );
        assert_eq!(fix("GNU Free Documentation License v1.4"), None);
    }

    // ===== Last resorts =====

    #[test]
    fn test_distinctive_words() {
        assert_eq!(fix("BSD").as_deref(), Some("BSD-2-Clause"));
        assert_eq!(fix("BSD style 3").as_deref(), Some("BSD-3-Clause"));
        assert_eq!(fix("Apache").as_deref(), Some("Apache-2.0"));
        assert_eq!(fix("Some MIT variant").as_deref(), Some("MIT"));
    }

    #[test]
    fn test_one_edit_away() {
        assert_eq!(fix("Unlicence").as_deref(), Some("Unlicense"));
    }

    // ===== Guards =====

    #[test]
    fn test_dotted_versions_are_not_guessed() {
        assert_eq!(fix("Apache-2.6"), None);
        assert_eq!(fix("GPL-2.1"), None);
    }

    #[test]
    fn test_embedded_with_is_not_guessed() {
        assert_eq!(fix("GPL-3.0-with-bison-exception"), None);
    }

    #[test]
    fn test_unknown_text() {
        assert_eq!(fix("No Such License"), None);
        assert_eq!(fix("General Public License v3.0"), None);
        assert_eq!(fix("foo"), None);
    }
}
