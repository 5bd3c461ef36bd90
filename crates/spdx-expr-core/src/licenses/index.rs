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

//! Identifier lookup tables.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static TRAILING_INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"-(\d+)$").unwrap());

/// Strip everything but ASCII letters, digits and `+`, then upper-case.
pub fn mutilate(id: &str) -> String {
    id.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '+')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Three-tier lookup over a list of official identifiers: exact,
/// case-insensitive, then mutilated.
#[derive(Debug, Default)]
pub(crate) struct IdIndex {
    exact: HashMap<String, usize>,
    lowercase: HashMap<String, usize>,
    mutilated: HashMap<String, usize>,
    ids: Vec<String>,
}

impl IdIndex {
    pub(crate) fn new<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut index = Self::default();
        for (i, id) in ids.into_iter().enumerate() {
            index.ids.push(id.to_string());
            index.exact.entry(id.to_string()).or_insert(i);
            index.lowercase.entry(id.to_lowercase()).or_insert(i);
            index.mutilated.entry(mutilate(id)).or_insert(i);
        }
        index
    }

    pub(crate) fn exact(&self, id: &str) -> Option<&str> {
        self.exact.get(id).map(|&i| self.ids[i].as_str())
    }

    /// Lower-case match, also trying `spaces-to-dashes` with a bare
    /// trailing integer read as `N.0`.
    pub(crate) fn case_insensitive(&self, id: &str) -> Option<&str> {
        let lower = id.to_lowercase();
        if let Some(&i) = self.lowercase.get(&lower) {
            return Some(self.ids[i].as_str());
        }
        let dashed = WHITESPACE_RUN.replace_all(&lower, "-");
        if let Some(&i) = self.lowercase.get(dashed.as_ref()) {
            return Some(self.ids[i].as_str());
        }
        let versioned = TRAILING_INTEGER.replace(&dashed, "-${1}.0");
        self.lowercase.get(versioned.as_ref()).map(|&i| self.ids[i].as_str())
    }

    pub(crate) fn mutilated(&self, id: &str) -> Option<&str> {
        self.mutilated.get(&mutilate(id)).map(|&i| self.ids[i].as_str())
    }

    /// First hit of exact, case-insensitive and mutilated lookup.
    pub(crate) fn find(&self, id: &str) -> Option<&str> {
        self.exact(id)
            .or_else(|| self.case_insensitive(id))
            .or_else(|| self.mutilated(id))
    }

    pub(crate) fn contains_ignore_case(&self, id: &str) -> bool {
        self.lowercase.contains_key(&id.to_lowercase())
    }

    pub(crate) fn ids(&self) -> &[String] {
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> IdIndex {
        IdIndex::new(["Apache-2.0", "BSD-3-Clause", "GPL-2.0+", "MIT"])
    }

    #[test]
    fn test_mutilate() {
        assert_eq!(mutilate("GPL-2.0+"), "GPL20+");
        assert_eq!(mutilate("u-boot exception 2.0"), "UBOOTEXCEPTION20");
    }

    #[test]
    fn test_exact() {
        assert_eq!(index().exact("MIT"), Some("MIT"));
        assert_eq!(index().exact("mit"), None);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(index().case_insensitive("bsd-3-clause"), Some("BSD-3-Clause"));
        assert_eq!(index().case_insensitive("apache 2"), Some("Apache-2.0"));
        assert_eq!(index().case_insensitive("Apache   2.0"), Some("Apache-2.0"));
        assert_eq!(index().case_insensitive("apache"), None);
    }

    #[test]
    fn test_mutilated() {
        assert_eq!(index().mutilated("bsd 3 clause"), Some("BSD-3-Clause"));
        assert_eq!(index().mutilated("gpl 2.0+"), Some("GPL-2.0+"));
    }

    #[test]
    fn test_find_prefers_exact() {
        let index = IdIndex::new(["abc", "ABC"]);
        assert_eq!(index.find("ABC"), Some("ABC"));
        assert_eq!(index.find("aBc"), Some("abc"));
    }
}
