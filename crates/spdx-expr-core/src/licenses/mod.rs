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

//! The SPDX license and exception lists.
//!
//! Both lists are embedded JSON, loaded once on first use and read-only
//! afterwards. Everything goes through [`reference_data`].

mod index;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Deserialize;

pub use index::mutilate;
use index::IdIndex;

const LICENSES_JSON: &str = include_str!("data/licenses.json");
const EXCEPTIONS_JSON: &str = include_str!("data/exceptions.json");

/// An entry of the SPDX license list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    pub license_id: String,
    pub name: String,
    pub deprecated: bool,
}

/// An entry of the SPDX exception list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exception {
    pub license_exception_id: String,
    pub name: String,
    pub deprecated: bool,
    /// Licenses the exception was written for.
    #[serde(default)]
    pub related_licenses: Vec<String>,
}

/// Immutable lookup tables over the license and exception lists.
#[derive(Debug)]
pub struct ReferenceData {
    licenses: Vec<License>,
    exceptions: Vec<Exception>,
    license_ids: IdIndex,
    exception_ids: IdIndex,
    license_names: HashMap<String, usize>,
}

static REFERENCE_DATA: Lazy<ReferenceData> = Lazy::new(|| {
    ReferenceData::from_json(LICENSES_JSON, EXCEPTIONS_JSON).unwrap_or_else(|err| {
        tracing::error!(error = %err, "embedded SPDX reference data is malformed");
        ReferenceData::new(Vec::new(), Vec::new())
    })
});

/// The process-wide reference data.
pub fn reference_data() -> &'static ReferenceData {
    &REFERENCE_DATA
}

/// Lower-case and collapse whitespace, for comparing license names.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl ReferenceData {
    pub fn new(licenses: Vec<License>, exceptions: Vec<Exception>) -> Self {
        let license_ids = IdIndex::new(licenses.iter().map(|l| l.license_id.as_str()));
        let exception_ids =
            IdIndex::new(exceptions.iter().map(|e| e.license_exception_id.as_str()));
        let mut license_names = HashMap::new();
        for (i, license) in licenses.iter().enumerate() {
            license_names.entry(normalize_name(&license.name)).or_insert(i);
        }
        Self {
            licenses,
            exceptions,
            license_ids,
            exception_ids,
            license_names,
        }
    }

    /// Build from the two JSON documents (arrays of entries).
    pub fn from_json(licenses: &str, exceptions: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(
            serde_json::from_str(licenses)?,
            serde_json::from_str(exceptions)?,
        ))
    }

    pub fn licenses(&self) -> &[License] {
        &self.licenses
    }

    pub fn exceptions(&self) -> &[Exception] {
        &self.exceptions
    }

    pub fn license_ids(&self) -> &[String] {
        self.license_ids.ids()
    }

    pub fn exception_ids(&self) -> &[String] {
        self.exception_ids.ids()
    }

    /// Case-insensitive membership test.
    pub fn is_known_license_id(&self, id: &str) -> bool {
        self.license_ids.contains_ignore_case(id)
    }

    /// Case-insensitive membership test.
    pub fn is_known_exception_id(&self, id: &str) -> bool {
        self.exception_ids.contains_ignore_case(id)
    }

    /// Whether `id` is exactly an official license identifier.
    pub fn is_exact_license_id(&self, id: &str) -> bool {
        self.license_ids.exact(id).is_some()
    }

    /// Whether `id` is exactly an official exception identifier.
    pub fn is_exact_exception_id(&self, id: &str) -> bool {
        self.exception_ids.exact(id).is_some()
    }

    /// The license entry for `id`, compared case-insensitively.
    pub fn license(&self, id: &str) -> Option<&License> {
        let official = self.license_ids.case_insensitive(id)?;
        self.licenses.iter().find(|l| l.license_id == official)
    }

    /// The exception entry for `id`, compared case-insensitively.
    pub fn exception(&self, id: &str) -> Option<&Exception> {
        let lower = id.to_lowercase();
        self.exceptions
            .iter()
            .find(|e| e.license_exception_id.to_lowercase() == lower)
    }

    /// Official license id for `text` by exact, case-insensitive or
    /// mutilated match.
    pub fn find_license_id(&self, text: &str) -> Option<&str> {
        self.license_ids.find(text)
    }

    /// Official exception id for `text` by exact, case-insensitive or
    /// mutilated match.
    pub fn find_exception_id(&self, text: &str) -> Option<&str> {
        self.exception_ids.find(text)
    }

    /// The license whose full name equals `name` after normalization.
    /// Earlier entries win.
    pub fn license_by_name(&self, name: &str) -> Option<&License> {
        self.license_names
            .get(&normalize_name(name))
            .map(|&i| &self.licenses[i])
    }

    /// Position of a license in the list, for ranking name matches.
    pub(crate) fn license_rank(&self, name: &str) -> Option<usize> {
        self.license_names.get(name).copied()
    }
}
