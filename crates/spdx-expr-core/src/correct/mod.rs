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

//! Identifier correction.
//!
//! Maps the license and exception names people actually write onto SPDX
//! identifiers. Every function here is total: text that cannot be
//! corrected comes back unchanged, and the validator reports it later.

mod aliases;
mod exceptions;
mod gpl;
mod licenses;
mod names;
mod permutations;
mod spelling;

pub use exceptions::{correct_exception_id, expand_related_licenses, RelationScope};
pub use licenses::{correct_license_id, split_embedded_exception};
pub use names::{find_license_by_name, variations_of};
pub use permutations::permutations_of;

use crate::expression::{LicenseInfo, ParsedExpression};

/// Correct one license leaf, including its exception.
pub fn correct_license_info(info: &LicenseInfo, upgrade: bool) -> ParsedExpression {
    if let Some(split) = split_embedded_exception(info, upgrade) {
        return split;
    }
    let license = correct_license_id(&info.license, upgrade);
    let exception = info
        .exception
        .as_deref()
        .map(|exception| correct_exception_id(exception, Some(&license)));
    ParsedExpression::License(LicenseInfo { license, exception })
}

/// Correct every license leaf of an expression. References are kept.
pub fn correct_expression(expr: &ParsedExpression, upgrade: bool) -> ParsedExpression {
    expr.map_licenses(&mut |info| correct_license_info(info, upgrade))
}
