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

//! Well-known informal spellings that no mechanical rule recovers.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Lower-cased informal license names and their SPDX identifiers.
static LICENSE_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("apache software license", "Apache-1.1"),
        ("apache software license 2.0", "Apache-2.0"),
        ("apache 2", "Apache-2.0"),
        ("apache2", "Apache-2.0"),
        ("apache license version 2", "Apache-2.0"),
        ("asl 2.0", "Apache-2.0"),
        ("asl2", "Apache-2.0"),
        ("bsd license", "BSD-2-Clause"),
        ("new bsd license", "BSD-3-Clause"),
        ("modified bsd license", "BSD-3-Clause"),
        ("revised bsd license", "BSD-3-Clause"),
        ("simplified bsd license", "BSD-2-Clause"),
        ("freebsd", "BSD-2-Clause"),
        ("freebsd license", "BSD-2-Clause"),
        ("bsd0", "0BSD"),
        ("zero-clause bsd", "0BSD"),
        ("free public license", "0BSD"),
        ("free public license 1.0", "0BSD"),
        ("free public license 1.0.0", "0BSD"),
        ("mit license", "MIT"),
        ("expat", "MIT"),
        ("x11 license", "X11"),
        ("isc license", "ISC"),
        ("boost", "BSL-1.0"),
        ("boost software license", "BSL-1.0"),
        ("mpl", "MPL-2.0"),
        ("mpl2", "MPL-2.0"),
        ("mozilla public license", "MPL-2.0"),
        ("eclipse public license", "EPL-1.0"),
        ("cddl", "CDDL-1.1"),
        ("public domain", "Unlicense"),
        ("unlicense", "Unlicense"),
        ("wtfpl", "WTFPL"),
        ("cc0", "CC0-1.0"),
        ("zlib license", "Zlib"),
        ("zlib/libpng", "Zlib"),
        ("python software foundation license", "Python-2.0"),
        ("psf", "Python-2.0"),
        ("postgresql license", "PostgreSQL"),
        ("perl", "Artistic-1.0-Perl"),
        ("artistic license", "Artistic-2.0"),
        ("lgpl", "LGPL-3.0"),
        ("agpl", "AGPL-3.0"),
        ("gpl", "GPL-3.0"),
    ])
});

/// Lower-cased informal exception names and their SPDX identifiers.
static EXCEPTION_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("qwt license 1.0", "Qwt-exception-1.0"),
        ("cpe", "Classpath-exception-2.0"),
        ("classpath", "Classpath-exception-2.0"),
        ("font exception", "Font-exception-2.0"),
        ("gcc runtime library exception", "GCC-exception-3.1"),
        ("linking exception", "GPL-3.0-linking-exception"),
    ])
});

/// The aliased license id for `text`, ignoring case and a leading "the".
pub(crate) fn license_alias(text: &str) -> Option<&'static str> {
    let lower = text.trim().to_lowercase();
    if let Some(id) = LICENSE_ALIASES.get(lower.as_str()) {
        return Some(id);
    }
    lower
        .strip_prefix("the ")
        .and_then(|rest| LICENSE_ALIASES.get(rest.trim_start()).copied())
}

/// The aliased exception id for `text`, ignoring case.
pub(crate) fn exception_alias(text: &str) -> Option<&'static str> {
    EXCEPTION_ALIASES.get(text.trim().to_lowercase().as_str()).copied()
}
