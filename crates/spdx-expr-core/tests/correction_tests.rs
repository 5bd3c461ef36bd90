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

//! Identifier correction through the liberal parse path.

use spdx_expr_core::{
    correct_exception_id, correct_license_id, parse, ParseOptions, ParsedExpression,
};

fn liberal(input: &str) -> ParsedExpression {
    parse(input, &ParseOptions::default()).unwrap()
}

fn upgraded(input: &str) -> ParsedExpression {
    let options = ParseOptions::builder().upgrade_gpl_variants(true).build();
    parse(input, &options).unwrap()
}

fn license(id: &str) -> ParsedExpression {
    ParsedExpression::license(id)
}

fn exception_of(expr: &ParsedExpression) -> Option<String> {
    expr.as_license().and_then(|info| info.exception.clone())
}

// ==================== GPL family ====================

#[test]
fn test_plus_suffix() {
    assert_eq!(liberal("AGPL-3.0+"), license("AGPL-3.0-or-later"));
    assert_eq!(
        liberal("AGPL-3.0+ OR MIT"),
        ParsedExpression::or(license("AGPL-3.0-or-later"), license("MIT"))
    );
    assert_eq!(liberal("LGPL-2.0+"), license("LGPL-2.0-or-later"));
    assert_eq!(liberal("GPL-3.0+"), license("GPL-3.0-or-later"));
    assert_eq!(liberal("LGPLv3+"), license("LGPL-3.0-or-later"));
    assert_eq!(liberal("LGPL-2+"), license("LGPL-2.0-or-later"));
}

#[test]
fn test_bare_versions_with_and_without_upgrade() {
    let families = [
        "GPL-1.0", "GPL-2.0", "GPL-3.0", "LGPL-2.0", "LGPL-2.1", "LGPL-3.0", "AGPL-1.0", "AGPL-3.0",
    ];
    for family in families {
        assert_eq!(liberal(family), license(family));
        assert_eq!(upgraded(family), license(&format!("{family}-only")));
        assert_eq!(upgraded(&format!("{family}-only")), license(&format!("{family}-only")));
        assert_eq!(
            upgraded(&format!("{family}-or-later")),
            license(&format!("{family}-or-later"))
        );
    }
}

#[test]
fn test_upgrade_inside_compound() {
    assert_eq!(
        upgraded("LGPL-2.0 OR MIT"),
        ParsedExpression::or(license("LGPL-2.0-only"), license("MIT"))
    );
    assert_eq!(
        liberal("LGPL-2.0 OR MIT"),
        ParsedExpression::or(license("LGPL-2.0"), license("MIT"))
    );
}

#[test]
fn test_gpl_shorthands() {
    assert_eq!(liberal("GPL"), license("GPL-3.0"));
    assert_eq!(liberal("GPLv2"), license("GPL-2.0"));
    assert_eq!(upgraded("GPLv2"), license("GPL-2.0-only"));
    assert_eq!(liberal("LGPL-3"), license("LGPL-3.0"));
    assert_eq!(upgraded("LGPL-3"), license("LGPL-3.0-only"));
}

#[test]
fn test_nonexistent_versions_are_kept() {
    assert_eq!(liberal("GPL-2.1"), license("GPL-2.1"));
    assert_eq!(upgraded("GPL-2.1"), license("GPL-2.1"));
    assert_eq!(liberal("Apache-2.6"), license("Apache-2.6"));
}

#[test]
fn test_long_gpl_names() {
    assert_eq!(
        correct_license_id("GNU General Public License v3.0", true),
        "GPL-3.0-or-later"
    );
    assert_eq!(
        correct_license_id("GNU Lesser General Public License v3.0", true),
        "LGPL-3.0-or-later"
    );
    assert_eq!(
        correct_license_id("GNU Affero General Public License v3.0", true),
        "AGPL-3.0-or-later"
    );
}

// ==================== Apache ====================

#[test]
fn test_apache_1_1_spellings() {
    for spelling in [
        "apache software license",
        "apache software license 1.1",
        "apache software license version 1.1",
        "apache software license, version 1.1",
    ] {
        assert_eq!(liberal(spelling), license("Apache-1.1"), "{spelling}");
    }
}

#[test]
fn test_apache_2_0_spellings() {
    for spelling in [
        "Apache2",
        "Apache 2",
        "Apache version 2",
        "Apache version 2.0",
        "Apache license 2",
        "Apache license 2.0",
        "Apache license version 2",
        "Apache License version 2.0",
        "Apache License, version 2",
        "Apache License, version 2.0",
    ] {
        assert_eq!(liberal(spelling), license("Apache-2.0"), "{spelling}");
    }
}

#[test]
fn test_apache_inside_compounds() {
    assert_eq!(
        liberal("Apache 2 AND MIT"),
        ParsedExpression::and(license("Apache-2.0"), license("MIT"))
    );
    assert_eq!(
        liberal("(MIT AND Apache 2)"),
        ParsedExpression::and(license("MIT"), license("Apache-2.0"))
    );
    assert_eq!(
        liberal("(MIT OR Apache version 2)"),
        ParsedExpression::or(license("MIT"), license("Apache-2.0"))
    );
}

// ==================== Case and keywords ====================

#[test]
fn test_official_case() {
    for spelling in ["mit", "mIt", "Mit"] {
        assert_eq!(liberal(spelling), license("MIT"));
    }
    assert_eq!(liberal("apache-2.0"), license("Apache-2.0"));
    assert_eq!(
        liberal("BSD-2-clause OR mit"),
        ParsedExpression::or(license("BSD-2-Clause"), license("MIT"))
    );
}

#[test]
fn test_lowercase_keywords() {
    assert_eq!(
        liberal("foo and bar"),
        ParsedExpression::and(license("foo"), license("bar"))
    );
    assert_eq!(
        liberal("Mit Or Gpl"),
        ParsedExpression::or(license("MIT"), license("GPL-3.0"))
    );
}

#[test]
fn test_unfixable_names_are_kept() {
    assert_eq!(liberal("No Such License"), license("No Such License"));
    assert_eq!(
        liberal("No Such License WITH Classpath-exception-2.0"),
        ParsedExpression::license_with("No Such License", "Classpath-exception-2.0")
    );
}

// ==================== Names containing keywords ====================

#[test]
fn test_cddl_names() {
    assert_eq!(liberal("CDDL"), license("CDDL-1.1"));
    assert_eq!(liberal("Common Development and Distribution License"), license("CDDL-1.1"));
    assert_eq!(liberal("Common Development and Distribution License 1.0"), license("CDDL-1.0"));
    assert_eq!(liberal("Common Development and Distribution License v1.1"), license("CDDL-1.1"));
    assert_eq!(
        liberal("Common Development and Distribution License version 1.0"),
        license("CDDL-1.0")
    );
    assert_eq!(
        liberal("0BSD OR Common Development and Distribution License 1.0"),
        ParsedExpression::or(license("0BSD"), license("CDDL-1.0"))
    );
}

#[test]
fn test_or_later_names() {
    assert_eq!(liberal("GNU Free Documentation License v1.3"), license("GFDL-1.3"));
    assert_eq!(
        liberal("GNU Free Documentation License v1.2 or later"),
        license("GFDL-1.2-or-later")
    );
    assert_eq!(
        liberal("GNU Lesser General Public License v2.1 or later"),
        license("LGPL-2.1-or-later")
    );
}

// ==================== BSD family ====================

#[test]
fn test_bsd_names() {
    assert_eq!(liberal("BSD"), license("BSD-2-Clause"));
    assert_eq!(liberal("BSD License"), license("BSD-2-Clause"));
    assert_eq!(liberal("FreeBSD License"), license("BSD-2-Clause"));
    assert_eq!(liberal("frEeBsD"), license("BSD-2-Clause"));
    assert_eq!(liberal("the simplified bsd license"), license("BSD-2-Clause"));
    assert_eq!(liberal("New BSD License"), license("BSD-3-Clause"));
    assert_eq!(liberal("the modified bsd license"), license("BSD-3-Clause"));
    assert_eq!(liberal("BSD0"), license("0BSD"));
    assert_eq!(liberal("Zero-Clause BSD"), license("0BSD"));
    assert_eq!(liberal("Free Public License 1.0.0"), license("0BSD"));
    assert_eq!(liberal("Free Public License"), license("0BSD"));
    assert_eq!(liberal("BSD2"), license("BSD-2-Clause"));
    assert_eq!(liberal("BSD3"), license("BSD-3-Clause"));
}

// ==================== Exceptions ====================

#[test]
fn test_exception_names() {
    let expected = ParsedExpression::license_with("Apache-2.0", "LLVM-exception");
    assert_eq!(liberal("Apache 2.0 WITH LLVM exception"), expected);
    assert_eq!(liberal("apache 2.0 WITH llvm exception"), expected);
    assert_eq!(
        liberal("MIT WITH No Such Exception"),
        ParsedExpression::license_with("MIT", "No Such Exception")
    );
}

#[test]
fn test_classpath_exception_spellings() {
    let expected = ParsedExpression::license_with("GPL-2.0-only", "Classpath-exception-2.0");
    assert_eq!(liberal("GPL-2.0-only WITH Classpath exception 2.0"), expected);
    assert_eq!(liberal("GPL-2.0-only WITH   ClasSpAth   eXcepTion   2.0   "), expected);
    assert_eq!(liberal("GPL-2.0-only WITH the classpath exception"), expected);
    assert_eq!(
        liberal("GPL-2.0-only WITH Classpath-exception-4.5.6"),
        ParsedExpression::license_with("GPL-2.0-only", "Classpath-exception-4.5.6")
    );
}

#[test]
fn test_autoconf_exception_spellings() {
    for input in [
        "GPL-3.0-only WITH autoconf exception 2.0",
        "GPL-3.0-only WITH autoconf exception 2",
        "GPL-3.0-only WITH autoconf exception version 2",
        "GPL-3.0-only WITH the autoconf exception 2",
        "GPL-3.0-only WITH the autoconf exception version 2.0",
        "GPL-3.0-only WITH the autoconf-exception-2.0",
    ] {
        assert_eq!(
            exception_of(&liberal(input)).as_deref(),
            Some("Autoconf-exception-2.0"),
            "{input}"
        );
    }
    assert!(parse("GPL-3.0-only WITH autoconf exception 2.0", &ParseOptions::strict()).is_err());
}

#[test]
fn test_qwt_and_uboot_exceptions() {
    assert_eq!(
        exception_of(&liberal("LGPL-2.1 WITH Qwt License 1.0")).as_deref(),
        Some("Qwt-exception-1.0")
    );
    assert_eq!(
        exception_of(&liberal("LGPL-2.1 WITH Qwt License Version 1.0")).as_deref(),
        Some("Qwt-exception-1.0")
    );
    assert_eq!(
        exception_of(&liberal("GPL-2.0+ WITH UBoot exception 2.0")).as_deref(),
        Some("u-boot-exception-2.0")
    );
    assert_eq!(
        exception_of(&liberal("GPL-2.0+ WITH UBoot exception 2")).as_deref(),
        Some("u-boot-exception-2.0")
    );
}

#[test]
fn test_correct_exception_id_with_prefixes() {
    for text in [
        "classpath exception version 2",
        "the classpath exception version 2",
        "GNU classpath exception version 2",
        "the GNU classpath exception version 2",
        "GNU the classpath exception version 2",
        "CPE",
        "GNU CPE",
    ] {
        assert_eq!(correct_exception_id(text, None), "Classpath-exception-2.0", "{text}");
    }
}

#[test]
fn test_correct_exception_id_versions() {
    assert_eq!(
        correct_exception_id("the autoconf exception version 2", None),
        "Autoconf-exception-2.0"
    );
    let spellings = [
        "QWT exception 1",
        "qwt exception 1.0",
        "QWT license 1",
        "the Qwt license version 1.0",
    ];
    for text in spellings {
        assert_eq!(correct_exception_id(text, None), "Qwt-exception-1.0", "{text}");
    }
    assert_eq!(correct_exception_id("UBoot exception 2", None), "u-boot-exception-2.0");
}

#[test]
fn test_exception_chosen_by_license() {
    assert_eq!(
        correct_exception_id("autoconf-exception", Some("GPL-2.0")),
        "Autoconf-exception-2.0"
    );
    assert_eq!(
        correct_exception_id("autoconf-exception", Some("GPL-3.0")),
        "Autoconf-exception-3.0"
    );
}

#[test]
fn test_w_slash_exceptions() {
    assert_eq!(
        liberal("GPL-3.0-only w/autoconf-exception-2.0"),
        ParsedExpression::license_with("GPL-3.0-only", "Autoconf-exception-2.0")
    );
    assert_eq!(
        liberal("GPL-3.0-only w/not an exception"),
        ParsedExpression::license_with("GPL-3.0-only", "not an exception")
    );
    assert_eq!(
        liberal("BSD 3-clause License w/nuclear disclaimer"),
        ParsedExpression::license_with("BSD-3-Clause", "nuclear disclaimer")
    );
}

// ==================== Fallbacks ====================

#[test]
fn test_exact_license_names() {
    assert_eq!(liberal("Mozilla Public License 2.0"), license("MPL-2.0"));
    assert_eq!(liberal("The Unlicense"), license("Unlicense"));
    assert!(parse("Mozilla Public License 2.0", &ParseOptions::strict()).is_err());
    assert!(parse("The Unlicense", &ParseOptions::strict()).is_err());
}

#[test]
fn test_embedded_with_ids() {
    assert_eq!(
        liberal("GPL-2.0-with-classpath-exception"),
        license("GPL-2.0-with-classpath-exception")
    );
    assert_eq!(
        liberal("GPL-3.0-with-bison-exception"),
        ParsedExpression::license_with("GPL-3.0", "Bison-exception-2.2")
    );
}
