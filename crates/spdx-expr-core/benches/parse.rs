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

//! Parser benchmarks.
//!
//! Covers the three paths an expression can take: the strict grammar, the
//! liberal grammar with identifier correction, and the name fallbacks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use spdx_expr_core::{correct_exception_id, correct_license_id, parse, ParseOptions};

// ============================================================================
// Full parse
// ============================================================================

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let options = ParseOptions::builder().upgrade_gpl_variants(true).build();

    let cases = [
        ("strict_simple", "MIT"),
        (
            "strict_compound",
            "(MIT OR Apache-2.0) AND (GPL-2.0-or-later WITH Classpath-exception-2.0)",
        ),
        ("liberal_keywords", "mit or apache-2.0 and bsd-3-clause"),
        ("liberal_names", "Apache License, Version 2.0 OR GNU General Public License v3 or later"),
        ("license_name", "GNU Lesser General Public License v2.1 or later"),
        ("parenthetical", "Some Vendor License (MIT)"),
    ];

    for (name, input) in cases {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| parse(black_box(input), &options))
        });
    }
    group.finish();
}

fn bench_parse_long_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_chain");
    let options = ParseOptions::default();

    for count in [4usize, 16, 64] {
        let input = vec!["MIT"; count].join(" OR ");
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &input, |b, input| {
            b.iter(|| parse(black_box(input), &options))
        });
    }
    group.finish();
}

// ============================================================================
// Identifier correction
// ============================================================================

fn bench_correct(c: &mut Criterion) {
    let mut group = c.benchmark_group("correct");

    group.bench_function("license_known", |b| {
        b.iter(|| correct_license_id(black_box("Apache-2.0"), false))
    });
    group.bench_function("license_spelling", |b| {
        b.iter(|| correct_license_id(black_box("Mozilla Public Licence 2.0"), false))
    });
    group.bench_function("exception_mutations", |b| {
        b.iter(|| correct_exception_id(black_box("GNU classpath exception version 2"), None))
    });
    group.bench_function("exception_prefix", |b| {
        b.iter(|| correct_exception_id(black_box("autoconf exception"), Some("GPL-3.0-only")))
    });
    group.finish();
}

criterion_group!(benches, bench_parse, bench_parse_long_chain, bench_correct);
criterion_main!(benches);
