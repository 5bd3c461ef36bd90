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

//! Ordered selections used to combine identifier mutations.

/// Every ordered selection of up to `size` elements of `items`.
///
/// Selections are produced shortest first. Each element is followed by the
/// selections of the remaining elements rotated to start just after it, so
/// `[a, b, c]` yields `a, b, c, ab, ac, bc, ba, ca, cb, ...`.
pub fn permutations_of<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    let mut out = Vec::new();
    for length in 1..=size.min(items.len()) {
        out.extend(selections(items, length));
    }
    out
}

fn selections<T: Clone>(items: &[T], length: usize) -> Vec<Vec<T>> {
    if length == 0 {
        return vec![Vec::new()];
    }
    let mut out = Vec::new();
    for (i, head) in items.iter().enumerate() {
        let rest: Vec<T> = items[i + 1..]
            .iter()
            .chain(items[..i].iter())
            .cloned()
            .collect();
        for tail in selections(&rest, length - 1) {
            let mut selection = Vec::with_capacity(length);
            selection.push(head.clone());
            selection.extend(tail);
            out.push(selection);
        }
    }
    out
}
