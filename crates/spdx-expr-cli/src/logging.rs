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

//! Log setup for the binary.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `spdx_expr_core=debug`.
pub const LOG_ENV: &str = "SPDX_EXPR_LOG";

/// Directive used when neither `SPDX_EXPR_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_DIRECTIVE: &str = "spdx_expr=warn";

/// The filter from `SPDX_EXPR_LOG`, then `RUST_LOG`, then the default.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}

/// Install the global subscriber. Logs go to stderr so stdout stays
/// machine-readable. Calling it twice is harmless.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
