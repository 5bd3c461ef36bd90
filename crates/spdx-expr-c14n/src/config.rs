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

//! Normalization configuration.

use spdx_expr_core::ParseOptions;

/// Configuration for canonical expression output.
///
/// # Examples
///
/// ```
/// use spdx_expr_c14n::NormalizeConfig;
///
/// // Default configuration: liberal parsing, sorted operands
/// let config = NormalizeConfig::default();
/// assert!(config.sort_operands);
/// assert!(!config.parse_options.strict_syntax);
///
/// // Keep operand order and upgrade GPL ids
/// let config = NormalizeConfig::new()
///     .with_sort_operands(false)
///     .with_upgrade_gpl_variants(true);
/// assert!(config.parse_options.upgrade_gpl_variants);
/// ```
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct NormalizeConfig {
    /// Options for parsing the input before it is rendered.
    ///
    /// Default: liberal, no GPL upgrade.
    pub parse_options: ParseOptions,

    /// Order the two operands of every conjunction.
    ///
    /// Licenses come before license references, and both before nested
    /// conjunctions; ties are broken alphabetically. This makes
    /// `A OR B` and `B OR A` render identically.
    ///
    /// Default: `true`
    pub sort_operands: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            sort_operands: true,
        }
    }
}

impl NormalizeConfig {
    /// Create a new configuration with all default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for constructing a `NormalizeConfig`.
    ///
    /// # Examples
    ///
    /// ```
    /// use spdx_expr_c14n::NormalizeConfig;
    ///
    /// let config = NormalizeConfig::builder()
    ///     .strict(true)
    ///     .sort_operands(false)
    ///     .build();
    /// assert!(config.parse_options.strict_syntax);
    /// ```
    pub fn builder() -> NormalizeConfigBuilder {
        NormalizeConfigBuilder::new()
    }

    /// Set whether the input must be strict SPDX syntax.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.parse_options.strict_syntax = strict;
        self
    }

    /// Set whether GPL ids are upgraded to their `-only` forms.
    pub fn with_upgrade_gpl_variants(mut self, upgrade: bool) -> Self {
        self.parse_options.upgrade_gpl_variants = upgrade;
        self
    }

    /// Set whether conjunction operands are sorted.
    pub fn with_sort_operands(mut self, sort_operands: bool) -> Self {
        self.sort_operands = sort_operands;
        self
    }

    /// Replace the parse options wholesale.
    pub fn with_parse_options(mut self, parse_options: ParseOptions) -> Self {
        self.parse_options = parse_options;
        self
    }
}

/// Builder for [`NormalizeConfig`].
#[derive(Debug, Clone, Default)]
pub struct NormalizeConfigBuilder {
    config: NormalizeConfig,
}

impl NormalizeConfigBuilder {
    /// Create a new builder with default configuration values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require strict SPDX syntax (default: false).
    pub fn strict(mut self, strict: bool) -> Self {
        self.config.parse_options.strict_syntax = strict;
        self
    }

    /// Upgrade GPL ids to their `-only` forms (default: false).
    pub fn upgrade_gpl_variants(mut self, upgrade: bool) -> Self {
        self.config.parse_options.upgrade_gpl_variants = upgrade;
        self
    }

    /// Sort conjunction operands (default: true).
    pub fn sort_operands(mut self, sort_operands: bool) -> Self {
        self.config.sort_operands = sort_operands;
        self
    }

    pub fn parse_options(mut self, parse_options: ParseOptions) -> Self {
        self.config.parse_options = parse_options;
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> NormalizeConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Default tests ====================

    #[test]
    fn test_default() {
        let config = NormalizeConfig::default();
        assert!(config.sort_operands);
        assert!(!config.parse_options.strict_syntax);
        assert!(!config.parse_options.upgrade_gpl_variants);
    }

    #[test]
    fn test_new_equals_default_and_builder() {
        let from_new = NormalizeConfig::new();
        let from_builder = NormalizeConfig::builder().build();
        assert_eq!(from_new.sort_operands, from_builder.sort_operands);
        assert_eq!(
            from_new.parse_options.strict_syntax,
            from_builder.parse_options.strict_syntax
        );
    }

    // ==================== Setter tests ====================

    #[test]
    fn test_with_setters_chain() {
        let config = NormalizeConfig::new()
            .with_strict(true)
            .with_upgrade_gpl_variants(true)
            .with_sort_operands(false);
        assert!(config.parse_options.strict_syntax);
        assert!(config.parse_options.upgrade_gpl_variants);
        assert!(!config.sort_operands);
    }

    #[test]
    fn test_with_parse_options_keeps_sorting() {
        let config = NormalizeConfig::new().with_parse_options(ParseOptions::strict());
        assert!(config.parse_options.strict_syntax);
        assert!(config.sort_operands);
    }

    #[test]
    fn test_builder_all_options() {
        let config = NormalizeConfig::builder()
            .strict(true)
            .upgrade_gpl_variants(true)
            .sort_operands(false)
            .build();
        assert!(config.parse_options.strict_syntax);
        assert!(config.parse_options.upgrade_gpl_variants);
        assert!(!config.sort_operands);
    }
}
