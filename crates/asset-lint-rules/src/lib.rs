//! # asset-lint-rules
//!
//! Built-in content lint rules for asset-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | AL001 | `blueprint-compiles` | Flags blueprints with compile errors or warnings |
//! | AL002 | `texture-size-not-too-big` | Limits texture dimensions to a configured maximum |
//! | AL003 | `texture-size-power-of-two` | Requires power-of-two texture dimensions |
//! | AL004 | `naming-convention-valid` | Checks names against the naming-convention table |
//!
//! ## Usage
//!
//! ```ignore
//! use asset_lint_core::{Config, FsAssetIndex};
//! use asset_lint_rules::default_rule_set;
//!
//! let rule_set = default_rule_set(&Config::default());
//! let index = FsAssetIndex::new("Content");
//! let results = rule_set.lint_paths(&index, vec![], None)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod blueprint_compiles;
mod naming_convention_valid;
mod presets;
mod texture_size_not_too_big;
mod texture_size_power_of_two;

pub use blueprint_compiles::BlueprintCompiles;
pub use naming_convention_valid::NamingConventionValid;
pub use presets::{
    all_rules, available_rule_sets, default_rule_set, marketplace_rule_set, rule_set_by_name,
};
pub use texture_size_not_too_big::TextureSizeNotTooBig;
pub use texture_size_power_of_two::TextureSizePowerOfTwo;

/// Re-export core types for convenience.
pub use asset_lint_core::{LintRule, LintRuleSet, RuleViolation, Severity};
