//! # asset-lint-core
//!
//! Core framework for linting game project content against a configurable
//! rule set and naming-convention table.
//!
//! This crate provides:
//!
//! - [`LintRule`] — the capability interface for one check against one asset
//! - [`LintRuleList`] / [`LintRuleSet`] — per-class rule bindings and the
//!   orchestration entry point [`LintRuleSet::lint_paths`]
//! - [`NamingConventionTable`] — class-hierarchy-aware prefix/suffix lookup
//! - [`AssetIndex`] / [`FsAssetIndex`] — asset enumeration for a path set
//! - [`LintResults`] — the aggregate report with JSON and HTML output
//!
//! ## Example
//!
//! ```ignore
//! use asset_lint_core::{FsAssetIndex, LintRuleSet};
//!
//! let index = FsAssetIndex::new("Content");
//! let results = rule_set.lint_paths(&index, vec!["/Game".to_string()], None)?;
//! println!("{}", results.result);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod asset;
mod classes;
mod config;
mod naming;
mod rule;
mod rule_set;
mod runner;
mod types;

pub use asset::{
    AssetDescriptor, AssetIndex, AssetIndexError, AssetLoadError, AssetObject, BlueprintInfo,
    BlueprintKind, BlueprintStatus, FsAssetIndex, MaterialDomain, MaterialInfo, TextureGroup,
    TextureInfo, MOUNT_POINT,
};
pub use classes::{ClassRegistry, ANY_CLASS, ROOT_CLASS};
pub use config::{Config, ConfigError, RuleConfig};
pub use naming::{NamingConventionEntry, NamingConventionTable};
pub use rule::{LintRule, RuleRef};
pub use rule_set::{
    LintError, LintProgress, LintRuleList, LintRuleSet, ProgressFn, DEFAULT_LINT_PATH,
};
pub use runner::LintRunner;
pub use types::{LintResults, RuleViolation, Severity, Violator};
