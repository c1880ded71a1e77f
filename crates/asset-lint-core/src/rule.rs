//! The lint rule trait.

use std::sync::Arc;

use crate::asset::AssetObject;
use crate::rule_set::LintRuleSet;
use crate::types::{RuleViolation, Severity};

/// A single check against one loaded asset.
///
/// Implementations are immutable singletons, shared across the rule lists of
/// a rule set and across worker threads for the lifetime of a lint pass.
/// One struct per concrete check; type-specific gating belongs in
/// [`applies_to`](LintRule::applies_to), not in an override chain.
///
/// # Example
///
/// ```ignore
/// use asset_lint_core::{AssetObject, LintRule, LintRuleSet, RuleViolation, Severity};
///
/// pub struct NoEmptyName;
///
/// impl LintRule for NoEmptyName {
///     fn name(&self) -> &'static str { "no-empty-name" }
///     fn code(&self) -> &'static str { "AL900" }
///     fn title(&self) -> &'static str { "Assets must be named" }
///
///     fn check(&self, asset: &AssetObject, _rule_set: &LintRuleSet) -> Vec<RuleViolation> {
///         if asset.name.is_empty() {
///             vec![RuleViolation::new(self, asset, "Give this asset a name.")]
///         } else {
///             vec![]
///         }
///     }
/// }
/// ```
pub trait LintRule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g. "texture-size-power-of-two").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g. "AL003").
    fn code(&self) -> &'static str;

    /// Returns the group tag this rule reports under.
    fn group(&self) -> &'static str {
        "general"
    }

    /// Returns the human-readable rule title.
    fn title(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns a reference URL for this rule.
    fn url(&self) -> &'static str {
        ""
    }

    /// Returns the severity of violations from this rule.
    fn severity(&self) -> Severity {
        Severity::Error
    }

    /// Whether this rule must run on the orchestrating thread.
    fn requires_main_thread(&self) -> bool {
        false
    }

    /// Whether this rule is currently suppressed.
    fn is_suppressed(&self) -> bool {
        false
    }

    /// Capability filter: whether this rule applies to the given asset.
    ///
    /// Rules that only make sense for a class of assets reject everything
    /// else here, and [`check`](LintRule::check) can assume an applicable
    /// asset.
    fn applies_to(&self, _asset: &AssetObject, _rule_set: &LintRuleSet) -> bool {
        true
    }

    /// Runs the concrete check against a pre-validated asset.
    ///
    /// Emits one violation per independent failure reason; an empty vec
    /// means the asset passed.
    fn check(&self, asset: &AssetObject, rule_set: &LintRuleSet) -> Vec<RuleViolation>;

    /// Evaluates this rule against an asset.
    ///
    /// Suppressed rules and inapplicable assets short-circuit to a pass with
    /// no violations; otherwise the outcome is whatever
    /// [`check`](LintRule::check) reports.
    fn evaluate(&self, asset: &AssetObject, rule_set: &LintRuleSet) -> (bool, Vec<RuleViolation>) {
        if self.is_suppressed() {
            return (true, Vec::new());
        }

        if !self.applies_to(asset, rule_set) {
            return (true, Vec::new());
        }

        let violations = self.check(asset, rule_set);
        (violations.is_empty(), violations)
    }
}

/// Shared handle to a rule singleton.
pub type RuleRef = Arc<dyn LintRule>;
