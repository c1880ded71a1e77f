//! Rule lists, rule sets, and lint orchestration.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::{debug, info, warn};

use crate::asset::{AssetIndex, AssetIndexError};
use crate::classes::{ClassRegistry, ANY_CLASS, ROOT_CLASS};
use crate::naming::NamingConventionTable;
use crate::rule::RuleRef;
use crate::runner::LintRunner;
use crate::types::{LintResults, RuleViolation};

/// Content path linted when the caller supplies none.
pub const DEFAULT_LINT_PATH: &str = "/Game";

/// Errors that abort a lint pass before any evaluation happens.
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    /// The asset index could not enumerate the requested paths.
    #[error(transparent)]
    Index(#[from] AssetIndexError),
}

/// Progress notifications from a lint pass.
///
/// Delivered on the orchestrating thread only, never from workers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintProgress {
    /// One asset was dispatched for evaluation.
    Dispatched {
        /// Object path of the dispatched asset.
        object_path: String,
        /// Zero-based index of this asset within the pass.
        index: usize,
        /// Total number of enumerated assets.
        total: usize,
    },
    /// All workers joined; results are being tallied.
    Tallying,
}

/// Callback invoked with [`LintProgress`] updates.
pub type ProgressFn<'a> = &'a mut dyn FnMut(&LintProgress);

/// An ordered set of rules bound to one target class.
#[derive(Clone, Default)]
pub struct LintRuleList {
    rules: Vec<RuleRef>,
}

impl LintRuleList {
    /// Creates a rule list from shared rule handles.
    #[must_use]
    pub fn new(rules: Vec<RuleRef>) -> Self {
        Self { rules }
    }

    /// Appends a rule to the list.
    pub fn push(&mut self, rule: RuleRef) {
        self.rules.push(rule);
    }

    /// Returns the member rules in order.
    #[must_use]
    pub fn rules(&self) -> &[RuleRef] {
        &self.rules
    }

    /// Returns true if the list has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// True if any member rule must run on the orchestrating thread.
    #[must_use]
    pub fn requires_main_thread(&self) -> bool {
        self.rules.iter().any(|rule| rule.requires_main_thread())
    }

    /// Evaluates every member rule against `asset`.
    ///
    /// All rules run unconditionally; there is no short-circuit on the first
    /// failure. Violations from all rules are concatenated, and the list
    /// passes only if every rule passed.
    #[must_use]
    pub fn evaluate(
        &self,
        asset: &crate::asset::AssetObject,
        rule_set: &LintRuleSet,
    ) -> (bool, Vec<RuleViolation>) {
        let mut all_passed = true;
        let mut all_violations = Vec::new();

        for rule in &self.rules {
            let (passed, mut violations) = rule.evaluate(asset, rule_set);
            all_passed = passed && all_passed;
            all_violations.append(&mut violations);
        }

        (all_passed, all_violations)
    }
}

/// A complete lint configuration: per-class rule lists plus the naming table.
///
/// Configuration data: built once, read during every pass, never mutated by
/// linting.
pub struct LintRuleSet {
    name: String,
    description: String,
    classes: ClassRegistry,
    naming: NamingConventionTable,
    rules_by_class: HashMap<String, LintRuleList>,
}

impl LintRuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new(name: impl Into<String>, classes: ClassRegistry, naming: NamingConventionTable) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            classes,
            naming,
            rules_by_class: HashMap::new(),
        }
    }

    /// Sets the human-readable description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Name used to select this rule set from the command line.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description of this rule set.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The class hierarchy this rule set resolves against.
    #[must_use]
    pub fn classes(&self) -> &ClassRegistry {
        &self.classes
    }

    /// The naming-convention table owned by this rule set.
    #[must_use]
    pub fn naming_convention(&self) -> &NamingConventionTable {
        &self.naming
    }

    /// Binds `list` to `class`, replacing any previous binding.
    pub fn set_rules_for_class(&mut self, class: impl Into<String>, list: LintRuleList) {
        self.rules_by_class.insert(class.into(), list);
    }

    /// Resolves the rule list for `class` by walking the hierarchy.
    ///
    /// Exact-match lookup at each step; when the walk reaches the root class
    /// without a hit, the [`ANY_CLASS`] fallback binding is consulted and the
    /// walk stops. `None` means the class is exempt from linting.
    #[must_use]
    pub fn rule_list_for_class(&self, class: &str) -> Option<&LintRuleList> {
        let mut current = class;
        loop {
            if let Some(list) = self.rules_by_class.get(current) {
                return Some(list);
            }

            if current == ROOT_CLASS {
                return self.rules_by_class.get(ANY_CLASS);
            }

            current = self.classes.parent_of(current)?;
        }
    }

    /// Lints all assets recursively under the given content paths.
    ///
    /// Assets whose rule list requires the orchestrating thread are evaluated
    /// inline; every other asset gets its own worker thread. The call blocks
    /// until all workers have completed. The optional `progress` callback is
    /// invoked on the orchestrating thread, once per dispatched asset and
    /// once when tallying begins.
    ///
    /// # Errors
    ///
    /// Returns an error if asset enumeration fails. Failures local to one
    /// asset (unloadable manifest, no configured rules) are logged and
    /// skipped without aborting the pass.
    pub fn lint_paths(
        &self,
        index: &dyn AssetIndex,
        paths: Vec<String>,
        mut progress: Option<ProgressFn<'_>>,
    ) -> Result<LintResults, LintError> {
        let mut paths = paths;
        if paths.is_empty() {
            paths.push(DEFAULT_LINT_PATH.to_string());
        }

        info!("Linting paths: {}", paths.join(", "));
        let descriptors = index.enumerate(&paths)?;
        info!("Enumerated {} assets", descriptors.len());

        let mut results = LintResults {
            paths,
            checked_assets: descriptors.iter().map(|d| d.object_path.clone()).collect(),
            ..LintResults::default()
        };

        let total = descriptors.len();
        let violation_sink: Mutex<Vec<RuleViolation>> = Mutex::new(Vec::new());

        std::thread::scope(|scope| {
            for (position, descriptor) in descriptors.iter().enumerate() {
                // Loading stays on the dispatch thread; workers only evaluate.
                let object = match descriptor.load() {
                    Ok(object) => object,
                    Err(e) => {
                        warn!("Skipping unloadable asset {}: {e}", descriptor.object_path);
                        continue;
                    }
                };

                let Some(rule_list) = self.rule_list_for_class(&object.class) else {
                    debug!(
                        "No rules configured for class {} ({}); skipping",
                        object.class, descriptor.object_path
                    );
                    continue;
                };

                let runner = LintRunner::new(object, self, rule_list, &violation_sink);
                if runner.requires_main_thread() {
                    runner.run();
                } else {
                    scope.spawn(move || runner.run());
                }

                if let Some(callback) = progress.as_deref_mut() {
                    callback(&LintProgress::Dispatched {
                        object_path: descriptor.object_path.clone(),
                        index: position,
                        total,
                    });
                }
            }
        });

        if let Some(callback) = progress.as_deref_mut() {
            callback(&LintProgress::Tallying);
        }

        results.violations = violation_sink
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        results.tally();

        info!("{}", results.result);
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::AssetObject;
    use crate::rule::tests::StubRule;
    use crate::types::Severity;
    use std::sync::Arc;

    fn rule_set_with(rules_by_class: Vec<(&str, LintRuleList)>) -> LintRuleSet {
        let mut rule_set = LintRuleSet::new(
            "test",
            ClassRegistry::with_engine_defaults(),
            NamingConventionTable::default(),
        );
        for (class, list) in rules_by_class {
            rule_set.set_rules_for_class(class, list);
        }
        rule_set
    }

    fn stub_list(main_thread_flags: &[bool]) -> LintRuleList {
        LintRuleList::new(
            main_thread_flags
                .iter()
                .map(|&main_thread| {
                    let mut rule = StubRule::at(Severity::Error);
                    rule.main_thread = main_thread;
                    Arc::new(rule) as RuleRef
                })
                .collect(),
        )
    }

    #[test]
    fn empty_list_does_not_require_main_thread() {
        assert!(!LintRuleList::default().requires_main_thread());
    }

    #[test]
    fn main_thread_flag_is_or_over_members() {
        assert!(!stub_list(&[false, false]).requires_main_thread());
        assert!(stub_list(&[false, true]).requires_main_thread());
        assert!(stub_list(&[true, true]).requires_main_thread());
    }

    #[test]
    fn evaluate_runs_every_rule_without_short_circuit() {
        let list = stub_list(&[false, false, false]);
        let rule_set = rule_set_with(vec![]);
        let asset = AssetObject::new("/Game/A", "A", "Texture2D");

        let (passed, violations) = list.evaluate(&asset, &rule_set);
        assert!(!passed);
        // Every member rule ran and contributed its violation.
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn evaluate_passes_only_if_all_rules_pass() {
        let mut failing = StubRule::at(Severity::Error);
        failing.violations_per_check = 1;
        let mut passing = StubRule::at(Severity::Error);
        passing.violations_per_check = 0;

        let list = LintRuleList::new(vec![Arc::new(passing), Arc::new(failing)]);
        let rule_set = rule_set_with(vec![]);
        let asset = AssetObject::new("/Game/A", "A", "Texture2D");

        let (passed, violations) = list.evaluate(&asset, &rule_set);
        assert!(!passed);
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn rule_list_lookup_prefers_exact_class() {
        let rule_set = rule_set_with(vec![
            ("Texture2D", stub_list(&[false])),
            ("Texture", stub_list(&[false, false])),
        ]);

        let list = rule_set.rule_list_for_class("Texture2D").expect("list");
        assert_eq!(list.rules().len(), 1);
    }

    #[test]
    fn rule_list_lookup_walks_to_ancestor() {
        let rule_set = rule_set_with(vec![("Texture", stub_list(&[false, false]))]);

        let list = rule_set.rule_list_for_class("Texture2D").expect("list");
        assert_eq!(list.rules().len(), 2);
    }

    #[test]
    fn rule_list_lookup_uses_fallback_exactly_at_root() {
        let rule_set = rule_set_with(vec![
            (ANY_CLASS, stub_list(&[false])),
            ("Texture", stub_list(&[false, false])),
        ]);

        // Matches before the root never reach the fallback.
        let list = rule_set.rule_list_for_class("Texture2D").expect("list");
        assert_eq!(list.rules().len(), 2);

        // A chain with no binding picks up the fallback at the root.
        let list = rule_set.rule_list_for_class("StaticMesh").expect("list");
        assert_eq!(list.rules().len(), 1);
    }

    #[test]
    fn unconfigured_class_is_exempt() {
        let rule_set = rule_set_with(vec![("Blueprint", stub_list(&[false]))]);
        assert!(rule_set.rule_list_for_class("Texture2D").is_none());
    }
}
