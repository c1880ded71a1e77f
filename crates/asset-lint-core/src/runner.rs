//! One unit of concurrent lint work.

use std::sync::Mutex;

use tracing::debug;

use crate::asset::AssetObject;
use crate::rule_set::{LintRuleList, LintRuleSet};
use crate::types::RuleViolation;

/// Evaluates one rule list against one loaded asset.
///
/// Evaluation runs without any lock held; results are batched locally and
/// appended to the shared sink in a single locked append. The critical
/// section is exactly that append.
pub struct LintRunner<'a> {
    object: AssetObject,
    rule_set: &'a LintRuleSet,
    rule_list: &'a LintRuleList,
    sink: &'a Mutex<Vec<RuleViolation>>,
}

impl<'a> LintRunner<'a> {
    /// Creates a runner for one loaded asset.
    #[must_use]
    pub fn new(
        object: AssetObject,
        rule_set: &'a LintRuleSet,
        rule_list: &'a LintRuleList,
        sink: &'a Mutex<Vec<RuleViolation>>,
    ) -> Self {
        Self {
            object,
            rule_set,
            rule_list,
            sink,
        }
    }

    /// True if this runner must execute on the orchestrating thread.
    #[must_use]
    pub fn requires_main_thread(&self) -> bool {
        self.rule_list.requires_main_thread()
    }

    /// Evaluates the rule list and records any violations.
    pub fn run(self) {
        debug!("Linting '{}'", self.object.path);

        let (_passed, violations) = self.rule_list.evaluate(&self.object, self.rule_set);

        if !violations.is_empty() {
            // A panicked sibling poisons the sink; the data is still sound.
            let mut sink = self
                .sink
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            sink.extend(violations);
        }

        debug!("Finished '{}'", self.object.path);
    }
}
