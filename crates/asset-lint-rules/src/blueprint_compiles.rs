//! Rule that fails blueprints with compile errors or warnings.

use asset_lint_core::{
    AssetObject, BlueprintStatus, LintRule, LintRuleSet, RuleViolation, Severity,
};

/// Rule code for blueprint-compiles.
pub const CODE: &str = "AL001";

/// Rule name for blueprint-compiles.
pub const NAME: &str = "blueprint-compiles";

/// Fails blueprint assets whose last compile produced errors or warnings.
#[derive(Debug, Clone)]
pub struct BlueprintCompiles {
    severity: Severity,
}

impl Default for BlueprintCompiles {
    fn default() -> Self {
        Self::new()
    }
}

impl BlueprintCompiles {
    /// Creates the rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl LintRule for BlueprintCompiles {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn group(&self) -> &'static str {
        "blueprints"
    }

    fn title(&self) -> &'static str {
        "Blueprints must compile"
    }

    fn description(&self) -> &'static str {
        "Flags blueprints whose last compile produced errors or warnings"
    }

    fn url(&self) -> &'static str {
        "https://github.com/Allar/ue5-style-guide#bp-compiling"
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn requires_main_thread(&self) -> bool {
        // Compile status is read from live editor state, which is only
        // coherent on the orchestrating thread.
        true
    }

    fn applies_to(&self, asset: &AssetObject, rule_set: &LintRuleSet) -> bool {
        rule_set.classes().is_a(&asset.class, "Blueprint")
    }

    fn check(&self, asset: &AssetObject, _rule_set: &LintRuleSet) -> Vec<RuleViolation> {
        let Some(blueprint) = &asset.blueprint else {
            tracing::warn!("No blueprint data for {}", asset.path);
            return Vec::new();
        };

        match blueprint.status {
            BlueprintStatus::Error => vec![RuleViolation::new(
                self,
                asset,
                "This blueprint has compiler errors. Recompile it and fix every error.",
            )],
            BlueprintStatus::UpToDateWithWarnings => vec![RuleViolation::new(
                self,
                asset,
                "This blueprint compiles with warnings. Recompile it and resolve every warning.",
            )],
            BlueprintStatus::BeingCreated
            | BlueprintStatus::Dirty
            | BlueprintStatus::Unknown
            | BlueprintStatus::UpToDate => Vec::new(),
        }
    }
}
