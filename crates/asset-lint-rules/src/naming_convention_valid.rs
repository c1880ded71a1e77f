//! Rule that enforces the naming-convention table.

use asset_lint_core::{
    AssetObject, BlueprintKind, LintRule, LintRuleSet, MaterialDomain, RuleViolation, Severity,
};

/// Rule code for naming-convention-valid.
pub const CODE: &str = "AL004";

/// Rule name for naming-convention-valid.
pub const NAME: &str = "naming-convention-valid";

/// Checks asset names against the rule set's naming-convention table.
///
/// Conventions resolve through the class hierarchy with a variant derived
/// from the asset itself (post-process materials and the blueprint library
/// kinds carry their own conventions). Assets whose class resolves no
/// convention at all are exempt.
#[derive(Debug, Clone)]
pub struct NamingConventionValid {
    severity: Severity,
}

impl Default for NamingConventionValid {
    fn default() -> Self {
        Self::new()
    }
}

impl NamingConventionValid {
    /// Creates the rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

/// Variant tag used when resolving conventions for `asset`.
fn object_variant(asset: &AssetObject) -> &'static str {
    if let Some(material) = &asset.material {
        if material.domain == MaterialDomain::PostProcess {
            return "PostProcess";
        }
    }

    if let Some(blueprint) = &asset.blueprint {
        match blueprint.kind {
            BlueprintKind::MacroLibrary => return "MacroLibrary",
            BlueprintKind::Interface => return "Interface",
            BlueprintKind::FunctionLibrary => return "FunctionLibrary",
            BlueprintKind::Normal => {}
        }
    }

    ""
}

impl LintRule for NamingConventionValid {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn group(&self) -> &'static str {
        "naming"
    }

    fn title(&self) -> &'static str {
        "Asset names must match their naming convention"
    }

    fn description(&self) -> &'static str {
        "Checks asset name prefixes and suffixes against the naming-convention table"
    }

    fn url(&self) -> &'static str {
        "https://github.com/Allar/ue5-style-guide#anc"
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, asset: &AssetObject, rule_set: &LintRuleSet) -> Vec<RuleViolation> {
        let variant = object_variant(asset);
        let conventions =
            rule_set
                .naming_convention()
                .resolve(rule_set.classes(), &asset.class, variant);

        if conventions.is_empty() {
            return Vec::new();
        }

        let matches_any = conventions
            .iter()
            .any(|c| asset.name.starts_with(&c.prefix) && asset.name.ends_with(&c.suffix));
        if matches_any {
            return Vec::new();
        }

        let expected: Vec<String> = conventions
            .iter()
            .map(|c| format!("{}*{}", c.prefix, c.suffix))
            .collect();
        vec![RuleViolation::new(
            self,
            asset,
            format!(
                "Rename this asset so its name matches one of: {}.",
                expected.join(", ")
            ),
        )]
    }
}
