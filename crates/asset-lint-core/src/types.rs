//! Core types for lint violations and results.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::asset::AssetObject;
use crate::rule::LintRule;

/// Severity level for lint rules and their violations.
///
/// Ordered from most to least severe: `Error < Warning`. Tallying relies on
/// this ordering, so new levels must be inserted in severity order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Violation that fails a lint pass.
    Error,
    /// Violation that should be addressed but does not fail a pass on its own.
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// Identity of the asset that violated a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violator {
    /// Full object path, e.g. `/Game/Textures/T_Rock`.
    pub object_path: String,
    /// Asset name, e.g. `T_Rock`.
    pub name: String,
    /// Concrete class of the asset.
    pub class: String,
}

impl From<&AssetObject> for Violator {
    fn from(asset: &AssetObject) -> Self {
        Self {
            object_path: asset.path.clone(),
            name: asset.name.clone(),
            class: asset.class.clone(),
        }
    }
}

/// A single rule violation recorded against one asset.
///
/// Created by a rule when a check fails and read-only afterwards. The rule's
/// metadata is snapshotted at creation time so reports never need the rule
/// instance again. Several violations may reference the same asset and rule;
/// no deduplication is performed anywhere in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleViolation {
    /// Rule code (e.g. "AL002").
    pub rule_code: String,
    /// Kebab-case rule name (e.g. "texture-size-not-too-big").
    pub rule_name: String,
    /// Rule group tag (e.g. "textures").
    pub group: String,
    /// Human-readable rule title.
    pub title: String,
    /// Longer rule description.
    pub description: String,
    /// Reference URL for the rule.
    pub url: String,
    /// Severity of the violated rule.
    pub severity: Severity,
    /// The asset that violated the rule.
    pub violator: Violator,
    /// Recommended action to resolve this specific violation.
    pub recommended_action: String,
}

impl RuleViolation {
    /// Creates a violation of `rule` by `asset` with a recommended action.
    #[must_use]
    pub fn new(rule: &dyn LintRule, asset: &AssetObject, recommended_action: impl Into<String>) -> Self {
        Self {
            rule_code: rule.code().to_string(),
            rule_name: rule.name().to_string(),
            group: rule.group().to_string(),
            title: rule.title().to_string(),
            description: rule.description().to_string(),
            url: rule.url().to_string(),
            severity: rule.severity(),
            violator: Violator::from(asset),
            recommended_action: recommended_action.into(),
        }
    }
}

impl std::fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}): {} [{}]: {}",
            self.violator.object_path,
            self.violator.class,
            self.severity,
            self.rule_name,
            self.recommended_action
        )
    }
}

/// Placeholder token replaced with the JSON payload in the HTML template.
const REPORT_TOKEN: &str = "{% Report %}";

/// Aggregate report for one lint invocation.
///
/// Owns the full violation list, the checked-asset list and the summary
/// counts. Never shared across runs.
#[derive(Debug, Clone, Default)]
pub struct LintResults {
    /// Name of the linted project, set by the caller before report generation.
    pub project: String,
    /// Human-readable summary of the pass.
    pub result: String,
    /// Number of warning-severity violations.
    pub warnings: usize,
    /// Number of error-severity violations.
    pub errors: usize,
    /// Content paths that were linted.
    pub paths: Vec<String>,
    /// Object paths of every asset enumerated for this pass.
    pub checked_assets: Vec<String>,
    /// All recorded violations, in worker completion order.
    pub violations: Vec<RuleViolation>,
}

impl LintResults {
    /// Returns true if there are any error-severity violations.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// Counts errors and warnings and formats the summary string.
    ///
    /// Violations at `Error` severity or more severe count as errors;
    /// everything else counts as a warning.
    pub fn tally(&mut self) {
        self.errors = 0;
        self.warnings = 0;
        for violation in &self.violations {
            if violation.severity <= Severity::Error {
                self.errors += 1;
            } else {
                self.warnings += 1;
            }
        }

        self.result = format!(
            "Linted {} {}: {} {}, {} {}.",
            self.checked_assets.len(),
            plural(self.checked_assets.len(), "asset", "assets"),
            self.warnings,
            plural(self.warnings, "warning", "warnings"),
            self.errors,
            plural(self.errors, "error", "errors"),
        );
    }

    /// Distinct violator object paths in first-seen order.
    #[must_use]
    pub fn violators(&self) -> Vec<&Violator> {
        let mut seen: Vec<&Violator> = Vec::new();
        for violation in &self.violations {
            if !seen.iter().any(|v| v.object_path == violation.violator.object_path) {
                seen.push(&violation.violator);
            }
        }
        seen
    }

    /// All violations recorded against the asset at `object_path`.
    #[must_use]
    pub fn violations_for(&self, object_path: &str) -> Vec<&RuleViolation> {
        self.violations
            .iter()
            .filter(|v| v.violator.object_path == object_path)
            .collect()
    }

    /// Builds the structured JSON report.
    ///
    /// Violations are grouped into one `Violators` entry per distinct asset,
    /// in first-seen order; every violation appears exactly once.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let violators: Vec<serde_json::Value> = self
            .violators()
            .iter()
            .map(|violator| {
                let violations: Vec<serde_json::Value> = self
                    .violations_for(&violator.object_path)
                    .iter()
                    .map(|v| {
                        serde_json::json!({
                            "Group": v.group,
                            "Title": v.title,
                            "Description": v.description,
                            "RuleURL": v.url,
                            "Severity": v.severity,
                            "RecommendedAction": v.recommended_action,
                        })
                    })
                    .collect();

                serde_json::json!({
                    "AssetName": violator.name,
                    "AssetPath": violator.object_path,
                    "Violations": violations,
                })
            })
            .collect();

        serde_json::json!({
            "Project": self.project,
            "Result": self.result,
            "Warnings": self.warnings,
            "Errors": self.errors,
            "Paths": self.paths,
            "CheckedAssets": self.checked_assets,
            "Violators": violators,
        })
    }

    /// Serializes the JSON report as a pretty-printed string.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
    }

    /// Renders the HTML report by substituting the report payload into the
    /// template at `template_path`.
    ///
    /// A missing or unreadable template is logged and yields an incomplete
    /// document; it never aborts the pass that produced these results.
    #[must_use]
    pub fn to_html(&self, template_path: &Path) -> String {
        let template = match std::fs::read_to_string(template_path) {
            Ok(template) => template,
            Err(e) => {
                tracing::error!(
                    "Could not load HTML report template from {}: {e}",
                    template_path.display()
                );
                String::new()
            }
        };

        template.replace(REPORT_TOKEN, &self.to_json_string())
    }
}

fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}
