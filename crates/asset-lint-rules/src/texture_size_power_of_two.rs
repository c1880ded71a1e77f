//! Rule that requires power-of-two texture dimensions.

use asset_lint_core::{AssetObject, LintRule, LintRuleSet, RuleViolation, Severity, TextureGroup};

/// Rule code for texture-size-power-of-two.
pub const CODE: &str = "AL003";

/// Rule name for texture-size-power-of-two.
pub const NAME: &str = "texture-size-power-of-two";

/// Fails textures whose width or height is not a power of two.
///
/// Textures assigned to an ignored group (UI by default) are exempt, since
/// those are never mip-mapped or streamed.
#[derive(Debug, Clone)]
pub struct TextureSizePowerOfTwo {
    ignored_groups: Vec<TextureGroup>,
    severity: Severity,
}

impl Default for TextureSizePowerOfTwo {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureSizePowerOfTwo {
    /// Creates the rule, ignoring UI textures.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ignored_groups: vec![TextureGroup::Ui],
            severity: Severity::Error,
        }
    }

    /// Replaces the set of ignored texture groups.
    #[must_use]
    pub fn ignored_groups(mut self, groups: Vec<TextureGroup>) -> Self {
        self.ignored_groups = groups;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    fn group_tip(&self) -> String {
        if self.ignored_groups.is_empty() {
            return String::new();
        }

        let names: Vec<&str> = self
            .ignored_groups
            .iter()
            .map(|g| g.display_name())
            .collect();
        format!(
            ". Alternatively, assign this texture to one of these groups: [{}]",
            names.join(", ")
        )
    }
}

impl LintRule for TextureSizePowerOfTwo {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn group(&self) -> &'static str {
        "textures"
    }

    fn title(&self) -> &'static str {
        "Texture dimensions must be powers of two"
    }

    fn description(&self) -> &'static str {
        "Requires power-of-two texture dimensions outside ignored texture groups"
    }

    fn url(&self) -> &'static str {
        "https://github.com/Allar/ue5-style-guide#anc-textures"
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn applies_to(&self, asset: &AssetObject, rule_set: &LintRuleSet) -> bool {
        if !rule_set.classes().is_a(&asset.class, "Texture2D") {
            return false;
        }

        // Ignored-group textures are exempt by configuration.
        if let Some(texture) = &asset.texture {
            if self.ignored_groups.contains(&texture.group) {
                return false;
            }
        }

        true
    }

    fn check(&self, asset: &AssetObject, _rule_set: &LintRuleSet) -> Vec<RuleViolation> {
        let Some(texture) = &asset.texture else {
            tracing::warn!("No texture data for {}", asset.path);
            return Vec::new();
        };

        let width_fails = !texture.width.is_power_of_two();
        let height_fails = !texture.height.is_power_of_two();
        if !width_fails && !height_fails {
            return Vec::new();
        }

        let tip = self.group_tip();
        let action = if width_fails && height_fails {
            format!(
                "Fix the width and height of this texture, currently {} by {}{tip}",
                texture.width, texture.height
            )
        } else if width_fails {
            format!(
                "Fix the width of this texture, currently {}{tip}",
                texture.width
            )
        } else {
            format!(
                "Fix the height of this texture, currently {}{tip}",
                texture.height
            )
        };

        vec![RuleViolation::new(self, asset, action)]
    }
}
