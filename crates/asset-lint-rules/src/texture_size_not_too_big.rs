//! Rule that limits texture dimensions.

use asset_lint_core::{AssetObject, LintRule, LintRuleSet, RuleViolation, Severity};

/// Rule code for texture-size-not-too-big.
pub const CODE: &str = "AL002";

/// Rule name for texture-size-not-too-big.
pub const NAME: &str = "texture-size-not-too-big";

/// Fails textures larger than a configured maximum in either dimension.
#[derive(Debug, Clone)]
pub struct TextureSizeNotTooBig {
    max_width: u32,
    max_height: u32,
    severity: Severity,
}

impl Default for TextureSizeNotTooBig {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureSizeNotTooBig {
    /// Creates the rule with the default 2048x2048 limit.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_width: 2048,
            max_height: 2048,
            severity: Severity::Error,
        }
    }

    /// Sets the maximum allowed dimensions.
    #[must_use]
    pub fn max_size(mut self, width: u32, height: u32) -> Self {
        self.max_width = width;
        self.max_height = height;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl LintRule for TextureSizeNotTooBig {
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
        "Textures must not be too big"
    }

    fn description(&self) -> &'static str {
        "Limits texture dimensions to a configured maximum"
    }

    fn url(&self) -> &'static str {
        "https://github.com/Allar/ue5-style-guide#anc-textures"
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn applies_to(&self, asset: &AssetObject, rule_set: &LintRuleSet) -> bool {
        rule_set.classes().is_a(&asset.class, "Texture2D")
    }

    fn check(&self, asset: &AssetObject, _rule_set: &LintRuleSet) -> Vec<RuleViolation> {
        let Some(texture) = &asset.texture else {
            tracing::warn!("No texture data for {}", asset.path);
            return Vec::new();
        };

        if texture.width > self.max_width || texture.height > self.max_height {
            return vec![RuleViolation::new(
                self,
                asset,
                format!(
                    "Shrink this texture so it fits within {}x{} pixels (currently {}x{}).",
                    self.max_width, self.max_height, texture.width, texture.height
                ),
            )];
        }

        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asset_lint_core::{ClassRegistry, NamingConventionTable, TextureGroup, TextureInfo};

    fn rule_set() -> LintRuleSet {
        LintRuleSet::new(
            "test",
            ClassRegistry::with_engine_defaults(),
            NamingConventionTable::default(),
        )
    }

    fn texture(width: u32, height: u32) -> AssetObject {
        AssetObject::new("/Game/T_Rock", "T_Rock", "Texture2D").with_texture(TextureInfo {
            width,
            height,
            group: TextureGroup::World,
        })
    }

    #[test]
    fn oversized_width_fails_with_one_violation() {
        let rule = TextureSizeNotTooBig::new().max_size(1024, 1024);
        let (passed, violations) = rule.evaluate(&texture(2048, 1024), &rule_set());
        assert!(!passed);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].recommended_action.contains("1024x1024"));
        assert!(violations[0].recommended_action.contains("2048x1024"));
    }

    #[test]
    fn oversized_height_fails() {
        let rule = TextureSizeNotTooBig::new().max_size(1024, 1024);
        let (passed, violations) = rule.evaluate(&texture(512, 4096), &rule_set());
        assert!(!passed);
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn texture_at_the_limit_passes() {
        let rule = TextureSizeNotTooBig::new().max_size(1024, 1024);
        let (passed, violations) = rule.evaluate(&texture(1024, 1024), &rule_set());
        assert!(passed);
        assert!(violations.is_empty());
    }

    #[test]
    fn non_texture_assets_are_not_checked() {
        let rule = TextureSizeNotTooBig::new();
        let mesh = AssetObject::new("/Game/SM_Rock", "SM_Rock", "StaticMesh");
        let (passed, violations) = rule.evaluate(&mesh, &rule_set());
        assert!(passed);
        assert!(violations.is_empty());
    }

    #[test]
    fn texture_without_size_data_passes() {
        let rule = TextureSizeNotTooBig::new();
        let bare = AssetObject::new("/Game/T_Rock", "T_Rock", "Texture2D");
        let (passed, violations) = rule.evaluate(&bare, &rule_set());
        assert!(passed);
        assert!(violations.is_empty());
    }
}
