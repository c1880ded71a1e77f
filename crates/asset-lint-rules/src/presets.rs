//! Named rule-set presets.

use std::sync::Arc;

use asset_lint_core::{
    ClassRegistry, Config, LintRuleList, LintRuleSet, NamingConventionTable, RuleRef, Severity,
    TextureGroup, ANY_CLASS,
};

use crate::{
    blueprint_compiles, naming_convention_valid, texture_size_not_too_big,
    texture_size_power_of_two, BlueprintCompiles, NamingConventionValid, TextureSizeNotTooBig,
    TextureSizePowerOfTwo,
};

/// Names of the built-in rule sets, selectable from the command line.
#[must_use]
pub fn available_rule_sets() -> &'static [&'static str] {
    &["default", "marketplace"]
}

/// Resolves a rule set by its command-line name.
#[must_use]
pub fn rule_set_by_name(name: &str, config: &Config) -> Option<LintRuleSet> {
    match name {
        "default" => Some(default_rule_set(config)),
        "marketplace" => Some(marketplace_rule_set(config)),
        _ => None,
    }
}

/// The general project-hygiene rule set.
///
/// Texture limits default to 2048x2048 and naming violations are warnings.
#[must_use]
pub fn default_rule_set(config: &Config) -> LintRuleSet {
    build_rule_set(
        config,
        "default",
        "General project hygiene rules",
        2048,
        Severity::Warning,
    )
}

/// The marketplace submission rule set.
///
/// Tighter texture limits and naming violations promoted to errors, matching
/// what a marketplace review would reject.
#[must_use]
pub fn marketplace_rule_set(config: &Config) -> LintRuleSet {
    build_rule_set(
        config,
        "marketplace",
        "Rules required for marketplace content submissions",
        1024,
        Severity::Error,
    )
}

/// One default-configured instance of every built-in rule, for listings.
#[must_use]
pub fn all_rules() -> Vec<RuleRef> {
    vec![
        Arc::new(BlueprintCompiles::new()) as RuleRef,
        Arc::new(TextureSizeNotTooBig::new()) as RuleRef,
        Arc::new(TextureSizePowerOfTwo::new()) as RuleRef,
        Arc::new(NamingConventionValid::new()) as RuleRef,
    ]
}

fn build_rule_set(
    config: &Config,
    name: &str,
    description: &str,
    texture_limit: u32,
    naming_severity: Severity,
) -> LintRuleSet {
    let mut rule_set = LintRuleSet::new(name, build_classes(config), build_naming(config))
        .with_description(description);

    let mut texture_list = texture_rules(config, texture_limit);
    let mut blueprint_list = blueprint_rules(config);
    let mut catch_all = LintRuleList::default();

    // The naming rule is one shared instance. Classes with their own rule
    // list never reach the fallback binding, so it rides along in each list.
    if let Some(naming_rule) = naming_rule(config, naming_severity) {
        texture_list.push(naming_rule.clone());
        blueprint_list.push(naming_rule.clone());
        catch_all.push(naming_rule);
    }

    rule_set.set_rules_for_class("Texture2D", texture_list);
    rule_set.set_rules_for_class("Blueprint", blueprint_list);
    rule_set.set_rules_for_class(ANY_CLASS, catch_all);
    rule_set
}

fn build_classes(config: &Config) -> ClassRegistry {
    let mut registry = ClassRegistry::with_engine_defaults();
    for (child, parent) in &config.classes {
        registry.register(child.clone(), parent.clone());
    }
    registry
}

fn build_naming(config: &Config) -> NamingConventionTable {
    if config.conventions.is_empty() {
        NamingConventionTable::with_defaults()
    } else {
        NamingConventionTable::new(config.conventions.clone())
    }
}

fn texture_rules(config: &Config, default_limit: u32) -> LintRuleList {
    let mut list = LintRuleList::default();

    if config.is_rule_enabled(texture_size_not_too_big::NAME) {
        let mut rule = TextureSizeNotTooBig::new();
        if let Some(rule_config) = config.rule_config(texture_size_not_too_big::NAME) {
            let width = u32::try_from(rule_config.get_int("max_width", i64::from(default_limit)))
                .unwrap_or(default_limit);
            let height = u32::try_from(rule_config.get_int("max_height", i64::from(default_limit)))
                .unwrap_or(default_limit);
            rule = rule.max_size(width, height);
            if let Some(severity) = rule_config.severity {
                rule = rule.severity(severity);
            }
        } else {
            rule = rule.max_size(default_limit, default_limit);
        }
        list.push(Arc::new(rule));
    }

    if config.is_rule_enabled(texture_size_power_of_two::NAME) {
        let mut rule = TextureSizePowerOfTwo::new();
        if let Some(rule_config) = config.rule_config(texture_size_power_of_two::NAME) {
            if rule_config.options.contains_key("ignore_groups") {
                let groups: Vec<TextureGroup> = rule_config
                    .get_str_array("ignore_groups")
                    .iter()
                    .filter_map(|name| {
                        let group = TextureGroup::from_name(name);
                        if group.is_none() {
                            tracing::warn!("Unknown texture group in config: {name}");
                        }
                        group
                    })
                    .collect();
                rule = rule.ignored_groups(groups);
            }
            if let Some(severity) = rule_config.severity {
                rule = rule.severity(severity);
            }
        }
        list.push(Arc::new(rule));
    }

    list
}

fn blueprint_rules(config: &Config) -> LintRuleList {
    let mut list = LintRuleList::default();

    if config.is_rule_enabled(blueprint_compiles::NAME) {
        let mut rule = BlueprintCompiles::new();
        if let Some(severity) = config
            .rule_config(blueprint_compiles::NAME)
            .and_then(|c| c.severity)
        {
            rule = rule.severity(severity);
        }
        list.push(Arc::new(rule));
    }

    list
}

fn naming_rule(config: &Config, naming_severity: Severity) -> Option<RuleRef> {
    if !config.is_rule_enabled(naming_convention_valid::NAME) {
        return None;
    }

    let severity = config
        .rule_config(naming_convention_valid::NAME)
        .and_then(|c| c.severity)
        .unwrap_or(naming_severity);
    Some(Arc::new(NamingConventionValid::new().severity(severity)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_sets_resolve_by_name() {
        let config = Config::default();
        assert!(rule_set_by_name("default", &config).is_some());
        assert!(rule_set_by_name("marketplace", &config).is_some());
        assert!(rule_set_by_name("nonexistent", &config).is_none());
    }

    #[test]
    fn default_rule_set_binds_all_rule_lists() {
        let rule_set = default_rule_set(&Config::default());
        assert!(rule_set.rule_list_for_class("Texture2D").is_some());
        assert!(rule_set.rule_list_for_class("Blueprint").is_some());
        // Everything else reaches the catch-all naming list at the root.
        let fallback = rule_set.rule_list_for_class("StaticMesh").expect("fallback");
        assert_eq!(fallback.rules().len(), 1);
    }

    #[test]
    fn disabled_rules_are_left_out() {
        let config = Config::parse(
            r#"
[rules.texture-size-power-of-two]
enabled = false
"#,
        )
        .expect("parse");

        let rule_set = default_rule_set(&config);
        let textures = rule_set.rule_list_for_class("Texture2D").expect("list");
        let names: Vec<&str> = textures.rules().iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            vec![texture_size_not_too_big::NAME, naming_convention_valid::NAME]
        );
    }

    #[test]
    fn config_classes_extend_the_hierarchy() {
        let config = Config::parse(
            r#"
[classes]
"HeroTexture" = "Texture2D"
"#,
        )
        .expect("parse");

        let rule_set = default_rule_set(&config);
        // A custom texture subclass picks up the Texture2D rule list.
        let list = rule_set.rule_list_for_class("HeroTexture").expect("list");
        assert_eq!(list.rules().len(), 3);
    }

    #[test]
    fn marketplace_tightens_defaults() {
        let marketplace = marketplace_rule_set(&Config::default());
        let naming = marketplace
            .rule_list_for_class("SoundWave")
            .expect("fallback list");
        assert_eq!(naming.rules()[0].severity(), Severity::Error);

        let standard = default_rule_set(&Config::default());
        let naming = standard
            .rule_list_for_class("SoundWave")
            .expect("fallback list");
        assert_eq!(naming.rules()[0].severity(), Severity::Warning);
    }

    #[test]
    fn all_rules_lists_every_builtin() {
        let rules = all_rules();
        assert_eq!(rules.len(), 4);
        let codes: Vec<&str> = rules.iter().map(|r| r.code()).collect();
        assert_eq!(codes, vec!["AL001", "AL002", "AL003", "AL004"]);
    }
}
