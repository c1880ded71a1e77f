//! Init command implementation.

use anyhow::{bail, Context, Result};
use asset_lint_core::{Config, NamingConventionTable};
use std::path::Path;

/// Runs the init command.
///
/// # Errors
///
/// Returns an error if a config already exists (without `--force`) or the
/// file cannot be written.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("asset-lint.toml"), force)?;

    println!("Created asset-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit asset-lint.toml to configure rules and conventions");
    println!("  2. Run: asset-lint lint");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, default_config_toml()?)
        .with_context(|| format!("cannot write {}", config_path.display()))?;
    Ok(())
}

fn default_config_toml() -> Result<String> {
    // Conventions are always persisted sorted.
    let mut conventions = NamingConventionTable::with_defaults();
    conventions.sort_conventions();

    let config = Config {
        default_rule_set: Some("default".to_string()),
        content_root: Some("Content".into()),
        conventions: conventions.entries().to_vec(),
        ..Config::default()
    };

    let body = toml::to_string_pretty(&config).context("cannot serialize default config")?;
    Ok(format!(
        "# asset-lint configuration\n\
         # Rule sets: default, marketplace\n\
         # Per-rule options live under [rules.<name>], e.g.:\n\
         #   [rules.texture-size-not-too-big]\n\
         #   max_width = 2048\n\
         #   max_height = 2048\n\n{body}"
    ))
}
