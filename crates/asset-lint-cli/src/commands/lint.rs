//! Lint command implementation.

use anyhow::{Context, Result};
use asset_lint_core::{Config, FsAssetIndex};
use asset_lint_rules::{available_rule_sets, rule_set_by_name};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config_resolver;

/// Content directory used when neither flag nor config names one.
const DEFAULT_CONTENT_ROOT: &str = "Content";

/// Rule set used when neither flag nor config names one.
const DEFAULT_RULE_SET_NAME: &str = "default";

/// Options for one lint invocation.
pub struct LintOptions {
    /// Content paths to lint.
    pub paths: Vec<String>,
    /// Rule set selector.
    pub rule_set: Option<String>,
    /// Content directory override.
    pub content_root: Option<PathBuf>,
    /// JSON report request; empty string means the default output path.
    pub json: Option<String>,
    /// HTML report request; empty string means the default output path.
    pub html: Option<String>,
    /// HTML template override.
    pub template: Option<PathBuf>,
    /// Treat warnings as fatal for the exit code.
    pub treat_warnings_as_errors: bool,
}

/// Runs the lint command.
///
/// Exit codes: 0 for a clean pass, 1 for configuration or report-write
/// failures, 2 when the lint completed with errors (or warnings, if
/// requested).
pub fn run(options: &LintOptions, explicit_config: Option<&Path>) -> ExitCode {
    match try_run(options, explicit_config) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(options: &LintOptions, explicit_config: Option<&Path>) -> Result<ExitCode> {
    let project_dir = std::env::current_dir().context("cannot determine working directory")?;
    let source = config_resolver::resolve(&project_dir, explicit_config);

    let config = match source.path() {
        Some(path) => {
            if source.is_global() {
                tracing::info!("Using global config: {}", path.display());
            }
            Config::from_file(path)
                .with_context(|| format!("failed to load config: {}", path.display()))?
        }
        None => Config::default(),
    };

    let rule_set_name = options
        .rule_set
        .clone()
        .or_else(|| config.default_rule_set.clone())
        .unwrap_or_else(|| DEFAULT_RULE_SET_NAME.to_string());
    let rule_set = rule_set_by_name(&rule_set_name, &config).with_context(|| {
        format!(
            "unknown rule set `{rule_set_name}` (available: {})",
            available_rule_sets().join(", ")
        )
    })?;

    let content_root = options
        .content_root
        .clone()
        .or_else(|| config.content_root.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_ROOT));
    let index = FsAssetIndex::new(&content_root).with_excludes(config.exclude.clone());

    tracing::info!(
        "Linting with rule set `{}` over {}",
        rule_set.name(),
        content_root.display()
    );

    let mut results = rule_set
        .lint_paths(&index, options.paths.clone(), None)
        .context("lint pass failed")?;
    results.project = project_name(&content_root);

    println!("{}", results.result);

    if let Some(json) = &options.json {
        let path = super::output::write_json_report(&results, json)
            .context("failed to export JSON report")?;
        tracing::info!("Exported JSON report to {}", path.display());
    }

    if let Some(html) = &options.html {
        let path = super::output::write_html_report(&results, html, options.template.as_deref())
            .context("failed to export HTML report")?;
        tracing::info!("Exported HTML report to {}", path.display());
    }

    if results.errors > 0 || (options.treat_warnings_as_errors && results.warnings > 0) {
        tracing::info!("Lint completed with errors.");
        return Ok(ExitCode::from(2));
    }

    Ok(ExitCode::SUCCESS)
}

/// Project name for reports: the directory containing the content root.
fn project_name(content_root: &Path) -> String {
    content_root
        .canonicalize()
        .ok()
        .as_deref()
        .and_then(Path::parent)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
