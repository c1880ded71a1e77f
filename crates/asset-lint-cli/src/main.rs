//! asset-lint CLI tool.
//!
//! Usage:
//! ```bash
//! asset-lint lint [OPTIONS] [PATHS]...
//! asset-lint list-rules
//! asset-lint init
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Content linter for game projects: rule sets, naming conventions, reports
#[derive(Parser)]
#[command(name = "asset-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint content paths against a rule set
    Lint {
        /// Content paths to lint recursively (default: /Game)
        paths: Vec<String>,

        /// Rule set to lint with (default: from config, then "default")
        #[arg(long)]
        rule_set: Option<String>,

        /// Content directory mounted at /Game
        #[arg(long)]
        content_root: Option<PathBuf>,

        /// Write a JSON report, optionally to a specific path
        #[arg(long, value_name = "PATH", num_args = 0..=1, require_equals = true, default_missing_value = "")]
        json: Option<String>,

        /// Write an HTML report, optionally to a specific path
        #[arg(long, value_name = "PATH", num_args = 0..=1, require_equals = true, default_missing_value = "")]
        html: Option<String>,

        /// HTML report template to substitute the report into
        #[arg(long)]
        template: Option<PathBuf>,

        /// Exit with an error status when warnings are present
        #[arg(long)]
        treat_warnings_as_errors: bool,
    },

    /// List available rules and rule sets
    ListRules,

    /// Initialize a configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Lint {
            paths,
            rule_set,
            content_root,
            json,
            html,
            template,
            treat_warnings_as_errors,
        } => commands::lint::run(
            &commands::lint::LintOptions {
                paths,
                rule_set,
                content_root,
                json,
                html,
                template,
                treat_warnings_as_errors,
            },
            cli.config.as_deref(),
        ),
        Commands::ListRules => {
            commands::list_rules::run();
            ExitCode::SUCCESS
        }
        Commands::Init { force } => match commands::init::run(force) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!("{e:#}");
                ExitCode::FAILURE
            }
        },
    }
}
