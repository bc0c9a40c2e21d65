//! CLI Tooling
//!
//! Command-line interface for scaffold operations: create, plan, validate.

use crate::config::{ConfigLoader, ScaffoldConfig};
use crate::error::ScaffoldError;
use crate::logging::LoggingConfig;
use crate::scaffold::{self, ScaffoldPlan, ScaffoldReport};
use crate::toolchain::SystemToolchain;
use clap::{Parser, Subcommand};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::PathBuf;

/// create-ers-web - Idempotent scaffolder for ERS web projects
#[derive(Parser)]
#[command(name = "create-ers-web")]
#[command(about = "Scaffold an ERS web project (REST, GraphQL, websocket, React SPA on Bun)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scaffold the project in the workspace directory
    Create {
        /// Skip the toolchain init step (filesystem scaffold only)
        #[arg(long)]
        skip_init: bool,

        /// Skip dependency installation
        #[arg(long)]
        skip_install: bool,
    },
    /// List the directories, files, and dependencies a run would create
    Plan {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Check an existing scaffold for missing entries
    Validate {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// Shared context for CLI command execution.
pub struct CliContext {
    workspace_root: PathBuf,
    config: ScaffoldConfig,
}

impl CliContext {
    /// Resolve configuration for a workspace.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ScaffoldError> {
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Ok(Self {
            workspace_root,
            config,
        })
    }

    pub fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    /// Effective logging configuration with CLI flag overrides applied.
    pub fn resolve_logging_config(&self, cli: &Cli) -> LoggingConfig {
        let mut logging = self.config.logging.clone();
        if cli.verbose {
            logging.level = "debug".to_string();
        }
        if let Some(level) = &cli.log_level {
            logging.level = level.clone();
        }
        if let Some(format) = &cli.log_format {
            logging.format = format.clone();
        }
        if let Some(output) = &cli.log_output {
            logging.output = output.clone();
        }
        if let Some(file) = &cli.log_file {
            logging.file = Some(file.clone());
        }
        logging
    }

    /// Execute a CLI command.
    pub fn execute(&self, command: &Commands) -> Result<String, ScaffoldError> {
        match command {
            Commands::Create {
                skip_init,
                skip_install,
            } => self.handle_create(*skip_init, *skip_install),
            Commands::Plan { format } => self.handle_plan(format),
            Commands::Validate { format } => self.handle_validate(format),
        }
    }

    fn handle_create(&self, skip_init: bool, skip_install: bool) -> Result<String, ScaffoldError> {
        let mut toolchain = self.config.toolchain.clone();
        toolchain.skip_init |= skip_init;
        toolchain.skip_install |= skip_install;

        let report = scaffold::run(&self.workspace_root, &toolchain, &SystemToolchain)?;
        Ok(format_report_text(&report))
    }

    fn handle_plan(&self, format: &str) -> Result<String, ScaffoldError> {
        let plan = scaffold::plan();
        match format {
            "text" => Ok(format_plan_text(&plan)),
            "json" => Ok(serde_json::to_string_pretty(&plan)?),
            _ => Err(invalid_format(format)),
        }
    }

    fn handle_validate(&self, format: &str) -> Result<String, ScaffoldError> {
        let missing = scaffold::validate(&self.workspace_root);
        match format {
            "text" => Ok(format_validate_text(&missing)),
            "json" => {
                let rendered = json!({
                    "complete": missing.is_empty(),
                    "missing": missing,
                });
                Ok(serde_json::to_string_pretty(&rendered)?)
            }
            _ => Err(invalid_format(format)),
        }
    }
}

fn invalid_format(format: &str) -> ScaffoldError {
    ScaffoldError::ConfigError(format!(
        "Invalid format: '{}'. Must be 'text' or 'json'.",
        format
    ))
}

/// Format a section heading with bold/underline. Respects NO_COLOR and TTY.
fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Format a scaffold run report as human-readable text.
pub fn format_report_text(report: &ScaffoldReport) -> String {
    if report.skipped {
        return "package.json already existed, skip creating".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Scaffold")));
    for outcome in report.dirs.iter().chain(report.files.iter()) {
        if outcome.created {
            out.push_str(&format!("  created {}\n", outcome.path));
        } else {
            out.push_str(&format!("  exists  {}\n", outcome.path));
        }
    }
    out.push_str(&format!(
        "\n{} entr{} created in {}\n",
        report.created_count(),
        if report.created_count() == 1 { "y" } else { "ies" },
        report.root.display()
    ));
    if !report.init_ran {
        out.push_str("Toolchain init skipped.\n");
    } else if !report.install_ran {
        out.push_str("Dependency installation skipped.\n");
    } else {
        out.push_str("Project initialized and dependencies installed.\n");
    }
    out
}

/// Format the scaffold plan as human-readable text.
pub fn format_plan_text(plan: &ScaffoldPlan) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Scaffold Plan")));

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Path", "Kind"]);
    for dir in &plan.dirs {
        table.add_row(vec![format!("{}/", dir), "directory".to_string()]);
    }
    for file in &plan.files {
        table.add_row(vec![file.clone(), "file".to_string()]);
    }
    out.push_str(&format!("{}\n\n", table));

    out.push_str(&format!(
        "Runtime dependencies: {}\n",
        plan.runtime_dependencies.join(", ")
    ));
    out.push_str(&format!(
        "Dev dependencies: {}\n",
        plan.dev_dependencies.join(", ")
    ));
    out
}

/// Format validation results as human-readable text.
pub fn format_validate_text(missing: &[String]) -> String {
    if missing.is_empty() {
        return "Scaffold complete: no missing entries.".to_string();
    }
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Missing entries")));
    for entry in missing {
        out.push_str(&format!("  {}\n", entry));
    }
    out.push_str(&format!("\nTotal: {} missing\n", missing.len()));
    out
}
