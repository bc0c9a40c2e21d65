//! External toolchain invocation.
//!
//! The scaffolder shells out to the Bun toolchain for project initialization
//! and dependency installation. Commands inherit the parent's standard
//! streams and block until exit; output is never captured. A spawn failure or
//! non-zero exit status is surfaced as an error and aborts the run.

use crate::error::ScaffoldError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Toolchain configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolchainConfig {
    /// Toolchain binary (default: bun)
    #[serde(default = "default_bin")]
    pub bin: String,

    /// Skip the project init step (filesystem scaffold only)
    #[serde(default)]
    pub skip_init: bool,

    /// Skip dependency installation
    #[serde(default)]
    pub skip_install: bool,
}

fn default_bin() -> String {
    "bun".to_string()
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            bin: default_bin(),
            skip_init: false,
            skip_install: false,
        }
    }
}

/// Seam for spawning toolchain commands. Tests substitute a recording fake.
pub trait ToolchainRunner {
    /// Run a command to completion in `cwd`, inheriting standard streams.
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<(), ScaffoldError>;
}

/// Real runner over `std::process::Command`.
#[derive(Debug, Default)]
pub struct SystemToolchain;

impl ToolchainRunner for SystemToolchain {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<(), ScaffoldError> {
        debug!(program, ?args, cwd = %cwd.display(), "spawning toolchain command");
        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .status()
            .map_err(|e| {
                ScaffoldError::ToolchainError(format!("failed to spawn `{}`: {}", program, e))
            })?;
        if !status.success() {
            return Err(ScaffoldError::ToolchainError(format!(
                "`{} {}` exited with {}",
                program,
                args.join(" "),
                status
            )));
        }
        Ok(())
    }
}

/// Initialize the project manifest non-interactively (`bun init -y`).
pub fn init_project(
    runner: &dyn ToolchainRunner,
    config: &ToolchainConfig,
    root: &Path,
) -> Result<(), ScaffoldError> {
    runner.run(&config.bin, &["init".to_string(), "-y".to_string()], root)
}

/// Install a dependency set (`bun add [-D] <packages..>`).
pub fn add_dependencies(
    runner: &dyn ToolchainRunner,
    config: &ToolchainConfig,
    root: &Path,
    dev: bool,
    packages: &[&str],
) -> Result<(), ScaffoldError> {
    let mut args = vec!["add".to_string()];
    if dev {
        args.push("-D".to_string());
    }
    args.extend(packages.iter().map(|p| p.to_string()));
    runner.run(&config.bin, &args, root)
}
