//! Logging System
//!
//! Structured logging via the `tracing` crate. Level, format, and destination
//! are resolved from `ERSWEB_LOG*` environment variables, CLI flags, and the
//! configuration file, in that order of precedence.

use crate::error::ScaffoldError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether logging is enabled (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr, file, both (default: stderr)
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path when output includes file; None means use runtime default
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Enable colored output (text format only)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
        }
    }
}

/// Resolve the log file path with precedence: config file, ERSWEB_LOG_FILE env, default.
///
/// Default uses the `ProjectDirs` state directory.
pub fn resolve_log_file_path(config_file: Option<PathBuf>) -> Result<PathBuf, ScaffoldError> {
    if let Ok(env_path) = std::env::var("ERSWEB_LOG_FILE") {
        if !env_path.is_empty() {
            return Ok(PathBuf::from(env_path));
        }
    }
    if let Some(p) = config_file {
        if !p.as_os_str().is_empty() {
            return Ok(p);
        }
    }
    default_log_file_path()
}

fn default_log_file_path() -> Result<PathBuf, ScaffoldError> {
    let project_dirs = directories::ProjectDirs::from("", "ers", "create-ers-web").ok_or_else(
        || {
            ScaffoldError::ConfigError(
                "Could not determine platform state directory for log file".to_string(),
            )
        },
    )?;
    let state_dir = project_dirs
        .state_dir()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| project_dirs.data_dir().to_path_buf());
    Ok(state_dir.join("create-ers-web.log"))
}

struct OutputTargets {
    stdout: bool,
    stderr: bool,
    file: bool,
}

fn build_env_filter(config: Option<&LoggingConfig>) -> Result<EnvFilter, ScaffoldError> {
    let level = std::env::var("ERSWEB_LOG")
        .ok()
        .filter(|v| !v.is_empty())
        .or_else(|| config.map(|c| c.level.clone()))
        .unwrap_or_else(default_log_level);
    EnvFilter::try_new(&level)
        .map_err(|e| ScaffoldError::ConfigError(format!("Invalid log level '{}': {}", level, e)))
}

fn determine_format(config: Option<&LoggingConfig>) -> Result<String, ScaffoldError> {
    let format = std::env::var("ERSWEB_LOG_FORMAT")
        .ok()
        .filter(|v| !v.is_empty())
        .or_else(|| config.map(|c| c.format.clone()))
        .unwrap_or_else(default_format);
    match format.as_str() {
        "json" | "text" => Ok(format),
        other => Err(ScaffoldError::ConfigError(format!(
            "Invalid log format: '{}'. Must be 'json' or 'text'.",
            other
        ))),
    }
}

fn determine_output(config: Option<&LoggingConfig>) -> Result<OutputTargets, ScaffoldError> {
    let output = std::env::var("ERSWEB_LOG_OUTPUT")
        .ok()
        .filter(|v| !v.is_empty())
        .or_else(|| config.map(|c| c.output.clone()))
        .unwrap_or_else(default_output);
    match output.as_str() {
        "stdout" => Ok(OutputTargets {
            stdout: true,
            stderr: false,
            file: false,
        }),
        "stderr" => Ok(OutputTargets {
            stdout: false,
            stderr: true,
            file: false,
        }),
        "file" => Ok(OutputTargets {
            stdout: false,
            stderr: false,
            file: true,
        }),
        "both" | "file+stderr" => Ok(OutputTargets {
            stdout: false,
            stderr: true,
            file: true,
        }),
        other => Err(ScaffoldError::ConfigError(format!(
            "Invalid log output: '{}'. Must be 'stdout', 'stderr', 'file', or 'both'.",
            other
        ))),
    }
}

/// Initialize the logging system.
///
/// Call once per process, before any scaffold operation runs.
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), ScaffoldError> {
    let disabled = config.map(|c| !c.enabled).unwrap_or(false);
    if disabled {
        Registry::default()
            .with(EnvFilter::new("off"))
            .with(fmt::layer().with_writer(|| std::io::sink()))
            .init();
        return Ok(());
    }

    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let output = determine_output(config)?;
    let use_color = config.map(|c| c.color).unwrap_or(true);

    let get_file_writer = || -> Result<std::fs::File, ScaffoldError> {
        let log_file = resolve_log_file_path(config.and_then(|c| c.file.clone()))?;
        if let Some(parent) = log_file.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ScaffoldError::ConfigError(format!("Failed to create log directory: {}", e))
            })?;
        }
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .map_err(|e| {
                ScaffoldError::ConfigError(format!("Failed to open log file {:?}: {}", log_file, e))
            })
    };

    let base_subscriber = Registry::default().with(filter);

    if format == "json" {
        if output.file && output.stderr {
            let writer = get_file_writer()?.and(std::io::stderr);
            base_subscriber
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_writer(writer),
                )
                .init();
        } else if output.file {
            base_subscriber
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_writer(get_file_writer()?),
                )
                .init();
        } else if output.stdout {
            base_subscriber
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_writer(std::io::stdout),
                )
                .init();
        } else {
            base_subscriber
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    } else if output.file && output.stderr {
        let writer = get_file_writer()?.and(std::io::stderr);
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .with_writer(writer),
            )
            .init();
    } else if output.file {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .with_writer(get_file_writer()?),
            )
            .init();
    } else if output.stdout {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(std::io::stdout),
            )
            .init();
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
