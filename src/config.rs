//! Configuration loading.
//!
//! Layered lowest-to-highest: built-in defaults, the XDG config file
//! (~/.config/create-ers-web/config.toml), a workspace-local `ersweb.toml`,
//! then `ERSWEB_*` environment variables. An explicit `--config` path
//! bypasses the layered search entirely.

use crate::error::ScaffoldError;
use crate::logging::LoggingConfig;
use crate::toolchain::ToolchainConfig;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Workspace-local configuration file name.
pub const WORKSPACE_CONFIG_FILE: &str = "ersweb.toml";

/// Top-level scaffolder configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    #[serde(default)]
    pub toolchain: ToolchainConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Get the XDG config directory path (~/.config/create-ers-web/config.toml)
    fn xdg_config_path() -> Option<PathBuf> {
        std::env::var("HOME").ok().map(|home| {
            PathBuf::from(home)
                .join(".config")
                .join("create-ers-web")
                .join("config.toml")
        })
    }

    /// Load configuration from files and environment.
    pub fn load(workspace_root: &Path) -> Result<ScaffoldConfig, ScaffoldError> {
        let mut builder = Config::builder();
        if let Some(xdg) = Self::xdg_config_path() {
            builder = builder.add_source(File::from(xdg).format(FileFormat::Toml).required(false));
        }
        builder = builder.add_source(
            File::from(workspace_root.join(WORKSPACE_CONFIG_FILE))
                .format(FileFormat::Toml)
                .required(false),
        );
        builder = builder.add_source(
            Environment::with_prefix("ERSWEB")
                .separator("__")
                .try_parsing(true),
        );
        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<ScaffoldConfig, ScaffoldError> {
        let config = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Create default configuration.
    pub fn default() -> ScaffoldConfig {
        ScaffoldConfig::default()
    }
}
