//! Install layout configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::paths::SECRETS_DIR;

pub const DEFAULT_BASE_DIR: &str = "/var/lib/faasd";
pub const DEFAULT_PROVIDER_DIR: &str = "/var/lib/faasd-provider";
pub const DEFAULT_BIN_DIR: &str = "/usr/local/bin";
pub const DEFAULT_UNIT_DIR: &str = "/lib/systemd/system";
pub const DEFAULT_SYSTEMCTL: &str = "systemctl";

/// Every location an install run touches, plus the service manager program.
///
/// Loaded from TOML; omitted keys fall back to the production layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallConfig {
    /// Gateway working directory; holds `secrets/` and the deployed config files.
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,
    /// Provider working directory.
    #[serde(default = "default_provider_dir")]
    pub provider_dir: PathBuf,
    /// Directory the `faasd` binary must be installed in.
    #[serde(default = "default_bin_dir")]
    pub bin_dir: PathBuf,
    /// Directory systemd loads unit files from.
    #[serde(default = "default_unit_dir")]
    pub unit_dir: PathBuf,
    /// Program invoked for daemon-reload/enable/start.
    #[serde(default = "default_systemctl")]
    pub systemctl: String,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            provider_dir: default_provider_dir(),
            bin_dir: default_bin_dir(),
            unit_dir: default_unit_dir(),
            systemctl: default_systemctl(),
        }
    }
}

impl InstallConfig {
    /// Parse configuration from TOML content.
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        let config: InstallConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Layout rooted under `root`, with the given service manager program.
    ///
    /// Mirrors the production layout below a scratch directory.
    pub fn rooted_at(root: &Path, systemctl: impl Into<String>) -> Self {
        let defaults = Self::default();
        let rebase = |path: &Path| root.join(path.strip_prefix("/").unwrap_or(path));
        Self {
            base_dir: rebase(&defaults.base_dir),
            provider_dir: rebase(&defaults.provider_dir),
            bin_dir: rebase(&defaults.bin_dir),
            unit_dir: rebase(&defaults.unit_dir),
            systemctl: systemctl.into(),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        for (key, path) in [
            ("base_dir", &self.base_dir),
            ("provider_dir", &self.provider_dir),
            ("bin_dir", &self.bin_dir),
            ("unit_dir", &self.unit_dir),
        ] {
            if !path.is_absolute() {
                return Err(AppError::config_error(format!(
                    "{key} must be an absolute path, got '{}'",
                    path.display()
                )));
            }
        }
        if self.systemctl.trim().is_empty() {
            return Err(AppError::config_error("systemctl must not be empty"));
        }
        Ok(())
    }

    pub fn secrets_dir(&self) -> PathBuf {
        self.base_dir.join(SECRETS_DIR)
    }
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(DEFAULT_BASE_DIR)
}

fn default_provider_dir() -> PathBuf {
    PathBuf::from(DEFAULT_PROVIDER_DIR)
}

fn default_bin_dir() -> PathBuf {
    PathBuf::from(DEFAULT_BIN_DIR)
}

fn default_unit_dir() -> PathBuf {
    PathBuf::from(DEFAULT_UNIT_DIR)
}

fn default_systemctl() -> String {
    DEFAULT_SYSTEMCTL.to_string()
}
