//! Install configuration loading.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, InstallConfig};

/// Environment variable naming an optional TOML layout file.
pub const CONFIG_ENV_VAR: &str = "FAASD_INSTALL_CONFIG";

/// Config path named by `FAASD_INSTALL_CONFIG`, if set and non-empty.
pub fn config_path_from_env() -> Option<PathBuf> {
    config_path_from(std::env::var_os(CONFIG_ENV_VAR))
}

fn config_path_from(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Load the install layout from `path`, or the production defaults when `None`.
pub fn load_install_config(path: Option<&Path>) -> Result<InstallConfig, AppError> {
    let Some(path) = path else {
        debug!("no config file given, using default layout");
        return Ok(InstallConfig::default());
    };

    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => {
            AppError::config_error(format!("Config file not found: {}", path.display()))
        }
        _ => AppError::Io(err),
    })?;
    debug!(path = %path.display(), "loaded config file");
    InstallConfig::parse_toml(&content)
}
