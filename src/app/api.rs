//! API Facade for the application.
//!
//! Glues configuration loading, production adapters, and command execution.

use crate::adapters::assets::EmbeddedAssetCatalog;
use crate::adapters::os_credential_source::OsCredentialSource;
use crate::adapters::systemctl_command::SystemctlCommandAdapter;
use crate::adapters::template::MinijinjaTemplateRenderer;
use crate::app::AppContext;
use crate::app::commands::install;
use crate::app::config::{config_path_from_env, load_install_config};
use crate::domain::{AppError, InstallConfig};

pub use crate::app::commands::install::InstallOutcome;

/// Install faasd using the layout from `FAASD_INSTALL_CONFIG`, or the default layout.
pub fn install() -> Result<InstallOutcome, AppError> {
    let config = load_install_config(config_path_from_env().as_deref())?;
    install_with(config)
}

/// Install faasd into an explicit layout.
pub fn install_with(config: InstallConfig) -> Result<InstallOutcome, AppError> {
    config.validate()?;
    let manager = SystemctlCommandAdapter::new(config.systemctl.clone());
    let ctx = AppContext::new(
        config,
        manager,
        MinijinjaTemplateRenderer::new(),
        OsCredentialSource,
        EmbeddedAssetCatalog::new(),
    );
    install::execute(&ctx)
}
