//! Install orchestrator: provisions the host and brings up faasd and faasd-provider.
//!
//! Steps run in a fixed order and the first failure aborts the run. Nothing is
//! rolled back; every step is idempotent, so re-running after fixing the cause
//! resumes where the previous run stopped.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::app::AppContext;
use crate::app::services::directory_provisioner::ensure_dir;
use crate::app::services::prerequisite_checker::verify_binary;
use crate::app::services::secret_materializer::ensure_credentials;
use crate::app::services::{CredentialReport, UnitInstaller, asset_deployer};
use crate::domain::paths::{
    CWD_PARAM, FAASD_BIN_PARAM, FAASD_BINARY, FAASD_UNIT, PROVIDER_UNIT, SECRET_MOUNT_PATH_PARAM,
    SECRETS_DIR_MODE, WORKING_DIR_MODE,
};
use crate::domain::{AppError, Credential, InstallStep, TemplateRenderer, UnitName, UnitParams};
use crate::ports::{AssetCatalog, CredentialSource, ServiceManager};

/// Result of a successful install run.
#[derive(Debug, Clone)]
pub struct InstallOutcome {
    pub credentials: CredentialReport,
    /// Unit files written, provider first.
    pub unit_files: Vec<PathBuf>,
    /// Operator guidance printed after a successful run.
    pub guidance: String,
}

/// Execute the install sequence.
pub fn execute<M, R, C, A>(ctx: &AppContext<M, R, C, A>) -> Result<InstallOutcome, AppError>
where
    M: ServiceManager,
    R: TemplateRenderer,
    C: CredentialSource,
    A: AssetCatalog,
{
    let config = ctx.config();
    let secrets_dir = config.secrets_dir();

    run_step(InstallStep::WorkingDirectories, || {
        for (path, mode) in [
            (&config.base_dir, WORKING_DIR_MODE),
            (&secrets_dir, SECRETS_DIR_MODE),
            (&config.provider_dir, WORKING_DIR_MODE),
        ] {
            let state = ensure_dir(path, mode)?;
            debug!(path = %path.display(), ?state, "working directory ensured");
        }
        Ok(())
    })?;

    let credentials =
        run_step(InstallStep::Credentials, || ensure_credentials(&secrets_dir, ctx.credentials()))?;
    debug!(created = ?credentials.created, kept = ?credentials.kept, "credentials ensured");

    run_step(InstallStep::ConfigAssets, || {
        for asset in ctx.assets().config_assets()? {
            let destination = config.base_dir.join(&asset.file_name);
            asset_deployer::deploy(&asset.content, &destination)?;
            debug!(path = %destination.display(), bytes = asset.content.len(), "asset deployed");
        }
        Ok(())
    })?;

    // Checked before any unit work so a host without the binary never gets
    // half-installed units.
    let faasd_bin =
        run_step(InstallStep::Prerequisites, || verify_binary(&config.bin_dir, FAASD_BINARY))?;

    let provider = UnitName::new(PROVIDER_UNIT)?;
    let gateway = UnitName::new(FAASD_UNIT)?;
    let installer = UnitInstaller::new(&config.unit_dir, ctx.manager(), ctx.renderer());

    let unit_files = run_step(InstallStep::UnitFiles, || {
        let bin = path_param(&faasd_bin)?;
        let provider_params = UnitParams::from([
            (CWD_PARAM.to_string(), path_param(&config.provider_dir)?),
            (SECRET_MOUNT_PATH_PARAM.to_string(), path_param(&secrets_dir)?),
            (FAASD_BIN_PARAM.to_string(), bin.clone()),
        ]);
        let gateway_params = UnitParams::from([
            (CWD_PARAM.to_string(), path_param(&config.base_dir)?),
            (FAASD_BIN_PARAM.to_string(), bin),
        ]);

        let provider_template = ctx.assets().unit_template(&provider)?;
        let gateway_template = ctx.assets().unit_template(&gateway)?;
        Ok(vec![
            installer.install(&provider_template, &provider, &provider_params)?,
            installer.install(&gateway_template, &gateway, &gateway_params)?,
        ])
    })?;

    run_step(InstallStep::DaemonReload, || installer.reload())?;
    run_step(InstallStep::EnableUnits, || {
        installer.enable(&provider)?;
        installer.enable(&gateway)
    })?;
    run_step(InstallStep::StartUnits, || {
        installer.start(&provider)?;
        installer.start(&gateway)
    })?;

    Ok(InstallOutcome { credentials, unit_files, guidance: guidance(&secrets_dir) })
}

fn run_step<T>(
    step: InstallStep,
    action: impl FnOnce() -> Result<T, AppError>,
) -> Result<T, AppError> {
    info!(step = step.name(), "running install step");
    action().map_err(|source| {
        debug!(step = step.name(), error = %source, "install step failed");
        AppError::Step { step, source: Box::new(source) }
    })
}

fn path_param(path: &Path) -> Result<String, AppError> {
    path.to_str().map(str::to_string).ok_or_else(|| {
        AppError::config_error(format!("path is not valid UTF-8: {}", path.display()))
    })
}

fn guidance(secrets_dir: &Path) -> String {
    let password = secrets_dir.join(Credential::Password.file_name());
    format!(
        "Check status with:\n  sudo journalctl -u {FAASD_UNIT} --lines 100 -f\n\n\
         Login with:\n  sudo cat {} | faas-cli login -s",
        password.display()
    )
}
