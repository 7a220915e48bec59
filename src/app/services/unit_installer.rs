use std::fs::{self, OpenOptions};
use std::io::Write;
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::paths::UNIT_FILE_MODE;
use crate::domain::{AppError, TemplateError, TemplateRenderer, UnitName, UnitParams};
use crate::ports::ServiceManager;

/// Renders unit templates into the unit directory and drives the service manager.
pub struct UnitInstaller<'a, M: ServiceManager, R: TemplateRenderer> {
    unit_dir: &'a Path,
    manager: &'a M,
    renderer: &'a R,
}

impl<'a, M: ServiceManager, R: TemplateRenderer> UnitInstaller<'a, M, R> {
    pub fn new(unit_dir: &'a Path, manager: &'a M, renderer: &'a R) -> Self {
        Self { unit_dir, manager, renderer }
    }

    /// Render `template` with `params` and write it as `<unit>.service`.
    ///
    /// Nothing is written unless every placeholder resolves.
    pub fn install(
        &self,
        template: &[u8],
        unit: &UnitName,
        params: &UnitParams,
    ) -> Result<PathBuf, AppError> {
        let template = std::str::from_utf8(template)
            .map_err(|_| TemplateError::InvalidEncoding { unit: unit.to_string() })?;
        let rendered = self.renderer.render(template, params, unit)?;

        fs::create_dir_all(self.unit_dir)?;
        let path = self.unit_dir.join(unit.file_name());
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(UNIT_FILE_MODE)
            .open(&path)?;
        file.write_all(rendered.as_bytes())?;

        debug!(unit = %unit, path = %path.display(), "unit file written");
        Ok(path)
    }

    /// Make the service manager pick up unit files written since its last scan.
    pub fn reload(&self) -> Result<(), AppError> {
        self.manager.daemon_reload()
    }

    pub fn enable(&self, unit: &UnitName) -> Result<(), AppError> {
        self.manager.enable(unit)
    }

    pub fn start(&self, unit: &UnitName) -> Result<(), AppError> {
        self.manager.start(unit)
    }
}
