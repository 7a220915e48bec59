use include_dir::{Dir, include_dir};

use crate::domain::paths::{DOCKER_COMPOSE_FILE, PROMETHEUS_FILE, RESOLV_CONF_FILE};
use crate::domain::{AppError, ConfigAsset, UnitName};
use crate::ports::AssetCatalog;

static ASSETS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets");

const CONFIG_FILES: [&str; 3] = [DOCKER_COMPOSE_FILE, PROMETHEUS_FILE, RESOLV_CONF_FILE];

/// Asset catalog compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedAssetCatalog;

impl EmbeddedAssetCatalog {
    pub fn new() -> Self {
        Self
    }

    fn file(&self, path: &str) -> Result<&'static [u8], AppError> {
        ASSETS_DIR
            .get_file(path)
            .map(|file| file.contents())
            .ok_or_else(|| AppError::Internal(format!("Missing embedded asset: {}", path)))
    }
}

impl AssetCatalog for EmbeddedAssetCatalog {
    fn config_assets(&self) -> Result<Vec<ConfigAsset>, AppError> {
        CONFIG_FILES.iter().map(|name| Ok(ConfigAsset::new(*name, self.file(name)?))).collect()
    }

    fn unit_template(&self, unit: &UnitName) -> Result<Vec<u8>, AppError> {
        Ok(self.file(&unit.file_name())?.to_vec())
    }
}
