use std::collections::BTreeMap;

use crate::adapters::assets::EmbeddedAssetCatalog;
use crate::domain::{AppError, ConfigAsset, UnitName};
use crate::ports::AssetCatalog;

/// Asset catalog whose payloads can be swapped per test.
pub struct InMemoryAssetCatalog {
    config: Vec<ConfigAsset>,
    units: BTreeMap<String, Vec<u8>>,
}

impl InMemoryAssetCatalog {
    /// Start from the payloads shipped in the binary.
    pub fn embedded() -> Self {
        let embedded = EmbeddedAssetCatalog::new();
        let mut units = BTreeMap::new();
        for name in ["faasd", "faasd-provider"] {
            let unit = UnitName::new(name).unwrap();
            units.insert(name.to_string(), embedded.unit_template(&unit).unwrap());
        }
        Self { config: embedded.config_assets().unwrap(), units }
    }

    pub fn with_unit_template(mut self, unit: &str, template: &str) -> Self {
        self.units.insert(unit.to_string(), template.as_bytes().to_vec());
        self
    }

    pub fn with_config_asset(mut self, file_name: &str, content: &[u8]) -> Self {
        match self.config.iter_mut().find(|asset| asset.file_name == file_name) {
            Some(asset) => asset.content = content.to_vec(),
            None => self.config.push(ConfigAsset::new(file_name, content)),
        }
        self
    }
}

impl AssetCatalog for InMemoryAssetCatalog {
    fn config_assets(&self) -> Result<Vec<ConfigAsset>, AppError> {
        Ok(self.config.clone())
    }

    fn unit_template(&self, unit: &UnitName) -> Result<Vec<u8>, AppError> {
        self.units
            .get(unit.as_str())
            .cloned()
            .ok_or_else(|| AppError::Internal(format!("no template for {unit}")))
    }
}
