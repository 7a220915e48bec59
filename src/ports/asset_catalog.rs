use crate::domain::{AppError, ConfigAsset, UnitName};

/// Payloads shipped with the installer.
pub trait AssetCatalog {
    /// Configuration files deployed into the base directory, in deploy order.
    fn config_assets(&self) -> Result<Vec<ConfigAsset>, AppError>;

    /// Raw unit template for `unit`.
    fn unit_template(&self, unit: &UnitName) -> Result<Vec<u8>, AppError>;
}
