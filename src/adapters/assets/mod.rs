pub mod embedded_assets;

pub use embedded_assets::EmbeddedAssetCatalog;
