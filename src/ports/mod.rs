mod asset_catalog;
mod credential_source;
mod service_manager;

pub use asset_catalog::AssetCatalog;
pub use credential_source::CredentialSource;
pub use service_manager::ServiceManager;
