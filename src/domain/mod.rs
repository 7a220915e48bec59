pub mod assets;
pub mod configuration;
pub mod credentials;
pub mod error;
pub mod install_step;
pub mod paths;
pub mod unit;

pub use assets::ConfigAsset;
pub use configuration::InstallConfig;
pub use credentials::Credential;
pub use error::AppError;
pub use install_step::InstallStep;
pub use unit::{TemplateError, TemplateRenderer, UnitName, UnitParams};
