//! Provisioning building blocks composed by the install command.

pub mod asset_deployer;
pub mod directory_provisioner;
pub mod prerequisite_checker;
pub mod secret_materializer;
pub mod unit_installer;

pub use directory_provisioner::DirectoryState;
pub use secret_materializer::CredentialReport;
pub use unit_installer::UnitInstaller;
