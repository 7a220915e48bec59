pub mod install_config;

pub use install_config::InstallConfig;
