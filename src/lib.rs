//! faasd: provision a host to run the faasd gateway and provider as systemd services.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{InstallOutcome, install, install_with};
pub use domain::{AppError, InstallConfig};
