use crate::domain::{AppError, UnitName};

/// Operations against the host service manager.
///
/// Every operation is expected to be idempotent on the manager side.
pub trait ServiceManager {
    /// Re-scan unit definitions from disk.
    fn daemon_reload(&self) -> Result<(), AppError>;

    /// Mark a unit to start on boot.
    fn enable(&self, unit: &UnitName) -> Result<(), AppError>;

    /// Start a unit now.
    fn start(&self, unit: &UnitName) -> Result<(), AppError>;
}
