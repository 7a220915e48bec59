use std::fmt;

/// Phases of an install run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStep {
    WorkingDirectories,
    Credentials,
    ConfigAssets,
    Prerequisites,
    UnitFiles,
    DaemonReload,
    EnableUnits,
    StartUnits,
}

impl InstallStep {
    /// Short identifier used in log fields.
    pub fn name(&self) -> &'static str {
        match self {
            InstallStep::WorkingDirectories => "working-directories",
            InstallStep::Credentials => "credentials",
            InstallStep::ConfigAssets => "config-assets",
            InstallStep::Prerequisites => "prerequisites",
            InstallStep::UnitFiles => "unit-files",
            InstallStep::DaemonReload => "daemon-reload",
            InstallStep::EnableUnits => "enable-units",
            InstallStep::StartUnits => "start-units",
        }
    }

    fn phrase(&self) -> &'static str {
        match self {
            InstallStep::WorkingDirectories => "cannot create working directories",
            InstallStep::Credentials => "cannot create basic-auth-* files",
            InstallStep::ConfigAssets => "cannot deploy configuration files",
            InstallStep::Prerequisites => "missing prerequisite",
            InstallStep::UnitFiles => "cannot install systemd units",
            InstallStep::DaemonReload => "cannot reload systemd",
            InstallStep::EnableUnits => "cannot enable systemd units",
            InstallStep::StartUnits => "cannot start systemd units",
        }
    }
}

impl fmt::Display for InstallStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}
