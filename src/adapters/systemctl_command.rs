use std::process::{Command, Output};

use tracing::debug;

use crate::domain::{AppError, UnitName};
use crate::ports::ServiceManager;

/// `ServiceManager` backed by the `systemctl` command.
#[derive(Debug, Clone)]
pub struct SystemctlCommandAdapter {
    program: String,
}

impl SystemctlCommandAdapter {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    fn run(&self, args: &[&str]) -> Result<Output, AppError> {
        let command = format!("{} {}", self.program, args.join(" "));
        debug!(%command, "invoking service manager");

        let output = Command::new(&self.program).args(args).output().map_err(|e| {
            AppError::ServiceManager { command: command.clone(), details: e.to_string() }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::ServiceManager {
                command,
                details: if stderr.is_empty() {
                    format!("exited with {}", output.status)
                } else {
                    stderr
                },
            });
        }

        Ok(output)
    }
}

impl ServiceManager for SystemctlCommandAdapter {
    fn daemon_reload(&self) -> Result<(), AppError> {
        self.run(&["daemon-reload"])?;
        Ok(())
    }

    fn enable(&self, unit: &UnitName) -> Result<(), AppError> {
        self.run(&["enable", unit.as_str()])?;
        Ok(())
    }

    fn start(&self, unit: &UnitName) -> Result<(), AppError> {
        self.run(&["start", unit.as_str()])?;
        Ok(())
    }
}
