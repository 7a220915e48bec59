use std::sync::Mutex;

use crate::domain::{AppError, UnitName};
use crate::ports::ServiceManager;

/// Service manager call observed by `RecordingServiceManager`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceCall {
    DaemonReload,
    Enable(String),
    Start(String),
}

impl ServiceCall {
    fn command(&self) -> String {
        match self {
            ServiceCall::DaemonReload => "systemctl daemon-reload".to_string(),
            ServiceCall::Enable(unit) => format!("systemctl enable {unit}"),
            ServiceCall::Start(unit) => format!("systemctl start {unit}"),
        }
    }
}

/// Records every call; optionally fails one of them.
#[derive(Default)]
pub struct RecordingServiceManager {
    calls: Mutex<Vec<ServiceCall>>,
    fail_on: Option<ServiceCall>,
}

impl RecordingServiceManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(call: ServiceCall) -> Self {
        Self { calls: Mutex::new(Vec::new()), fail_on: Some(call) }
    }

    pub fn calls(&self) -> Vec<ServiceCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ServiceCall) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(call.clone());
        if self.fail_on.as_ref() == Some(&call) {
            return Err(AppError::ServiceManager {
                command: call.command(),
                details: "Job failed. See \"journalctl -xe\" for details.".to_string(),
            });
        }
        Ok(())
    }
}

impl ServiceManager for RecordingServiceManager {
    fn daemon_reload(&self) -> Result<(), AppError> {
        self.record(ServiceCall::DaemonReload)
    }

    fn enable(&self, unit: &UnitName) -> Result<(), AppError> {
        self.record(ServiceCall::Enable(unit.to_string()))
    }

    fn start(&self, unit: &UnitName) -> Result<(), AppError> {
        self.record(ServiceCall::Start(unit.to_string()))
    }
}
