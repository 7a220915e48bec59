use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::install_step::InstallStep;
use crate::domain::unit::TemplateError;

/// Library-wide error type for faasd install operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Required binary is not installed at its expected location.
    #[error("unable to stat {}, install this binary before continuing", path.display())]
    PrerequisiteMissing { path: PathBuf },

    /// Unit name is not usable as a systemd service file name.
    #[error("Invalid unit name '{0}': use letters, digits, '-', '_', '.', or '@'")]
    InvalidUnitName(String),

    /// Unit template could not be rendered.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Service manager invocation failed.
    #[error("service manager error running '{command}': {details}")]
    ServiceManager { command: String, details: String },

    /// Embedded payload missing or malformed.
    #[error("Internal error: {0}")]
    Internal(String),

    /// An install step failed; carries the phase that failed.
    #[error("{step}: {source}")]
    Step {
        step: InstallStep,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Coarse `io::ErrorKind` classification, looking through `Step` to the underlying cause.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::TomlParse(_)
            | AppError::InvalidUnitName(_)
            | AppError::Template(_) => io::ErrorKind::InvalidInput,
            AppError::PrerequisiteMissing { .. } => io::ErrorKind::NotFound,
            AppError::ServiceManager { .. } | AppError::Internal(_) => io::ErrorKind::Other,
            AppError::Step { source, .. } => source.kind(),
        }
    }

    /// The innermost error, with step context removed.
    pub fn root_cause(&self) -> &AppError {
        match self {
            AppError::Step { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
