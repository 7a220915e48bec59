//! Service unit templates and the names/parameters they are rendered with.

mod placeholders;
mod template;

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::domain::AppError;

pub use placeholders::{placeholder_names, validate_template};
pub use template::TemplateRenderer;

/// Suffix systemd expects on service unit files.
pub const SERVICE_SUFFIX: &str = ".service";

/// Placeholder → value mapping used to render a unit template.
pub type UnitParams = BTreeMap<String, String>;

/// Validated systemd unit name (without the `.service` suffix).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitName(String);

impl UnitName {
    pub fn new(name: &str) -> Result<Self, AppError> {
        if Self::is_valid(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(AppError::InvalidUnitName(name.to_string()))
        }
    }

    fn is_valid(name: &str) -> bool {
        !name.is_empty()
            && !name.ends_with(SERVICE_SUFFIX)
            && name.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '@'))
            && !name.starts_with('.')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name under the unit directory.
    pub fn file_name(&self) -> String {
        format!("{}{}", self.0, SERVICE_SUFFIX)
    }
}

impl fmt::Display for UnitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors raised while turning a unit template into a concrete unit file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template for unit '{unit}' references '{key}' but no value was supplied")]
    MissingParameter { unit: String, key: String },

    #[error("template for unit '{unit}' contains unsupported syntax '{token}'")]
    SyntaxNotAllowed { unit: String, token: String },

    #[error("template for unit '{unit}' is not valid UTF-8")]
    InvalidEncoding { unit: String },

    #[error("failed to render template for unit '{unit}': {reason}")]
    Render { unit: String, reason: String },
}
