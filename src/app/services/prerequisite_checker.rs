use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Confirm `directory/name` exists; returns the probed path.
pub fn verify_binary(directory: &Path, name: &str) -> Result<PathBuf, AppError> {
    let path = directory.join(name);
    if fs::metadata(&path).is_err() {
        return Err(AppError::PrerequisiteMissing { path });
    }
    Ok(path)
}
