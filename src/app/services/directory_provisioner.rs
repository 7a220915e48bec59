use std::fs::{self, DirBuilder};
use std::io;
use std::os::unix::fs::DirBuilderExt;
use std::path::Path;

use tracing::debug;

use crate::domain::AppError;

/// Result of ensuring a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryState {
    Created,
    AlreadyPresent,
}

/// Ensure `path` exists as a directory, creating it and missing parents with `mode`.
///
/// An existing directory is left untouched, permissions included.
pub fn ensure_dir(path: &Path, mode: u32) -> Result<DirectoryState, AppError> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => {
            debug!(path = %path.display(), "directory already present");
            Ok(DirectoryState::AlreadyPresent)
        }
        Ok(_) => Err(AppError::Io(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} exists and is not a directory", path.display()),
        ))),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            DirBuilder::new().recursive(true).mode(mode).create(path)?;
            debug!(path = %path.display(), mode = %format!("{mode:o}"), "created directory");
            Ok(DirectoryState::Created)
        }
        Err(err) => Err(AppError::Io(err)),
    }
}
