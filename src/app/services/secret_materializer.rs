use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::AppError;
use crate::domain::credentials::{
    Credential, DEFAULT_USERNAME, PASSWORD_BYTES, SECRET_FILE_MODE, encode_password,
};
use crate::ports::CredentialSource;

const STAGING_SUFFIX: &str = ".partial";

/// Which credential files a run created and which it left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialReport {
    pub created: Vec<Credential>,
    pub kept: Vec<Credential>,
}

/// Create any missing basic-auth files in `secrets_dir`.
///
/// Existing files are authoritative and never rewritten.
pub fn ensure_credentials(
    secrets_dir: &Path,
    source: &impl CredentialSource,
) -> Result<CredentialReport, AppError> {
    let mut report = CredentialReport::default();

    for credential in Credential::ALL {
        let path = secrets_dir.join(credential.file_name());
        match fs::metadata(&path) {
            Ok(_) => {
                debug!(file = credential.file_name(), "credential present, keeping");
                report.kept.push(credential);
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                let content = generate(credential, source)?;
                write_secret(&path, content.as_bytes())?;
                debug!(file = credential.file_name(), "credential created");
                report.created.push(credential);
            }
            Err(err) => return Err(AppError::Io(err)),
        }
    }

    Ok(report)
}

fn generate(credential: Credential, source: &impl CredentialSource) -> Result<String, AppError> {
    match credential {
        Credential::Username => Ok(DEFAULT_USERNAME.to_string()),
        Credential::Password => Ok(encode_password(&source.random_bytes(PASSWORD_BYTES)?)),
    }
}

/// Write `content` to a staging file next to `path`, then hard-link it into place.
///
/// `path` only ever appears fully written and synced. A leftover staging file
/// from an interrupted run is discarded, and the link refuses to replace an
/// existing target.
fn write_secret(path: &Path, content: &[u8]) -> Result<(), AppError> {
    let staging = staging_path(path)?;
    match fs::remove_file(&staging) {
        Ok(()) => debug!(path = %staging.display(), "discarded stale staging file"),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(AppError::Io(err)),
    }

    let published = stage(&staging, content).and_then(|()| fs::hard_link(&staging, path));
    let cleanup = fs::remove_file(&staging);
    published?;
    cleanup?;
    Ok(())
}

fn stage(staging: &Path, content: &[u8]) -> io::Result<()> {
    let mut file =
        OpenOptions::new().write(true).create_new(true).mode(SECRET_FILE_MODE).open(staging)?;
    file.write_all(content)?;
    file.sync_all()
}

fn staging_path(path: &Path) -> Result<PathBuf, AppError> {
    let name = path.file_name().and_then(|name| name.to_str()).ok_or_else(|| {
        AppError::Internal(format!("credential path has no file name: {}", path.display()))
    })?;
    Ok(path.with_file_name(format!(".{name}{STAGING_SUFFIX}")))
}
