use std::fs::OpenOptions;
use std::io::Write;
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

use crate::domain::AppError;
use crate::domain::paths::ASSET_FILE_MODE;

/// Write `payload` to `destination`, replacing whatever is there.
pub fn deploy(payload: &[u8], destination: &Path) -> Result<(), AppError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(ASSET_FILE_MODE)
        .open(destination)?;
    file.write_all(payload)?;
    Ok(())
}
