use std::io;

use rand::RngCore;
use rand::rngs::OsRng;

use crate::domain::AppError;
use crate::ports::CredentialSource;

/// Random bytes from the operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsCredentialSource;

impl CredentialSource for OsCredentialSource {
    fn random_bytes(&self, len: usize) -> Result<Vec<u8>, AppError> {
        let mut bytes = vec![0u8; len];
        OsRng.try_fill_bytes(&mut bytes).map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        Ok(bytes)
    }
}
