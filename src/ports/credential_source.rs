use crate::domain::AppError;

/// Source of random bytes for generated credentials.
pub trait CredentialSource {
    /// Produce `len` cryptographically random bytes.
    fn random_bytes(&self, len: usize) -> Result<Vec<u8>, AppError>;
}
