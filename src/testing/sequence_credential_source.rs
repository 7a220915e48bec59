use std::sync::atomic::{AtomicU8, Ordering};

use crate::domain::AppError;
use crate::ports::CredentialSource;

/// Deterministic credential source: draw N is N repeated `len` times.
#[derive(Default)]
pub struct SequenceCredentialSource {
    next: AtomicU8,
}

impl SequenceCredentialSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times bytes were requested.
    pub fn draws(&self) -> u8 {
        self.next.load(Ordering::SeqCst)
    }
}

impl CredentialSource for SequenceCredentialSource {
    fn random_bytes(&self, len: usize) -> Result<Vec<u8>, AppError> {
        let value = self.next.fetch_add(1, Ordering::SeqCst);
        Ok(vec![value; len])
    }
}
