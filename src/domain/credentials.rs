//! Basic-auth credential files shared by the gateway and provider.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Username written on first install.
pub const DEFAULT_USERNAME: &str = "admin";

/// Random bytes drawn for a generated password.
pub const PASSWORD_BYTES: usize = 32;

/// Owner read/write only.
pub const SECRET_FILE_MODE: u32 = 0o600;

/// A credential file under the secrets directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credential {
    Username,
    Password,
}

impl Credential {
    pub const ALL: [Credential; 2] = [Credential::Username, Credential::Password];

    pub fn file_name(&self) -> &'static str {
        match self {
            Credential::Username => "basic-auth-user",
            Credential::Password => "basic-auth-password",
        }
    }
}

/// Printable form of raw password bytes.
pub fn encode_password(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}
