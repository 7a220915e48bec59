/// Non-secret configuration file written verbatim into the base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigAsset {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl ConfigAsset {
    pub fn new(file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self { file_name: file_name.into(), content: content.into() }
    }
}
