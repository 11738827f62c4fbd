use std::path::PathBuf;

use serde::Serialize;

pub const PNG_FORMAT: &str = "png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    pub format: String,
}

impl ImagePayload {
    pub fn png(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            format: PNG_FORMAT.to_string(),
        }
    }

    pub fn mime_type(&self) -> String {
        format!("image/{}", self.format)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SavedImageFile {
    pub path: PathBuf,
    pub size_bytes: usize,
}
