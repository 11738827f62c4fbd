use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::{
    error::{Result, WallgenError},
    models::SavedImageFile,
};

pub const FILE_PREFIX_LEN: usize = 30;
pub const FILE_EXTENSION: &str = "png";
const EMPTY_PROMPT_PREFIX: &str = "wallpaper";

/// Process-wide directory that generated wallpapers are written into.
///
/// Created once at start-up and never cleaned up. Names carry a random
/// suffix, so concurrent saves do not share a path.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    /// Use `dir`, creating it if needed.
    pub fn create_in(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            WallgenError::Config(format!(
                "cannot create output directory {}: {}",
                dir.display(),
                e
            ))
        })?;
        let dir = std::fs::canonicalize(&dir).unwrap_or(dir);

        log::info!("Saving wallpapers under {}", dir.display());
        Ok(Self { dir })
    }

    /// Fresh `wallgen-<uuid>` directory under the system temp dir.
    pub fn create_temp() -> Result<Self> {
        let name = format!("wallgen-{}", Uuid::new_v4().simple());
        Self::create_in(std::env::temp_dir().join(name))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn save(&self, prompt: &str, bytes: &[u8]) -> Result<SavedImageFile> {
        let path = self.dir.join(sanitized_file_name(prompt));

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| WallgenError::FileWrite(format!("{}: {}", path.display(), e)))?;

        log::info!("Saved {} bytes to {}", bytes.len(), path.display());
        Ok(SavedImageFile {
            path,
            size_bytes: bytes.len(),
        })
    }
}

/// `<prefix>_<8 hex>.png`, where the prefix is the first characters of the
/// prompt with everything but ASCII letters and digits replaced by `_`.
pub fn sanitized_file_name(prompt: &str) -> String {
    let prefix: String = prompt
        .chars()
        .take(FILE_PREFIX_LEN)
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    let prefix = if prefix.is_empty() {
        EMPTY_PROMPT_PREFIX.to_string()
    } else {
        prefix
    };

    let unique = Uuid::new_v4().simple().to_string();
    format!("{}_{}.{}", prefix, &unique[..8], FILE_EXTENSION)
}
