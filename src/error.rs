use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WallgenError {
    #[error("{0} environment variable not set")]
    MissingCredential(String),
    #[error("Failed to create generation: {0}")]
    RemoteCreate(String),
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
    #[error("generation timed out")]
    PollTimeout,
    #[error("Failed to fetch generation status: {0}")]
    StatusRequest(String),
    #[error("Generation completed without an image asset")]
    MissingAsset,
    #[error("Failed to download image: HTTP {0}")]
    DownloadStatus(u16),
    #[error("Failed to download image: {0}")]
    DownloadNetwork(String),
    #[error("Failed to write image file: {0}")]
    FileWrite(String),
    #[error("Image file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Wallpaper command failed: {0}")]
    WallpaperCommand(String),
    #[error("Unsupported desktop environment: {0}")]
    UnsupportedDesktop(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, WallgenError>;
