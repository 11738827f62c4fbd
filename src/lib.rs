//! Wallgen: a Model Context Protocol tool server that generates images with
//! Luma AI, stores them as wallpapers and applies them to the desktop.

pub mod config;
pub mod error;
pub mod logger;
pub mod luma;
pub mod models;
pub mod random;
pub mod server;
pub mod storage;
pub mod studio;
pub mod wallpaper;

pub use config::{Config, LumaConfig};
pub use error::{Result, WallgenError};
pub use luma::{ApiKeySource, LumaClient, PollPolicy};
pub use server::WallgenServer;
pub use storage::ImageStore;
pub use studio::WallpaperStudio;
pub use wallpaper::WallpaperSetter;
