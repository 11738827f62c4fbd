//! Applying an image file as the desktop wallpaper.
//!
//! Two calls racing each other end with whichever image was applied last;
//! nothing here serialises them.

pub mod backend;
pub mod runner;

use std::path::Path;
use std::sync::Arc;

use crate::{
    error::{Result, WallgenError},
    models::WallpaperResult,
};

pub use backend::DesktopBackend;
pub use runner::{CommandOutput, CommandRunner, ShellCommand, SystemCommandRunner};

#[derive(Clone)]
pub struct WallpaperSetter {
    backend: DesktopBackend,
    runner: Arc<dyn CommandRunner>,
}

impl WallpaperSetter {
    pub fn new(backend: DesktopBackend, runner: Arc<dyn CommandRunner>) -> Self {
        Self { backend, runner }
    }

    /// Detected backend driving real processes.
    pub fn system(override_name: Option<&str>) -> Self {
        Self::new(
            DesktopBackend::detect(override_name),
            Arc::new(SystemCommandRunner),
        )
    }

    pub fn backend(&self) -> &DesktopBackend {
        &self.backend
    }

    /// Check the file, apply it, then refresh the desktop shell.
    pub async fn set(&self, image: &Path) -> Result<WallpaperResult> {
        if !image.is_file() {
            log::warn!("Wallpaper image not found: {}", image.display());
            return Err(WallgenError::FileNotFound(image.to_path_buf()));
        }
        if let DesktopBackend::Unsupported(name) = &self.backend {
            return Err(WallgenError::UnsupportedDesktop(name.clone()));
        }

        log::info!("Applying wallpaper {} ({:?})", image.display(), self.backend);
        for command in self.backend.apply_commands(image) {
            self.run_step(&command).await?;
        }

        if let Some(refresh) = self.backend.refresh_command() {
            log::info!("Restarting desktop shell to apply changes");
            self.run_step(&refresh).await?;
        }

        log::info!("Wallpaper successfully set to {}", image.display());
        Ok(WallpaperResult::ok(format!(
            "Wallpaper set to {}",
            image.display()
        )))
    }

    async fn run_step(&self, command: &ShellCommand) -> Result<()> {
        let output = self.runner.run(command).await?;
        if output.is_success() {
            return Ok(());
        }

        let diagnostic = output.diagnostic();
        if command.required {
            log::error!("{} failed: {}", command.program, diagnostic);
            Err(WallgenError::WallpaperCommand(format!(
                "{}: {}",
                command.program, diagnostic
            )))
        } else {
            log::warn!("Ignoring failed {}: {}", command.program, diagnostic);
            Ok(())
        }
    }
}
