//! The three generation tools, composed from the client, the store and the
//! wallpaper setter. Failures become messages here; nothing is raised past
//! this layer except from `generate_image`, whose caller renders the error.

use std::path::Path;

use crate::{
    config::Config,
    error::Result,
    luma::LumaClient,
    models::{ImagePayload, SavedImageFile, WallpaperResult},
    storage::ImageStore,
    wallpaper::WallpaperSetter,
};

#[derive(Clone)]
pub struct WallpaperStudio {
    luma: LumaClient,
    store: ImageStore,
    setter: WallpaperSetter,
}

impl WallpaperStudio {
    pub fn new(luma: LumaClient, store: ImageStore, setter: WallpaperSetter) -> Self {
        Self {
            luma,
            store,
            setter,
        }
    }

    pub fn from_config(config: &Config, store: ImageStore) -> Self {
        Self::new(
            LumaClient::new(config.luma.clone()),
            store,
            WallpaperSetter::system(config.desktop.as_deref()),
        )
    }

    pub fn store(&self) -> &ImageStore {
        &self.store
    }

    pub async fn generate_image(&self, prompt: &str) -> Result<ImagePayload> {
        log::info!("generate_image called with prompt={:?}", prompt);
        self.luma.generate(prompt).await.map_err(|e| {
            log::error!("Error generating image: {}", e);
            e
        })
    }

    /// Generate an image and keep it in the output directory.
    pub async fn generate_wallpaper(
        &self,
        prompt: &str,
    ) -> std::result::Result<SavedImageFile, String> {
        log::info!("generate_wallpaper called with prompt={:?}", prompt);

        let image = self.luma.generate(prompt).await.map_err(|e| {
            let message = format!("Error generating wallpaper: {}", e);
            log::error!("{}", message);
            message
        })?;

        self.store.save(prompt, &image.bytes).await.map_err(|e| {
            let message = format!("Generated image but failed to save wallpaper: {}", e);
            log::error!("{}", message);
            message
        })
    }

    pub async fn generate_and_set_wallpaper(&self, prompt: &str) -> WallpaperResult {
        let saved = match self.generate_wallpaper(prompt).await {
            Ok(saved) => saved,
            Err(message) => return WallpaperResult::failed(message),
        };

        match self.setter.set(&saved.path).await {
            Ok(result) => result,
            Err(e) => {
                let message = format!(
                    "Generated wallpaper at {} but failed to set it: {}",
                    saved.path.display(),
                    e
                );
                log::error!("{}", message);
                WallpaperResult::failed(message)
            }
        }
    }

    pub async fn set_wallpaper(&self, image: &Path) -> WallpaperResult {
        log::info!("set_wallpaper called with image={}", image.display());
        match self.setter.set(image).await {
            Ok(result) => result,
            Err(e) => {
                let message = format!("Error setting wallpaper: {}", e);
                log::error!("{}", message);
                WallpaperResult::failed(message)
            }
        }
    }
}
