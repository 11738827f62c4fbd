use rmcp::{transport::stdio, ServiceExt};
use wallgen::{
    logger::{self, LoggerConfig},
    Config, ImageStore, WallgenServer, WallpaperStudio,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let config = Config::from_env();
    logger::init_with_config(LoggerConfig::from_config(&config))?;
    logger::log_startup_info(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if dotenv_loaded {
        log::info!("✅ .env file loaded successfully");
    } else {
        log::warn!("⚠️  No .env file found, using system environment variables");
    }

    if std::env::var(&config.luma.api_key_var).is_err() {
        log::warn!(
            "⚠️  {} is not set; image generation tools will report an error until it is",
            config.luma.api_key_var
        );
    }

    let store = match &config.output_dir {
        Some(dir) => ImageStore::create_in(dir)?,
        None => ImageStore::create_temp()?,
    };
    logger::log_config_info(&config, store.dir());

    let studio = WallpaperStudio::from_config(&config, store);
    let service = WallgenServer::new(studio).serve(stdio()).await?;

    log::info!("🌐 MCP wallpaper server ready");
    service.waiting().await?;

    log::info!("MCP wallpaper server stopped");
    Ok(())
}
