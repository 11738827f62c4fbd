use std::path::PathBuf;
use std::sync::Arc;

use base64::Engine;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    schemars, tool_handler, ErrorData as McpError, ServerHandler,
};
use serde::Deserialize;

use crate::{random, studio::WallpaperStudio};

/// Input for the integer generator.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RandomNumberInput {
    #[schemars(description = "The minimum possible value (default: 1)")]
    pub min_value: Option<i64>,
    #[schemars(description = "The maximum possible value (default: 100)")]
    pub max_value: Option<i64>,
}

/// Input for the float generator.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RandomFloatInput {
    #[schemars(description = "The minimum possible value (default: 0.0)")]
    pub min_value: Option<f64>,
    #[schemars(description = "The maximum possible value (default: 1.0)")]
    pub max_value: Option<f64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PromptInput {
    #[schemars(description = "Text description of the image to generate")]
    pub prompt: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetWallpaperInput {
    #[schemars(description = "Absolute path of a local image file")]
    pub image_path: String,
}

/// MCP server exposing random numbers, Luma image generation and wallpaper tools.
#[derive(Clone)]
pub struct WallgenServer {
    studio: Arc<WallpaperStudio>,
    pub tool_router: ToolRouter<Self>,
}

#[rmcp::tool_router]
impl WallgenServer {
    pub fn new(studio: WallpaperStudio) -> Self {
        Self {
            studio: Arc::new(studio),
            tool_router: Self::tool_router(),
        }
    }

    #[rmcp::tool(
        description = "Generate a random integer between min_value and max_value (inclusive)"
    )]
    fn generate_random_number(&self, Parameters(input): Parameters<RandomNumberInput>) -> String {
        let min = input.min_value.unwrap_or(random::DEFAULT_INT_MIN);
        let max = input.max_value.unwrap_or(random::DEFAULT_INT_MAX);
        log::info!("generate_random_number called with min_value={}, max_value={}", min, max);

        match random::random_integer(min, max) {
            Ok(value) => value.to_string(),
            Err(err) => format!("Error: {err}"),
        }
    }

    #[rmcp::tool(description = "Generate a random float between min_value and max_value")]
    fn generate_random_float(&self, Parameters(input): Parameters<RandomFloatInput>) -> String {
        let min = input.min_value.unwrap_or(random::DEFAULT_FLOAT_MIN);
        let max = input.max_value.unwrap_or(random::DEFAULT_FLOAT_MAX);
        log::info!("generate_random_float called with min_value={}, max_value={}", min, max);

        match random::random_float(min, max) {
            Ok(value) => value.to_string(),
            Err(err) => format!("Error: {err}"),
        }
    }

    #[rmcp::tool(description = "Generate an image from a text prompt using Luma Labs AI")]
    async fn generate_image(
        &self,
        Parameters(input): Parameters<PromptInput>,
    ) -> Result<CallToolResult, McpError> {
        match self.studio.generate_image(&input.prompt).await {
            Ok(image) => {
                let data = base64::engine::general_purpose::STANDARD.encode(&image.bytes);
                Ok(CallToolResult::success(vec![Content::image(
                    data,
                    image.mime_type(),
                )]))
            }
            Err(err) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Error generating image: {err}"
            ))])),
        }
    }

    #[rmcp::tool(
        description = "Generate an image from a text prompt and save it as a wallpaper file; returns the saved path"
    )]
    async fn generate_wallpaper(&self, Parameters(input): Parameters<PromptInput>) -> String {
        match self.studio.generate_wallpaper(&input.prompt).await {
            Ok(saved) => format!("Wallpaper saved to {}", saved.path.display()),
            Err(message) => message,
        }
    }

    #[rmcp::tool(
        description = "Generate an image from a text prompt, save it and set it as the desktop wallpaper"
    )]
    async fn generate_and_set_wallpaper(
        &self,
        Parameters(input): Parameters<PromptInput>,
    ) -> String {
        self.studio
            .generate_and_set_wallpaper(&input.prompt)
            .await
            .message
    }

    #[rmcp::tool(description = "Set an existing local image file as the desktop wallpaper")]
    async fn set_wallpaper(&self, Parameters(input): Parameters<SetWallpaperInput>) -> String {
        let path = PathBuf::from(input.image_path);
        self.studio.set_wallpaper(&path).await.message
    }
}

#[tool_handler]
impl ServerHandler for WallgenServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Wallgen MCP Server: random numbers, Luma AI image generation, and desktop wallpaper tools. Image generation polls the remote job for up to a minute.".into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
