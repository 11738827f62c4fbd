use crate::{
    config::LumaConfig,
    error::{Result, WallgenError},
    models::{GenerationHandle, GenerationRequest},
};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

/// Remote image-generation job API: create a job, then look it up by id.
#[async_trait]
pub trait GenerationApi: Send + Sync {
    async fn create(&self, api_key: &str, request: &GenerationRequest)
        -> Result<GenerationHandle>;

    async fn get(&self, api_key: &str, id: &str) -> Result<GenerationHandle>;
}

#[derive(Clone)]
pub struct HttpGenerationClient {
    client: Client,
    config: LumaConfig,
}

impl HttpGenerationClient {
    pub fn new(config: LumaConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: LumaConfig) -> Self {
        Self { client, config }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path)
    }
}

#[async_trait]
impl GenerationApi for HttpGenerationClient {
    async fn create(
        &self,
        api_key: &str,
        request: &GenerationRequest,
    ) -> Result<GenerationHandle> {
        let model = request.model.as_deref().unwrap_or(&self.config.model);
        let aspect_ratio = request
            .aspect_ratio
            .as_deref()
            .unwrap_or(&self.config.aspect_ratio);

        let payload = json!({
            "prompt": request.prompt,
            "model": model,
            "aspect_ratio": aspect_ratio,
        });

        log::info!("Creating image generation with model: {}", model);
        log::debug!("Generation request payload: {}", payload);

        let response = self
            .client
            .post(self.url("generations/image"))
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| WallgenError::RemoteCreate(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(WallgenError::RemoteCreate(format!(
                "HTTP {}: {}",
                status.as_u16(),
                error_text
            )));
        }

        let handle: GenerationHandle = response
            .json()
            .await
            .map_err(|e| WallgenError::RemoteCreate(format!("invalid response: {}", e)))?;

        log::info!("Generation {} created", handle.id);
        Ok(handle)
    }

    async fn get(&self, api_key: &str, id: &str) -> Result<GenerationHandle> {
        let response = self
            .client
            .get(self.url(&format!("generations/{}", id)))
            .bearer_auth(api_key)
            .send()
            .await
            .map_err(|e| WallgenError::StatusRequest(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(WallgenError::StatusRequest(format!(
                "HTTP {}: {}",
                status.as_u16(),
                error_text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| WallgenError::StatusRequest(format!("invalid response: {}", e)))
    }
}
