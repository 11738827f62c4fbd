pub mod credentials;
pub mod generation_client;
pub mod image_fetcher;
pub mod poller;

use crate::{
    config::LumaConfig,
    error::{Result, WallgenError},
    models::{GenerationRequest, ImagePayload},
};
use std::sync::Arc;

pub use credentials::ApiKeySource;
pub use generation_client::{GenerationApi, HttpGenerationClient};
pub use image_fetcher::{AssetFetcher, HttpImageFetcher};
pub use poller::{poll_until_complete, PollPolicy, MAX_POLL_ATTEMPTS, POLL_INTERVAL};

/// Credential lookup, job creation, polling and download in one place.
#[derive(Clone)]
pub struct LumaClient {
    credentials: ApiKeySource,
    api: Arc<dyn GenerationApi>,
    fetcher: Arc<dyn AssetFetcher>,
    policy: PollPolicy,
}

impl LumaClient {
    pub fn new(config: LumaConfig) -> Self {
        let credentials = ApiKeySource::env(config.api_key_var.clone());
        Self::from_parts(
            credentials,
            Arc::new(HttpGenerationClient::new(config)),
            Arc::new(HttpImageFetcher::new()),
        )
    }

    pub fn from_parts(
        credentials: ApiKeySource,
        api: Arc<dyn GenerationApi>,
        fetcher: Arc<dyn AssetFetcher>,
    ) -> Self {
        Self {
            credentials,
            api,
            fetcher,
            policy: PollPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: PollPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &PollPolicy {
        &self.policy
    }

    /// Generate one image for `prompt` and download it.
    ///
    /// The credential is checked before any request is made.
    pub async fn generate(&self, prompt: &str) -> Result<ImagePayload> {
        let api_key = self.credentials.resolve()?;
        let _timer = crate::logger::timer("image generation");

        let created = self
            .api
            .create(&api_key, &GenerationRequest::new(prompt))
            .await?;

        let handle =
            poll_until_complete(self.api.as_ref(), &api_key, &created.id, &self.policy).await?;
        let url = handle.asset_url().ok_or(WallgenError::MissingAsset)?;

        self.fetcher.fetch(url).await
    }
}
