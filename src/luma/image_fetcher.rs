use crate::{
    error::{Result, WallgenError},
    models::ImagePayload,
};
use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{Client, StatusCode};

#[async_trait]
pub trait AssetFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<ImagePayload>;
}

#[derive(Clone, Default)]
pub struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AssetFetcher for HttpImageFetcher {
    /// Download a generated asset. Only `200 OK` counts as success; a body
    /// that fails mid-stream is dropped entirely.
    async fn fetch(&self, url: &str) -> Result<ImagePayload> {
        log::info!("Downloading generated image from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| WallgenError::DownloadNetwork(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            log::error!("Image download returned HTTP {}", status.as_u16());
            return Err(WallgenError::DownloadStatus(status.as_u16()));
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| WallgenError::DownloadNetwork(e.to_string()))?;
            bytes.extend_from_slice(&chunk);
        }

        log::info!("Downloaded {} bytes", bytes.len());
        Ok(ImagePayload::png(bytes))
    }
}
