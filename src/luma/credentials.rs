use std::env;

use crate::error::{Result, WallgenError};

/// Where the Luma API key comes from.
///
/// `Env` is looked up on every call so a key exported after start-up is
/// picked up, and a missing key fails that call only.
#[derive(Debug, Clone)]
pub enum ApiKeySource {
    Env(String),
    Static(Option<String>),
}

impl ApiKeySource {
    pub fn env(var: impl Into<String>) -> Self {
        ApiKeySource::Env(var.into())
    }

    pub fn resolve(&self) -> Result<String> {
        let (name, value) = match self {
            ApiKeySource::Env(var) => (var.as_str(), env::var(var).ok()),
            ApiKeySource::Static(key) => (crate::config::DEFAULT_API_KEY_VAR, key.clone()),
        };

        value
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| WallgenError::MissingCredential(name.to_string()))
    }
}
