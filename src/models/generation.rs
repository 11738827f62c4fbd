use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub model: Option<String>,
    pub aspect_ratio: Option<String>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: None,
            aspect_ratio: None,
        }
    }
}

/// Remote job state. Anything other than `completed` or `failed` keeps the
/// job in flight, including values the API may add later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GenerationState {
    Pending(String),
    Completed,
    Failed,
}

impl GenerationState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GenerationState::Pending(_))
    }
}

impl From<String> for GenerationState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "completed" => GenerationState::Completed,
            "failed" => GenerationState::Failed,
            _ => GenerationState::Pending(value),
        }
    }
}

impl From<GenerationState> for String {
    fn from(state: GenerationState) -> Self {
        match state {
            GenerationState::Pending(raw) => raw,
            GenerationState::Completed => "completed".to_string(),
            GenerationState::Failed => "failed".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationAssets {
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationHandle {
    pub id: String,
    pub state: GenerationState,
    #[serde(default)]
    pub failure_reason: Option<String>,
    #[serde(default)]
    pub assets: Option<GenerationAssets>,
}

impl GenerationHandle {
    pub fn asset_url(&self) -> Option<&str> {
        self.assets.as_ref().and_then(|assets| assets.image.as_deref())
    }
}
