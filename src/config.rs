use std::env;
use std::path::PathBuf;

use crate::logger::LogLevel;

pub const DEFAULT_API_KEY_VAR: &str = "LUMA_API_KEY";
pub const DEFAULT_BASE_URL: &str = "https://api.lumalabs.ai/dream-machine/v1";
pub const DEFAULT_IMAGE_MODEL: &str = "photon-1";
pub const DEFAULT_ASPECT_RATIO: &str = "16:9";

/// Settings for the Luma image-generation API.
///
/// The API key itself is not stored here; only the name of the variable it is
/// read from. The key is looked up again on every tool call.
#[derive(Debug, Clone)]
pub struct LumaConfig {
    pub api_key_var: String,
    pub base_url: String,
    pub model: String,
    pub aspect_ratio: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub luma: LumaConfig,
    pub output_dir: Option<PathBuf>,
    pub desktop: Option<String>,
    pub log_level: LogLevel,
    pub log_json: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for LumaConfig {
    fn default() -> Self {
        LumaConfig {
            api_key_var: DEFAULT_API_KEY_VAR.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_IMAGE_MODEL.to_string(),
            aspect_ratio: DEFAULT_ASPECT_RATIO.to_string(),
        }
    }
}

impl LumaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let defaults = Self::default();
        let base_url = env::var("LUMA_BASE_URL").unwrap_or(defaults.base_url);
        let model = env::var("LUMA_IMAGE_MODEL").unwrap_or(defaults.model);
        let aspect_ratio = env::var("LUMA_ASPECT_RATIO").unwrap_or(defaults.aspect_ratio);

        LumaConfig {
            api_key_var: defaults.api_key_var,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            aspect_ratio,
        }
    }

    pub fn with_api_key_var(mut self, name: impl Into<String>) -> Self {
        self.api_key_var = name.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: impl Into<String>) -> Self {
        self.aspect_ratio = aspect_ratio.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            luma: LumaConfig::default(),
            output_dir: None,
            desktop: None,
            log_level: LogLevel::Info,
            log_json: false,
            log_file: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let output_dir = env::var_os("WALLGEN_OUTPUT_DIR").map(PathBuf::from);
        let desktop = env::var("WALLGEN_DESKTOP")
            .ok()
            .filter(|value| !value.trim().is_empty());
        let log_level = env::var("WALLGEN_LOG_LEVEL")
            .ok()
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(LogLevel::Info);
        let log_json = env::var("WALLGEN_LOG_JSON")
            .map(|value| matches!(value.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);
        let log_file = env::var_os("WALLGEN_LOG_FILE")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Config {
            luma: LumaConfig::from_env(),
            output_dir,
            desktop,
            log_level,
            log_json,
            log_file,
        }
    }

    pub fn with_luma(mut self, config: LumaConfig) -> Self {
        self.luma = config;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn with_desktop(mut self, desktop: impl Into<String>) -> Self {
        self.desktop = Some(desktop.into());
        self
    }

    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    pub fn with_log_json(mut self, enabled: bool) -> Self {
        self.log_json = enabled;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_defaults() {
        let config = LumaConfig::new();
        assert_eq!(config.api_key_var, "LUMA_API_KEY");
        assert_eq!(config.model, "photon-1");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let config = LumaConfig::new()
            .with_base_url("http://127.0.0.1:9000/v1/")
            .with_aspect_ratio("1:1");
        assert_eq!(config.base_url, "http://127.0.0.1:9000/v1");
        assert_eq!(config.aspect_ratio, "1:1");
    }

    #[test]
    fn test_config_builder() {
        let config = Config::new()
            .with_output_dir("/tmp/walls")
            .with_desktop("gnome")
            .with_log_level(LogLevel::Debug);
        assert_eq!(config.output_dir, Some(PathBuf::from("/tmp/walls")));
        assert_eq!(config.desktop.as_deref(), Some("gnome"));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(!config.log_json);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_log_output_builder() {
        let config = Config::new()
            .with_log_json(true)
            .with_log_file("/var/log/wallgen.log");
        assert!(config.log_json);
        assert_eq!(config.log_file, Some(PathBuf::from("/var/log/wallgen.log")));
    }
}
