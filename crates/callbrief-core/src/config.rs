use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::text::MAX_TRANSCRIPT_CHARS;

const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";
const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Runtime configuration, constructed once at startup and treated as
/// immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Chat-completion API base URL.
    pub api_base: String,
    /// Model identifier sent with every completion request.
    pub model: String,
    /// Sampling temperature. Low by default; summaries should be extractive.
    pub temperature: f32,
    /// Max output tokens per completion.
    pub max_tokens: u32,
    /// Transcript character cap before prompt interpolation.
    pub max_transcript_chars: usize,
    /// Address the web server binds to.
    pub bind_addr: SocketAddr,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.1,
            max_tokens: 1500,
            max_transcript_chars: MAX_TRANSCRIPT_CHARS,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
        }
    }
}

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub api_base: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub bind_addr: Option<SocketAddr>,
}

/// Load a config file from a specific path. Returns `None` if the file
/// doesn't exist or can't be parsed.
pub fn load_from_path(path: &Path) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

impl AnalyzerConfig {
    /// Defaults overlaid with CWD `.callbrief.toml`, when present.
    pub fn load() -> Self {
        let overlay = load_from_path(Path::new(".callbrief.toml")).unwrap_or_default();
        Self::default().with_overlay(overlay)
    }

    /// Apply an overlay: set fields take precedence over the base config.
    pub fn with_overlay(mut self, overlay: ConfigFile) -> Self {
        if let Some(api_base) = overlay.api_base {
            self.api_base = api_base;
        }
        if let Some(model) = overlay.model {
            self.model = model;
        }
        if let Some(temperature) = overlay.temperature {
            self.temperature = temperature;
        }
        if let Some(max_tokens) = overlay.max_tokens {
            self.max_tokens = max_tokens;
        }
        if let Some(bind_addr) = overlay.bind_addr {
            self.bind_addr = bind_addr;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.model, "llama-3.1-8b-instant");
        assert_eq!(config.max_tokens, 1500);
        assert_eq!(config.max_transcript_chars, 15_000);
        assert!((config.temperature - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn test_overlay_overrides_set_fields_only() {
        let overlay: ConfigFile =
            toml::from_str("model = \"llama-3.3-70b-versatile\"\nmax_tokens = 2000").unwrap();
        let config = AnalyzerConfig::default().with_overlay(overlay);
        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert_eq!(config.max_tokens, 2000);
        // Untouched fields keep defaults
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_empty_overlay_keeps_defaults() {
        let config = AnalyzerConfig::default().with_overlay(ConfigFile::default());
        assert_eq!(config.model, AnalyzerConfig::default().model);
    }
}
