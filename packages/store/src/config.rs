//! # Client configuration: `libranet.toml`
//!
//! Defines the TOML file the web build embeds at compile time
//! (filename: [`LibraNetConfig::filename`] = `"libranet.toml"`). It tells the
//! client where the LibraNet API lives and tunes a few UI timings.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"
//!
//! [ui]
//! default_language = "fr"
//! splash_millis = 2500
//!
//! [chat]
//! typing_delay_millis = 1000
//! suggestions = ["What books do you recommend?"]
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`LibraNetConfig`] | Top-level config. Builder helpers (`with_base_url`), TOML (de)serialisation, filename constant. |
//! | [`ApiConfig`] | API section: backend base URL, no trailing slash. |
//! | [`UiConfig`] | UI section: default language and splash duration. |
//! | [`ChatConfig`] | Chat widget section: starter suggestions and simulated typing delay. |
//!
//! Every section derives `Default` so a missing or empty file is the
//! default configuration.

use serde::{Deserialize, Serialize};

use crate::preferences::Language;

/// Top-level configuration stored in `libranet.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LibraNetConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Presentation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Language used until the visitor picks one.
    #[serde(default)]
    pub default_language: Language,
    /// How long the splash screen stays up at start.
    #[serde(default = "default_splash_millis")]
    pub splash_millis: u32,
}

fn default_splash_millis() -> u32 {
    2500
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            splash_millis: default_splash_millis(),
        }
    }
}

/// Chat widget settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_suggestions")]
    pub suggestions: Vec<String>,
    /// Delay before the question is sent, while the typing indicator shows.
    #[serde(default = "default_typing_delay")]
    pub typing_delay_millis: u32,
}

fn default_suggestions() -> Vec<String> {
    [
        "What books do you recommend?",
        "How do I renew a book?",
        "What are the library hours?",
        "Where can I find research papers?",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_typing_delay() -> u32 {
    1000
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            suggestions: default_suggestions(),
            typing_delay_millis: default_typing_delay(),
        }
    }
}

impl LibraNetConfig {
    /// Builder method to point the client at another backend.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.api.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "libranet.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(s)?;
        config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = LibraNetConfig::from_toml("").unwrap();
        assert_eq!(config, LibraNetConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.ui.default_language, Language::Fr);
        assert_eq!(config.ui.splash_millis, 2500);
        assert_eq!(config.chat.suggestions.len(), 4);
    }

    #[test]
    fn test_partial_sections() {
        let config = LibraNetConfig::from_toml(
            r#"
            [api]
            base_url = "https://api.libranet.example/"

            [ui]
            default_language = "en"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://api.libranet.example");
        assert_eq!(config.ui.default_language, Language::En);
        assert_eq!(config.ui.splash_millis, 2500);
        assert_eq!(config.chat.typing_delay_millis, 1000);
    }

    #[test]
    fn test_rejects_unknown_language() {
        let result = LibraNetConfig::from_toml("[ui]\ndefault_language = \"de\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_with_base_url_trims_slash() {
        let config = LibraNetConfig::default().with_base_url("http://10.0.0.2:8000/");
        assert_eq!(config.api.base_url, "http://10.0.0.2:8000");
    }

    #[test]
    fn test_toml_roundtrip_keeps_suggestions() {
        let mut config = LibraNetConfig::default();
        config.chat.suggestions = vec!["Opening hours?".to_string()];
        let parsed = LibraNetConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed.chat.suggestions, vec!["Opening hours?".to_string()]);
    }
}
