use store::LibraNetConfig;

const EMBEDDED: &str = include_str!("../libranet.toml");

/// Configuration baked into the build, with the API URL override applied.
pub fn load() -> LibraNetConfig {
    resolve(EMBEDDED, option_env!("LIBRANET_API_URL"))
}

fn resolve(toml: &str, api_url: Option<&str>) -> LibraNetConfig {
    let config = LibraNetConfig::from_toml(toml).unwrap_or_else(|e| {
        tracing::warn!("Ignoring invalid {}: {}", LibraNetConfig::filename(), e);
        LibraNetConfig::default()
    });
    match api_url.map(str::trim) {
        Some(url) if !url.is_empty() => config.with_base_url(url),
        _ => config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Language;

    #[test]
    fn test_embedded_file_parses() {
        let config = resolve(EMBEDDED, None);
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.ui.default_language, Language::Fr);
        assert_eq!(config.chat.suggestions.len(), 4);
    }

    #[test]
    fn test_env_override_and_fallback() {
        let config = resolve(EMBEDDED, Some("https://api.libranet.ca/"));
        assert_eq!(config.api.base_url, "https://api.libranet.ca");

        let broken = resolve("[api\nbase_url = 3", Some("  "));
        assert_eq!(broken, LibraNetConfig::default());
    }
}
