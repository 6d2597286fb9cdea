//! Visitor preferences kept in durable storage: colour scheme and language.

use serde::{Deserialize, Serialize};

use crate::keys;
use crate::kv::KeyValueStore;

/// Interface language. French is the house default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    En,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "fr" => Some(Language::Fr),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// The other language.
    pub fn toggled(self) -> Self {
        match self {
            Language::Fr => Language::En,
            Language::En => Language::Fr,
        }
    }

    /// Select the string written for this language.
    pub fn pick<'a>(self, fr: &'a str, en: &'a str) -> &'a str {
        match self {
            Language::Fr => fr,
            Language::En => en,
        }
    }
}

/// Stored dark-mode choice, `None` when the visitor never picked one.
pub fn load_dark_mode(store: &impl KeyValueStore) -> Option<bool> {
    match store.get(keys::DARK_MODE)?.as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

pub fn save_dark_mode(store: &impl KeyValueStore, dark: bool) {
    store.set(keys::DARK_MODE, if dark { "true" } else { "false" });
}

/// Stored language, or `fallback` when unset or unrecognised.
pub fn load_language(store: &impl KeyValueStore, fallback: Language) -> Language {
    store
        .get(keys::LANGUAGE)
        .and_then(|code| Language::from_code(&code))
        .unwrap_or(fallback)
}

pub fn save_language(store: &impl KeyValueStore, language: Language) {
    store.set(keys::LANGUAGE, language.code());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_dark_mode_unset_then_saved() {
        let store = MemoryStore::new();
        assert_eq!(load_dark_mode(&store), None);

        save_dark_mode(&store, true);
        assert_eq!(load_dark_mode(&store), Some(true));
        assert_eq!(store.get(keys::DARK_MODE).as_deref(), Some("true"));

        save_dark_mode(&store, false);
        assert_eq!(load_dark_mode(&store), Some(false));
    }

    #[test]
    fn test_dark_mode_garbage_is_unset() {
        let store = MemoryStore::new();
        store.set(keys::DARK_MODE, "yes please");
        assert_eq!(load_dark_mode(&store), None);
    }

    #[test]
    fn test_language_fallback_and_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(load_language(&store, Language::Fr), Language::Fr);
        assert_eq!(load_language(&store, Language::En), Language::En);

        save_language(&store, Language::En);
        assert_eq!(store.get(keys::LANGUAGE).as_deref(), Some("en"));
        assert_eq!(load_language(&store, Language::Fr), Language::En);

        store.set(keys::LANGUAGE, "klingon");
        assert_eq!(load_language(&store, Language::Fr), Language::Fr);
    }

    #[test]
    fn test_language_helpers() {
        assert_eq!(Language::Fr.toggled(), Language::En);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
        assert_eq!(Language::En.pick("Livres", "Books"), "Books");
        assert_eq!(Language::from_code(" FR "), Some(Language::Fr));
    }
}
