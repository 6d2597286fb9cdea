//! Display preferences: dark mode and interface language.
//!
//! Both are persisted through [`store::preferences`]. An unset dark-mode flag
//! follows the operating system's colour-scheme preference.

use dioxus::prelude::*;
use store::preferences::{load_dark_mode, load_language, save_dark_mode, save_language};
use store::{Language, PlatformStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preferences {
    pub dark_mode: bool,
    pub language: Language,
}

impl Preferences {
    /// Pick the French or English variant of a label.
    pub fn t<'a>(&self, fr: &'a str, en: &'a str) -> &'a str {
        self.language.pick(fr, en)
    }
}

pub type PreferencesSignal = Signal<Preferences>;

pub fn use_preferences() -> PreferencesSignal {
    use_context::<PreferencesSignal>()
}

#[component]
pub fn PreferencesProvider(default_language: Language, children: Element) -> Element {
    let prefs = use_signal(|| {
        let store = PlatformStore::default();
        Preferences {
            dark_mode: load_dark_mode(&store).unwrap_or_else(system_prefers_dark),
            language: load_language(&store, default_language),
        }
    });

    use_effect(move || apply_theme(prefs().dark_mode));

    use_context_provider(|| prefs);

    rsx! {
        {children}
    }
}

pub fn toggle_dark_mode(prefs: &mut PreferencesSignal) {
    let dark = !prefs.peek().dark_mode;
    save_dark_mode(&PlatformStore::default(), dark);
    prefs.write().dark_mode = dark;
}

pub fn toggle_language(prefs: &mut PreferencesSignal) {
    let language = prefs.peek().language.toggled();
    save_language(&PlatformStore::default(), language);
    prefs.write().language = language;
}

/// Set or clear the `dark` class on the document root.
#[cfg(target_arch = "wasm32")]
pub fn apply_theme(dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let result = if dark {
        root.class_list().add_1("dark")
    } else {
        root.class_list().remove_1("dark")
    };
    if let Err(e) = result {
        tracing::warn!("Failed to apply theme: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_theme(_dark: bool) {}

#[cfg(target_arch = "wasm32")]
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|q| q.matches())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
fn system_prefers_dark() -> bool {
    false
}
