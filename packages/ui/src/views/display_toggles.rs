use dioxus::prelude::*;

use crate::icons::{FaLanguage, FaMoon, FaSun};
use crate::preferences::{toggle_dark_mode, toggle_language};
use crate::{use_preferences, Icon};

/// Dark-mode and language switches for the navbar.
#[component]
pub fn DisplayToggles() -> Element {
    let mut prefs = use_preferences();
    let current = prefs();
    let next_language = current.language.toggled().code().to_uppercase();

    rsx! {
        div {
            class: "display-toggles",
            button {
                class: "icon-button",
                title: current.t("Changer de thème", "Toggle theme"),
                onclick: move |_| toggle_dark_mode(&mut prefs),
                if current.dark_mode {
                    Icon { icon: FaSun, width: 16, height: 16 }
                } else {
                    Icon { icon: FaMoon, width: 16, height: 16 }
                }
            }
            button {
                class: "icon-button",
                title: current.t("Switch to English", "Passer en français"),
                onclick: move |_| toggle_language(&mut prefs),
                Icon { icon: FaLanguage, width: 16, height: 16 }
                span { " {next_language}" }
            }
        }
    }
}
