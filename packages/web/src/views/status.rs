use dioxus::prelude::*;
use ui::icons::{FaCompass, FaLock};
use ui::{use_preferences, Icon};

use crate::Route;

#[component]
pub fn Unauthorized() -> Element {
    let prefs = use_preferences()();

    rsx! {
        div {
            class: "status-page",
            Icon { icon: FaLock, width: 48, height: 48 }
            h1 { {prefs.t("Accès refusé", "Access denied")} }
            p {
                class: "view-muted",
                {prefs.t(
                    "Vous n'avez pas les droits nécessaires pour consulter cette page.",
                    "You do not have permission to view this page.",
                )}
            }
            Link { class: "btn btn-primary", to: Route::Home {}, {prefs.t("Retour à l'accueil", "Back to home")} }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let prefs = use_preferences()();
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div {
            class: "status-page",
            Icon { icon: FaCompass, width: 48, height: 48 }
            h1 { "404" }
            p {
                class: "view-muted",
                {prefs.t("Page introuvable :", "Page not found:")}
                " {path}"
            }
            Link { class: "btn btn-primary", to: Route::Home {}, {prefs.t("Retour à l'accueil", "Back to home")} }
        }
    }
}
