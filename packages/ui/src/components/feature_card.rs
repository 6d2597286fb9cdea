use dioxus::prelude::*;

use crate::icons::{FaBookOpen, FaCalendarDays, FaRobot};
use crate::{use_preferences, Icon};

#[component]
pub fn FeatureCard(title: String, description: String, children: Element) -> Element {
    rsx! {
        div {
            class: "feature-card",
            div { class: "feature-card-icon", {children} }
            h3 { "{title}" }
            p { class: "view-muted", "{description}" }
        }
    }
}

/// The three services shown on the home page.
#[component]
pub fn FeatureGrid() -> Element {
    let prefs = use_preferences()();

    rsx! {
        div {
            class: "feature-grid",
            FeatureCard {
                title: prefs.t("Chatbot intelligent", "Smart chatbot").to_string(),
                description: prefs.t(
                    "Posez vos questions sur la bibliothèque et obtenez une réponse immédiate.",
                    "Ask anything about the library and get an instant answer.",
                ).to_string(),
                Icon { icon: FaRobot, width: 28, height: 28 }
            }
            FeatureCard {
                title: prefs.t("Réservation de documents", "Document reservation").to_string(),
                description: prefs.t(
                    "Réservez vos livres préférés en quelques clics, où que vous soyez.",
                    "Reserve your favourite books in a few clicks, wherever you are.",
                ).to_string(),
                Icon { icon: FaCalendarDays, width: 28, height: 28 }
            }
            FeatureCard {
                title: prefs.t("Emprunt et consultation", "Borrowing and reading").to_string(),
                description: prefs.t(
                    "Empruntez et consultez facilement livres et documents.",
                    "Borrow and browse books and documents with ease.",
                ).to_string(),
                Icon { icon: FaBookOpen, width: 28, height: 28 }
            }
        }
    }
}
