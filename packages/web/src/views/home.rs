use std::time::Duration;

use dioxus::prelude::*;
use ui::time::sleep;
use ui::{use_preferences, BookCarousel, FeatureGrid};

use crate::Route;

const HERO_INTERVAL: Duration = Duration::from_secs(3);

#[component]
pub fn Home() -> Element {
    let prefs = use_preferences()();
    let mut hero_index = use_signal(|| 0usize);

    use_future(move || async move {
        loop {
            sleep(HERO_INTERVAL).await;
            let next = (*hero_index.peek() + 1) % 3;
            hero_index.set(next);
        }
    });

    let hero = [
        "LibraNet",
        prefs.t("Découvrez. Lisez. Grandissez.", "Discover. Read. Grow."),
        prefs.t("Votre bibliothèque intelligente", "Your smart library"),
    ];

    rsx! {
        section {
            class: "hero",
            p { class: "hero-tagline", {prefs.t("L'excellence littéraire réinventée", "Literary excellence, reimagined")} }
            h1 { class: "hero-title", {hero[hero_index() % hero.len()]} }
            div {
                class: "hero-actions",
                Link { class: "btn btn-primary", to: Route::Register {}, {prefs.t("Commencer", "Get started")} }
                Link { class: "btn btn-secondary", to: Route::Books {}, {prefs.t("Explorer la bibliothèque", "Explore the library")} }
            }
        }
        section {
            class: "section",
            h2 { class: "section-title", {prefs.t("Notre Distinction", "What sets us apart")} }
            FeatureGrid {}
        }
        BookCarousel { title: prefs.t("Collection Exclusive", "Exclusive Collection").to_string() }
    }
}
