use std::time::Duration;

use dioxus::prelude::*;
use ui::icons::FaBookOpen;
use ui::time::sleep;
use ui::{use_preferences, Icon, Spinner};

/// Start-up overlay, dismissed after `millis`.
#[component]
pub fn Splash(millis: u32) -> Element {
    let prefs = use_preferences()();
    let mut visible = use_signal(|| millis > 0);

    use_future(move || async move {
        sleep(Duration::from_millis(u64::from(millis))).await;
        visible.set(false);
    });

    if !visible() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "splash",
            Icon { icon: FaBookOpen, width: 64, height: 64 }
            h1 { "LibraNet" }
            p { {prefs.t("Votre bibliothèque intelligente", "Your smart library")} }
            Spinner { size: 28 }
        }
    }
}
