use dioxus::prelude::*;

use crate::icons::FaSpinner;
use crate::Icon;

#[component]
pub fn Spinner(#[props(default = 20)] size: u32) -> Element {
    rsx! {
        span {
            class: "spinner",
            Icon { icon: FaSpinner, width: size, height: size }
        }
    }
}

/// Full-height centered spinner with an optional caption.
#[component]
pub fn SpinnerPage(#[props(default)] label: String) -> Element {
    rsx! {
        div {
            class: "spinner-page",
            Spinner { size: 40 }
            if !label.is_empty() {
                p { class: "view-muted", "{label}" }
            }
        }
    }
}
