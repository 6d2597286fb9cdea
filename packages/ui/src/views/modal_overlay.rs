use dioxus::prelude::*;

use crate::use_preferences;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Yes/no confirmation in a [`ModalOverlay`].
#[component]
pub fn ConfirmDialog(
    message: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let prefs = use_preferences()();

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div {
                class: "modal-body",
                p { "{message}" }
                div {
                    class: "modal-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_cancel.call(()),
                        {prefs.t("Annuler", "Cancel")}
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_confirm.call(()),
                        {prefs.t("Confirmer", "Confirm")}
                    }
                }
            }
        }
    }
}
