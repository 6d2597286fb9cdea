use dioxus::prelude::*;

/// Sticky top bar. Platform crates fill in the links and menus.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        header {
            class: "navbar",
            div {
                class: "navbar-inner",
                {children}
            }
        }
    }
}
