use dioxus::prelude::*;

use crate::time::current_year;
use crate::use_preferences;

/// Site footer. `children` are the navigation links, supplied by the
/// platform crate that owns the routes.
#[component]
pub fn Footer(children: Element) -> Element {
    let prefs = use_preferences()();
    let year = current_year();

    rsx! {
        footer {
            class: "footer",
            div {
                class: "footer-columns",
                div {
                    h4 { "LibraNet" }
                    p {
                        class: "view-muted",
                        {prefs.t("L'excellence littéraire réinventée", "Literary excellence, reimagined")}
                    }
                }
                div {
                    h4 { {prefs.t("Navigation", "Navigation")} }
                    nav {
                        class: "footer-links",
                        {children}
                    }
                }
                div {
                    h4 { {prefs.t("Contact", "Contact")} }
                    p {
                        "Email : "
                        a { href: "mailto:contact@libranet.ca", "contact@libranet.ca" }
                    }
                    p {
                        {prefs.t("Téléphone", "Phone")}
                        " : "
                        a { href: "tel:+15141234567", "+1 514 123 4567" }
                    }
                }
            }
            p {
                class: "footer-rights",
                "© {year} LibraNet. "
                {prefs.t("Tous droits réservés.", "All rights reserved.")}
            }
        }
    }
}
