use dioxus::prelude::*;
use store::Book;

use crate::icons::{FaBookOpen, FaBookmark};
use crate::{use_api, use_preferences, Icon};

/// Catalog card. `children` render in the card footer, typically an action.
#[component]
pub fn BookCard(book: Book, #[props(default)] children: Element) -> Element {
    let api = use_api();
    let prefs = use_preferences()();

    let image = book.image_url.as_deref().map(|path| api.asset_url(path));
    let price = book
        .reservation_price
        .map(|p| format!("{p:.2} $"))
        .unwrap_or_default();

    rsx! {
        div {
            class: "book-card",
            div {
                class: "book-card-cover",
                if let Some(src) = image {
                    img { src: "{src}", alt: "{book.titre}" }
                } else {
                    div {
                        class: "book-card-placeholder",
                        Icon { icon: FaBookOpen, width: 48, height: 48 }
                    }
                }
                if book.is_available() {
                    span {
                        class: "badge badge-success",
                        {prefs.t("Disponible", "Available")}
                        " ({book.stock})"
                    }
                } else {
                    span {
                        class: "badge badge-muted",
                        {prefs.t("Indisponible", "Unavailable")}
                    }
                }
            }
            div {
                class: "book-card-body",
                h3 { class: "book-card-title", "{book.titre}" }
                p { class: "view-muted", "{book.auteur}" }
                div {
                    class: "tag-list",
                    if book.tags.is_empty() {
                        span { class: "tag tag-muted", {prefs.t("Aucun tag", "No tags")} }
                    }
                    for tag in book.tags.iter() {
                        span { key: "{tag}", class: "tag", "{tag}" }
                    }
                }
                div {
                    class: "book-card-footer",
                    if !price.is_empty() {
                        span {
                            class: "book-card-price",
                            Icon { icon: FaBookmark, width: 12, height: 12 }
                            " {price}"
                        }
                    }
                    {children}
                }
            }
        }
    }
}
