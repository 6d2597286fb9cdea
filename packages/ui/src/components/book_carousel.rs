use std::time::Duration;

use dioxus::prelude::*;
use store::Book;

use crate::catalog::carousel_window;
use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::time::sleep;
use crate::{use_api, use_preferences, BookCard, Icon};

const VISIBLE: usize = 3;
const AUTOPLAY: Duration = Duration::from_secs(5);

/// Rotating strip of catalog cards, advancing every few seconds.
#[component]
pub fn BookCarousel(title: String) -> Element {
    let api = use_api();
    let prefs = use_preferences()();
    let mut start = use_signal(|| 0usize);

    let books = use_resource(move || {
        let api = api.clone();
        async move {
            api.list_books().await.unwrap_or_else(|e| {
                tracing::warn!("Carousel could not load books: {}", e);
                Vec::<Book>::new()
            })
        }
    });

    use_future(move || async move {
        loop {
            sleep(AUTOPLAY).await;
            let len = books.peek().as_ref().map(Vec::len).unwrap_or(0);
            if len > 0 {
                let next = (*start.peek() + 1) % len;
                start.set(next);
            }
        }
    });

    let list = books.read().clone().unwrap_or_default();
    let len = list.len();

    rsx! {
        section {
            class: "carousel",
            h2 { class: "section-title", "{title}" }
            if len == 0 {
                p { class: "view-muted", {prefs.t("Chargement des livres...", "Loading books...")} }
            } else {
                div {
                    class: "carousel-track",
                    button {
                        class: "carousel-nav",
                        onclick: move |_| start.set((start() + len - 1) % len),
                        Icon { icon: FaChevronLeft, width: 16, height: 16 }
                    }
                    for i in carousel_window(len, start(), VISIBLE) {
                        BookCard { key: "{list[i].id}", book: list[i].clone() }
                    }
                    button {
                        class: "carousel-nav",
                        onclick: move |_| start.set((start() + 1) % len),
                        Icon { icon: FaChevronRight, width: 16, height: 16 }
                    }
                }
            }
        }
    }
}
