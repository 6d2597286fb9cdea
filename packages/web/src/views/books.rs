//! Public catalog with text search and tag filters.

use std::time::Duration;

use api::SearchQuery;
use dioxus::prelude::*;
use store::Book;
use ui::catalog::toggle_tag;
use ui::icons::{FaMagnifyingGlass, FaXmark};
use ui::time::sleep;
use ui::{use_api, use_preferences, BookCard, Icon, SpinnerPage};

use crate::Route;

const DEBOUNCE: Duration = Duration::from_millis(300);

#[component]
pub fn Books() -> Element {
    let api = use_api();
    let prefs = use_preferences()();
    let nav = use_navigator();

    let mut query = use_signal(String::new);
    let mut selected = use_signal(Vec::<String>::new);

    let tags = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                api.all_tags().await.unwrap_or_else(|e| {
                    tracing::warn!("Failed to fetch tags: {}", e);
                    Vec::new()
                })
            }
        }
    });

    // Restarts on every keystroke or tag change, so only the last one fires.
    let results = use_resource(move || {
        let api = api.clone();
        let search = SearchQuery {
            text: query(),
            tags: selected(),
        };
        async move {
            sleep(DEBOUNCE).await;
            api.search_books(&search).await
        }
    });

    let failed = prefs.t("La recherche a échoué. Réessayez.", "Search failed. Please try again.");
    let books: Option<Result<Vec<Book>, String>> = match &*results.read() {
        None => None,
        Some(Ok(books)) => Some(Ok(books.clone())),
        Some(Err(e)) => Some(Err(e.user_message(failed))),
    };
    let all_tags = tags.read().clone().unwrap_or_default();
    let has_filters = !query().is_empty() || !selected().is_empty();

    rsx! {
        div {
            class: "catalog",
            div {
                class: "catalog-header",
                h1 { {prefs.t("Catalogue", "Catalog")} }
                label {
                    class: "input-with-icon search-box",
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    input {
                        r#type: "search",
                        placeholder: prefs.t("Titre, auteur...", "Title, author..."),
                        value: "{query}",
                        oninput: move |evt| query.set(evt.value()),
                    }
                }
                if has_filters {
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| {
                            query.set(String::new());
                            selected.set(Vec::new());
                        },
                        Icon { icon: FaXmark, width: 12, height: 12 }
                        {prefs.t(" Effacer les filtres", " Clear filters")}
                    }
                }
            }

            if !all_tags.is_empty() {
                div {
                    class: "tag-list tag-filters",
                    for tag in all_tags {
                        button {
                            key: "{tag}",
                            class: if selected.read().contains(&tag) { "tag tag-active" } else { "tag" },
                            onclick: {
                                let tag = tag.clone();
                                move |_| toggle_tag(&mut selected.write(), &tag)
                            },
                            "{tag}"
                        }
                    }
                }
            }

            {match books {
                None => rsx! {
                    SpinnerPage { label: prefs.t("Chargement...", "Loading...").to_string() }
                },
                Some(Err(message)) => rsx! {
                    div { class: "alert alert-error", "{message}" }
                },
                Some(Ok(books)) if books.is_empty() => rsx! {
                    p { class: "view-muted empty-state", {prefs.t("Aucun livre trouvé.", "No books found.")} }
                },
                Some(Ok(books)) => rsx! {
                    div {
                        class: "book-grid",
                        for book in books {
                            BookCard {
                                key: "{book.id}",
                                book: book.clone(),
                                button {
                                    class: "btn btn-primary btn-small",
                                    disabled: !book.is_available(),
                                    onclick: {
                                        let id = book.id.clone();
                                        move |_| {
                                            nav.push(Route::ReservationForm { id: id.clone() });
                                        }
                                    },
                                    {prefs.t("Réserver", "Reserve")}
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}
