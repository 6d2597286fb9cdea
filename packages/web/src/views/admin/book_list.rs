use dioxus::prelude::*;
use store::Book;
use ui::catalog::{filter_books, paginate, PAGE_SIZE};
use ui::icons::{FaChevronLeft, FaChevronRight, FaMagnifyingGlass, FaPen, FaPlus, FaTrash};
use ui::{notify, use_api, use_notices, use_preferences, ConfirmDialog, Icon, NoticeLevel, SpinnerPage};

use crate::Route;

/// Inventory: local search, nine books per page, edit and delete.
#[component]
pub fn BookList() -> Element {
    let api = use_api();
    let prefs = use_preferences()();
    let nav = use_navigator();
    let mut notices = use_notices();

    let mut books = use_signal(|| Option::<Vec<Book>>::None);
    let mut search = use_signal(String::new);
    let mut page = use_signal(|| 1usize);
    let mut pending_delete = use_signal(|| Option::<Book>::None);

    let load_failed = prefs.t("Impossible de charger les livres.", "Failed to load books.");
    let _ = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                match api.list_books().await {
                    Ok(list) => books.set(Some(list)),
                    Err(e) => {
                        notify(&mut notices, NoticeLevel::Error, &e.user_message(load_failed));
                        books.set(Some(Vec::new()));
                    }
                }
            }
        }
    });

    let deleted = prefs.t("Livre supprimé.", "Book deleted.");
    let delete_failed = prefs.t("Échec de la suppression.", "Failed to delete the book.");
    let confirm_delete = move |_: ()| {
        let Some(book) = pending_delete.take() else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            match api.delete_book(&book.id).await {
                Ok(()) => {
                    if let Some(list) = books.write().as_mut() {
                        list.retain(|b| b.id != book.id);
                    }
                    notify(&mut notices, NoticeLevel::Success, deleted);
                }
                Err(e) => notify(&mut notices, NoticeLevel::Error, &e.user_message(delete_failed)),
            }
        });
    };

    let Some(all) = books() else {
        return rsx! { SpinnerPage { label: prefs.t("Chargement des livres...", "Loading books...").to_string() } };
    };
    let matching = filter_books(&all, &search());
    let current = paginate(&matching, page(), PAGE_SIZE);
    let (number, total_pages) = (current.number, current.total_pages);
    let confirm_message = pending_delete
        .read()
        .as_ref()
        .map(|b| format!("{} « {} » ?", prefs.t("Supprimer", "Delete"), b.titre));

    rsx! {
        div {
            class: "list-page",
            div {
                class: "catalog-header",
                h1 { {prefs.t("Inventaire", "Inventory")} " ({matching.len()})" }
                label {
                    class: "input-with-icon search-box",
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    input {
                        r#type: "search",
                        placeholder: prefs.t("Titre, auteur, genre...", "Title, author, genre..."),
                        value: "{search}",
                        oninput: move |evt| {
                            search.set(evt.value());
                            page.set(1);
                        },
                    }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        nav.push(Route::AddBook {});
                    },
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    {prefs.t(" Ajouter", " Add")}
                }
            }

            if matching.is_empty() {
                p { class: "view-muted empty-state", {prefs.t("Aucun livre trouvé.", "No books found.")} }
            } else {
                table {
                    class: "table",
                    thead {
                        tr {
                            th { {prefs.t("Titre", "Title")} }
                            th { {prefs.t("Auteur", "Author")} }
                            th { "Genre" }
                            th { "Stock" }
                            th { {prefs.t("Prix", "Price")} }
                            th {}
                        }
                    }
                    tbody {
                        for book in current.items {
                            tr {
                                key: "{book.id}",
                                td { "{book.titre}" }
                                td { "{book.auteur}" }
                                td { {book.genre.clone().unwrap_or_default()} }
                                td { "{book.stock}" }
                                td { {book.reservation_price.map(|p| format!("{p:.2} $")).unwrap_or_default()} }
                                td {
                                    class: "row-actions",
                                    button {
                                        class: "btn btn-ghost btn-small",
                                        title: prefs.t("Modifier", "Edit"),
                                        onclick: {
                                            let id = book.id.clone();
                                            move |_| {
                                                nav.push(Route::EditBook { id: id.clone() });
                                            }
                                        },
                                        Icon { icon: FaPen, width: 12, height: 12 }
                                    }
                                    button {
                                        class: "btn btn-danger btn-small",
                                        title: prefs.t("Supprimer", "Delete"),
                                        onclick: {
                                            let book = book.clone();
                                            move |_| pending_delete.set(Some(book.clone()))
                                        },
                                        Icon { icon: FaTrash, width: 12, height: 12 }
                                    }
                                }
                            }
                        }
                    }
                }
                if total_pages > 1 {
                    div {
                        class: "pagination",
                        button {
                            class: "btn btn-ghost btn-small",
                            disabled: number <= 1,
                            onclick: move |_| page.set(number - 1),
                            Icon { icon: FaChevronLeft, width: 12, height: 12 }
                        }
                        for n in 1..=total_pages {
                            button {
                                key: "{n}",
                                class: if n == number { "btn btn-primary btn-small" } else { "btn btn-ghost btn-small" },
                                onclick: move |_| page.set(n),
                                "{n}"
                            }
                        }
                        button {
                            class: "btn btn-ghost btn-small",
                            disabled: number >= total_pages,
                            onclick: move |_| page.set(number + 1),
                            Icon { icon: FaChevronRight, width: 12, height: 12 }
                        }
                    }
                }
            }

            if let Some(message) = confirm_message {
                ConfirmDialog {
                    message,
                    on_confirm: confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}
