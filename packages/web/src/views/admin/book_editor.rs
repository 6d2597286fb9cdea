//! Add and edit forms for catalog entries, sharing one editor.

use std::time::Duration;

use api::ImageUpload;
use dioxus::prelude::*;
use store::Book;
use ui::forms::BookDraft;
use ui::icons::{FaArrowLeft, FaFloppyDisk, FaImage, FaPlus, FaXmark};
use ui::time::sleep;
use ui::{notify, use_api, use_notices, use_preferences, Icon, NoticeLevel, SpinnerPage};

use crate::Route;

/// Delay before leaving the add form for the inventory.
const AFTER_CREATE: Duration = Duration::from_secs(2);

#[component]
fn TextField(
    label: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default = "text".to_string())] kind: String,
    #[props(default)] required: bool,
) -> Element {
    rsx! {
        label {
            class: "field",
            span { class: "field-label", "{label}" }
            input {
                r#type: "{kind}",
                value: "{value}",
                required,
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    }
}

#[component]
fn BookEditor(book: Option<Book>) -> Element {
    let api = use_api();
    let prefs = use_preferences()();
    let nav = use_navigator();
    let mut notices = use_notices();

    let editing_id = book.as_ref().map(|b| b.id.clone());
    let existing_image = book
        .as_ref()
        .and_then(|b| b.image_url.as_deref())
        .map(|path| api.asset_url(path));
    let mut draft = use_signal(|| book.as_ref().map(BookDraft::from_book).unwrap_or_default());
    let mut tag_input = use_signal(String::new);
    let mut image = use_signal(|| Option::<ImageUpload>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let mut add_tag = move || {
        if draft.write().add_tag(&tag_input()) {
            tag_input.set(String::new());
        }
    };

    let pick_image = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            image.set(None);
            return;
        };
        match file.read_bytes().await {
            Ok(bytes) => image.set(Some(ImageUpload {
                file_name: file.name(),
                content_type: file.content_type(),
                bytes: bytes.to_vec(),
            })),
            Err(e) => tracing::warn!("Failed to read {}: {}", file.name(), e),
        }
    };

    let created = prefs.t("Livre ajouté ! Redirection...", "Book added! Redirecting...");
    let updated = prefs.t("Livre mis à jour.", "Book updated.");
    let failed = prefs.t("Échec de l'enregistrement du livre.", "Failed to save the book.");
    let language = prefs.language;
    let save = move |evt: FormEvent| {
        evt.prevent_default();
        let form = match draft.read().validate() {
            Ok(form) => form,
            Err(e) => {
                error.set(Some(e.message(language)));
                return;
            }
        };
        error.set(None);
        saving.set(true);
        let api = api.clone();
        let editing_id = editing_id.clone();
        spawn(async move {
            let upload = image();
            let result = match &editing_id {
                Some(id) => api.edit_book(id, form, upload).await,
                None => api.create_book(form, upload).await,
            };
            match result {
                Ok(()) if editing_id.is_some() => {
                    notify(&mut notices, NoticeLevel::Success, updated);
                    nav.push(Route::BookList {});
                }
                Ok(()) => {
                    notify(&mut notices, NoticeLevel::Success, created);
                    draft.set(BookDraft::default());
                    image.set(None);
                    sleep(AFTER_CREATE).await;
                    nav.push(Route::BookList {});
                }
                Err(e) => error.set(Some(e.user_message(failed))),
            }
            saving.set(false);
        });
    };

    let current = draft();
    let title = if book.is_some() {
        prefs.t("Modifier le livre", "Edit book")
    } else {
        prefs.t("Ajouter un livre", "Add a book")
    };

    rsx! {
        div {
            class: "book-editor",
            div {
                class: "editor-header",
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| {
                        nav.push(Route::BookList {});
                    },
                    Icon { icon: FaArrowLeft, width: 12, height: 12 }
                    {prefs.t(" Retour à l'inventaire", " Back to inventory")}
                }
                h1 { {title} }
            }

            if let Some(message) = error() {
                div { class: "alert alert-error", "{message}" }
            }

            form {
                class: "card form-grid",
                onsubmit: save,
                TextField {
                    label: prefs.t("Titre", "Title").to_string(),
                    value: current.titre.clone(),
                    required: true,
                    oninput: move |v| draft.write().titre = v,
                }
                TextField {
                    label: prefs.t("Auteur", "Author").to_string(),
                    value: current.auteur.clone(),
                    required: true,
                    oninput: move |v| draft.write().auteur = v,
                }
                label {
                    class: "field field-wide",
                    span { class: "field-label", "Description" }
                    textarea {
                        rows: 4,
                        value: "{current.description}",
                        oninput: move |evt| draft.write().description = evt.value(),
                    }
                }
                TextField {
                    label: prefs.t("Prix d'achat", "Purchase price").to_string(),
                    value: current.purchase_price.clone(),
                    kind: "number".to_string(),
                    oninput: move |v| draft.write().purchase_price = v,
                }
                TextField {
                    label: prefs.t("Prix de réservation", "Reservation price").to_string(),
                    value: current.reservation_price.clone(),
                    kind: "number".to_string(),
                    oninput: move |v| draft.write().reservation_price = v,
                }
                TextField {
                    label: "Stock".to_string(),
                    value: current.stock.clone(),
                    kind: "number".to_string(),
                    oninput: move |v| draft.write().stock = v,
                }
                TextField {
                    label: "Classification".to_string(),
                    value: current.classification.clone(),
                    oninput: move |v| draft.write().classification = v,
                }

                div {
                    class: "field field-wide",
                    span { class: "field-label", "Tags" }
                    div {
                        class: "tag-list",
                        for tag in current.tags.clone() {
                            span {
                                key: "{tag}",
                                class: "tag tag-active",
                                "{tag} "
                                button {
                                    r#type: "button",
                                    class: "tag-remove",
                                    onclick: {
                                        let tag = tag.clone();
                                        move |_| draft.write().remove_tag(&tag)
                                    },
                                    Icon { icon: FaXmark, width: 10, height: 10 }
                                }
                            }
                        }
                    }
                    div {
                        class: "inline-input",
                        input {
                            r#type: "text",
                            placeholder: prefs.t("Nouveau tag", "New tag"),
                            value: "{tag_input}",
                            oninput: move |evt| tag_input.set(evt.value()),
                            onkeydown: move |evt| {
                                if evt.key() == Key::Enter {
                                    evt.prevent_default();
                                    add_tag();
                                }
                            },
                        }
                        button {
                            r#type: "button",
                            class: "btn btn-secondary btn-small",
                            onclick: move |_| add_tag(),
                            Icon { icon: FaPlus, width: 10, height: 10 }
                        }
                    }
                }

                div {
                    class: "field field-wide",
                    span { class: "field-label", "Image" }
                    if let Some(src) = existing_image.filter(|_| image.read().is_none()) {
                        img { class: "cover-preview", src: "{src}", alt: "{current.titre}" }
                    }
                    label {
                        class: "file-picker",
                        Icon { icon: FaImage, width: 14, height: 14 }
                        span {
                            {image.read().as_ref().map(|i| i.file_name.clone()).unwrap_or_else(|| prefs.t("Choisir une image", "Choose an image").to_string())}
                        }
                        input {
                            r#type: "file",
                            accept: "image/*",
                            onchange: pick_image,
                        }
                    }
                }

                div {
                    class: "form-actions field-wide",
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: saving(),
                        Icon { icon: FaFloppyDisk, width: 12, height: 12 }
                        if saving() {
                            {prefs.t(" Enregistrement...", " Saving...")}
                        } else {
                            {prefs.t(" Enregistrer", " Save")}
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AddBook() -> Element {
    rsx! {
        BookEditor { book: None }
    }
}

#[component]
pub fn EditBook(id: String) -> Element {
    let api = use_api();
    let prefs = use_preferences()();

    let book = use_resource(move || {
        let api = api.clone();
        let id = id.clone();
        async move { api.get_book(&id).await }
    });

    let failed = prefs.t("Livre introuvable.", "Book not found.");
    let view = match &*book.read() {
        None => rsx! { SpinnerPage { label: prefs.t("Chargement du livre...", "Loading book...").to_string() } },
        Some(Err(e)) => {
            let message = e.user_message(failed);
            rsx! { div { class: "alert alert-error", "{message}" } }
        }
        Some(Ok(book)) => rsx! {
            BookEditor { key: "{book.id}", book: Some(book.clone()) }
        },
    };
    view
}
