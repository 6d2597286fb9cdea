use std::collections::HashMap;

use api::ClassifyRequest;
use dioxus::prelude::*;
use ui::icons::FaWandMagicSparkles;
use ui::{use_api, use_preferences, BookCard, Icon, SpinnerPage};

/// Per-book state of a classification run.
#[derive(Debug, Clone, PartialEq)]
enum Run {
    Running,
    Done(Option<String>),
    Failed(String),
}

/// The classifier answers with free-form JSON; show its classification
/// field when present.
fn describe(response: &serde_json::Value) -> Option<String> {
    let value = response
        .get("classification")
        .or_else(|| response.get("result"))?;
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => Some(
            items
                .iter()
                .map(|v| v.as_str().map(String::from).unwrap_or_else(|| v.to_string()))
                .collect::<Vec<_>>()
                .join(", "),
        ),
        other => Some(other.to_string()),
    }
}

#[component]
pub fn Classify() -> Element {
    let api = use_api();
    let prefs = use_preferences()();
    let mut runs = use_signal(HashMap::<String, Run>::new);

    let books = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.list_books().await }
        }
    });

    let failed = prefs.t("La classification a échoué.", "Classification failed.");
    let classify = use_callback(move |request: ClassifyRequest| {
        let api = api.clone();
        runs.write().insert(request.book_id.clone(), Run::Running);
        spawn(async move {
            let run = match api.classify_book(&request).await {
                Ok(response) => {
                    tracing::info!("Classified {}: {}", request.book_id, response);
                    Run::Done(describe(&response))
                }
                Err(e) => Run::Failed(e.user_message(failed)),
            };
            runs.write().insert(request.book_id, run);
        });
    });

    let load_failed = prefs.t("Impossible de charger les livres.", "Failed to load books.");
    let books = match &*books.read() {
        None => return rsx! { SpinnerPage { label: prefs.t("Chargement des livres...", "Loading books...").to_string() } },
        Some(Err(e)) => {
            let message = e.user_message(load_failed);
            return rsx! { div { class: "alert alert-error", "{message}" } };
        }
        Some(Ok(books)) => books.clone(),
    };
    let states = runs();

    rsx! {
        div {
            class: "list-page",
            h1 { {prefs.t("Classification des livres", "Book classification")} }
            p { class: "view-muted", {prefs.t("Classez vos livres avec le classifieur documentaire.", "Classify your books with the document classifier.")} }
            if books.is_empty() {
                p { class: "view-muted empty-state", {prefs.t("Aucun livre à classer.", "No books available for classification.")} }
            }
            div {
                class: "book-grid",
                for book in books {
                    BookCard {
                        key: "{book.id}",
                        book: book.clone(),
                        {match states.get(&book.id) {
                            Some(Run::Done(result)) => rsx! {
                                div {
                                    class: "alert alert-success",
                                    {prefs.t("Classé !", "Classified successfully!")}
                                    if let Some(result) = result {
                                        " {result}"
                                    }
                                }
                            },
                            Some(Run::Failed(message)) => rsx! {
                                div { class: "alert alert-error", "{message}" }
                            },
                            _ => rsx! {},
                        }}
                        button {
                            class: "btn btn-primary btn-small",
                            disabled: states.get(&book.id) == Some(&Run::Running),
                            onclick: {
                                let request = ClassifyRequest {
                                    book_id: book.id.clone(),
                                    title: book.titre.clone(),
                                    description: book.description.clone().unwrap_or_default(),
                                };
                                move |_| classify.call(request.clone())
                            },
                            Icon { icon: FaWandMagicSparkles, width: 12, height: 12 }
                            if states.get(&book.id) == Some(&Run::Running) {
                                {prefs.t(" Classification...", " Classifying...")}
                            } else {
                                {prefs.t(" Classer", " Classify")}
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_describe_classifier_response() {
        assert_eq!(describe(&json!({"classification": "Roman"})), Some("Roman".into()));
        assert_eq!(
            describe(&json!({"classification": ["Roman", "Histoire"]})),
            Some("Roman, Histoire".into())
        );
        assert_eq!(describe(&json!({"result": 3})), Some("3".into()));
        assert_eq!(describe(&json!({"status": "ok"})), None);
    }
}
