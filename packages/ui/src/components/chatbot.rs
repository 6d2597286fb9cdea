//! Floating library assistant.
//!
//! The transcript is kept in storage under [`store::keys::CHAT_TRANSCRIPT`]
//! and survives reloads until the visitor clears it.

use std::time::Duration;

use dioxus::prelude::*;
use store::config::ChatConfig;
use store::{ChatMessage, ChatTranscript, PlatformStore, Speaker};

use crate::icons::{FaComments, FaPaperPlane, FaRotate, FaXmark};
use crate::markdown::render_markdown;
use crate::time::{current_time, sleep};
use crate::{use_api, use_preferences, Icon};

#[component]
pub fn Chatbot(config: ChatConfig) -> Element {
    let api = use_api();
    let prefs = use_preferences()();
    let mut open = use_signal(|| false);
    let mut input = use_signal(String::new);
    let mut typing = use_signal(|| false);
    let mut transcript = use_signal(|| ChatTranscript::load(&PlatformStore::default()));

    let delay = Duration::from_millis(u64::from(config.typing_delay_millis));
    let fallback = prefs
        .t(
            "Je n'arrive pas à me connecter pour le moment. Réessayez plus tard.",
            "I'm having trouble connecting right now. Please try again later.",
        )
        .to_string();

    let ask = use_callback(move |question: String| {
        let question = question.trim().to_string();
        if question.is_empty() || typing() {
            return;
        }
        let api = api.clone();
        let fallback = fallback.clone();
        transcript.write().push(ChatMessage::user(question.clone(), current_time()));
        transcript.peek().save(&PlatformStore::default());
        input.set(String::new());
        typing.set(true);
        spawn(async move {
            sleep(delay).await;
            let answer = match api.ask_chatbot(&question).await {
                Ok(answer) => answer,
                Err(e) => {
                    tracing::warn!("Chatbot request failed: {}", e);
                    fallback
                }
            };
            transcript.write().push(ChatMessage::bot(answer, current_time()));
            transcript.peek().save(&PlatformStore::default());
            typing.set(false);
        });
    });

    if !open() {
        return rsx! {
            button {
                class: "chatbot-launcher",
                title: prefs.t("Assistant", "Assistant"),
                onclick: move |_| open.set(true),
                Icon { icon: FaComments, width: 22, height: 22 }
            }
        };
    }

    let messages = transcript().messages;

    rsx! {
        div {
            class: "chatbot-panel",
            div {
                class: "chatbot-header",
                span { {prefs.t("Assistant de la bibliothèque", "Library assistant")} }
                div {
                    button {
                        class: "icon-button",
                        title: prefs.t("Effacer", "Clear"),
                        onclick: move |_| transcript.write().clear(&PlatformStore::default()),
                        Icon { icon: FaRotate, width: 14, height: 14 }
                    }
                    button {
                        class: "icon-button",
                        onclick: move |_| open.set(false),
                        Icon { icon: FaXmark, width: 14, height: 14 }
                    }
                }
            }
            div {
                class: "chatbot-messages",
                if messages.is_empty() {
                    div {
                        class: "chatbot-suggestions",
                        p { class: "view-muted", {prefs.t("Essayez :", "Try asking:")} }
                        for suggestion in config.suggestions.iter().cloned() {
                            button {
                                key: "{suggestion}",
                                class: "chatbot-suggestion",
                                onclick: {
                                    let suggestion = suggestion.clone();
                                    move |_| ask.call(suggestion.clone())
                                },
                                "{suggestion}"
                            }
                        }
                    }
                }
                for (index, message) in messages.iter().enumerate() {
                    {match message.from {
                        Speaker::Bot => rsx! {
                            div {
                                key: "{index}",
                                class: "chat-message bot",
                                div { dangerous_inner_html: render_markdown(&message.text) }
                                span { class: "chat-time", "{message.timestamp}" }
                            }
                        },
                        Speaker::User => rsx! {
                            div {
                                key: "{index}",
                                class: "chat-message user",
                                div { "{message.text}" }
                                span { class: "chat-time", "{message.timestamp}" }
                            }
                        },
                    }}
                }
                if typing() {
                    div {
                        class: "chat-message bot typing",
                        span { class: "dot" }
                        span { class: "dot" }
                        span { class: "dot" }
                    }
                }
            }
            form {
                class: "chatbot-input",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    ask.call(input());
                },
                input {
                    r#type: "text",
                    value: "{input}",
                    placeholder: prefs.t("Posez votre question...", "Ask a question..."),
                    oninput: move |evt| input.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    disabled: typing() || input().trim().is_empty(),
                    Icon { icon: FaPaperPlane, width: 14, height: 14 }
                }
            }
        }
    }
}
