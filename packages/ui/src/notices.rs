use dioxus::prelude::*;

use crate::time::current_time;

#[derive(Clone, Debug, PartialEq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub timestamp: String,
    pub level: NoticeLevel,
    pub message: String,
}

/// Transient messages shown in the corner tray.
#[derive(Clone, Debug, Default)]
pub struct Notices {
    pub entries: Vec<Notice>,
}

impl Notices {
    pub fn push(&mut self, level: NoticeLevel, message: &str) {
        self.entries.push(Notice {
            timestamp: current_time(),
            level,
            message: message.to_string(),
        });
        // keep the tray short
        if self.entries.len() > 5 {
            self.entries.remove(0);
        }
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
    }
}

pub fn use_notices() -> Signal<Notices> {
    use_context::<Signal<Notices>>()
}

pub fn notify(notices: &mut Signal<Notices>, level: NoticeLevel, message: &str) {
    match level {
        NoticeLevel::Error => tracing::error!("{}", message),
        NoticeLevel::Warning => tracing::warn!("{}", message),
        _ => tracing::info!("{}", message),
    }
    notices.write().push(level, message);
}

#[component]
pub fn NoticeProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Notices::default()));
    rsx! {
        {children}
    }
}

#[component]
pub fn NoticeTray() -> Element {
    let mut notices = use_notices();
    let entries = notices().entries.clone();

    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "notice-tray",
            for (index, entry) in entries.into_iter().enumerate() {
                div {
                    key: "{index}-{entry.timestamp}",
                    class: match entry.level {
                        NoticeLevel::Error => "notice error",
                        NoticeLevel::Warning => "notice warning",
                        NoticeLevel::Success => "notice success",
                        NoticeLevel::Info => "notice info",
                    },
                    span { class: "notice-time", "{entry.timestamp}" }
                    span { class: "notice-message", "{entry.message}" }
                    button {
                        class: "notice-close",
                        onclick: move |_| notices.write().dismiss(index),
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tray_keeps_latest_five() {
        let mut notices = Notices::default();
        for i in 0..7 {
            notices.push(NoticeLevel::Info, &format!("n{i}"));
        }
        assert_eq!(notices.entries.len(), 5);
        assert_eq!(notices.entries[0].message, "n2");

        notices.dismiss(0);
        notices.dismiss(42);
        assert_eq!(notices.entries.len(), 4);
        assert_eq!(notices.entries[0].message, "n3");
    }
}
