//! Chat widget transcript, persisted as a JSON array under
//! [`keys::CHAT_TRANSCRIPT`](crate::keys::CHAT_TRANSCRIPT).

use serde::{Deserialize, Serialize};

use crate::keys;
use crate::kv::KeyValueStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub from: Speaker,
    pub text: String,
    #[serde(default)]
    pub timestamp: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            from: Speaker::User,
            text: text.into(),
            timestamp: timestamp.into(),
        }
    }

    pub fn bot(text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            from: Speaker::Bot,
            text: text.into(),
            timestamp: timestamp.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatTranscript {
    pub messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    /// Load the stored transcript. Missing or unreadable data is an empty one.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let Some(raw) = store.get(keys::CHAT_TRANSCRIPT) else {
            return Self::default();
        };
        match serde_json::from_str::<Vec<ChatMessage>>(&raw) {
            Ok(messages) => Self { messages },
            Err(e) => {
                tracing::warn!("Discarding unreadable chat transcript: {}", e);
                Self::default()
            }
        }
    }

    /// Persist the transcript. An empty transcript leaves storage untouched.
    pub fn save(&self, store: &impl KeyValueStore) {
        if self.messages.is_empty() {
            return;
        }
        match serde_json::to_string(&self.messages) {
            Ok(raw) => store.set(keys::CHAT_TRANSCRIPT, &raw),
            Err(e) => tracing::warn!("Could not serialise chat transcript: {}", e),
        }
    }

    /// Forget the conversation, in memory and in storage.
    pub fn clear(&mut self, store: &impl KeyValueStore) {
        self.messages.clear();
        store.remove(keys::CHAT_TRANSCRIPT);
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_load_missing_is_empty() {
        let store = MemoryStore::new();
        assert!(ChatTranscript::load(&store).is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let store = MemoryStore::new();
        let mut transcript = ChatTranscript::default();
        transcript.push(ChatMessage::user("Opening hours?", "10:00"));
        transcript.push(ChatMessage::bot("9am to 6pm.", "10:00"));
        transcript.save(&store);

        let raw = store.get(keys::CHAT_TRANSCRIPT).unwrap();
        assert!(raw.contains("\"from\":\"user\""));

        let loaded = ChatTranscript::load(&store);
        assert_eq!(loaded, transcript);
    }

    #[test]
    fn test_empty_save_keeps_previous() {
        let store = MemoryStore::new();
        let mut transcript = ChatTranscript::default();
        transcript.push(ChatMessage::user("hi", ""));
        transcript.save(&store);

        ChatTranscript::default().save(&store);
        assert_eq!(ChatTranscript::load(&store).messages.len(), 1);
    }

    #[test]
    fn test_clear_removes_key() {
        let store = MemoryStore::new();
        let mut transcript = ChatTranscript::default();
        transcript.push(ChatMessage::user("hi", ""));
        transcript.save(&store);

        transcript.clear(&store);
        assert!(transcript.is_empty());
        assert!(store.get(keys::CHAT_TRANSCRIPT).is_none());
    }

    #[test]
    fn test_corrupt_transcript_is_empty() {
        let store = MemoryStore::new();
        store.set(keys::CHAT_TRANSCRIPT, "{not json");
        assert!(ChatTranscript::load(&store).is_empty());
    }

    #[test]
    fn test_accepts_entries_without_timestamp() {
        let store = MemoryStore::new();
        store.set(keys::CHAT_TRANSCRIPT, r#"[{"from":"bot","text":"Hello"}]"#);
        let loaded = ChatTranscript::load(&store);
        assert_eq!(loaded.messages[0].from, Speaker::Bot);
        assert_eq!(loaded.messages[0].timestamp, "");
    }
}
