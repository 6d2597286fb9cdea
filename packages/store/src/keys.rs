//! Fixed names of the durable slots the client writes.

/// Bearer credential of the signed-in user.
pub const CREDENTIAL: &str = "token";

/// `"true"` / `"false"`; absent means "follow the OS colour scheme".
pub const DARK_MODE: &str = "darkMode";

/// Two-letter language code.
pub const LANGUAGE: &str = "lang";

/// JSON array of chat messages.
pub const CHAT_TRANSCRIPT: &str = "libraryChatHistory";
