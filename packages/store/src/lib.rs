pub mod chat;
pub mod config;
pub mod keys;
pub mod models;
pub mod preferences;

mod kv;
pub use kv::KeyValueStore;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

/// Storage backing the running client: `localStorage` in the browser build,
/// an in-memory map everywhere else.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = MemoryStore;

pub use chat::{ChatMessage, ChatTranscript, Speaker};
pub use config::LibraNetConfig;
pub use models::{Book, LibraryUser, Loan, Reservation};
pub use preferences::Language;
