pub mod payloads;
pub mod user;

pub use payloads::*;
pub use user::{Claims, Role};
