//! Session, guards and shared UI for the LibraNet client.
//!
//! The session and guard modules are plain Rust and unit tested without a
//! renderer; everything else is Dioxus components and the pure helpers they
//! display.

pub mod components;
pub use components::{BookCard, BookCarousel, Chatbot, FeatureCard, FeatureGrid, Footer, Spinner, SpinnerPage};

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;
pub use views::{ConfirmDialog, DisplayToggles, ModalOverlay};

pub mod session;
pub use session::{Bootstrap, InitOutcome, Session, SessionBackend, SessionStore};

pub mod guard;
pub use guard::{enforce, Access, AdminGuard, AuthenticatedGuard, Guard, Redirect, Redirector, RoleGuard};

mod auth;
pub use auth::{use_api, use_session, use_session_state, AppSession, SessionCredentials, SessionProvider, SignOutButton};

pub mod preferences;
pub use preferences::{apply_theme, use_preferences, Preferences, PreferencesProvider, PreferencesSignal};

pub mod notices;
pub use notices::{notify, use_notices, NoticeLevel, NoticeProvider, NoticeTray, Notices};

mod navbar;
pub use navbar::Navbar;

pub mod analytics;
pub mod catalog;
pub mod desk;
pub mod forms;
pub mod markdown;
pub mod time;
