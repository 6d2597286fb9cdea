//! # API crate: typed client for the LibraNet REST backend
//!
//! Everything the browser client knows about the backend lives here. The
//! backend owns all business rules (pricing, reservation and loan state, fines,
//! payment confirmation, classification); this crate only shapes requests and
//! reads answers.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Bearer [`Credential`]s, local claim decoding, and the [`CredentialSource`] the client consults per request |
//! | [`client`] | [`ApiClient`]: base URL, credential injection, status and body handling |
//! | [`error`] | [`ApiError`] (transport / status / decode) and [`AuthError`] |
//! | [`models`] | [`Claims`] and [`Role`] of the signed-in user, request and response bodies |
//!
//! ## Routes
//!
//! `ApiClient` exposes one `async fn` per route:
//!
//! - **Authentication**: `who_am_i`, `login`, `signup`, `verify_email`
//! - **Catalog**: `list_books`, `get_book`, `search_books`, `all_tags`, `create_book`, `edit_book`, `delete_book`
//! - **Circulation**: `create_reservation`, `my_reservations`, `all_reservations`, `confirm_reservation`,
//!   `my_loans`, `all_loans`, `create_loan`, `return_loan`, `pay_fine`
//! - **Accounts**: `list_users`, `user_info`, `change_password`, `update_profile`
//! - **Assistant**: `ask_chatbot`, `classify_book`
//!
//! There is no retry, caching or background work: a failed call is reported to
//! the caller as it happened.

pub mod auth;
pub mod client;
pub mod error;
pub mod models;
mod routes;

pub use auth::{Credential, CredentialSource, NoCredentials};
pub use client::ApiClient;
pub use error::{ApiError, AuthError};
pub use models::{
    BookForm, CheckoutResponse, Claims, ClassifyRequest, CreateLoanRequest, ImageUpload,
    MessageResponse, PasswordChange, ProfileUpdate, ReservationRequest, Role, SearchQuery,
    SignupRequest,
};

pub use store::config::ApiConfig;
pub use store::{Book, LibraryUser, Loan, Reservation};
