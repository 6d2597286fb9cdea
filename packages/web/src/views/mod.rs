mod shell;
pub use shell::Shell;

mod splash;
pub use splash::Splash;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod verify_email;
pub use verify_email::VerifyEmail;

mod status;
pub use status::{NotFound, Unauthorized};

mod books;
pub use books::Books;

mod reservation_form;
pub use reservation_form::ReservationForm;

mod success;
pub use success::Success;

mod reservations;
pub use reservations::Reservations;

mod user_loans;
pub use user_loans::UserLoans;

mod profile;
pub use profile::Profile;

mod clerk_loans;
pub use clerk_loans::ClerkLoans;

mod admin;
pub use admin::{AddBook, AdminIndex, AdminShell, AdminUsers, BookList, Classify, Dashboard, EditBook};

/// Leave the app for an external page, such as a payment checkout.
pub(crate) fn open_external(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                tracing::error!("Failed to open {}: {:?}", url, e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("Cannot leave the app for {} outside the browser", url);
    }
}
