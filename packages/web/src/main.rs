use dioxus::prelude::*;

use store::LibraNetConfig;
use ui::{NoticeProvider, PreferencesProvider, SessionProvider};
use views::{
    AddBook, AdminIndex, AdminUsers, BookList, Books, Classify, ClerkLoans, Dashboard, EditBook,
    Home, Login, NotFound, Profile, Register, ReservationForm, Reservations, Shell, Splash, Success,
    Unauthorized, UserLoans, VerifyEmail,
};

use guards::{AdminLayout, ClerkLayout, SignedInLayout};

mod config;
mod guards;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/login?:from")]
        Login { from: String },
        #[route("/register")]
        Register {},
        #[route("/verify-email?:token")]
        VerifyEmail { token: String },
        #[route("/unauthorized")]
        Unauthorized {},
        #[route("/books")]
        Books {},
        #[route("/books/:id")]
        ReservationForm { id: String },
        #[route("/success?:session_id")]
        Success { session_id: String },

        #[layout(SignedInLayout)]
            #[route("/reservations")]
            Reservations {},
            #[route("/user/loans")]
            UserLoans {},
            #[route("/profile")]
            Profile {},
        #[end_layout]

        #[layout(ClerkLayout)]
            #[route("/clerk/loans")]
            ClerkLoans {},
        #[end_layout]

        #[nest("/admin")]
            #[layout(AdminLayout)]
                #[route("/")]
                AdminIndex {},
                #[route("/dashboard")]
                Dashboard {},
                #[route("/users")]
                AdminUsers {},
                #[route("/add-book")]
                AddBook {},
                #[route("/edit-book/:id")]
                EditBook { id: String },
                #[route("/livres")]
                BookList {},
                #[route("/classify")]
                Classify {},
            #[end_layout]
        #[end_nest]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(config::load);
    use_context_provider(|| config.clone());

    rsx! {
        // Global app resources
        document::Stylesheet { href: MAIN_CSS }

        PreferencesProvider {
            default_language: config.ui.default_language,
            SessionProvider {
                config: config.api.clone(),
                NoticeProvider {
                    Splash { millis: config.ui.splash_millis }
                    Router::<Route> {}
                }
            }
        }
    }
}

/// Configuration loaded at start-up.
fn use_config() -> LibraNetConfig {
    use_context::<LibraNetConfig>()
}
