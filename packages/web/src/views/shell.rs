use dioxus::prelude::*;
use ui::icons::{FaBookOpen, FaUser};
use ui::{use_preferences, use_session_state, Chatbot, DisplayToggles, Footer, Icon, Navbar, NoticeTray, SignOutButton};

use crate::{use_config, Route};

/// Footer navigation: target plus French and English labels.
fn footer_links() -> [(Route, &'static str, &'static str); 4] {
    [
        (Route::Home {}, "Accueil", "Home"),
        (Route::Books {}, "Livres", "Books"),
        (Route::Login { from: String::new() }, "Connexion", "Log in"),
        (Route::Register {}, "Inscription", "Sign up"),
    ]
}

/// Frame around every page: navbar, footer, chatbot and notices.
#[component]
pub fn Shell() -> Element {
    let config = use_config();
    let prefs = use_preferences()();

    rsx! {
        SiteNavbar {}
        main {
            class: "page",
            Outlet::<Route> {}
        }
        Footer {
            for (route, fr, en) in footer_links() {
                Link { to: route, {prefs.t(fr, en)} }
            }
        }
        Chatbot { config: config.chat.clone() }
        NoticeTray {}
    }
}

#[component]
fn SiteNavbar() -> Element {
    let session = use_session_state();
    let prefs = use_preferences()();
    let nav = use_navigator();
    let mut menu_open = use_signal(|| false);

    let name = session
        .display_name()
        .unwrap_or_else(|| prefs.t("Mon compte", "My account").to_string());

    rsx! {
        Navbar {
            Link {
                class: "brand",
                to: Route::Home {},
                Icon { icon: FaBookOpen, width: 20, height: 20 }
                span { " LibraNet" }
            }
            nav {
                class: "nav-links",
                Link { to: Route::Home {}, {prefs.t("Accueil", "Home")} }
                Link { to: Route::Books {}, {prefs.t("Livres", "Books")} }
                if session.has_role(api::Role::Clerk) {
                    Link { to: Route::ClerkLoans {}, {prefs.t("Guichet des prêts", "Loan desk")} }
                }
            }
            div {
                class: "nav-actions",
                DisplayToggles {}
                if session.signed_in {
                    div {
                        class: "user-menu",
                        button {
                            class: "user-menu-trigger",
                            onclick: move |_| menu_open.set(!menu_open()),
                            Icon { icon: FaUser, width: 14, height: 14 }
                            span { " {name}" }
                        }
                        if menu_open() {
                            div {
                                class: "user-menu-dropdown",
                                onclick: move |_| menu_open.set(false),
                                Link { to: Route::Profile {}, {prefs.t("Profil", "Profile")} }
                                Link { to: Route::Reservations {}, {prefs.t("Mes réservations", "My reservations")} }
                                Link { to: Route::UserLoans {}, {prefs.t("Mes emprunts", "My loans")} }
                                if session.is_admin() {
                                    Link { to: Route::Dashboard {}, {prefs.t("Administration", "Admin panel")} }
                                }
                                SignOutButton {
                                    label: prefs.t("Déconnexion", "Logout").to_string(),
                                    class: "menu-item".to_string(),
                                    on_signed_out: move |_| {
                                        nav.push(Route::Login { from: String::new() });
                                    },
                                }
                            }
                        }
                    }
                } else if !session.initializing {
                    Link { class: "btn btn-ghost", to: Route::Login { from: String::new() }, {prefs.t("Connexion", "Log in")} }
                    Link { class: "btn btn-primary", to: Route::Register {}, {prefs.t("Inscription", "Sign up")} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_links_resolve_to_public_pages() {
        let paths: Vec<String> = footer_links().iter().map(|(route, _, _)| route.to_string()).collect();
        assert_eq!(paths[0], "/");
        assert_eq!(paths[1], "/books");
        assert!(paths[2].starts_with("/login"));
        assert_eq!(paths[3], "/register");
        for (route, _, _) in footer_links() {
            assert_eq!(route.to_string().parse::<Route>().ok(), Some(route));
        }
    }
}
