//! Admin back-office, mounted under `/admin` behind the admin guard.

use dioxus::prelude::*;
use ui::icons::{FaBook, FaChartPie, FaPlus, FaTags, FaUsers};
use ui::{use_preferences, Icon};

use crate::Route;

mod book_editor;
pub use book_editor::{AddBook, EditBook};

mod book_list;
pub use book_list::BookList;

mod classify;
pub use classify::Classify;

mod dashboard;
pub use dashboard::Dashboard;

mod users;
pub use users::AdminUsers;

/// Sidebar plus the active admin page.
#[component]
pub fn AdminShell() -> Element {
    let prefs = use_preferences()();
    let current = use_route::<Route>();

    let link_class = |active: bool| if active { "admin-link admin-link-active" } else { "admin-link" };
    let on_dashboard = matches!(current, Route::AdminIndex {} | Route::Dashboard {});
    let on_books = matches!(current, Route::BookList {} | Route::EditBook { .. });

    rsx! {
        div {
            class: "admin-shell",
            aside {
                class: "admin-sidebar",
                h2 { {prefs.t("Administration", "Admin")} }
                nav {
                    Link {
                        class: link_class(on_dashboard),
                        to: Route::Dashboard {},
                        Icon { icon: FaChartPie, width: 14, height: 14 }
                        span { {prefs.t("Tableau de bord", "Dashboard")} }
                    }
                    Link {
                        class: link_class(current == Route::AdminUsers {}),
                        to: Route::AdminUsers {},
                        Icon { icon: FaUsers, width: 14, height: 14 }
                        span { {prefs.t("Utilisateurs", "Users")} }
                    }
                    Link {
                        class: link_class(current == Route::AddBook {}),
                        to: Route::AddBook {},
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        span { {prefs.t("Ajouter un livre", "Add book")} }
                    }
                    Link {
                        class: link_class(on_books),
                        to: Route::BookList {},
                        Icon { icon: FaBook, width: 14, height: 14 }
                        span { {prefs.t("Inventaire", "Inventory")} }
                    }
                    Link {
                        class: link_class(current == Route::Classify {}),
                        to: Route::Classify {},
                        Icon { icon: FaTags, width: 14, height: 14 }
                        span { {prefs.t("Classification", "Classification")} }
                    }
                }
            }
            main {
                class: "admin-content",
                Outlet::<Route> {}
            }
        }
    }
}

/// `/admin` lands on the dashboard.
#[component]
pub fn AdminIndex() -> Element {
    rsx! {
        Dashboard {}
    }
}
