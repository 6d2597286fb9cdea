use dioxus::prelude::*;
use store::models::display_date;
use ui::catalog::title_of;
use ui::{use_api, use_preferences, SpinnerPage};

use crate::Route;

#[component]
pub fn Reservations() -> Element {
    let api = use_api();
    let prefs = use_preferences()();

    let reservations = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.my_reservations().await }
        }
    });
    let books = use_resource(move || {
        let api = api.clone();
        async move { api.list_books().await.unwrap_or_default() }
    });

    let failed = prefs.t(
        "Impossible de charger vos réservations. Réessayez.",
        "Failed to fetch reservations. Please try again.",
    );
    let list = match &*reservations.read() {
        None => return rsx! { SpinnerPage { label: prefs.t("Chargement de vos réservations...", "Loading your reservations...").to_string() } },
        Some(Err(e)) => {
            let message = e.user_message(failed);
            return rsx! { div { class: "alert alert-error", "{message}" } };
        }
        Some(Ok(list)) => list.clone(),
    };
    let catalog = books.read().clone().unwrap_or_default();
    let unknown = prefs.t("Livre inconnu", "Unknown book");

    rsx! {
        div {
            class: "list-page",
            h1 { {prefs.t("Mes réservations", "My reservations")} }
            if list.is_empty() {
                div {
                    class: "empty-state",
                    p { {prefs.t("Vous n'avez encore aucune réservation.", "You have no reservations yet.")} }
                    Link { class: "btn btn-primary", to: Route::Books {}, {prefs.t("Parcourir le catalogue", "Browse the catalog")} }
                }
            } else {
                table {
                    class: "table",
                    thead {
                        tr {
                            th { {prefs.t("Livre", "Book")} }
                            th { {prefs.t("Début", "Start")} }
                            th { {prefs.t("Fin", "End")} }
                            th { {prefs.t("Statut", "Status")} }
                        }
                    }
                    tbody {
                        for reservation in list {
                            tr {
                                key: "{reservation.id}",
                                td { {title_of(&catalog, reservation.book_ref()).unwrap_or(unknown)} }
                                td { {display_date(&reservation.date_debut, prefs.language)} }
                                td { {display_date(&reservation.date_fin, prefs.language)} }
                                td {
                                    span {
                                        class: if reservation.is_paid() { "badge badge-success" } else { "badge badge-muted" },
                                        "{reservation.status}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
