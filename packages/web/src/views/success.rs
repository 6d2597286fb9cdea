use std::time::Duration;

use dioxus::prelude::*;
use ui::icons::{FaCircleCheck, FaTriangleExclamation};
use ui::time::sleep;
use ui::{use_api, use_preferences, Icon, Spinner};

use crate::Route;

/// Landing page after checkout: confirms the payment session.
#[component]
pub fn Success(session_id: String) -> Element {
    let api = use_api();
    let prefs = use_preferences()();
    let nav = use_navigator();

    let confirmation = use_resource({
        let missing = prefs.t("Aucun identifiant de session dans l'URL.", "No session ID found in URL.");
        let confirmed = prefs.t("Réservation confirmée !", "Reservation confirmed successfully!");
        let failed = prefs.t("Une erreur est survenue.", "Something went wrong.");
        move || {
            let api = api.clone();
            let session_id = session_id.clone();
            async move {
                if session_id.trim().is_empty() {
                    return Err(missing.to_string());
                }
                match api.confirm_reservation(&session_id).await {
                    Ok(response) => {
                        let message = response.text().unwrap_or(confirmed).to_string();
                        spawn(async move {
                            sleep(Duration::from_secs(3)).await;
                            nav.push(Route::Reservations {});
                        });
                        Ok(message)
                    }
                    Err(e) => Err(e.user_message(failed)),
                }
            }
        }
    });

    let result = confirmation.read().clone();

    rsx! {
        div {
            class: "status-page",
            {match result {
                None => rsx! {
                    Spinner { size: 32 }
                    p { {prefs.t("Confirmation du paiement...", "Confirming your payment...")} }
                },
                Some(Ok(message)) => rsx! {
                    Icon { icon: FaCircleCheck, width: 48, height: 48 }
                    h1 { "{message}" }
                    Link { class: "btn btn-primary", to: Route::Reservations {}, {prefs.t("Mes réservations", "My reservations")} }
                },
                Some(Err(message)) => rsx! {
                    Icon { icon: FaTriangleExclamation, width: 48, height: 48 }
                    h1 { "{message}" }
                    Link { class: "btn btn-primary", to: Route::Books {}, {prefs.t("Retour au catalogue", "Back to catalog")} }
                },
            }}
        }
    }
}
