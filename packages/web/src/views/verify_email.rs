use std::time::Duration;

use dioxus::prelude::*;
use ui::icons::{FaCircleCheck, FaTriangleExclamation};
use ui::time::sleep;
use ui::{use_api, use_preferences, Icon, Spinner};

use crate::Route;

#[derive(Clone, PartialEq)]
enum Verification {
    Pending,
    Verified(String),
    Failed(String),
}

#[component]
pub fn VerifyEmail(token: String) -> Element {
    let api = use_api();
    let prefs = use_preferences()();
    let nav = use_navigator();
    let mut status = use_signal(|| Verification::Pending);

    let missing = prefs.t("Jeton de vérification manquant.", "Verification token missing.").to_string();
    let verified = prefs.t("Adresse e-mail vérifiée !", "Email verified successfully!").to_string();
    let failed = prefs.t("La vérification a échoué.", "Verification failed.").to_string();

    let _ = use_resource(move || {
        let api = api.clone();
        let token = token.clone();
        let (missing, verified, failed) = (missing.clone(), verified.clone(), failed.clone());
        async move {
            if token.trim().is_empty() {
                status.set(Verification::Failed(missing));
                return;
            }
            match api.verify_email(&token).await {
                Ok(response) => {
                    status.set(Verification::Verified(response.text().map(String::from).unwrap_or(verified)));
                    sleep(Duration::from_secs(2)).await;
                    nav.push(Route::Login { from: String::new() });
                }
                Err(e) => status.set(Verification::Failed(e.user_message(&failed))),
            }
        }
    });

    rsx! {
        div {
            class: "status-page",
            {match status() {
                Verification::Pending => rsx! {
                    Spinner { size: 32 }
                    p { {prefs.t("Vérification en cours...", "Verifying your email...")} }
                },
                Verification::Verified(message) => rsx! {
                    Icon { icon: FaCircleCheck, width: 48, height: 48 }
                    h1 { "{message}" }
                    p { class: "view-muted", {prefs.t("Redirection vers la connexion...", "Redirecting to login...")} }
                },
                Verification::Failed(message) => rsx! {
                    Icon { icon: FaTriangleExclamation, width: 48, height: 48 }
                    h1 { "{message}" }
                    Link { class: "btn btn-primary", to: Route::Register {}, {prefs.t("Retour à l'inscription", "Back to sign up")} }
                },
            }}
        }
    }
}
