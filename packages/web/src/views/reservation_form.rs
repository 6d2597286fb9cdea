use dioxus::prelude::*;
use ui::forms::reservation_request;
use ui::icons::{FaArrowLeft, FaCalendarDays, FaCreditCard};
use ui::time::today;
use ui::{use_api, use_preferences, use_session_state, Icon, SpinnerPage};

use super::open_external;
use crate::Route;

#[component]
pub fn ReservationForm(id: String) -> Element {
    let api = use_api();
    let session = use_session_state();
    let prefs = use_preferences()();
    let nav = use_navigator();

    let mut start = use_signal(today);
    let mut end = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let book = use_resource({
        let api = api.clone();
        let id = id.clone();
        move || {
            let api = api.clone();
            let id = id.clone();
            async move { api.get_book(&id).await }
        }
    });

    let failed = prefs
        .t("La réservation a échoué. Veuillez réessayer.", "Reservation failed. Please try again.")
        .to_string();

    let handle_submit = {
        let api = api.clone();
        let id = id.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let Some(user_id) = session.user_id().filter(|_| session.signed_in) else {
                nav.push(Route::Login {
                    from: Route::ReservationForm { id: id.clone() }.to_string(),
                });
                return;
            };
            let request = match reservation_request(&user_id, &id, &start(), &end()) {
                Ok(request) => request,
                Err(e) => {
                    error.set(Some(e.message(prefs.language)));
                    return;
                }
            };
            let api = api.clone();
            let failed = failed.clone();
            spawn(async move {
                submitting.set(true);
                error.set(None);
                match api.create_reservation(&request).await {
                    Ok(checkout) => open_external(&checkout.checkout_url),
                    Err(e) => {
                        error.set(Some(e.user_message(&failed)));
                        submitting.set(false);
                    }
                }
            });
        }
    };

    let loaded = match &*book.read() {
        None => None,
        Some(Ok(book)) => Some(Ok(book.clone())),
        Some(Err(e)) => Some(Err(e.user_message(prefs.t(
            "Impossible de charger ce livre",
            "Failed to load book details",
        )))),
    };

    let book = match loaded {
        None => {
            return rsx! {
                SpinnerPage {}
            }
        }
        Some(Err(message)) => {
            return rsx! {
                div {
                    class: "status-page",
                    div { class: "alert alert-error", "{message}" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| nav.go_back(),
                        {prefs.t("Retour", "Go back")}
                    }
                }
            }
        }
        Some(Ok(book)) => book,
    };

    let cover = book.image_url.as_deref().map(|p| api.asset_url(p));
    let price = book.reservation_price.unwrap_or(0.0);

    rsx! {
        div {
            class: "reservation",
            button {
                class: "btn btn-ghost",
                onclick: move |_| nav.go_back(),
                Icon { icon: FaArrowLeft, width: 12, height: 12 }
                {prefs.t(" Retour", " Back")}
            }
            div {
                class: "reservation-layout",
                div {
                    class: "reservation-book",
                    if let Some(src) = cover {
                        img { src: "{src}", alt: "{book.titre}" }
                    }
                    h1 { "{book.titre}" }
                    p { class: "view-muted", "{book.auteur}" }
                    if let Some(description) = book.description.as_deref() {
                        p { "{description}" }
                    }
                    p {
                        class: "reservation-price",
                        {prefs.t("Prix de réservation : ", "Reservation price: ")}
                        "{price:.2} $"
                    }
                }
                form {
                    class: "reservation-form card",
                    onsubmit: handle_submit,
                    h2 {
                        Icon { icon: FaCalendarDays, width: 16, height: 16 }
                        {prefs.t(" Période de réservation", " Reservation period")}
                    }
                    if let Some(message) = error() {
                        div { class: "alert alert-error", "{message}" }
                    }
                    label {
                        span { {prefs.t("Date de début", "Start date")} }
                        input {
                            r#type: "date",
                            required: true,
                            min: today(),
                            value: "{start}",
                            oninput: move |evt| start.set(evt.value()),
                        }
                    }
                    label {
                        span { {prefs.t("Date de fin", "End date")} }
                        input {
                            r#type: "date",
                            required: true,
                            min: "{start}",
                            value: "{end}",
                            oninput: move |evt| end.set(evt.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary btn-block",
                        disabled: submitting() || !book.is_available(),
                        Icon { icon: FaCreditCard, width: 14, height: 14 }
                        if submitting() {
                            {prefs.t(" Redirection...", " Redirecting...")}
                        } else {
                            {prefs.t(" Réserver et payer", " Reserve and pay")}
                        }
                    }
                }
            }
        }
    }
}
