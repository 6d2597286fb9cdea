use dioxus::prelude::*;
use store::models::display_date;
use ui::catalog::title_of;
use ui::icons::FaCreditCard;
use ui::{notify, use_api, use_notices, use_preferences, Icon, NoticeLevel, SpinnerPage};

use super::open_external;

#[component]
pub fn UserLoans() -> Element {
    let api = use_api();
    let prefs = use_preferences()();
    let mut notices = use_notices();
    let mut paying = use_signal(|| Option::<String>::None);

    let loans = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.my_loans().await }
        }
    });
    let books = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.list_books().await.unwrap_or_default() }
        }
    });

    let payment_failed = prefs.t("Impossible d'initier le paiement.", "Failed to initiate payment.");
    let pay_fine = use_callback(move |loan_id: String| {
        let api = api.clone();
        paying.set(Some(loan_id.clone()));
        spawn(async move {
            match api.pay_fine(&loan_id).await {
                Ok(checkout) if !checkout.checkout_url.is_empty() => open_external(&checkout.checkout_url),
                Ok(_) => paying.set(None),
                Err(e) => {
                    notify(&mut notices, NoticeLevel::Error, &e.user_message(payment_failed));
                    paying.set(None);
                }
            }
        });
    });

    let failed = prefs.t("Impossible de charger vos emprunts.", "Failed to fetch loans.");
    let list = match &*loans.read() {
        None => return rsx! { SpinnerPage { label: prefs.t("Chargement de vos emprunts...", "Loading your loans...").to_string() } },
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
            h1 { {prefs.t("Mes emprunts", "My loans")} }
            if list.is_empty() {
                p { class: "view-muted empty-state", {prefs.t("Vous n'avez aucun emprunt.", "You have no active loans.")} }
            } else {
                table {
                    class: "table",
                    thead {
                        tr {
                            th { {prefs.t("Livre", "Book")} }
                            th { {prefs.t("Emprunté le", "Borrowed")} }
                            th { {prefs.t("À rendre le", "Due")} }
                            th { {prefs.t("Rendu le", "Returned")} }
                            th { {prefs.t("Amende", "Fine")} }
                        }
                    }
                    tbody {
                        for loan in list {
                            tr {
                                key: "{loan.id}",
                                td { {title_of(&catalog, loan.book_id.as_deref()).unwrap_or(unknown)} }
                                td { {display_date(&loan.loan_date, prefs.language)} }
                                td { {display_date(&loan.due_date, prefs.language)} }
                                td {
                                    {loan.return_date.as_deref().map(|d| display_date(d, prefs.language)).unwrap_or_else(|| "-".to_string())}
                                }
                                td {
                                    if let Some(fine) = loan.outstanding_fine() {
                                        span { class: "fine", "{fine:.2} $ " }
                                        button {
                                            class: "btn btn-primary btn-small",
                                            disabled: paying().is_some(),
                                            onclick: {
                                                let id = loan.id.clone();
                                                move |_| pay_fine.call(id.clone())
                                            },
                                            Icon { icon: FaCreditCard, width: 12, height: 12 }
                                            {prefs.t(" Payer", " Pay")}
                                        }
                                    } else if loan.fine > 0.0 {
                                        span { class: "badge badge-success", {prefs.t("Payée", "Paid")} }
                                    } else {
                                        "-"
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
