//! Clerk loan desk: turn paid reservations into loans and take returns.

use api::{ApiClient, ApiError, CreateLoanRequest};
use dioxus::prelude::*;
use store::models::display_date;
use ui::desk::{DeskTab, LoanDesk};
use ui::icons::{FaArrowRight, FaCircleCheck, FaMagnifyingGlass, FaRotate};
use ui::{notify, use_api, use_notices, use_preferences, Icon, NoticeLevel, SpinnerPage};

async fn load_desk(api: &ApiClient) -> Result<LoanDesk, ApiError> {
    let mut desk = LoanDesk::new(api.all_reservations().await?, api.all_loans().await?);
    let (book_ids, user_ids) = desk.referenced_ids();
    for id in book_ids {
        match api.get_book(&id).await {
            Ok(book) => {
                desk.books.insert(id, book);
            }
            Err(e) => tracing::warn!("Failed to fetch book {}: {}", id, e),
        }
    }
    for id in user_ids {
        match api.user_info(&id).await {
            Ok(user) => {
                desk.users.insert(id, user);
            }
            Err(e) => tracing::warn!("Failed to fetch user {}: {}", id, e),
        }
    }
    Ok(desk)
}

#[component]
pub fn ClerkLoans() -> Element {
    let api = use_api();
    let prefs = use_preferences()();
    let mut notices = use_notices();

    let mut desk = use_signal(LoanDesk::default);
    let mut loading = use_signal(|| true);
    let mut refresh = use_signal(|| 0u32);
    let mut tab = use_signal(DeskTab::default);
    let mut search = use_signal(String::new);
    let mut processing = use_signal(|| Option::<String>::None);

    let _ = use_resource({
        let api = api.clone();
        let failed = prefs.t("Impossible de charger les données.", "Failed to load data. Please try again.");
        move || {
            let api = api.clone();
            let _ = refresh();
            async move {
                loading.set(true);
                match load_desk(&api).await {
                    Ok(loaded) => desk.set(loaded),
                    Err(e) => notify(&mut notices, NoticeLevel::Error, &e.user_message(failed)),
                }
                loading.set(false);
            }
        }
    });

    let create_loan = use_callback({
        let api = api.clone();
        let created = prefs.t("Prêt créé !", "Loan created successfully!");
        let failed = prefs.t("Échec de la création du prêt.", "Failed to create loan. Please try again.");
        move |request: CreateLoanRequest| {
            let api = api.clone();
            processing.set(Some(request.reservation_id.clone()));
            spawn(async move {
                match api.create_loan(&request).await {
                    Ok(loan) => {
                        desk.write().loan_created(&request.reservation_id, loan);
                        notify(&mut notices, NoticeLevel::Success, created);
                    }
                    Err(e) => notify(&mut notices, NoticeLevel::Error, &e.user_message(failed)),
                }
                processing.set(None);
            });
        }
    });

    let return_loan = use_callback({
        let returned = prefs.t("Livre rendu !", "Book returned successfully!");
        let fine_label = prefs.t("Amende", "Fine");
        let failed = prefs.t("Échec du retour.", "Failed to return book. Please try again.");
        move |loan_id: String| {
            let api = api.clone();
            processing.set(Some(loan_id.clone()));
            spawn(async move {
                match api.return_loan(&loan_id).await {
                    Ok(loan) => {
                        let message = if loan.fine > 0.0 {
                            format!("{returned} {fine_label} : {:.2} $", loan.fine)
                        } else {
                            returned.to_string()
                        };
                        desk.write().loan_returned(loan);
                        notify(&mut notices, NoticeLevel::Success, &message);
                    }
                    Err(e) => notify(&mut notices, NoticeLevel::Error, &e.user_message(failed)),
                }
                processing.set(None);
            });
        }
    });

    if loading() && desk.read().loans.is_empty() && desk.read().reservations.is_empty() {
        return rsx! {
            SpinnerPage { label: prefs.t("Chargement des données de la bibliothèque...", "Loading library data...").to_string() }
        };
    }

    let snapshot = desk();
    let term = search();
    let pending = snapshot.pending_reservations(&term);
    let active = snapshot.active_loans(&term);
    let returned = snapshot.returned_loans(&term);
    let unknown = prefs.t("Inconnu", "Unknown");
    let busy = processing();
    let tab_class = |t: DeskTab| if tab() == t { "tab tab-active" } else { "tab" };

    rsx! {
        div {
            class: "desk",
            div {
                class: "desk-header",
                h1 { {prefs.t("Guichet des prêts", "Loan desk")} }
                label {
                    class: "input-with-icon search-box",
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    input {
                        r#type: "search",
                        placeholder: prefs.t("Livre, lecteur, statut...", "Book, reader, status..."),
                        value: "{search}",
                        oninput: move |evt| search.set(evt.value()),
                    }
                }
                button {
                    class: "btn btn-secondary",
                    disabled: loading(),
                    onclick: move |_| refresh += 1,
                    Icon { icon: FaRotate, width: 12, height: 12 }
                    {prefs.t(" Actualiser", " Refresh")}
                }
            }

            div {
                class: "tabs",
                button {
                    class: tab_class(DeskTab::Reservations),
                    onclick: move |_| tab.set(DeskTab::Reservations),
                    {prefs.t("Réservations", "Reservations")}
                    " ({pending.len()})"
                }
                button {
                    class: tab_class(DeskTab::ActiveLoans),
                    onclick: move |_| tab.set(DeskTab::ActiveLoans),
                    {prefs.t("Prêts en cours", "Active loans")}
                    " ({active.len()})"
                }
                button {
                    class: tab_class(DeskTab::ReturnedLoans),
                    onclick: move |_| tab.set(DeskTab::ReturnedLoans),
                    {prefs.t("Prêts rendus", "Returned loans")}
                    " ({returned.len()})"
                }
            }

            table {
                class: "table",
                {match tab() {
                    DeskTab::Reservations => rsx! {
                        thead {
                            tr {
                                th { {prefs.t("Livre", "Book")} }
                                th { {prefs.t("Lecteur", "Reader")} }
                                th { {prefs.t("Période", "Period")} }
                                th {}
                            }
                        }
                        tbody {
                            for reservation in pending {
                                tr {
                                    key: "{reservation.id}",
                                    td { {snapshot.book(reservation.book_ref()).map(|b| b.titre.as_str()).unwrap_or(unknown)} }
                                    td {
                                        {snapshot.user(reservation.user_id.as_deref()).map(|u| u.full_name()).or(reservation.user_id.clone()).unwrap_or_default()}
                                    }
                                    td {
                                        {display_date(&reservation.date_debut, prefs.language)}
                                        " → "
                                        {display_date(&reservation.date_fin, prefs.language)}
                                    }
                                    td {
                                        button {
                                            class: "btn btn-primary btn-small",
                                            disabled: busy.as_deref() == Some(reservation.id.as_str()),
                                            onclick: {
                                                let request = CreateLoanRequest {
                                                    reservation_id: reservation.id.clone(),
                                                    book_id: reservation.book_ref().unwrap_or_default().to_string(),
                                                    user_id: reservation.user_id.clone().unwrap_or_default(),
                                                };
                                                move |_| create_loan.call(request.clone())
                                            },
                                            Icon { icon: FaArrowRight, width: 12, height: 12 }
                                            {prefs.t(" Créer le prêt", " Create loan")}
                                        }
                                    }
                                }
                            }
                        }
                    },
                    DeskTab::ActiveLoans | DeskTab::ReturnedLoans => {
                        let loans = if tab() == DeskTab::ActiveLoans { active } else { returned };
                        rsx! {
                            thead {
                                tr {
                                    th { {prefs.t("Livre", "Book")} }
                                    th { {prefs.t("Lecteur", "Reader")} }
                                    th { {prefs.t("À rendre le", "Due")} }
                                    th { {prefs.t("Statut", "Status")} }
                                    th { {prefs.t("Amende", "Fine")} }
                                    th {}
                                }
                            }
                            tbody {
                                for loan in loans {
                                    tr {
                                        key: "{loan.id}",
                                        td { {snapshot.book(loan.book_id.as_deref()).map(|b| b.titre.as_str()).unwrap_or(unknown)} }
                                        td {
                                            {snapshot.user(loan.user_id.as_deref()).map(|u| u.full_name()).or(loan.user_id.clone()).unwrap_or_default()}
                                        }
                                        td { {display_date(&loan.due_date, prefs.language)} }
                                        td { "{loan.status}" }
                                        td { "{loan.fine:.2} $" }
                                        td {
                                            if !loan.is_returned() {
                                                button {
                                                    class: "btn btn-primary btn-small",
                                                    disabled: busy.as_deref() == Some(loan.id.as_str()),
                                                    onclick: {
                                                        let id = loan.id.clone();
                                                        move |_| return_loan.call(id.clone())
                                                    },
                                                    Icon { icon: FaCircleCheck, width: 12, height: 12 }
                                                    {prefs.t(" Retour", " Return")}
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }}
            }
        }
    }
}
