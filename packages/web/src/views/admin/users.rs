use dioxus::prelude::*;
use ui::{use_api, use_preferences, SpinnerPage};

#[component]
pub fn AdminUsers() -> Element {
    let api = use_api();
    let prefs = use_preferences()();

    let users = use_resource(move || {
        let api = api.clone();
        async move { api.list_users().await }
    });

    let failed = prefs.t("Impossible de charger les utilisateurs.", "Failed to load users.");
    let users = match &*users.read() {
        None => return rsx! { SpinnerPage { label: prefs.t("Chargement des utilisateurs...", "Loading users...").to_string() } },
        Some(Err(e)) => {
            let message = e.user_message(failed);
            return rsx! { div { class: "alert alert-error", "{message}" } };
        }
        Some(Ok(users)) => users.clone(),
    };

    rsx! {
        div {
            class: "list-page",
            h1 { {prefs.t("Utilisateurs", "Users")} " ({users.len()})" }
            if users.is_empty() {
                p { class: "view-muted empty-state", {prefs.t("Aucun utilisateur.", "No users.")} }
            } else {
                table {
                    class: "table",
                    thead {
                        tr {
                            th { {prefs.t("Nom", "Name")} }
                            th { "Email" }
                            th { {prefs.t("Rôle", "Role")} }
                            th { "ID" }
                        }
                    }
                    tbody {
                        for user in users {
                            tr {
                                key: "{user.id}",
                                td { {user.full_name()} }
                                td { "{user.email}" }
                                td { span { class: "badge", "{user.role}" } }
                                td { class: "view-muted mono", "{user.id}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
