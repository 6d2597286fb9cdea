use dioxus::prelude::*;
use ui::analytics::DashboardStats;
use ui::icons::{FaBook, FaBookmark, FaCircleCheck, FaRotate, FaUsers};
use ui::{use_api, use_preferences, Icon, SpinnerPage};

/// Proportional bar list for one breakdown.
#[component]
fn Breakdown(title: String, entries: Vec<(String, usize)>, empty: String) -> Element {
    let max = entries.iter().map(|(_, n)| *n).max().unwrap_or(1).max(1);
    rsx! {
        section {
            class: "card breakdown",
            h3 { "{title}" }
            if entries.is_empty() {
                p { class: "view-muted", "{empty}" }
            }
            ul {
                for (label, count) in entries {
                    li {
                        key: "{label}",
                        span { class: "breakdown-label", "{label}" }
                        span {
                            class: "breakdown-bar",
                            style: format!("width: {}%", count * 100 / max),
                        }
                        span { class: "breakdown-count", "{count}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    let api = use_api();
    let prefs = use_preferences()();
    let mut generation = use_signal(|| 0u32);

    let stats = use_resource(move || {
        let api = api.clone();
        let _ = generation();
        async move {
            let books = api.list_books().await?;
            let users = api.list_users().await?;
            Ok::<_, api::ApiError>(DashboardStats::compute(&books, &users))
        }
    });

    let failed = prefs.t("Impossible de charger les statistiques.", "Failed to load statistics.");
    let stats = match &*stats.read() {
        None => return rsx! { SpinnerPage { label: prefs.t("Chargement des statistiques...", "Loading statistics...").to_string() } },
        Some(Err(e)) => {
            let message = e.user_message(failed);
            return rsx! {
                div { class: "alert alert-error", "{message}" }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| generation += 1,
                    {prefs.t("Réessayer", "Retry")}
                }
            };
        }
        Some(Ok(stats)) => stats.clone(),
    };
    let none = prefs.t("Aucune donnée.", "No data.").to_string();

    rsx! {
        div {
            class: "dashboard",
            div {
                class: "dashboard-header",
                h1 { {prefs.t("Tableau de bord", "Dashboard")} }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| generation += 1,
                    Icon { icon: FaRotate, width: 12, height: 12 }
                    {prefs.t(" Actualiser", " Refresh")}
                }
            }
            div {
                class: "stat-grid",
                div {
                    class: "card stat",
                    Icon { icon: FaBook, width: 20, height: 20 }
                    span { class: "stat-value", "{stats.total_books}" }
                    span { class: "stat-label", {prefs.t("Livres", "Books")} }
                }
                div {
                    class: "card stat",
                    Icon { icon: FaCircleCheck, width: 20, height: 20 }
                    span { class: "stat-value", "{stats.available_books}" }
                    span { class: "stat-label", {prefs.t("Disponibles", "Available")} }
                }
                div {
                    class: "card stat",
                    Icon { icon: FaBookmark, width: 20, height: 20 }
                    span { class: "stat-value", "{stats.reserved_books}" }
                    span { class: "stat-label", {prefs.t("Épuisés", "Out of stock")} }
                }
                div {
                    class: "card stat",
                    Icon { icon: FaUsers, width: 20, height: 20 }
                    span { class: "stat-value", "{stats.total_users}" }
                    span { class: "stat-label", {prefs.t("Utilisateurs", "Users")} }
                }
                div {
                    class: "card stat",
                    span { class: "stat-value", "{stats.average_reservation_price:.2} $" }
                    span { class: "stat-label", {prefs.t("Prix moyen de réservation", "Average reservation price")} }
                }
            }
            div {
                class: "breakdown-grid",
                Breakdown {
                    title: prefs.t("Classifications principales", "Top classifications").to_string(),
                    entries: stats.classifications.clone(),
                    empty: none.clone(),
                }
                Breakdown {
                    title: prefs.t("Tags principaux", "Top tags").to_string(),
                    entries: stats.tags.clone(),
                    empty: none,
                }
            }
        }
    }
}
