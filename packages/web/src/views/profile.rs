use api::{PasswordChange, ProfileUpdate};
use dioxus::prelude::*;
use ui::icons::{FaCheck, FaLock, FaPen, FaUser};
use ui::{notify, use_api, use_notices, use_preferences, use_session_state, Icon, NoticeLevel};

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Profile,
    Security,
}

#[component]
pub fn Profile() -> Element {
    let api = use_api();
    let session = use_session_state();
    let prefs = use_preferences()();
    let mut notices = use_notices();

    let claims = session.claims.clone().unwrap_or_default();
    let mut tab = use_signal(|| Tab::Profile);
    let mut editing = use_signal(|| false);
    let mut first_name = use_signal(|| claims.first_name().unwrap_or_default());
    let mut last_name = use_signal(|| claims.last_name().unwrap_or_default());
    let mut old_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let save_profile = {
        let api = api.clone();
        let updated = prefs.t("Profil mis à jour !", "Profile updated successfully!");
        let failed = prefs.t("Erreur lors de la mise à jour du profil", "Error updating profile");
        move |_: MouseEvent| {
            let api = api.clone();
            let update = ProfileUpdate {
                prenom: first_name().trim().to_string(),
                nom: last_name().trim().to_string(),
            };
            spawn(async move {
                match api.update_profile(&update).await {
                    Ok(()) => {
                        notify(&mut notices, NoticeLevel::Success, updated);
                        editing.set(false);
                    }
                    Err(e) => notify(&mut notices, NoticeLevel::Error, &e.user_message(failed)),
                }
            });
        }
    };

    let change_password = {
        let updated = prefs.t("Mot de passe mis à jour !", "Password updated successfully!");
        let failed = prefs.t("Erreur lors du changement de mot de passe", "Error changing password");
        move |evt: FormEvent| {
            evt.prevent_default();
            let api = api.clone();
            let change = PasswordChange {
                old_password: old_password(),
                new_password: new_password(),
            };
            spawn(async move {
                saving.set(true);
                match api.change_password(&change).await {
                    Ok(()) => {
                        notify(&mut notices, NoticeLevel::Success, updated);
                        old_password.set(String::new());
                        new_password.set(String::new());
                    }
                    Err(e) => notify(&mut notices, NoticeLevel::Error, &e.user_message(failed)),
                }
                saving.set(false);
            });
        }
    };

    let email = claims.email().unwrap_or_default();
    let role = session.role.as_str();
    let tab_class = |t: Tab| if tab() == t { "tab tab-active" } else { "tab" };

    rsx! {
        div {
            class: "profile card",
            div {
                class: "tabs",
                button {
                    class: tab_class(Tab::Profile),
                    onclick: move |_| tab.set(Tab::Profile),
                    Icon { icon: FaUser, width: 12, height: 12 }
                    {prefs.t(" Profil", " Profile")}
                }
                button {
                    class: tab_class(Tab::Security),
                    onclick: move |_| tab.set(Tab::Security),
                    Icon { icon: FaLock, width: 12, height: 12 }
                    {prefs.t(" Sécurité", " Security")}
                }
            }

            if tab() == Tab::Profile {
                div {
                    class: "profile-fields",
                    label {
                        span { {prefs.t("Prénom", "First name")} }
                        input {
                            disabled: !editing(),
                            value: "{first_name}",
                            oninput: move |evt| first_name.set(evt.value()),
                        }
                    }
                    label {
                        span { {prefs.t("Nom", "Last name")} }
                        input {
                            disabled: !editing(),
                            value: "{last_name}",
                            oninput: move |evt| last_name.set(evt.value()),
                        }
                    }
                    label {
                        span { "Email" }
                        input { disabled: true, value: "{email}" }
                    }
                    label {
                        span { {prefs.t("Rôle", "Role")} }
                        input { disabled: true, value: "{role}" }
                    }
                    if editing() {
                        button {
                            class: "btn btn-primary",
                            onclick: save_profile,
                            Icon { icon: FaCheck, width: 12, height: 12 }
                            {prefs.t(" Enregistrer", " Save")}
                        }
                    } else {
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| editing.set(true),
                            Icon { icon: FaPen, width: 12, height: 12 }
                            {prefs.t(" Modifier", " Edit")}
                        }
                    }
                }
            } else {
                form {
                    class: "profile-fields",
                    onsubmit: change_password,
                    label {
                        span { {prefs.t("Mot de passe actuel", "Current password")} }
                        input {
                            r#type: "password",
                            required: true,
                            value: "{old_password}",
                            oninput: move |evt| old_password.set(evt.value()),
                        }
                    }
                    label {
                        span { {prefs.t("Nouveau mot de passe", "New password")} }
                        input {
                            r#type: "password",
                            required: true,
                            value: "{new_password}",
                            oninput: move |evt| new_password.set(evt.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: saving(),
                        {prefs.t("Changer le mot de passe", "Change password")}
                    }
                }
            }
        }
    }
}
