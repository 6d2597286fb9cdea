use std::time::Duration;

use dioxus::prelude::*;
use ui::forms::Registration;
use ui::icons::{FaBookOpen, FaEnvelope, FaLock, FaUser};
use ui::time::sleep;
use ui::{use_api, use_preferences, Icon};

use crate::Route;

const REDIRECT_DELAY: Duration = Duration::from_secs(4);

#[component]
pub fn Register() -> Element {
    let api = use_api();
    let prefs = use_preferences()();
    let nav = use_navigator();

    let mut form = use_signal(Registration::default);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);

    let server_error = prefs
        .t("Erreur lors de l'inscription. Veuillez réessayer.", "Registration failed. Please try again.")
        .to_string();
    let success_message = prefs
        .t("Inscription réussie. Veuillez vérifier votre e-mail !", "Registration successful. Please verify your email!")
        .to_string();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        success.set(None);
        let request = match form.read().validate() {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e.message(prefs.language)));
                return;
            }
        };
        let api = api.clone();
        let server_error = server_error.clone();
        let success_message = success_message.clone();
        spawn(async move {
            loading.set(true);
            match api.signup(&request).await {
                Ok(response) => {
                    success.set(Some(response.text().map(String::from).unwrap_or(success_message)));
                    loading.set(false);
                    sleep(REDIRECT_DELAY).await;
                    nav.push(Route::Login { from: String::new() });
                }
                Err(e) => {
                    error.set(Some(e.user_message(&server_error)));
                    loading.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                div {
                    class: "auth-header",
                    Icon { icon: FaBookOpen, width: 28, height: 28 }
                    h1 { {prefs.t("Rejoignez LibraNet", "Join LibraNet")} }
                    p { class: "view-muted", {prefs.t("Créez votre compte pour commencer", "Create your account to get started")} }
                }

                if let Some(message) = error() {
                    div { class: "alert alert-error", "{message}" }
                }
                if let Some(message) = success() {
                    div { class: "alert alert-success", "{message}" }
                }

                form {
                    class: "auth-form",
                    onsubmit: handle_submit,
                    div {
                        class: "form-row",
                        label {
                            class: "input-with-icon",
                            Icon { icon: FaUser, width: 14, height: 14 }
                            input {
                                required: true,
                                placeholder: prefs.t("Prénom", "First name"),
                                value: "{form.read().prenom}",
                                oninput: move |evt| form.write().prenom = evt.value(),
                            }
                        }
                        label {
                            class: "input-with-icon",
                            Icon { icon: FaUser, width: 14, height: 14 }
                            input {
                                required: true,
                                placeholder: prefs.t("Nom", "Last name"),
                                value: "{form.read().nom}",
                                oninput: move |evt| form.write().nom = evt.value(),
                            }
                        }
                    }
                    label {
                        class: "input-with-icon",
                        Icon { icon: FaEnvelope, width: 14, height: 14 }
                        input {
                            r#type: "email",
                            required: true,
                            placeholder: prefs.t("Adresse e-mail", "Email address"),
                            value: "{form.read().email}",
                            oninput: move |evt| form.write().email = evt.value(),
                        }
                    }
                    label {
                        class: "input-with-icon",
                        Icon { icon: FaLock, width: 14, height: 14 }
                        input {
                            r#type: "password",
                            required: true,
                            placeholder: prefs.t("Mot de passe", "Password"),
                            value: "{form.read().password}",
                            oninput: move |evt| form.write().password = evt.value(),
                        }
                    }
                    label {
                        class: "input-with-icon",
                        Icon { icon: FaLock, width: 14, height: 14 }
                        input {
                            r#type: "password",
                            required: true,
                            placeholder: prefs.t("Confirmer le mot de passe", "Confirm password"),
                            value: "{form.read().confirm_password}",
                            oninput: move |evt| form.write().confirm_password = evt.value(),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary btn-block",
                        disabled: loading(),
                        {prefs.t("Créer un compte", "Create account")}
                    }
                }

                p {
                    class: "auth-switch",
                    {prefs.t("Déjà inscrit ?", "Already registered?")}
                    " "
                    Link { to: Route::Login { from: String::new() }, {prefs.t("Se connecter", "Log in")} }
                }
            }
        }
    }
}
