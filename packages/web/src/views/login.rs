//! Sign-in form. Returns to the page the visitor was sent away from.

use dioxus::prelude::*;
use ui::icons::{FaBookOpen, FaEnvelope, FaEye, FaEyeSlash, FaLock};
use ui::{use_api, use_preferences, use_session, use_session_state, Icon};

use crate::Route;

/// Where to go once signed in: the preserved location when it names a real
/// page, otherwise the catalog.
fn post_login_route(from: &str) -> Route {
    if from.trim().is_empty() {
        return Route::Books {};
    }
    match from.parse::<Route>() {
        Ok(Route::Login { .. }) | Ok(Route::Register {}) | Ok(Route::NotFound { .. }) | Err(_) => {
            Route::Books {}
        }
        Ok(route) => route,
    }
}

#[component]
pub fn Login(from: String) -> Element {
    let api = use_api();
    let mut session = use_session();
    let state = use_session_state();
    let prefs = use_preferences()();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    // If already signed in, move on
    if state.signed_in {
        nav.replace(post_login_route(&from));
    }

    let invalid = prefs.t("Identifiants incorrects", "Invalid credentials").to_string();
    let auth_error = prefs.t("Erreur d'authentification", "Authentication error").to_string();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let from = from.clone();
        let invalid = invalid.clone();
        let auth_error = auth_error.clone();
        spawn(async move {
            loading.set(true);
            error.set(None);
            match api.login(email().trim(), &password()).await {
                Ok(credential) => match session.write().sign_in(credential.as_str()) {
                    Ok(()) => {
                        nav.replace(post_login_route(&from));
                    }
                    Err(_) => error.set(Some(auth_error)),
                },
                Err(e) => error.set(Some(e.user_message(&invalid))),
            }
            loading.set(false);
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
                    h1 { "LibraNet" }
                    p { class: "view-muted", {prefs.t("Connectez-vous à votre compte", "Sign in to your account")} }
                }

                if let Some(message) = error() {
                    div { class: "alert alert-error", "{message}" }
                }

                form {
                    class: "auth-form",
                    onsubmit: handle_submit,
                    label {
                        class: "input-with-icon",
                        Icon { icon: FaEnvelope, width: 14, height: 14 }
                        input {
                            r#type: "email",
                            required: true,
                            placeholder: prefs.t("Adresse e-mail", "Email address"),
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    label {
                        class: "input-with-icon",
                        Icon { icon: FaLock, width: 14, height: 14 }
                        input {
                            r#type: if show_password() { "text" } else { "password" },
                            required: true,
                            placeholder: prefs.t("Mot de passe", "Password"),
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                        button {
                            r#type: "button",
                            class: "icon-button",
                            onclick: move |_| show_password.set(!show_password()),
                            if show_password() {
                                Icon { icon: FaEyeSlash, width: 14, height: 14 }
                            } else {
                                Icon { icon: FaEye, width: 14, height: 14 }
                            }
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary btn-block",
                        disabled: loading(),
                        if loading() {
                            {prefs.t("Connexion...", "Signing in...")}
                        } else {
                            {prefs.t("Se connecter", "Log in")}
                        }
                    }
                }

                p {
                    class: "auth-switch",
                    {prefs.t("Pas encore de compte ?", "No account yet?")}
                    " "
                    Link { to: Route::Register {}, {prefs.t("S'inscrire", "Sign up")} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_login_route() {
        assert_eq!(post_login_route(""), Route::Books {});
        assert_eq!(post_login_route("/reservations"), Route::Reservations {});
        assert_eq!(post_login_route("/admin/users"), Route::AdminUsers {});
        assert_eq!(post_login_route("/login"), Route::Books {});
        assert_eq!(post_login_route("/no/such/page"), Route::Books {});
    }
}
