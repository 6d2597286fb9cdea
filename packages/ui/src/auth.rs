//! Session context for the view tree.

use api::{ApiClient, ApiConfig, Credential, CredentialSource};
use dioxus::prelude::*;
use store::PlatformStore;

use crate::session::{Bootstrap, Session, SessionStore};

/// The shared session signal every view and guard reads.
pub type AppSession = Signal<SessionStore<PlatformStore>>;

/// Reads the bearer credential out of the live session on each request.
#[derive(Clone, Copy)]
pub struct SessionCredentials(pub AppSession);

impl CredentialSource for SessionCredentials {
    fn credential(&self) -> Option<Credential> {
        let store = self.0.try_peek().ok()?;
        store.current_state().credential.clone()
    }
}

pub fn use_session() -> AppSession {
    use_context::<AppSession>()
}

/// Snapshot of the current session, subscribing the caller to changes.
pub fn use_session_state() -> Session {
    use_session().read().current_state().clone()
}

/// The shared API client. Requests carry the session credential, if any.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Owns the session store and the API client, and resolves the stored
/// credential once on mount.
#[component]
pub fn SessionProvider(config: ApiConfig, children: Element) -> Element {
    let mut session: AppSession = use_signal(|| SessionStore::new(PlatformStore::default()));
    let client = use_hook(|| ApiClient::new(&config, SessionCredentials(session)));

    use_context_provider(|| session);
    use_context_provider(|| client.clone());

    let _ = use_resource(move || {
        let client = client.clone();
        async move {
            let bootstrap = session.write().bootstrap();
            if let Bootstrap::Validate(credential) = bootstrap {
                let result = client.who_am_i(&credential).await;
                session.write().complete(credential, result);
            }
        }
    });

    rsx! {
        {children}
    }
}

/// Signs out and hands control back to the caller.
#[component]
pub fn SignOutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    #[props(default)] on_signed_out: EventHandler<()>,
) -> Element {
    let mut session = use_session();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| {
                session.write().sign_out();
                on_signed_out.call(());
            },
            "{label}"
        }
    }
}
