//! # Session store: who is signed in, and with what role
//!
//! [`SessionStore`] is the single owner of the client's authentication state.
//! It holds the [`Session`] snapshot and the durable credential slot
//! ([`store::keys::CREDENTIAL`]); everything else reads it.
//!
//! ## Lifecycle
//!
//! ```text
//!   Initializing ──initialize──▶ SignedOut ◀──sign_out── SignedIn
//!        │                           │                      ▲
//!        └────────initialize─────────┼──────────────────────┘
//!                                    └───────sign_in────────┘
//! ```
//!
//! `Initializing` is left exactly once. A stored credential the backend
//! rejects (or that cannot be checked) is deleted and the store resolves to
//! signed out; the reason is returned as [`InitOutcome::Rejected`] and logged,
//! never raised, so a stale credential cannot block start-up.
//!
//! The reactive provider cannot hold a borrow of the store across the network
//! call, so initialisation is also available in two halves:
//! [`SessionStore::bootstrap`] and [`SessionStore::complete`].

use std::future::Future;

use api::{ApiError, AuthError, Claims, Credential, Role};
use store::keys;
use store::KeyValueStore;

/// Snapshot of the authentication state.
///
/// `signed_in` implies a non-empty `credential` and `claims`.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub signed_in: bool,
    pub role: Role,
    pub claims: Option<Claims>,
    pub credential: Option<Credential>,
    pub initializing: bool,
}

impl Session {
    /// State at start-up, before the stored credential has been looked at.
    pub fn initializing() -> Self {
        Self {
            initializing: true,
            ..Self::signed_out()
        }
    }

    pub fn signed_out() -> Self {
        Self {
            signed_in: false,
            role: Role::Guest,
            claims: None,
            credential: None,
            initializing: false,
        }
    }

    fn signed_in(credential: Credential, claims: Claims) -> Self {
        Self {
            signed_in: true,
            role: claims.role(),
            claims: Some(claims),
            credential: Some(credential),
            initializing: false,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.signed_in && self.role == Role::Admin
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.signed_in && self.role == role
    }

    /// Display name of the signed-in user, if any.
    pub fn display_name(&self) -> Option<String> {
        self.claims
            .as_ref()
            .map(Claims::display_name)
            .filter(|n| !n.is_empty())
    }

    pub fn user_id(&self) -> Option<String> {
        self.claims.as_ref().and_then(Claims::user_id)
    }
}

/// How start-up resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum InitOutcome {
    /// Nothing stored; signed out.
    NoCredential,
    /// The backend accepted the stored credential; signed in.
    Restored,
    /// The stored credential was dropped; signed out.
    Rejected(String),
    /// Start-up had already resolved; nothing changed.
    AlreadyResolved,
}

/// First half of initialisation.
#[derive(Debug, Clone, PartialEq)]
pub enum Bootstrap {
    Resolved(InitOutcome),
    /// A stored credential must be checked with the backend, then handed to
    /// [`SessionStore::complete`].
    Validate(Credential),
}

/// Backend check of a stored credential.
///
/// The returned future is not required to be `Send`; the browser client
/// holds `Rc` state.
pub trait SessionBackend {
    fn who_am_i(&self, credential: &Credential) -> impl Future<Output = Result<Claims, ApiError>>;
}

impl SessionBackend for api::ApiClient {
    async fn who_am_i(&self, credential: &Credential) -> Result<Claims, ApiError> {
        api::ApiClient::who_am_i(self, credential).await
    }
}

pub struct SessionStore<K> {
    storage: K,
    state: Session,
}

impl<K: KeyValueStore> SessionStore<K> {
    pub fn new(storage: K) -> Self {
        Self {
            storage,
            state: Session::initializing(),
        }
    }

    pub fn current_state(&self) -> &Session {
        &self.state
    }

    /// Resolve start-up: restore the stored credential if the backend still
    /// accepts it, otherwise forget it.
    pub async fn initialize(&mut self, backend: &impl SessionBackend) -> InitOutcome {
        match self.bootstrap() {
            Bootstrap::Resolved(outcome) => outcome,
            Bootstrap::Validate(credential) => {
                let result = backend.who_am_i(&credential).await;
                self.complete(credential, result)
            }
        }
    }

    /// Look at the stored credential. Resolves immediately when there is
    /// nothing to check.
    pub fn bootstrap(&mut self) -> Bootstrap {
        if !self.state.initializing {
            return Bootstrap::Resolved(InitOutcome::AlreadyResolved);
        }
        match self.storage.get(keys::CREDENTIAL).map(Credential::new) {
            Some(credential) if !credential.is_empty() => Bootstrap::Validate(credential),
            Some(_) => {
                self.storage.remove(keys::CREDENTIAL);
                self.state = Session::signed_out();
                tracing::info!("Session start: blank stored credential discarded");
                Bootstrap::Resolved(InitOutcome::NoCredential)
            }
            None => {
                self.state = Session::signed_out();
                tracing::info!("Session start: no stored credential");
                Bootstrap::Resolved(InitOutcome::NoCredential)
            }
        }
    }

    /// Apply the backend's verdict on the credential [`bootstrap`](Self::bootstrap)
    /// asked to validate.
    pub fn complete(&mut self, credential: Credential, result: Result<Claims, ApiError>) -> InitOutcome {
        if !self.state.initializing {
            return InitOutcome::AlreadyResolved;
        }
        match result {
            Ok(claims) => {
                self.state = Session::signed_in(credential, claims);
                tracing::info!("Session start: restored as {}", self.state.role.as_str());
                InitOutcome::Restored
            }
            Err(e) => {
                self.storage.remove(keys::CREDENTIAL);
                self.state = Session::signed_out();
                tracing::warn!("Session start: stored credential rejected: {}", e);
                InitOutcome::Rejected(e.to_string())
            }
        }
    }

    /// Adopt a freshly issued credential. Decoding is local; the caller has
    /// already had it from the backend.
    pub fn sign_in(&mut self, token: &str) -> Result<(), AuthError> {
        let credential = Credential::new(token);
        if credential.is_empty() {
            return Err(AuthError::Malformed("empty credential".into()));
        }
        let claims = credential.claims().inspect_err(|e| {
            tracing::warn!("Sign-in refused: {}", e);
        })?;
        self.storage.set(keys::CREDENTIAL, credential.as_str());
        self.state = Session::signed_in(credential, claims);
        tracing::info!("Signed in as {}", self.state.role.as_str());
        Ok(())
    }

    /// Forget the credential. Always succeeds.
    pub fn sign_out(&mut self) {
        self.storage.remove(keys::CREDENTIAL);
        if self.state.signed_in {
            tracing::info!("Signed out");
        }
        self.state = Session::signed_out();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::auth::unsigned_credential;
    use serde_json::{json, Value};
    use std::cell::Cell;
    use store::MemoryStore;

    fn token(claims: Value) -> String {
        let Value::Object(map) = claims else {
            unreachable!()
        };
        unsigned_credential(&map).as_str().to_string()
    }

    struct Accepting(Claims, Cell<u32>);

    impl SessionBackend for Accepting {
        async fn who_am_i(&self, _credential: &Credential) -> Result<Claims, ApiError> {
            self.1.set(self.1.get() + 1);
            Ok(self.0.clone())
        }
    }

    struct Rejecting(u16, Cell<u32>);

    impl Rejecting {
        fn new(status: u16) -> Self {
            Self(status, Cell::new(0))
        }
    }

    impl SessionBackend for Rejecting {
        async fn who_am_i(&self, _credential: &Credential) -> Result<Claims, ApiError> {
            self.1.set(self.1.get() + 1);
            Err(ApiError::Status {
                status: self.0,
                message: Some("Token expired".to_string()),
            })
        }
    }

    fn claims(value: Value) -> Claims {
        serde_json::from_value(value).unwrap()
    }

    struct Shared(std::rc::Rc<Claims>);

    impl SessionBackend for Shared {
        fn who_am_i(&self, _credential: &Credential) -> impl Future<Output = Result<Claims, ApiError>> {
            let claims = std::rc::Rc::clone(&self.0);
            async move { Ok((*claims).clone()) }
        }
    }

    #[tokio::test]
    async fn test_initialize_with_rc_backend() {
        let storage = MemoryStore::new();
        storage.set(keys::CREDENTIAL, "stored.token.sig");
        let backend = Shared(std::rc::Rc::new(claims(json!({"_id": "u9", "role": "admin"}))));
        let mut store = SessionStore::new(storage);

        assert_eq!(store.initialize(&backend).await, InitOutcome::Restored);
        assert!(store.current_state().is_admin());
    }

    #[test]
    fn test_starts_initializing() {
        let store = SessionStore::new(MemoryStore::new());
        let state = store.current_state();
        assert!(state.initializing);
        assert!(!state.signed_in);
        assert!(state.credential.is_none());
    }

    #[tokio::test]
    async fn test_initialize_without_credential() {
        let backend = Rejecting::new(401);
        let mut store = SessionStore::new(MemoryStore::new());

        assert_eq!(store.initialize(&backend).await, InitOutcome::NoCredential);
        assert_eq!(store.current_state(), &Session::signed_out());
        assert_eq!(backend.1.get(), 0);
    }

    #[tokio::test]
    async fn test_initialize_restores_valid_credential() {
        let storage = MemoryStore::new();
        storage.set(keys::CREDENTIAL, "stored.token.sig");
        let backend = Accepting(claims(json!({"_id": "u1", "role": "clerk"})), Cell::new(0));
        let mut store = SessionStore::new(storage.clone());

        assert_eq!(store.initialize(&backend).await, InitOutcome::Restored);
        let state = store.current_state();
        assert!(state.signed_in);
        assert!(!state.initializing);
        assert_eq!(state.role, Role::Clerk);
        assert_eq!(state.credential.as_ref().map(Credential::as_str), Some("stored.token.sig"));
        assert_eq!(storage.get(keys::CREDENTIAL).as_deref(), Some("stored.token.sig"));
    }

    #[tokio::test]
    async fn test_rejected_credential_is_deleted_and_idempotent() {
        for status in [401, 403, 500] {
            let storage = MemoryStore::new();
            storage.set(keys::CREDENTIAL, "expired.token.sig");
            let backend = Rejecting::new(status);
            let mut store = SessionStore::new(storage.clone());

            let outcome = store.initialize(&backend).await;
            assert!(matches!(outcome, InitOutcome::Rejected(ref reason) if reason.contains("Token expired")));
            assert_eq!(store.current_state(), &Session::signed_out());
            assert!(storage.get(keys::CREDENTIAL).is_none());

            assert_eq!(store.initialize(&backend).await, InitOutcome::AlreadyResolved);
            assert_eq!(store.current_state(), &Session::signed_out());
            assert!(storage.get(keys::CREDENTIAL).is_none());
            assert_eq!(backend.1.get(), 1);

            // A restart over the same storage finds nothing left to check.
            let mut restarted = SessionStore::new(storage.clone());
            assert_eq!(restarted.initialize(&backend).await, InitOutcome::NoCredential);
        }
    }

    #[tokio::test]
    async fn test_blank_stored_credential_counts_as_absent() {
        let storage = MemoryStore::new();
        storage.set(keys::CREDENTIAL, "   ");
        let backend = Rejecting::new(401);
        let mut store = SessionStore::new(storage.clone());

        assert_eq!(store.initialize(&backend).await, InitOutcome::NoCredential);
        assert!(storage.get(keys::CREDENTIAL).is_none());
        assert_eq!(backend.1.get(), 0);
    }

    #[test]
    fn test_split_initialization() {
        let storage = MemoryStore::new();
        storage.set(keys::CREDENTIAL, "stored.token.sig");
        let mut store = SessionStore::new(storage);

        let Bootstrap::Validate(credential) = store.bootstrap() else {
            panic!("expected a credential to validate");
        };
        assert!(store.current_state().initializing);

        let outcome = store.complete(credential.clone(), Ok(claims(json!({"role": "admin"}))));
        assert_eq!(outcome, InitOutcome::Restored);
        assert!(store.current_state().is_admin());

        assert_eq!(
            store.complete(credential, Ok(claims(json!({})))),
            InitOutcome::AlreadyResolved
        );
        assert!(store.current_state().is_admin());
    }

    #[test]
    fn test_sign_in_takes_role_from_claims() {
        for (claim, role) in [("admin", Role::Admin), ("clerk", Role::Clerk), ("user", Role::Member)] {
            let storage = MemoryStore::new();
            let mut store = SessionStore::new(storage.clone());
            let jwt = token(json!({"sub": "someone", "role": claim}));

            store.sign_in(&jwt).unwrap();
            let state = store.current_state();
            assert_eq!(state.role, role);
            assert!(state.signed_in);
            assert!(!state.initializing);
            assert!(state.claims.is_some());
            assert_eq!(storage.get(keys::CREDENTIAL).as_deref(), Some(jwt.as_str()));
        }
    }

    #[test]
    fn test_sign_in_rejects_malformed() {
        let storage = MemoryStore::new();
        let mut store = SessionStore::new(storage.clone());
        store.sign_out();

        assert!(matches!(store.sign_in("garbage"), Err(AuthError::Malformed(_))));
        assert!(matches!(store.sign_in(""), Err(AuthError::Malformed(_))));
        assert_eq!(store.current_state(), &Session::signed_out());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_sign_in_then_sign_out_restores_unsigned_shape() {
        let storage = MemoryStore::new();
        let mut store = SessionStore::new(storage.clone());
        store.sign_out();
        let before = store.current_state().clone();

        store.sign_in(&token(json!({"role": "admin", "email": "a@b.c"}))).unwrap();
        store.sign_out();

        assert_eq!(store.current_state(), &before);
        assert!(store.current_state().claims.is_none());
        assert!(store.current_state().credential.is_none());
        assert!(storage.get(keys::CREDENTIAL).is_none());

        store.sign_out();
        assert_eq!(store.current_state(), &before);
    }

    #[test]
    fn test_session_helpers() {
        let mut store = SessionStore::new(MemoryStore::new());
        store
            .sign_in(&token(json!({"_id": "u9", "prenom": "Ada", "nom": "Lovelace", "role": "clerk"})))
            .unwrap();
        let state = store.current_state();
        assert!(state.has_role(Role::Clerk));
        assert!(!state.is_admin());
        assert_eq!(state.display_name().as_deref(), Some("Ada Lovelace"));
        assert_eq!(state.user_id().as_deref(), Some("u9"));
    }
}
