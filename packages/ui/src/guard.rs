//! Route guards: decide whether a subtree may render for the current session.
//!
//! A guard only ever answers with an [`Access`]; turning a redirect into
//! navigation is the caller's business, through [`enforce`] and a
//! [`Redirector`].

use api::Role;

use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Redirect {
    /// Send to sign-in, remembering where the user was headed.
    SignIn { from: String },
    Unauthorized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Session still initialising; render nothing and decide later.
    Pending,
    Allow,
    Redirect(Redirect),
}

pub trait Guard {
    fn evaluate(&self, session: &Session, location: &str) -> Access;
}

/// Any signed-in user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthenticatedGuard;

impl Guard for AuthenticatedGuard {
    fn evaluate(&self, session: &Session, location: &str) -> Access {
        if session.initializing {
            Access::Pending
        } else if session.signed_in {
            Access::Allow
        } else {
            Access::Redirect(Redirect::SignIn {
                from: location.to_string(),
            })
        }
    }
}

/// Signed-in administrators. Anonymous visitors go to sign-in, everyone else
/// to the unauthorized page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminGuard;

impl Guard for AdminGuard {
    fn evaluate(&self, session: &Session, location: &str) -> Access {
        match AuthenticatedGuard.evaluate(session, location) {
            Access::Allow if session.role == Role::Admin => Access::Allow,
            Access::Allow => Access::Redirect(Redirect::Unauthorized),
            other => other,
        }
    }
}

/// Exactly one role; any failure is unauthorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleGuard(pub Role);

impl Guard for RoleGuard {
    fn evaluate(&self, session: &Session, _location: &str) -> Access {
        if session.initializing {
            Access::Pending
        } else if session.has_role(self.0) {
            Access::Allow
        } else {
            Access::Redirect(Redirect::Unauthorized)
        }
    }
}

/// Performs the navigation a guard asked for.
pub trait Redirector {
    fn redirect(&mut self, target: &Redirect);
}

/// Evaluate `guard` and act on it. Returns whether the subtree may render.
pub fn enforce(
    guard: &impl Guard,
    session: &Session,
    location: &str,
    redirector: &mut impl Redirector,
) -> bool {
    match guard.evaluate(session, location) {
        Access::Allow => true,
        Access::Pending => false,
        Access::Redirect(target) => {
            tracing::debug!("Guard redirect from {}: {:?}", location, target);
            redirector.redirect(&target);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionStore;
    use api::auth::unsigned_credential;
    use serde_json::{json, Value};
    use store::MemoryStore;

    #[derive(Default)]
    struct Recorder(Vec<Redirect>);

    impl Redirector for Recorder {
        fn redirect(&mut self, target: &Redirect) {
            self.0.push(target.clone());
        }
    }

    fn signed_in_as(role: &str) -> Session {
        let Value::Object(claims) = json!({"role": role}) else {
            unreachable!()
        };
        let mut store = SessionStore::new(MemoryStore::new());
        store.sign_in(unsigned_credential(&claims).as_str()).unwrap();
        store.current_state().clone()
    }

    #[test]
    fn test_no_redirect_while_initializing() {
        let session = Session::initializing();
        let mut recorder = Recorder::default();

        assert!(!enforce(&AuthenticatedGuard, &session, "/loans", &mut recorder));
        assert!(!enforce(&AdminGuard, &session, "/admin", &mut recorder));
        assert!(!enforce(&RoleGuard(Role::Clerk), &session, "/clerk/loans", &mut recorder));
        assert!(recorder.0.is_empty());
    }

    #[test]
    fn test_authenticated_guard_preserves_location() {
        let mut recorder = Recorder::default();
        assert!(!enforce(&AuthenticatedGuard, &Session::signed_out(), "/reservations", &mut recorder));
        assert_eq!(
            recorder.0,
            vec![Redirect::SignIn {
                from: "/reservations".to_string()
            }]
        );

        let mut recorder = Recorder::default();
        assert!(enforce(&AuthenticatedGuard, &signed_in_as("user"), "/reservations", &mut recorder));
        assert!(recorder.0.is_empty());
    }

    #[test]
    fn test_admin_guard_branches() {
        assert_eq!(
            AdminGuard.evaluate(&signed_in_as("clerk"), "/admin"),
            Access::Redirect(Redirect::Unauthorized)
        );
        assert_eq!(
            AdminGuard.evaluate(&signed_in_as("user"), "/admin"),
            Access::Redirect(Redirect::Unauthorized)
        );
        assert_eq!(
            AdminGuard.evaluate(&Session::signed_out(), "/admin/users"),
            Access::Redirect(Redirect::SignIn {
                from: "/admin/users".to_string()
            })
        );
        assert_eq!(AdminGuard.evaluate(&signed_in_as("admin"), "/admin"), Access::Allow);
    }

    #[test]
    fn test_role_guard_never_sends_to_sign_in() {
        let guard = RoleGuard(Role::Clerk);
        assert_eq!(
            guard.evaluate(&Session::signed_out(), "/clerk/loans"),
            Access::Redirect(Redirect::Unauthorized)
        );
        assert_eq!(
            guard.evaluate(&signed_in_as("admin"), "/clerk/loans"),
            Access::Redirect(Redirect::Unauthorized)
        );
        assert_eq!(guard.evaluate(&signed_in_as("clerk"), "/clerk/loans"), Access::Allow);
    }

    #[test]
    fn test_admin_sign_in_then_sign_out() {
        let Value::Object(claims) = json!({"role": "admin"}) else {
            unreachable!()
        };
        let mut store = SessionStore::new(MemoryStore::new());
        store.sign_out();
        store.sign_in(unsigned_credential(&claims).as_str()).unwrap();

        let mut recorder = Recorder::default();
        assert!(enforce(&AdminGuard, store.current_state(), "/admin", &mut recorder));
        assert!(recorder.0.is_empty());

        store.sign_out();
        assert!(!enforce(&AdminGuard, store.current_state(), "/admin", &mut recorder));
        assert_eq!(
            recorder.0,
            vec![Redirect::SignIn {
                from: "/admin".to_string()
            }]
        );
    }
}
