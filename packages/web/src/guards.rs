//! Route layouts that gate their subtree on the session.

use dioxus::prelude::*;
use dioxus::router::Navigator;
use ui::{enforce, use_session_state, AdminGuard, AuthenticatedGuard, Guard, Redirect, Redirector, RoleGuard};

use crate::views::AdminShell;
use crate::Route;

struct RouteRedirector(Navigator);

/// Page a guard redirect lands on.
fn redirect_route(target: &Redirect) -> Route {
    match target {
        Redirect::SignIn { from } => Route::Login { from: from.clone() },
        Redirect::Unauthorized => Route::Unauthorized {},
    }
}

impl Redirector for RouteRedirector {
    fn redirect(&mut self, target: &Redirect) {
        self.0.replace(redirect_route(target));
    }
}

/// Evaluate `guard` for the current route. Nothing renders until the session
/// has resolved.
fn use_guard(guard: impl Guard) -> bool {
    let session = use_session_state();
    let location = use_route::<Route>().to_string();
    let navigator = use_navigator();
    enforce(&guard, &session, &location, &mut RouteRedirector(navigator))
}

#[component]
pub fn SignedInLayout() -> Element {
    if !use_guard(AuthenticatedGuard) {
        return rsx! {};
    }
    rsx! {
        Outlet::<Route> {}
    }
}

#[component]
pub fn ClerkLayout() -> Element {
    if !use_guard(RoleGuard(api::Role::Clerk)) {
        return rsx! {};
    }
    rsx! {
        Outlet::<Route> {}
    }
}

#[component]
pub fn AdminLayout() -> Element {
    if !use_guard(AdminGuard) {
        return rsx! {};
    }
    rsx! {
        AdminShell {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_route() {
        let sign_in = Redirect::SignIn {
            from: "/admin/users".to_string(),
        };
        assert_eq!(
            redirect_route(&sign_in),
            Route::Login {
                from: "/admin/users".to_string()
            }
        );
        assert_eq!(redirect_route(&Redirect::Unauthorized), Route::Unauthorized {});
    }
}
