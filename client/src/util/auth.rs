//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected layouts apply identical unauthenticated redirect behavior. The
//! decision lives in `AuthGate` so it can be exercised without a reactive
//! runtime; `install_unauth_redirect` only wires it to an effect.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

#[cfg(all(test, feature = "hydrate"))]
#[path = "auth_effect_test.rs"]
mod auth_effect_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Route unauthenticated visitors are sent to.
pub const LOGIN_PATH: &str = "/login";

/// Landing route for signed-in students.
pub const HOME_PATH: &str = "/student";

/// Redirect once auth has loaded and no user is present.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.is_authenticated()
}

/// What a protected layout renders for a given auth state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateView {
    /// Spinner shown while loading or while the redirect is pending.
    #[default]
    Placeholder,
    /// Sidebar plus the protected subtree.
    Content,
}

impl GateView {
    #[must_use]
    pub fn for_state(state: &AuthState) -> Self {
        if state.is_authenticated() { Self::Content } else { Self::Placeholder }
    }
}

/// Redirect latch for one mounted layout.
///
/// Emits the login path on each transition into the settled
/// unauthenticated state, and stays quiet on repeated observations of that
/// state. Seeing an authenticated user re-arms it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthGate {
    redirected: bool,
}

impl AuthGate {
    /// Feed the latest auth state; returns the path to navigate to, if any.
    pub fn observe(&mut self, state: &AuthState) -> Option<&'static str> {
        if state.is_authenticated() {
            self.redirected = false;
            return None;
        }
        if self.redirected || !should_redirect_unauth(state) {
            return None;
        }
        self.redirected = true;
        Some(LOGIN_PATH)
    }

    #[must_use]
    pub fn has_redirected(&self) -> bool {
        self.redirected
    }
}

/// Navigate to `/login` whenever `auth` settles into an unauthenticated state.
///
/// The effect runs after the first render and again on every auth change;
/// the gate it threads through its runs keeps navigation to one call per
/// transition.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move |prev: Option<AuthGate>| {
        let mut gate = prev.unwrap_or_default();
        if let Some(path) = gate.observe(&auth.get()) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        gate
    });
}
