//! Application-wide context providers.
//!
//! ARCHITECTURE
//! ============
//! `Providers` nests theme ⟶ auth ⟶ data scopes around the application tree
//! and appends the toast host after the children inside the data scope. Each
//! provider owns one `RwSignal` and exposes it with `provide_context`;
//! descendants read it with `expect_context`.

pub mod auth;
pub mod data;
pub mod theme;

#[cfg(all(test, feature = "ssr"))]
#[path = "mod_test.rs"]
mod tests;

use leptos::prelude::*;

use crate::components::toast_host::ToastHost;
use crate::state::toast::ToastState;

pub use auth::AuthProvider;
pub use data::DataProvider;
pub use theme::ThemeProvider;

/// Root provider stack wrapped around the router.
#[component]
pub fn Providers(children: Children) -> impl IntoView {
    // Shared by the children and the host, so it sits above every scope.
    provide_context(RwSignal::new(ToastState::default()));

    view! {
        <ThemeProvider>
            <AuthProvider>
                <DataProvider>
                    {children()}
                    <ToastHost/>
                </DataProvider>
            </AuthProvider>
        </ThemeProvider>
    }
}
