//! Spinner placeholder for pending content.

use leptos::prelude::*;

/// Full-height spinner announced to assistive tech as a status region.
#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! {
        <div class="loading-placeholder" role="status" aria-live="polite">
            <div class="spinner" aria-hidden="true"></div>
            <span class="visually-hidden">"Loading..."</span>
        </div>
    }
}
