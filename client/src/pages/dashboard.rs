//! Student dashboard: summary stats and announcements.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::loading::LoadingPlaceholder;
use crate::net::types::Announcement;
use crate::state::auth::AuthState;
use crate::state::data::DataState;

/// First word of a display name, for greetings.
pub fn first_name(full: &str) -> &str {
    full.split_whitespace().next().unwrap_or(full)
}

/// Render an average progress value, or a dash when there is none.
pub fn format_progress(progress: Option<u8>) -> String {
    progress.map_or_else(|| "—".to_owned(), |p| format!("{p}%"))
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let data = expect_context::<RwSignal<DataState>>();

    let greeting_name =
        move || auth.with(|a| a.user.as_ref().map(|u| first_name(&u.name).to_owned()).unwrap_or_default());

    view! {
        <section class="page dashboard-page">
            <h1 class="page__title">"Welcome back, " {greeting_name} "!"</h1>
            <Show when=move || data.with(|d| d.error.is_some())>
                <p class="page__error">{move || data.with(|d| d.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show when=move || !data.with(|d| d.loading) fallback=|| view! { <LoadingPlaceholder/> }>
                <div class="stat-grid">
                    <div class="stat-card">
                        <span class="stat-card__label">"Courses"</span>
                        <span class="stat-card__value">{move || data.with(|d| d.courses().len())}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"Credits"</span>
                        <span class="stat-card__value">{move || data.with(DataState::total_credits)}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"Average progress"</span>
                        <span class="stat-card__value">
                            {move || format_progress(data.with(DataState::average_progress))}
                        </span>
                    </div>
                </div>
                <h2 class="page__subtitle">"Announcements"</h2>
                <Show
                    when=move || data.with(|d| !d.announcements().is_empty())
                    fallback=|| view! { <p class="page__empty">"No announcements right now."</p> }
                >
                    <ul class="announcement-list">
                        <For
                            each=move || data.with(|d| d.announcements().to_vec())
                            key=|a| a.id.clone()
                            children=|a: Announcement| {
                                view! {
                                    <li class="announcement">
                                        <div class="announcement__header">
                                            <span class="announcement__title">{a.title}</span>
                                            <time class="announcement__date">{a.posted_at}</time>
                                        </div>
                                        <p class="announcement__body">{a.body}</p>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </Show>
        </section>
    }
}
