//! Course list with per-course progress.

use leptos::prelude::*;

use crate::components::loading::LoadingPlaceholder;
use crate::net::types::Course;
use crate::state::data::DataState;

#[component]
pub fn CoursesPage() -> impl IntoView {
    let data = expect_context::<RwSignal<DataState>>();

    view! {
        <section class="page courses-page">
            <h1 class="page__title">"My Courses"</h1>
            <Show when=move || !data.with(|d| d.loading) fallback=|| view! { <LoadingPlaceholder/> }>
                <Show
                    when=move || data.with(|d| !d.courses().is_empty())
                    fallback=|| view! { <p class="page__empty">"You are not enrolled in any courses yet."</p> }
                >
                    <table class="course-table">
                        <thead>
                            <tr>
                                <th>"Code"</th>
                                <th>"Title"</th>
                                <th>"Instructor"</th>
                                <th>"Credits"</th>
                                <th>"Progress"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || data.with(|d| d.courses().to_vec())
                                key=|c| c.id.clone()
                                children=|c: Course| {
                                    let percent = c.progress_percent();
                                    view! {
                                        <tr>
                                            <td class="course-table__code">{c.code}</td>
                                            <td>{c.title}</td>
                                            <td>{c.instructor}</td>
                                            <td>{c.credits}</td>
                                            <td>
                                                <div
                                                    class="progress"
                                                    role="progressbar"
                                                    aria-valuemin="0"
                                                    aria-valuemax="100"
                                                    aria-valuenow=percent
                                                >
                                                    <div class="progress__bar" style:width=format!("{percent}%")></div>
                                                </div>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>
        </section>
    }
}
