//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Outlet, ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::student_layout::StudentLayout;
use crate::pages::{courses::CoursesPage, dashboard::DashboardPage, login::LoginPage, profile::ProfilePage};
use crate::providers::Providers;
use crate::util::auth::HOME_PATH;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Mounts the provider stack at the root and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/student-portal.css"/>
        <Title text="Student Portal"/>

        <Providers>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=HOME_PATH/> }/>
                    <ParentRoute path=StaticSegment("student") view=StudentShell>
                        <Route path=StaticSegment("") view=DashboardPage/>
                        <Route path=StaticSegment("courses") view=CoursesPage/>
                        <Route path=StaticSegment("profile") view=ProfilePage/>
                    </ParentRoute>
                </Routes>
            </Router>
        </Providers>
    }
}

/// Layout route binding `StudentLayout` to the nested student pages.
#[component]
fn StudentShell() -> impl IntoView {
    view! {
        <StudentLayout>
            <Outlet/>
        </StudentLayout>
    }
}
