use chrono::{Datelike, Local};
use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::auth::{Login, Signup};
use crate::components::dashboard::Dashboard;
use crate::components::design_system::ToastContainer;
use crate::components::home::Home;
use crate::components::nav_bar::NavBar;
use crate::components::project::ProjectView;
use crate::components::upload::Upload;
use crate::services::notification_service::provide_notification_state;
use crate::services::session_service::{load_session, provide_session_state, use_session_state};

#[component]
pub fn App() -> impl IntoView {
    // Global state available to every page
    provide_notification_state();
    provide_session_state();

    // One-shot session restore; sign-in/out paths update the signal directly
    let session = use_session_state();
    load_session(&session);

    view! {
        <Router>
            <NavBar />

            // Offset for the fixed nav bar
            <main class="pt-16 min-h-[calc(100vh-4rem)]">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=Home />
                    <Route path=path!("/login") view=Login />
                    <Route path=path!("/signup") view=Signup />
                    <Route path=path!("/dashboard") view=Dashboard />
                    <Route path=path!("/upload") view=Upload />
                    <Route path=path!("/project/:id") view=ProjectView />
                </Routes>
            </main>

            <Footer />
            <ToastContainer />
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = Local::now().year();

    view! {
        <footer class="border-t border-gray-800 py-6">
            <div class="max-w-6xl mx-auto px-4 text-center text-sm text-gray-500">
                {format!("\u{00a9} {year} DocLens. All rights reserved.")}
            </div>
        </footer>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="max-w-6xl mx-auto px-4 py-24 text-center">
            <h1 class="text-5xl font-bold text-white">"404"</h1>
            <p class="text-gray-400 mt-4">"The page you're looking for doesn't exist."</p>
            <A href="/" attr:class="inline-block mt-6 text-blue-400 hover:underline">
                "Back to home"
            </A>
        </div>
    }
}
