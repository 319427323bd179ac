//! App Root Component
//!
//! Routing, navigation and footer shared by every page.

use leptos::*;
use leptos_router::*;

use octofit::Resource;

use crate::components::Nav;
use crate::pages::{Home, ResourcePage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="App">
                <Nav />

                <main class="min-vh-100">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route
                            path="/activities"
                            view=|| view! { <ResourcePage resource=Resource::Activities /> }
                        />
                        <Route
                            path="/leaderboard"
                            view=|| view! { <ResourcePage resource=Resource::Leaderboard /> }
                        />
                        <Route
                            path="/teams"
                            view=|| view! { <ResourcePage resource=Resource::Teams /> }
                        />
                        <Route
                            path="/users"
                            view=|| view! { <ResourcePage resource=Resource::Users /> }
                        />
                        <Route
                            path="/workouts"
                            view=|| view! { <ResourcePage resource=Resource::Workouts /> }
                        />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-dark text-white text-center py-3 mt-5">
            <div class="container">
                <p class="mb-0">"© 2026 OctoFit Tracker - Your Fitness Companion"</p>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="container mt-5 text-center">
            <div class="display-1">"🔍"</div>
            <h1>"Page Not Found"</h1>
            <p class="text-muted">"The page you're looking for doesn't exist."</p>
            <A href="/" class="btn btn-primary">"Go Home"</A>
        </div>
    }
}
