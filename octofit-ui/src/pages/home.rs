//! Landing Page

use leptos::*;
use leptos_router::*;

struct Feature {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
    href: &'static str,
    action: &'static str,
}

static FEATURES: [Feature; 3] = [
    Feature {
        icon: "📊",
        title: "Track Activities",
        text: "Log your daily workouts and monitor your progress with detailed activity tracking.",
        href: "/activities",
        action: "View Activities",
    },
    Feature {
        icon: "🏆",
        title: "Compete",
        text: "Join teams, compete with friends, and climb the leaderboard to become champion.",
        href: "/leaderboard",
        action: "View Leaderboard",
    },
    Feature {
        icon: "💪",
        title: "Get Recommendations",
        text: "Receive personalized workout suggestions tailored to your fitness level and goals.",
        href: "/workouts",
        action: "Browse Workouts",
    },
];

static QUICK_LINKS: [(&str, &str); 4] = [
    ("/teams", "👥 Teams"),
    ("/users", "👤 Users"),
    ("/leaderboard", "🏆 Rankings"),
    ("/activities", "📈 Activity Log"),
];

/// Static welcome page; fetches nothing
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="container mt-4">
            <div class="jumbotron p-5 rounded mb-4">
                <h1 class="display-4">"🏃 Welcome to OctoFit Tracker!"</h1>
                <p class="lead">
                    "Track your fitness activities, compete with teams, and achieve your fitness goals together."
                </p>
                <hr class="my-4" />
                <p>
                    "Join a community of fitness enthusiasts, log your workouts, climb the leaderboard, and get personalized workout recommendations."
                </p>
                <A href="/activities" class="btn btn-primary btn-lg me-2">"Get Started"</A>
                <A href="/workouts" class="btn btn-outline-light btn-lg">"View Workouts"</A>
            </div>

            <div class="row mb-4">
                {FEATURES
                    .iter()
                    .map(|feature| view! {
                        <div class="col-md-4 mb-3">
                            <div class="card text-center">
                                <div class="card-body">
                                    <div class="feature-icon">{feature.icon}</div>
                                    <h5 class="card-title">{feature.title}</h5>
                                    <p class="card-text">{feature.text}</p>
                                    <A href=feature.href class="btn btn-primary">{feature.action}</A>
                                </div>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class="row">
                <div class="col-12">
                    <div class="card">
                        <div class="card-body">
                            <h5 class="card-title">"Quick Links"</h5>
                            <div class="row text-center">
                                {QUICK_LINKS
                                    .iter()
                                    .map(|(href, label)| view! {
                                        <div class="col-md-3 col-6 mb-2">
                                            <A href={*href} class="btn btn-outline-primary w-100">{*label}</A>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
