//! Navigation Component
//!
//! Header navigation bar with the brand and one link per view.

use leptos::*;
use leptos_router::*;

use octofit::Resource;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="navbar navbar-expand-lg navbar-dark bg-dark">
            <div class="container-fluid">
                <A href="/" class="navbar-brand">"OctoFit Tracker"</A>

                <ul class="navbar-nav ms-auto">
                    <NavLink href="/" label={"🏠 Home".to_string()} />
                    {Resource::ALL
                        .into_iter()
                        .map(|resource| {
                            let label = format!("{} {}", resource.nav_glyph(), resource.title());
                            view! { <NavLink href={resource.route()} label=label /> }
                        })
                        .collect_view()}
                </ul>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(href: &'static str, label: String) -> impl IntoView {
    view! {
        <li class="nav-item">
            <A href=href class="nav-link" active_class="active" exact=true>
                {label}
            </A>
        </li>
    }
}
