//! Resource Pages
//!
//! One page per collection. Each mount fetches once; a response that lands
//! after the page is left is dropped.

use leptos::*;

use octofit::{build_page, Resource};

use crate::api;
use crate::components::PageView;
use crate::state::ViewHandle;

#[component]
pub fn ResourcePage(resource: Resource) -> impl IntoView {
    let (handle, ticket) = ViewHandle::mount(resource, api::endpoint(resource));

    spawn_local(async move {
        let outcome = api::fetch_collection(ticket.url()).await;
        handle.settle(&ticket, outcome);
    });

    on_cleanup(move || handle.unmount());

    let state = handle.state();

    view! {
        <div class="container mt-4">
            {move || {
                let page = state.with(|state| build_page(resource, state));
                view! { <PageView resource=resource page=page /> }
            }}
        </div>
    }
}
