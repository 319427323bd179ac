//! Loading Component

use leptos::*;

/// Spinner shown while a view waits for its collection
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading-spinner">
            <div class="spinner-border text-primary" role="status">
                <span class="visually-hidden">"Loading..."</span>
            </div>
        </div>
    }
}
