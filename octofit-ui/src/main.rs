//! OctoFit Dashboard
//!
//! Browser build of the OctoFit Tracker dashboard, built with Leptos (WASM).
//!
//! # Architecture
//!
//! Client-side rendered: every resource page mounts a view, fetches its
//! collection straight from the OctoFit REST API, and renders the same
//! presentation model the server and CLI use.
//!
//! Build with `trunk serve`. The backend is picked at build time from
//! `CODESPACE_NAME` (or `OCTOFIT_API_BASE_URL`), and can be overridden in
//! local storage under `octofit_api_base_url`.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
