//! # OctoFit
//!
//! Read-only dashboard for the OctoFit Tracker REST API.
//!
//! Five views (activities, leaderboard, teams, users, workouts) each fetch a
//! collection from the backend once per mount and render it in one of three
//! states: loading, failed, or ready.
//!
//! ## Modules
//!
//! - [`resource`]: The five resources and their labels
//! - [`endpoint`]: Backend URL construction
//! - [`source`]: Collection fetching over HTTP
//! - [`normalize`]: Paginated envelope handling
//! - [`fields`]: First-match-wins field resolution
//! - [`view`]: Per-view state and lifecycle
//! - [`render`]: Presentation model and text output
//! - [`web`]: Server-rendered dashboard with Axum
//!
//! Everything that needs a native runtime sits behind the default `server`
//! feature. With it disabled the crate builds for `wasm32` and backs the
//! browser app in `octofit-ui`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use octofit::{build_page, endpoint_url, render_text, view, Config, HttpSource, Resource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env();
//!     let source = HttpSource::new(&config.backend)?;
//!
//!     let url = endpoint_url(&config.backend, Resource::Leaderboard);
//!     let view = view::load(Resource::Leaderboard, url, &source).await;
//!
//!     let page = build_page(Resource::Leaderboard, view.state());
//!     print!("{}", render_text(Resource::Leaderboard, &page));
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod endpoint;
pub mod fields;
#[cfg(feature = "server")]
pub mod logging;
pub mod normalize;
pub mod render;
pub mod resource;
pub mod source;
pub mod view;
#[cfg(feature = "server")]
pub mod web;

pub use config::{BackendConfig, Config, ConfigError, LoggingConfig, ServerConfig};

pub use endpoint::endpoint_url;

pub use normalize::normalize_collection;

pub use render::{build_page, text::render_text, Page};

pub use resource::{Resource, UnknownResource};

pub use source::{CollectionSource, FetchError};

#[cfg(feature = "server")]
pub use source::HttpSource;

pub use view::{FetchTicket, Phase, ResourceView, Settled, ViewState};

#[cfg(feature = "server")]
pub use web::{build_router, serve, AppState, WebError};
