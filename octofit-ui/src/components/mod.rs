//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod loading;
pub mod nav;
pub mod page_view;

pub use loading::Loading;
pub use nav::Nav;
pub use page_view::PageView;
