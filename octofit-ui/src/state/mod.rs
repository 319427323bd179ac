//! View State
//!
//! Reactive wrappers around the library's view lifecycle.

pub mod view;

pub use view::ViewHandle;
