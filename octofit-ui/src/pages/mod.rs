//! Pages
//!
//! Top-level route components.

pub mod home;
pub mod resource;

pub use home::Home;
pub use resource::ResourcePage;
