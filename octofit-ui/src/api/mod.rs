//! API Client
//!
//! HTTP access to the OctoFit REST API.

pub mod client;

pub use client::{endpoint, fetch_collection};
