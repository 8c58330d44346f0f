//! Provider client implementations.
//!
//! Each module provides a struct implementing
//! [`crate::provider::ProviderClient`] that queries one search backend's
//! JSON API and adapts its response shape into [`crate::types::SearchHit`].

pub mod brave;
pub mod serper;

pub use brave::BraveClient;
pub use serper::SerperClient;
