//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Collaborators outside the core provide concrete implementations.

pub mod asset;
pub mod text_source;

pub use asset::Asset;
pub use text_source::{TextSource, UnsupportedContent};
