//! Presentation Layer
//!
//! Command-line parsing for the `asset-sha` binary.

pub mod cli;

pub use cli::{Cli, Commands, GenerateArgs};
