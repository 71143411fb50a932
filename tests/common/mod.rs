//! Common test utilities for asset-sha CLI and integration tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated working directory with a build output folder
//! - Fixtures: Reusable asset contents and their known digests

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
