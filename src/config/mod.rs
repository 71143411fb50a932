//! Configuration module for asset-sha
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ASSET_SHA_*)
//! 3. Config file (`--config` or `./asset-sha.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{apply_overrides, parse_with_warnings, ConfigWarning, CONFIG_FILE_NAME};
pub use types::Config;
