//! Asset patterns value object
//!
//! Compiles the configured glob patterns and matches them against the base
//! file name of an asset. Directory segments never take part in matching.

use super::glob_pattern::GlobPattern;
use crate::error::{ManifestError, ManifestResult};

/// Pattern selected when none is configured
pub const DEFAULT_ASSET_PATTERN: &str = "*.css";

/// Extension matched by [`DEFAULT_ASSET_PATTERN`]
const DEFAULT_EXTENSION: &str = ".css";

/// Compiled list of base-name glob patterns.
///
/// An asset is selected when any pattern matches. See [`GlobPattern`] for
/// the syntax, including extglob groups, negation and the leading-dot rule.
#[derive(Debug, Clone)]
pub struct AssetPatterns {
    patterns: Vec<GlobPattern>,
}

impl Default for AssetPatterns {
    fn default() -> Self {
        Self {
            patterns: vec![GlobPattern::suffix(DEFAULT_EXTENSION)],
        }
    }
}

impl AssetPatterns {
    /// Compile a list of patterns.
    ///
    /// Returns `InvalidConfiguration` for a pattern with broken syntax.
    pub fn new<I, S>(patterns: I) -> ManifestResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                GlobPattern::new(pattern).map_err(|e| ManifestError::InvalidConfiguration {
                    option: "asset_patterns",
                    message: format!("'{}': {}", pattern, e),
                })
            })
            .collect::<ManifestResult<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// A pattern set that selects nothing.
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Whether the base name of `asset_name` matches at least one pattern
    pub fn matches(&self, asset_name: &str) -> bool {
        let name = base_name(asset_name);
        self.patterns.iter().any(|pattern| pattern.matches(name))
    }

    /// Source patterns, in configured order
    pub fn patterns(&self) -> Vec<&str> {
        self.patterns.iter().map(GlobPattern::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Final `/`-separated segment of an asset name.
///
/// Trailing separators are ignored, so `css/` yields `css`.
pub fn base_name(asset_name: &str) -> &str {
    let trimmed = asset_name.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Extension of the base name, leading dot included.
///
/// Empty when there is no extension. A dot that only starts the name
/// (`.htaccess`) does not begin an extension.
pub fn extension_key(asset_name: &str) -> &str {
    let base = base_name(asset_name);
    let leading_dots = base.len() - base.trim_start_matches('.').len();
    match base.rfind('.') {
        Some(idx) if idx >= leading_dots => &base[idx..],
        _ => "",
    }
}
