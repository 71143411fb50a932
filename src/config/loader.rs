//! Configuration loading

use std::fs;
use std::path::Path;

use crate::error::{ManifestError, ManifestResult};

use super::types::Config;

pub use crate::domain::value_objects::ConfigWarning;

/// File looked up in the working directory when no `--config` is given
pub const CONFIG_FILE_NAME: &str = "asset-sha.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ManifestResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse TOML `content`; `path` is only used for diagnostics.
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> ManifestResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ManifestError::ConfigFile {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `asset-sha.toml` from `dir`, or defaults when the file is absent.
///
/// A file that exists but fails to parse is an error.
pub fn load_or_default(dir: &Path) -> ManifestResult<(Config, Vec<ConfigWarning>)> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        load_with_warnings(&path)
    } else {
        Ok((Config::default(), Vec::new()))
    }
}

/// Apply environment variable overrides (ASSET_SHA_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // ASSET_SHA_PATTERNS (comma-separated)
    if let Some(patterns) = lookup("ASSET_SHA_PATTERNS") {
        config.asset_patterns = patterns
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
    }

    if let Some(algorithm) = lookup("ASSET_SHA_ALGORITHM") {
        config.hashing_algorithm = algorithm.trim().to_string();
    }

    if let Some(out_file) = lookup("ASSET_SHA_OUT_FILE") {
        config.out_file = out_file;
    }

    if let Some(val) = lookup("ASSET_SHA_COMPACT") {
        config.compact = val.to_lowercase() != "false" && val != "0";
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["asset_patterns", "hashing_algorithm", "out_file", "compact"];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
