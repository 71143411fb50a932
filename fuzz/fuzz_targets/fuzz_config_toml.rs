#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Neither plain parsing nor the warning-collecting path may panic
        let _ = toml::from_str::<asset_sha::Config>(content);
        let _ = asset_sha::config::parse_with_warnings(content, Path::new("asset-sha.toml"));
    }
});
