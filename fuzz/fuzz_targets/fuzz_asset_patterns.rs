#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    // First line is the pattern list, the rest are asset names
    let mut lines = input.lines();
    let patterns: Vec<&str> = lines.next().unwrap_or("").split(',').collect();

    if let Ok(compiled) = asset_sha::AssetPatterns::new(&patterns) {
        for name in lines {
            let _ = compiled.matches(name);
            let _ = asset_sha::extension_key(name);
        }
    }
});
