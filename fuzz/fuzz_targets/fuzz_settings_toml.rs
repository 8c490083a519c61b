#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use sysaudit::config::parse_with_warnings;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Unknown keys must become warnings, never panics
        let _ = parse_with_warnings(content, Path::new("sysaudit.toml"));
    }
});
