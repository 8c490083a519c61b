#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use sysaudit::infrastructure::repositories::{parse_definitions, DefinitionFormat};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let _ = parse_definitions(content, DefinitionFormat::Json, Path::new("fuzz.json"));
    }
});
