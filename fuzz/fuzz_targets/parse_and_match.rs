#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (String, String)| {
    let (template, url) = data;

    // parse is total and matching never panics
    let pattern = urlpat::Pattern::parse(&template);

    if let Some(map) = pattern.find(&url) {
        for (key, value) in map.iter() {
            assert!(!value.is_empty(), "empty capture for variable {:?}", key);
        }
    }

    // serializing reaches a canonical form that still parses
    let _ = urlpat::Pattern::parse(&pattern.to_string());
});
