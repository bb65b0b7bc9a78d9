//! Fuzz target for preference string parsing.
//!
//! Parsing must never panic and must only yield usable entries.

#![no_main]

use libfuzzer_sys::fuzz_target;

use langpick_core::{parse_preferences, parse_ranked};

fuzz_target!(|data: &str| {
    let entries = parse_preferences(data);
    for entry in &entries {
        assert!(!entry.tag.is_empty());
        assert_ne!(entry.tag, "*");
        assert!(entry.weight > 0.0 && entry.weight <= 1.0);
        // Tags borrow from the input
        assert!(data.contains(entry.tag));
    }

    let ranked = parse_ranked(data);
    assert_eq!(ranked.len(), entries.len());
    assert!(ranked.windows(2).all(|w| w[0].weight >= w[1].weight));
});
