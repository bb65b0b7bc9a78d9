//! Fuzz target for source resolution.
//!
//! Whatever the request sends, the result is a supported tag and a present
//! query is the only source consulted.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use langpick_core::{PreferenceInputs, Source, SupportedLanguages, resolve_detailed};

#[derive(Debug, Arbitrary)]
struct FuzzRequest {
    supported: String,
    query: Option<String>,
    cookie: Option<String>,
    header: Option<String>,
}

fuzz_target!(|data: FuzzRequest| {
    // Unusable lists are rejected up front
    let Ok(supported) = SupportedLanguages::parse(&data.supported) else {
        return;
    };

    let inputs = PreferenceInputs::new(
        data.query.as_deref(),
        data.cookie.as_deref(),
        data.header.as_deref(),
    );
    let resolution = resolve_detailed(&supported, &inputs);
    assert!(supported.contains(resolution.tag));

    if inputs.get(Source::Query).is_some() {
        assert_eq!(resolution.source, Some(Source::Query));
    }
    if resolution.is_default() {
        assert_eq!(resolution.tag, supported.default_tag());
    }
});
