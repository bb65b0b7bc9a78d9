//! Property tests for resolution invariants.

use langpick::prelude::*;
use langpick::{match_tag, parse_preferences, parse_ranked};
use proptest::prelude::*;

fn tag() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{2}",
        "[a-z]{2}-[A-Z]{2}",
        Just("en".to_string()),
        Just("en-US".to_string()),
        Just("fr".to_string()),
    ]
}

fn supported_list() -> impl Strategy<Value = SupportedLanguages> {
    prop::collection::vec(tag(), 1..5)
        .prop_map(|tags| SupportedLanguages::new(tags).expect("generated tags are valid"))
}

/// Preference strings mixing valid entries, weights, wildcards and junk.
fn preference_string() -> impl Strategy<Value = String> {
    let segment = prop_oneof![
        tag(),
        (tag(), 1u32..=1000).prop_map(|(t, q)| format!("{t};q={}", q as f32 / 1000.0)),
        Just("*".to_string()),
        Just("*;q=0.1".to_string()),
        Just(";q=0.5".to_string()),
        Just(" ".to_string()),
        "[ -~]{0,8}",
    ];
    prop::collection::vec(segment, 0..6).prop_map(|segments| segments.join(","))
}

proptest! {
    /// The resolved tag is always one of the supported tags.
    #[test]
    fn result_is_supported(
        supported in supported_list(),
        query in prop::option::of(preference_string()),
        cookie in prop::option::of(preference_string()),
        header in prop::option::of(preference_string()),
    ) {
        let inputs = PreferenceInputs::new(query.as_deref(), cookie.as_deref(), header.as_deref());
        let tag = resolve(&supported, &inputs);
        prop_assert!(supported.contains(tag));
    }

    /// With a query present, even an empty one, cookie and header never
    /// change the result.
    #[test]
    fn query_suppresses_other_sources(
        supported in supported_list(),
        query in "[a-zA-Z,;=. *-]{0,20}",
        cookie in prop::option::of(preference_string()),
        header in prop::option::of(preference_string()),
    ) {
        let alone = PreferenceInputs::default().with_query(&query);
        let full = PreferenceInputs::new(Some(&query), cookie.as_deref(), header.as_deref());
        prop_assert_eq!(resolve(&supported, &alone), resolve(&supported, &full));
    }

    /// Any exact match in a source beats every loose match in it.
    #[test]
    fn exact_beats_loose(supported in supported_list(), raw in preference_string()) {
        let ranked = parse_ranked(&raw);
        let has_exact = ranked.iter().any(|e| supported.contains(e.tag));
        if let Some(found) = match_tag(&ranked, &supported) {
            prop_assert_eq!(found.kind == MatchKind::Exact, has_exact);
        } else {
            prop_assert!(!has_exact);
        }
    }

    /// Parsed weights always lie in (0, 1] and wildcards never survive.
    #[test]
    fn parsed_entries_are_well_formed(raw in preference_string()) {
        for entry in parse_preferences(&raw) {
            prop_assert!(entry.weight > 0.0 && entry.weight <= 1.0);
            prop_assert!(!entry.tag.is_empty());
            prop_assert_ne!(entry.tag, "*");
        }
    }

    /// Resolution is a pure function of its inputs.
    #[test]
    fn resolution_is_idempotent(
        supported in supported_list(),
        cookie in prop::option::of(preference_string()),
        header in prop::option::of(preference_string()),
    ) {
        let inputs = PreferenceInputs::new(None, cookie.as_deref(), header.as_deref());
        prop_assert_eq!(resolve_detailed(&supported, &inputs), resolve_detailed(&supported, &inputs));
    }
}
