//! Accept-Language Preference Parsing
//!
//! Turns a raw `Accept-Language` style string (`fr-CH, fr;q=0.9, en;q=0.8`)
//! into weighted entries and orders them by client priority. The same syntax
//! is accepted from every source, so a query value or cookie holding a bare
//! `fr-FR` parses like a one-entry header.

/// One language preference with its quality value.
///
/// The tag borrows from the raw string it was parsed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreferenceEntry<'a> {
    /// Language tag exactly as the client wrote it
    pub tag: &'a str,
    /// Quality value in `(0, 1]`
    pub weight: f32,
}

impl<'a> PreferenceEntry<'a> {
    pub fn new(tag: &'a str, weight: f32) -> Self {
        Self { tag, weight }
    }
}

/// Parse a preference string into entries, in encounter order.
///
/// Segments that carry no usable language are dropped rather than failing
/// the whole string: blank segments, the `*` wildcard, parameters other than
/// `q=`, weights that are not an HTTP qvalue (`0` or `1` with at most three
/// decimals), and zero weights. Duplicate tags are kept as separate entries.
///
/// # Example
///
/// ```
/// use langpick_core::parse_preferences;
///
/// let entries = parse_preferences("en-US, fr;q=0.8, *;q=0.1, de;q=oops");
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].tag, "en-US");
/// assert_eq!(entries[1].weight, 0.8);
/// ```
pub fn parse_preferences(raw: &str) -> Vec<PreferenceEntry<'_>> {
    raw.split(',').filter_map(parse_segment).collect()
}

fn parse_segment(segment: &str) -> Option<PreferenceEntry<'_>> {
    let segment = segment.trim();
    if segment.is_empty() {
        return None;
    }

    let (tag, weight) = match segment.split_once(';') {
        Some((tag, params)) => (tag.trim(), parse_weight(params)?),
        None => (segment, 1.0),
    };

    if tag.is_empty() || tag == "*" {
        return None;
    }

    Some(PreferenceEntry::new(tag, weight))
}

fn parse_weight(params: &str) -> Option<f32> {
    let value = params.trim().strip_prefix("q=")?.trim();
    if !is_qvalue(value) {
        return None;
    }

    let weight: f32 = value.parse().ok()?;
    (weight > 0.0).then_some(weight)
}

/// `1` or `0` with up to three decimals (`1.000`, `0.5`, `0.125`).
fn is_qvalue(value: &str) -> bool {
    let (int, frac) = value.split_once('.').unwrap_or((value, ""));
    if frac.len() > 3 || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match int {
        "0" => true,
        "1" => frac.bytes().all(|b| b == b'0'),
        _ => false,
    }
}

/// Order entries by descending weight.
///
/// The sort is stable: entries with equal weight keep the order the client
/// listed them in.
pub fn rank_preferences(mut entries: Vec<PreferenceEntry<'_>>) -> Vec<PreferenceEntry<'_>> {
    entries.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    entries
}

/// Parse and rank in one step.
pub fn parse_ranked(raw: &str) -> Vec<PreferenceEntry<'_>> {
    rank_preferences(parse_preferences(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags<'a>(entries: &[PreferenceEntry<'a>]) -> Vec<&'a str> {
        entries.iter().map(|e| e.tag).collect()
    }

    #[test]
    fn test_parse_plain_tags_default_to_full_weight() {
        let entries = parse_preferences("en-US,fr");
        assert_eq!(
            entries,
            vec![PreferenceEntry::new("en-US", 1.0), PreferenceEntry::new("fr", 1.0)]
        );
    }

    #[test]
    fn test_parse_weights_and_whitespace() {
        let entries = parse_preferences(" zh-HK , zh;q=0.8,en-US; q=0.7 ,en ; q= 0.5");
        assert_eq!(tags(&entries), vec!["zh-HK", "zh", "en-US", "en"]);
        assert_eq!(entries[1].weight, 0.8);
        assert_eq!(entries[2].weight, 0.7);
        assert_eq!(entries[3].weight, 0.5);
    }

    #[test]
    fn test_parse_explicit_one() {
        let entries = parse_preferences("de;q=1");
        assert_eq!(entries, vec![PreferenceEntry::new("de", 1.0)]);
    }

    #[test]
    fn test_parse_drops_wildcard() {
        let entries = parse_preferences("fr-FR,*;q=0.1,*");
        assert_eq!(tags(&entries), vec!["fr-FR"]);
    }

    #[test]
    fn test_parse_skips_malformed_segments() {
        let entries = parse_preferences("en;q=abc,,;q=0.5,fr;level=1,de;q=0,it;q=1.5,es;q=NaN,pt;q=0.3");
        assert_eq!(entries, vec![PreferenceEntry::new("pt", 0.3)]);
    }

    #[test]
    fn test_parse_weight_grammar() {
        let rejected = [
            "en;q=1e-1", "en;q=.5", "en;q=+0.5", "en;q=0.50000", "en;q=1.0001", "en;q=1.5",
            "en;q=01", "en;q=0.", "en;q=0.00",
        ];
        for raw in rejected {
            assert!(parse_preferences(raw).is_empty(), "{} should be rejected", raw);
        }

        let weights: Vec<f32> = parse_preferences("a;q=1,b;q=1.000,c;q=0.5,d;q=0.125,e;q=1.")
            .iter()
            .map(|e| e.weight)
            .collect();
        assert_eq!(weights, vec![1.0, 1.0, 0.5, 0.125, 1.0]);
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let entries = parse_preferences("en;q=0.2,en;q=0.9");
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_parse_garbage_yields_nothing() {
        assert!(parse_preferences("").is_empty());
        assert!(parse_preferences("   ").is_empty());
        assert!(parse_preferences(",,;;,").is_empty());
    }

    #[test]
    fn test_parse_is_case_preserving() {
        let entries = parse_preferences("EN-us");
        assert_eq!(entries[0].tag, "EN-us");
    }

    #[test]
    fn test_rank_descending_weight() {
        let ranked = parse_ranked("de;q=0.3,fr;q=0.9,en");
        assert_eq!(tags(&ranked), vec!["en", "fr", "de"]);
    }

    #[test]
    fn test_rank_is_stable_on_ties() {
        let ranked = parse_ranked("a;q=0.5,b,c;q=0.5,d,e;q=0.5");
        assert_eq!(tags(&ranked), vec!["b", "d", "a", "c", "e"]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank_preferences(Vec::new()).is_empty());
    }
}
