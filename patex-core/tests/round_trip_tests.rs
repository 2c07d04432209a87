// patex-core/tests/round_trip_tests.rs
//! End-to-end properties of the extract/integrate pair: round-trip
//! reconstruction, determinism, and insensitivity to how the reduced text
//! was wrapped in markup before integration.

use patex_core::{extract, integrate, Extractor, PatexError};

const SAMPLE: &str = "abc_pattern1_defg(hij_pattern2_klmn)";

/// Drops every `<...>` region so restored outputs with different taggings
/// can be compared on content alone.
fn strip_tags(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut inside_tag = false;
    for c in text.chars() {
        if c == '<' {
            inside_tag = true;
        } else if c == '>' {
            inside_tag = false;
        } else if !inside_tag {
            result.push(c);
        }
    }
    result
}

#[test]
fn round_trip_is_identity_without_markup() {
    let (reduced, records) = extract(SAMPLE, ["_pattern[0-9]_"]).unwrap();
    assert_eq!(integrate(&reduced, &records).unwrap(), SAMPLE);
}

#[test]
fn round_trip_with_overlapping_pattern_set() {
    let (reduced, records) = extract(SAMPLE, ["_pattern[0-9]_", r"\([^)]*\)"]).unwrap();
    assert_eq!(reduced, "abcdefg");
    assert_eq!(integrate(&reduced, &records).unwrap(), SAMPLE);
}

#[test]
fn round_trip_over_prose_with_dates() {
    let text = "The settlement was occupied from 1200 BC until 800 BC, \
                then abandoned around 550 BC.";
    let (reduced, records) = extract(text, [r"[0-9]+ BC"]).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(integrate(&reduced, &records).unwrap(), text);
}

#[test]
fn extraction_is_deterministic_across_runs() {
    let first = extract(SAMPLE, ["_pattern[0-9]_", r"\([^)]*\)"]).unwrap();
    let second = extract(SAMPLE, ["_pattern[0-9]_", r"\([^)]*\)"]).unwrap();
    assert_eq!(first.0, second.0);
    assert_eq!(first.1, second.1);
}

#[test]
fn integration_is_markup_insensitive() {
    let (reduced, records) = extract(SAMPLE, ["_pattern[0-9]_"]).unwrap();
    assert_eq!(reduced, "abcdefg(hijklmn)");

    // Content-equivalent wrappings of the reduced text. Whitespace stays
    // inside tags so the non-markup char sequence is preserved.
    let variants = [
        "abcdefg(hijklmn)".to_string(),
        "<doc>abcdefg(hijklmn)</doc>".to_string(),
        "<doc><w>abcdefg</w><w>(hijklmn)</w></doc>".to_string(),
        "abcdefg<br/>(hijklmn)".to_string(),
        "<doc\n  type=\"test\">abcdefg(hijklmn)</doc>".to_string(),
        "  <doc>abcdefg(hijklmn)</doc>\n".to_string(),
    ];

    for marked in &variants {
        let restored = integrate(marked, &records).unwrap();
        assert_eq!(strip_tags(&restored), SAMPLE, "variant: {marked}");
    }
}

#[test]
fn empty_input_laws() {
    assert_eq!(extract("", Vec::<&str>::new()).unwrap(), (String::new(), vec![]));
    assert_eq!(extract("", [""]).unwrap(), (String::new(), vec![]));
}

#[test]
fn malformed_pattern_is_rejected() {
    let err = extract("text", ["[unclosed"]).unwrap_err();
    assert!(matches!(err, PatexError::Fatal(_)));
    assert!(err.to_string().contains("[unclosed"));
}

#[test]
fn window_override_bounds_context() {
    let extractor = Extractor::from_sources(["_pattern[0-9]_"])
        .unwrap()
        .with_window(2);
    let (_, records) = extractor.extract(SAMPLE);
    assert_eq!(records[0].text_before, "bc");
    assert_eq!(records[0].text_after, "de");
}

#[test]
fn records_survive_serialization_between_stages() {
    let (reduced, records) = extract(SAMPLE, ["_pattern[0-9]_"]).unwrap();

    let mut buf = Vec::new();
    patex_core::write_records(&mut buf, &records).unwrap();
    let reloaded = patex_core::read_records(buf.as_slice()).unwrap();

    let marked = format!("<doc>{reduced}</doc>");
    let restored = integrate(&marked, &reloaded).unwrap();
    assert_eq!(strip_tags(&restored), SAMPLE);
}
