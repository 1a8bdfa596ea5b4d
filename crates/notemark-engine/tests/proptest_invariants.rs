//! Property-based tests for the engine's structural invariants.
//!
//! Uses proptest to fuzz-verify:
//!   - count == results.len() for keywords, groups, and the full set
//!   - returned sequences are non-decreasing in line number
//!   - repeated identical calls return structurally identical hits
//!   - word-boundary matching never fires inside longer identifiers

use proptest::prelude::*;

use notemark_core::config::KeywordConfig;
use notemark_core::source::TextBuffer;
use notemark_engine::NotemarkEngine;

fn default_engine() -> NotemarkEngine {
    NotemarkEngine::new(&KeywordConfig::new())
}

proptest! {
    /// Counting and listing share one scan primitive, so they can never
    /// disagree, for any text, keyword, or group.
    #[test]
    fn prop_count_equals_results_len(text in "[A-Za-z :\n]{0,200}") {
        let engine = default_engine();
        let buffer = TextBuffer::new(text);

        for name in ["TODO", "FIXME", "NOTE", "MISSING"] {
            let count = engine.count_keyword(name, &buffer, None).unwrap();
            let hits = engine.scan_keyword(name, &buffer, None).unwrap();
            prop_assert_eq!(count, hits.len());
        }

        let count = engine.count_group("notes", &buffer, None).unwrap();
        let hits = engine.scan_group("notes", &buffer, None).unwrap();
        prop_assert_eq!(count, hits.len());

        let count = engine.count_all(&buffer, None).unwrap();
        let hits = engine.scan_all(&buffer, None).unwrap();
        prop_assert_eq!(count, hits.len());
    }

    /// Every returned sequence is non-decreasing in line number, and every
    /// line number is >= 1.
    #[test]
    fn prop_hits_ordered_by_line(text in "(TODO|FIXME|NOTE|code|:| |\n){0,120}") {
        let engine = default_engine();
        let buffer = TextBuffer::new(text);

        let hits = engine.scan_all(&buffer, None).unwrap();
        for pair in hits.windows(2) {
            prop_assert!(pair[0].line_number <= pair[1].line_number);
        }
        prop_assert!(hits.iter().all(|hit| hit.line_number >= 1));
    }

    /// Scanning is idempotent: unchanged text and configuration produce
    /// structurally identical sequences.
    #[test]
    fn prop_scans_are_idempotent(text in "[A-Z a-z:\n]{0,160}") {
        let engine = default_engine();
        let buffer = TextBuffer::new(text);

        let first = engine.scan_group("notes", &buffer, None).unwrap();
        let second = engine.scan_group("notes", &buffer, None).unwrap();
        prop_assert_eq!(first, second);
    }

    /// A keyword glued to a preceding word character is part of a longer
    /// identifier and must not match.
    #[test]
    fn prop_no_match_inside_identifiers(prefix in "[a-z0-9_]{1,8}") {
        let engine = default_engine();
        let buffer = TextBuffer::new(format!("{prefix}TODO: x"));
        let hits = engine.scan_keyword("TODO", &buffer, None).unwrap();
        prop_assert!(hits.is_empty());
    }
}
