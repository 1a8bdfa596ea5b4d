//! End-to-end engine tests: the scanning/aggregation contract from keyword
//! configuration down to ordered hits.

use std::borrow::Cow;

use notemark_core::config::KeywordConfig;
use notemark_core::errors::SourceError;
use notemark_core::source::{TextBuffer, TextSource};
use notemark_core::types::{OffsetRange, Position};
use notemark_engine::{EngineError, NotemarkEngine};

// ---- Helpers ----

/// Engine over the built-in fallback keywords (TODO/FIXME/NOTE → "notes").
fn default_engine() -> NotemarkEngine {
    NotemarkEngine::new(&KeywordConfig::new())
}

fn engine_from_json(json: &str) -> NotemarkEngine {
    NotemarkEngine::new(&KeywordConfig::from_json_str(json).unwrap())
}

/// A host source that always fails, standing in for a stale document.
struct StaleSource;

impl TextSource for StaleSource {
    fn text(&self, _range: Option<OffsetRange>) -> Result<Cow<'_, str>, SourceError> {
        Err(SourceError::Unavailable {
            reason: "document closed".to_string(),
        })
    }

    fn position_at(&self, offset: usize) -> Result<Position, SourceError> {
        Err(SourceError::OffsetOutOfBounds { offset, len: 0 })
    }

    fn line_text(&self, line: u32) -> Result<Cow<'_, str>, SourceError> {
        Err(SourceError::LineOutOfBounds {
            line,
            line_count: 0,
        })
    }
}

// ---- Word boundary ----

#[test]
fn keyword_does_not_match_inside_longer_identifiers() {
    let engine = default_engine();
    let buffer = TextBuffer::new("TODOS: x");
    assert!(engine.scan_keyword("TODO", &buffer, None).unwrap().is_empty());

    let buffer = TextBuffer::new("TODO: x");
    assert_eq!(engine.scan_keyword("TODO", &buffer, None).unwrap().len(), 1);
}

// ---- Delimiter semantics ----

#[test]
fn delimiter_is_matched_but_excluded_from_the_range() {
    let engine = default_engine();
    let buffer = TextBuffer::new("TODO: fix");
    let hits = engine.scan_keyword("TODO", &buffer, None).unwrap();

    assert_eq!(hits.len(), 1);
    let hit = &hits[0];
    assert_eq!(hit.range.start, Position::new(0, 0));
    assert_eq!(hit.range.end, Position::new(0, 4));
    assert_eq!(hit.comment, "TODO: fix");
    assert_eq!(hit.note, "fix");
    assert_eq!(hit.line_number, 1);
}

#[test]
fn missing_delimiter_means_no_match_by_default() {
    let engine = default_engine();
    let buffer = TextBuffer::new("TODO fix this");
    assert!(engine.scan_keyword("TODO", &buffer, None).unwrap().is_empty());
}

// ---- Case sensitivity ----

#[test]
fn matching_is_case_sensitive_by_default() {
    let engine = default_engine();
    let buffer = TextBuffer::new("todo: x");
    assert!(engine.scan_keyword("TODO", &buffer, None).unwrap().is_empty());
}

#[test]
fn case_insensitive_definitions_match_any_casing() {
    let engine = engine_from_json(r#"{ "TODO": { "caseSensitive": false } }"#);
    let buffer = TextBuffer::new("todo: x\nTodo: y\nTODO: z\n");
    assert_eq!(engine.scan_keyword("TODO", &buffer, None).unwrap().len(), 3);
}

// ---- Ordering ----

#[test]
fn group_results_are_sorted_by_line_with_stable_ties() {
    // Discovery order across the group is TODO@2, TODO@5, FIXME@2, FIXME@9;
    // on the tied line FIXME appears *before* TODO in the text.
    let engine = default_engine();
    let buffer = TextBuffer::new(
        "\nFIXME: b TODO: a\n\n\nTODO: c\n\n\n\nFIXME: d\n", // lines 2, 5, 9
    );

    let hits = engine.scan_group("notes", &buffer, None).unwrap();
    let lines: Vec<_> = hits.iter().map(|h| h.line_number).collect();
    assert_eq!(lines, [2, 2, 5, 9]);

    // Tie on line 2 keeps registry order: TODO's hit first, despite FIXME
    // sitting at column 0.
    let keywords: Vec<_> = hits.iter().map(|h| h.keyword.as_str()).collect();
    assert_eq!(keywords, ["TODO", "FIXME", "TODO", "FIXME"]);
    assert!(hits[0].position.column > hits[1].position.column);
}

#[test]
fn multiple_matches_on_one_line_stay_in_scan_order() {
    let engine = default_engine();
    let buffer = TextBuffer::new("TODO: one TODO: two");
    let hits = engine.scan_keyword("TODO", &buffer, None).unwrap();

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].note, "one TODO: two");
    assert_eq!(hits[1].note, "two");
    assert!(hits[0].position.column < hits[1].position.column);
}

// ---- Count/list consistency ----

#[test]
fn counts_equal_result_lengths() {
    let engine = default_engine();
    let buffer = TextBuffer::new(
        "TODO: a\ncode();\nFIXME: b // NOTE: c\nnothing\ntodo: not a match\nTODO: d\n",
    );

    for name in ["TODO", "FIXME", "NOTE", "UNKNOWN"] {
        let count = engine.count_keyword(name, &buffer, None).unwrap();
        let hits = engine.scan_keyword(name, &buffer, None).unwrap();
        assert_eq!(count, hits.len(), "count/list drift for keyword {name}");
    }

    for group in ["notes", "missing"] {
        let count = engine.count_group(group, &buffer, None).unwrap();
        let hits = engine.scan_group(group, &buffer, None).unwrap();
        assert_eq!(count, hits.len(), "count/list drift for group {group}");
    }

    assert_eq!(
        engine.count_all(&buffer, None).unwrap(),
        engine.scan_all(&buffer, None).unwrap().len()
    );
}

// ---- Sub-range scans ----

#[test]
fn ranged_scan_reports_document_coordinates() {
    let engine = default_engine();
    let buffer = TextBuffer::new("TODO: out\nTODO: in\nTODO: out\n");

    // Only the middle line.
    let range = OffsetRange::new(10, 18);
    let hits = engine.scan_keyword("TODO", &buffer, Some(range)).unwrap();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].position, Position::new(1, 0));
    assert_eq!(hits[0].line_number, 2);
    assert_eq!(hits[0].note, "in");
    assert_eq!(
        engine.count_keyword("TODO", &buffer, Some(range)).unwrap(),
        1
    );
}

#[test]
fn empty_effective_range_yields_identity_values() {
    let engine = default_engine();
    let buffer = TextBuffer::new("TODO: a");

    let empty = OffsetRange::new(3, 3);
    assert!(engine
        .scan_keyword("TODO", &buffer, Some(empty))
        .unwrap()
        .is_empty());

    let beyond = OffsetRange::new(100, 200);
    assert_eq!(engine.count_group("notes", &buffer, Some(beyond)).unwrap(), 0);
}

// ---- Empty input & unknown names ----

#[test]
fn empty_text_yields_identity_values() {
    let engine = default_engine();
    let buffer = TextBuffer::new("");

    assert!(engine.scan_keyword("TODO", &buffer, None).unwrap().is_empty());
    assert_eq!(engine.count_group("notes", &buffer, None).unwrap(), 0);
    assert!(engine.scan_all(&buffer, None).unwrap().is_empty());
}

#[test]
fn unknown_names_yield_identity_values_not_errors() {
    let engine = default_engine();
    let buffer = TextBuffer::new("TODO: a");

    assert!(engine.scan_keyword("NOPE", &buffer, None).unwrap().is_empty());
    assert_eq!(engine.count_keyword("NOPE", &buffer, None).unwrap(), 0);
    assert!(engine.scan_group("nope", &buffer, None).unwrap().is_empty());
    assert!(engine.list_keywords_in_group("nope").is_empty());
}

// ---- Group enumeration ----

#[test]
fn default_configuration_exposes_the_notes_group() {
    let engine = default_engine();
    assert_eq!(engine.list_groups(), ["notes"]);
    assert_eq!(
        engine.list_keywords_in_group("notes"),
        ["TODO", "FIXME", "NOTE"]
    );
}

#[test]
fn groups_enumerate_in_first_appearance_order() {
    let engine = engine_from_json(
        r#"{
            "HACK": { "group": "debt" },
            "TODO": { "group": "notes" },
            "XXX": { "group": "debt" },
            "LOOSE": {}
        }"#,
    );
    assert_eq!(engine.list_groups(), ["debt", "notes"]);
    assert_eq!(engine.list_keywords_in_group("debt"), ["HACK", "XXX"]);
}

// ---- Scan-all (ungrouped keywords included) ----

#[test]
fn scan_all_covers_ungrouped_keywords() {
    let engine = engine_from_json(
        r#"{
            "TODO": { "group": "notes" },
            "LOOSE": {}
        }"#,
    );
    let buffer = TextBuffer::new("LOOSE: a\nTODO: b\n");

    let all = engine.scan_all(&buffer, None).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].keyword, "LOOSE");
    assert_eq!(all[1].keyword, "TODO");

    // The group scan still excludes the ungrouped keyword.
    let grouped = engine.scan_group("notes", &buffer, None).unwrap();
    assert_eq!(grouped.len(), 1);
    assert_eq!(grouped[0].keyword, "TODO");
}

// ---- Idempotence ----

#[test]
fn repeated_scans_return_identical_hits() {
    let engine = default_engine();
    let buffer = TextBuffer::new("TODO: a\nFIXME: b\nNOTE: c\nTODO: d\n");

    let first = engine.scan_group("notes", &buffer, None).unwrap();
    let second = engine.scan_group("notes", &buffer, None).unwrap();
    assert_eq!(first, second);
}

// ---- Host failure propagation ----

#[test]
fn source_failures_propagate_as_hard_errors() {
    let engine = default_engine();

    let result = engine.scan_keyword("TODO", &StaleSource, None);
    assert!(matches!(
        result,
        Err(EngineError::Source(SourceError::Unavailable { .. }))
    ));

    let result = engine.count_group("notes", &StaleSource, None);
    assert!(result.is_err());
}
