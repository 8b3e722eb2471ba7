//! Structural properties of the filtered stream
//!
//! These tests pin down the contracts that hold for any filter and
//! inclusion mode: identity under the include-all sentinel, prefix-balanced
//! output, order preservation relative to the upstream stream, the
//! single-match budget, and the per-mode emission rules.

mod common;

use serde_json::{json, Value};

use common::{
    collect_annotated, collect_kinds, custom, source_annotated, AnyPropertyFilter, DescendAll,
    PropertyFilter,
};
use tokensieve::{
    ActiveFilter, FilteringCursor, Inclusion, PointerFilter, TokenKind, ValueSource,
};

fn documents() -> Vec<Value> {
    vec![
        json!(1),
        json!("lone"),
        json!([1, 2, [3, 4], 5]),
        json!({"a": 1, "b": {"c": 2, "d": 3}}),
        json!({"a": [1, {"b": 2}], "c": 3}),
        json!({"a": [{"x": 1}, {"x": 2}], "b": true}),
    ]
}

fn assert_prefix_balanced(kinds: &[TokenKind]) {
    let mut open = Vec::new();
    for kind in kinds {
        match kind {
            TokenKind::StartObject | TokenKind::StartArray => open.push(*kind),
            TokenKind::EndObject => {
                assert_eq!(open.pop(), Some(TokenKind::StartObject), "unbalanced object");
            }
            TokenKind::EndArray => {
                assert_eq!(open.pop(), Some(TokenKind::StartArray), "unbalanced array");
            }
            _ => {}
        }
    }
    assert!(open.is_empty(), "unclosed containers: {open:?}");
}

fn is_subsequence<T: PartialEq>(needle: &[T], haystack: &[T]) -> bool {
    let mut position = 0;
    for item in needle {
        match haystack[position..].iter().position(|h| h == item) {
            Some(offset) => position += offset + 1,
            None => return false,
        }
    }
    true
}

#[test]
fn sentinel_filter_is_identity() {
    for doc in documents() {
        for inclusion in [
            Inclusion::OnlyIncludeAll,
            Inclusion::IncludeAllAndPath,
            Inclusion::IncludeNonNull,
        ] {
            for multiple in [false, true] {
                let mut cursor = FilteringCursor::new(
                    ValueSource::new(&doc),
                    ActiveFilter::IncludeAll,
                    inclusion,
                    multiple,
                );
                assert_eq!(
                    collect_annotated(&mut cursor),
                    source_annotated(ValueSource::new(&doc)),
                    "identity failed for {doc} under {inclusion:?}",
                );
            }
        }
    }
}

#[test]
fn descend_all_with_path_reconstructs_the_document() {
    // no empty containers in these documents, so every token re-earns its
    // place through a matched descendant
    for doc in documents() {
        let mut cursor = FilteringCursor::new(
            ValueSource::new(&doc),
            custom(DescendAll),
            Inclusion::IncludeAllAndPath,
            true,
        );
        assert_eq!(
            collect_annotated(&mut cursor),
            source_annotated(ValueSource::new(&doc)),
            "reconstruction failed for {doc}",
        );
    }
}

#[test]
fn output_is_prefix_balanced() {
    for doc in documents() {
        for inclusion in [
            Inclusion::OnlyIncludeAll,
            Inclusion::IncludeAllAndPath,
            Inclusion::IncludeNonNull,
        ] {
            for multiple in [false, true] {
                let filter = custom(AnyPropertyFilter::new(PropertyFilter::terminal("x")));
                let mut cursor =
                    FilteringCursor::new(ValueSource::new(&doc), filter, inclusion, multiple);
                assert_prefix_balanced(&collect_kinds(&mut cursor));
            }
        }
    }
}

#[test]
fn output_is_a_subsequence_of_the_input() {
    let doc = json!({"a": 1, "b": {"c": 2, "d": 3}});
    let upstream = source_annotated(ValueSource::new(&doc));
    for inclusion in [Inclusion::OnlyIncludeAll, Inclusion::IncludeAllAndPath] {
        let filter = custom(PointerFilter::new("/b/c").expect("valid pointer"));
        let mut cursor = FilteringCursor::new(ValueSource::new(&doc), filter, inclusion, false);
        let emitted = collect_annotated(&mut cursor);
        assert!(
            is_subsequence(&emitted, &upstream),
            "{emitted:?} is not a subsequence of {upstream:?}",
        );
    }
}

#[test]
fn single_match_budget_admits_one_acceptance() {
    let doc = json!({"a": [{"x": 1}, {"x": 2}], "b": true});
    let filter = custom(AnyPropertyFilter::new(PropertyFilter::terminal("x")));
    let mut cursor = FilteringCursor::new(
        ValueSource::new(&doc),
        filter,
        Inclusion::IncludeAllAndPath,
        false,
    );
    let _ = collect_kinds(&mut cursor);
    assert_eq!(cursor.match_count(), 1);
}

#[test]
fn match_count_reports_every_budgeted_acceptance() {
    let doc = json!([1, 2, [3, 4], 5]);
    let mut cursor = FilteringCursor::new(
        ValueSource::new(&doc),
        custom(DescendAll),
        Inclusion::OnlyIncludeAll,
        true,
    );
    let emitted = collect_kinds(&mut cursor);
    assert_eq!(emitted.len(), 5);
    assert_eq!(cursor.match_count(), 5);
}

#[test]
fn non_null_mode_never_emits_null() {
    let doc = json!({"a": null, "b": {"c": null, "d": 1}, "e": [null, 2]});
    let mut cursor = FilteringCursor::new(
        ValueSource::new(&doc),
        custom(DescendAll),
        Inclusion::IncludeNonNull,
        true,
    );
    let kinds = collect_kinds(&mut cursor);
    assert!(!kinds.contains(&TokenKind::ValueNull), "null leaked: {kinds:?}");
    assert!(kinds.contains(&TokenKind::ValueInt));
}

#[test]
fn only_include_all_suppresses_structure() {
    let doc = json!({"a": 1, "b": {"c": 2, "d": 3}});
    let filter = custom(PointerFilter::new("/b/c").expect("valid pointer"));
    let mut cursor = FilteringCursor::new(
        ValueSource::new(&doc),
        filter,
        Inclusion::OnlyIncludeAll,
        true,
    );
    let kinds = collect_kinds(&mut cursor);
    assert_eq!(kinds, vec![TokenKind::ValueInt]);
}

#[test]
fn replay_happens_before_further_live_tokens() {
    let doc = json!({"a": {"b": {"c": 7}}});
    let filter = custom(PointerFilter::new("/a/b/c").expect("valid pointer"));
    let mut cursor = FilteringCursor::new(
        ValueSource::new(&doc),
        filter,
        Inclusion::IncludeAllAndPath,
        false,
    );
    let emitted = collect_kinds(&mut cursor);
    assert_eq!(
        emitted,
        vec![
            TokenKind::StartObject,
            TokenKind::PropertyName,
            TokenKind::StartObject,
            TokenKind::PropertyName,
            TokenKind::StartObject,
            TokenKind::PropertyName,
            TokenKind::ValueInt,
            TokenKind::EndObject,
            TokenKind::EndObject,
            TokenKind::EndObject,
        ],
    );
    assert!(cursor.stats().tokens_replayed >= 6);
}
