//! Shared support for filtering cursor tests
//!
//! Token-rendering helpers plus small purpose-built filters the scenario
//! and property suites compose.

// each test binary uses its own slice of this module
#![allow(dead_code)]

use std::cell::Cell;
use std::sync::Arc;

use tokensieve::{
    ActiveFilter, FilterDecision, FilteringCursor, ScalarValue, TokenFilter, TokenKind,
    TokenSource, ValueSource,
};

/// Drain the cursor, rendering every emitted token into a compact
/// shorthand string such as `{ "b" { "c" 2 } }`
pub fn render_all<S: TokenSource>(cursor: &mut FilteringCursor<S>) -> String {
    let mut parts: Vec<String> = Vec::new();
    while let Some(token) = cursor.next_token().expect("filtered read") {
        parts.push(render_token(cursor, token));
    }
    parts.join(" ")
}

fn render_token<S: TokenSource>(cursor: &FilteringCursor<S>, token: TokenKind) -> String {
    match token {
        TokenKind::StartObject => "{".to_string(),
        TokenKind::EndObject => "}".to_string(),
        TokenKind::StartArray => "[".to_string(),
        TokenKind::EndArray => "]".to_string(),
        TokenKind::PropertyName => format!("\"{}\"", cursor.current_name().unwrap_or("?")),
        TokenKind::ValueString => format!("\"{}\"", cursor.text().unwrap_or("?")),
        _ => cursor.text().unwrap_or("?").to_string(),
    }
}

/// Drain the cursor into the plain token kind sequence
pub fn collect_kinds<S: TokenSource>(cursor: &mut FilteringCursor<S>) -> Vec<TokenKind> {
    let mut kinds = Vec::new();
    while let Some(token) = cursor.next_token().expect("filtered read") {
        kinds.push(token);
    }
    kinds
}

/// Drain the cursor into (kind, text) pairs for order comparisons
pub fn collect_annotated<S: TokenSource>(
    cursor: &mut FilteringCursor<S>,
) -> Vec<(TokenKind, Option<String>)> {
    let mut tokens = Vec::new();
    while let Some(token) = cursor.next_token().expect("filtered read") {
        let text = match token {
            TokenKind::PropertyName => cursor.current_name().map(str::to_string),
            t if t.is_scalar() => cursor.text().map(str::to_string),
            _ => None,
        };
        tokens.push((token, text));
    }
    tokens
}

/// Walk a raw source into the same annotated form, without filtering
pub fn source_annotated(mut source: ValueSource) -> Vec<(TokenKind, Option<String>)> {
    let mut tokens = Vec::new();
    while let Some(token) = source.next_token().expect("source read") {
        let text = match token {
            TokenKind::PropertyName => source.current_name().map(str::to_string),
            t if t.is_scalar() => source.text().map(str::to_string),
            _ => None,
        };
        tokens.push((token, text));
    }
    tokens
}

/// Filter that keeps deciding child-by-child and accepts every scalar
#[derive(Debug)]
pub struct DescendAll;

impl TokenFilter for DescendAll {}

/// Filter that rejects every value outright
#[derive(Debug)]
pub struct RejectAll;

impl TokenFilter for RejectAll {
    fn include_element(&self, _index: usize) -> FilterDecision {
        FilterDecision::Skip
    }

    fn include_property(&self, _name: &str) -> FilterDecision {
        FilterDecision::Skip
    }

    fn include_root_value(&self, _index: usize) -> FilterDecision {
        FilterDecision::Skip
    }

    fn include_value(&self, _value: &ScalarValue<'_>) -> bool {
        false
    }
}

/// Like [`DescendAll`], but asks for empty containers to be synthesized
#[derive(Debug)]
pub struct AllowEmpty;

impl TokenFilter for AllowEmpty {
    fn include_empty_object(&self, _has_name: bool) -> bool {
        true
    }

    fn include_empty_array(&self, _has_index: bool) -> bool {
        true
    }
}

/// Filter matching a single property name, either including its value in
/// full or delegating to a child filter
#[derive(Debug)]
pub struct PropertyFilter {
    name: &'static str,
    child: Option<Arc<dyn TokenFilter>>,
}

impl PropertyFilter {
    pub fn terminal(name: &'static str) -> Self {
        Self { name, child: None }
    }

    pub fn nested(name: &'static str, child: impl TokenFilter + 'static) -> Self {
        Self {
            name,
            child: Some(Arc::new(child)),
        }
    }
}

impl TokenFilter for PropertyFilter {
    fn include_property(&self, name: &str) -> FilterDecision {
        if name != self.name {
            return FilterDecision::Skip;
        }
        match &self.child {
            None => FilterDecision::IncludeAll,
            Some(child) => FilterDecision::Delegate(Arc::clone(child)),
        }
    }

    fn include_value(&self, _value: &ScalarValue<'_>) -> bool {
        false
    }
}

/// Filter admitting every object property into a child filter
#[derive(Debug)]
pub struct AnyPropertyFilter {
    child: Arc<dyn TokenFilter>,
}

impl AnyPropertyFilter {
    pub fn new(child: impl TokenFilter + 'static) -> Self {
        Self {
            child: Arc::new(child),
        }
    }
}

impl TokenFilter for AnyPropertyFilter {
    fn include_property(&self, _name: &str) -> FilterDecision {
        FilterDecision::Delegate(Arc::clone(&self.child))
    }

    fn include_value(&self, _value: &ScalarValue<'_>) -> bool {
        false
    }
}

/// Filter admitting every array element into a child filter
#[derive(Debug)]
pub struct AnyElementFilter {
    child: Arc<dyn TokenFilter>,
}

impl AnyElementFilter {
    pub fn new(child: impl TokenFilter + 'static) -> Self {
        Self {
            child: Arc::new(child),
        }
    }
}

impl TokenFilter for AnyElementFilter {
    fn include_element(&self, _index: usize) -> FilterDecision {
        FilterDecision::Delegate(Arc::clone(&self.child))
    }

    fn include_value(&self, _value: &ScalarValue<'_>) -> bool {
        false
    }
}

/// Filter accepting every other scalar in stream order, starting with the
/// first
#[derive(Debug)]
pub struct EveryOtherScalar {
    seen: Cell<u64>,
}

impl EveryOtherScalar {
    pub fn new() -> Self {
        Self { seen: Cell::new(0) }
    }
}

impl TokenFilter for EveryOtherScalar {
    fn include_value(&self, _value: &ScalarValue<'_>) -> bool {
        let seen = self.seen.get();
        self.seen.set(seen + 1);
        seen % 2 == 0
    }
}

/// Filter accepting scalars by exact integral value
#[derive(Debug)]
pub struct IntValueFilter {
    accepted: i64,
}

impl IntValueFilter {
    pub fn new(accepted: i64) -> Self {
        Self { accepted }
    }
}

impl TokenFilter for IntValueFilter {
    fn include_value(&self, value: &ScalarValue<'_>) -> bool {
        matches!(value, ScalarValue::Int(i) if *i == self.accepted)
    }
}

/// Convenience for wrapping a filter into the runtime handle
pub fn custom(filter: impl TokenFilter + 'static) -> ActiveFilter {
    ActiveFilter::custom(filter)
}
