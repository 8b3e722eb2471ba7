//! JSON Pointer based filtering
//!
//! [`PointerFilter`] matches a single path through the document, expressed
//! as an RFC 6901 JSON Pointer. Property and element callbacks narrow the
//! filter to the remaining tail of the pointer; when the tail is exhausted
//! the matched value is included in full.

use std::fmt;
use std::sync::Arc;

use super::contract::{FilterDecision, TokenFilter};
use crate::error::{invalid_pointer, FilterResult};
use crate::tokens::ScalarValue;

/// One segment of a parsed pointer: the raw property name plus its numeric
/// interpretation when the segment is a canonical array index
#[derive(Debug, Clone, PartialEq, Eq)]
struct PointerSegment {
    raw: String,
    index: Option<usize>,
}

impl PointerSegment {
    fn new(raw: String) -> Self {
        // Canonical indexes only: "0", or digits without a leading zero
        let index = if raw == "0" || (!raw.is_empty() && !raw.starts_with('0')) {
            raw.parse::<usize>().ok()
        } else {
            None
        };
        Self { raw, index }
    }
}

/// Filter matching exactly one JSON Pointer path
///
/// Cheap to narrow: all tails share the parsed segment list and differ only
/// by offset.
#[derive(Debug, Clone)]
pub struct PointerFilter {
    segments: Arc<[PointerSegment]>,
    offset: usize,
}

impl PointerFilter {
    /// Parse a pointer expression such as `/a/0/b`
    ///
    /// The empty pointer matches the whole document. `~0` and `~1` escapes
    /// are decoded per RFC 6901.
    pub fn new(pointer: &str) -> FilterResult<Self> {
        if pointer.is_empty() {
            return Ok(Self {
                segments: Arc::from([]),
                offset: 0,
            });
        }
        let rest = pointer
            .strip_prefix('/')
            .ok_or_else(|| invalid_pointer(format!("pointer must start with '/': {pointer:?}")))?;
        let segments: FilterResult<Vec<PointerSegment>> = rest
            .split('/')
            .map(|seg| Ok(PointerSegment::new(unescape_segment(seg)?)))
            .collect();
        Ok(Self {
            segments: segments?.into(),
            offset: 0,
        })
    }

    /// Whether the remaining pointer is exhausted, i.e. fully matched
    #[inline]
    #[must_use]
    pub fn matches(&self) -> bool {
        self.offset >= self.segments.len()
    }

    fn head(&self) -> Option<&PointerSegment> {
        self.segments.get(self.offset)
    }

    fn tail(&self) -> Self {
        Self {
            segments: Arc::clone(&self.segments),
            offset: self.offset + 1,
        }
    }

    fn advance(&self, matched: bool) -> FilterDecision {
        if !matched {
            return FilterDecision::Skip;
        }
        let next = self.tail();
        if next.matches() {
            FilterDecision::IncludeAll
        } else {
            FilterDecision::Delegate(Arc::new(next))
        }
    }
}

impl TokenFilter for PointerFilter {
    fn include_element(&self, index: usize) -> FilterDecision {
        match self.head() {
            Some(seg) => self.advance(seg.index == Some(index)),
            None => FilterDecision::Skip,
        }
    }

    fn include_property(&self, name: &str) -> FilterDecision {
        match self.head() {
            Some(seg) => self.advance(seg.raw == name),
            None => FilterDecision::Skip,
        }
    }

    fn include_root_value(&self, _index: usize) -> FilterDecision {
        if self.matches() {
            FilterDecision::IncludeAll
        } else {
            FilterDecision::Descend
        }
    }

    fn include_value(&self, _value: &ScalarValue<'_>) -> bool {
        self.matches()
    }
}

impl fmt::Display for PointerFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for seg in &self.segments[self.offset..] {
            write!(f, "/{}", escape_segment(&seg.raw))?;
        }
        Ok(())
    }
}

fn unescape_segment(segment: &str) -> FilterResult<String> {
    if !segment.contains('~') {
        return Ok(segment.to_string());
    }
    let mut out = String::with_capacity(segment.len());
    let mut chars = segment.chars();
    while let Some(c) = chars.next() {
        if c != '~' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('0') => out.push('~'),
            Some('1') => out.push('/'),
            other => {
                return Err(invalid_pointer(format!(
                    "bad escape '~{}' in segment {segment:?}",
                    other.map_or(String::new(), String::from)
                )))
            }
        }
    }
    Ok(out)
}

fn escape_segment(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}
