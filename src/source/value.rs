//! Token source over a materialized `serde_json::Value`
//!
//! Flattens a document into an event list once and then replays it as a
//! forward token stream. Numbers keep the rendering `serde_json` gives
//! them so the textual accessors agree with the document.

use serde_json::Value;

use crate::error::FilterResult;
use crate::tokens::{ScalarValue, TokenKind};

use super::TokenSource;

#[derive(Debug, Clone)]
enum OwnedScalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl OwnedScalar {
    fn view(&self) -> ScalarValue<'_> {
        match self {
            OwnedScalar::Str(s) => ScalarValue::Str(s),
            OwnedScalar::Int(i) => ScalarValue::Int(*i),
            OwnedScalar::Float(f) => ScalarValue::Float(*f),
            OwnedScalar::Bool(b) => ScalarValue::Bool(*b),
            OwnedScalar::Null => ScalarValue::Null,
        }
    }
}

#[derive(Debug, Clone)]
struct Event {
    kind: TokenKind,
    text: Option<String>,
    scalar: Option<OwnedScalar>,
}

impl Event {
    fn marker(kind: TokenKind) -> Self {
        Self {
            kind,
            text: None,
            scalar: None,
        }
    }

    fn name(name: &str) -> Self {
        Self {
            kind: TokenKind::PropertyName,
            text: Some(name.to_string()),
            scalar: None,
        }
    }

    fn scalar(kind: TokenKind, text: String, scalar: OwnedScalar) -> Self {
        Self {
            kind,
            text: Some(text),
            scalar: Some(scalar),
        }
    }
}

/// Forward token cursor over a flattened JSON document
#[derive(Debug)]
pub struct ValueSource {
    events: Vec<Event>,
    next: usize,
    current: Option<usize>,
}

impl ValueSource {
    /// Flatten `value` into a token stream positioned before its first token
    #[must_use]
    pub fn new(value: &Value) -> Self {
        let mut events = Vec::new();
        flatten(value, &mut events);
        Self {
            events,
            next: 0,
            current: None,
        }
    }

    /// Parse a JSON document and flatten it
    pub fn parse(json: &str) -> FilterResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::new(&value))
    }

    fn current_event(&self) -> Option<&Event> {
        self.current.map(|i| &self.events[i])
    }
}

fn flatten(value: &Value, events: &mut Vec<Event>) {
    match value {
        Value::Null => events.push(Event::scalar(
            TokenKind::ValueNull,
            "null".to_string(),
            OwnedScalar::Null,
        )),
        Value::Bool(b) => events.push(Event::scalar(
            if *b { TokenKind::ValueTrue } else { TokenKind::ValueFalse },
            b.to_string(),
            OwnedScalar::Bool(*b),
        )),
        Value::Number(n) => {
            let (kind, scalar) = if let Some(i) = n.as_i64() {
                (TokenKind::ValueInt, OwnedScalar::Int(i))
            } else {
                (TokenKind::ValueFloat, OwnedScalar::Float(n.as_f64().unwrap_or(f64::NAN)))
            };
            events.push(Event::scalar(kind, n.to_string(), scalar));
        }
        Value::String(s) => events.push(Event::scalar(
            TokenKind::ValueString,
            s.clone(),
            OwnedScalar::Str(s.clone()),
        )),
        Value::Array(items) => {
            events.push(Event::marker(TokenKind::StartArray));
            for item in items {
                flatten(item, events);
            }
            events.push(Event::marker(TokenKind::EndArray));
        }
        Value::Object(map) => {
            events.push(Event::marker(TokenKind::StartObject));
            for (name, item) in map {
                events.push(Event::name(name));
                flatten(item, events);
            }
            events.push(Event::marker(TokenKind::EndObject));
        }
    }
}

impl TokenSource for ValueSource {
    fn next_token(&mut self) -> FilterResult<Option<TokenKind>> {
        if self.next < self.events.len() {
            self.current = Some(self.next);
            self.next += 1;
            Ok(self.current_token())
        } else {
            self.current = None;
            Ok(None)
        }
    }

    fn current_token(&self) -> Option<TokenKind> {
        self.current_event().map(|e| e.kind)
    }

    fn current_name(&self) -> Option<&str> {
        let event = self.current_event()?;
        if event.kind == TokenKind::PropertyName {
            event.text.as_deref()
        } else {
            None
        }
    }

    fn text(&self) -> Option<&str> {
        self.current_event().and_then(|e| e.text.as_deref())
    }

    fn has_text_characters(&self) -> bool {
        matches!(
            self.current_event().map(|e| e.kind),
            Some(TokenKind::ValueString) | Some(TokenKind::PropertyName)
        )
    }

    fn scalar(&self) -> Option<ScalarValue<'_>> {
        self.current_event()?.scalar.as_ref().map(OwnedScalar::view)
    }

    fn value_as_str(&self) -> Option<&str> {
        let event = self.current_event()?;
        match event.scalar {
            Some(OwnedScalar::Null) | None => None,
            Some(_) => event.text.as_deref(),
        }
    }

    fn skip_children(&mut self) -> FilterResult<()> {
        if !matches!(self.current_token(), Some(t) if t.is_struct_start()) {
            return Ok(());
        }
        let mut open = 1usize;
        while open > 0 {
            match self.next_token()? {
                Some(t) if t.is_struct_start() => open += 1,
                Some(t) if t.is_struct_end() => open -= 1,
                Some(_) => {}
                // flattened documents are always balanced
                None => break,
            }
        }
        Ok(())
    }
}
