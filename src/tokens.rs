//! Token definitions for the filtered event stream
//!
//! Defines the token kinds produced by an upstream cursor and re-exposed by
//! the filtering cursor, plus utility predicates for token classification.
//! Tokens carry no payload; names and scalar content stay in the upstream
//! source and are reached through its accessors.

/// Token id reported when no token is current.
pub const ID_NO_TOKEN: u8 = 0;

/// Kinds of tokens in a structured event stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Start of an object value ({)
    StartObject,
    /// End of an object value (})
    EndObject,
    /// Start of an array value ([)
    StartArray,
    /// End of an array value (])
    EndArray,
    /// Property name within an object
    PropertyName,
    /// String scalar value
    ValueString,
    /// Integral number scalar value
    ValueInt,
    /// Floating-point number scalar value
    ValueFloat,
    /// Boolean true scalar value
    ValueTrue,
    /// Boolean false scalar value
    ValueFalse,
    /// Null scalar value
    ValueNull,
}

impl TokenKind {
    /// Stable numeric id for this token kind, never [`ID_NO_TOKEN`]
    #[inline]
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            TokenKind::StartObject => 1,
            TokenKind::EndObject => 2,
            TokenKind::StartArray => 3,
            TokenKind::EndArray => 4,
            TokenKind::PropertyName => 5,
            TokenKind::ValueString => 6,
            TokenKind::ValueInt => 7,
            TokenKind::ValueFloat => 8,
            TokenKind::ValueTrue => 9,
            TokenKind::ValueFalse => 10,
            TokenKind::ValueNull => 11,
        }
    }

    /// Check if token is a scalar (leaf) value
    #[inline]
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        matches!(
            self,
            TokenKind::ValueString
                | TokenKind::ValueInt
                | TokenKind::ValueFloat
                | TokenKind::ValueTrue
                | TokenKind::ValueFalse
                | TokenKind::ValueNull
        )
    }

    /// Check if token opens a container
    #[inline]
    #[must_use]
    pub const fn is_struct_start(self) -> bool {
        matches!(self, TokenKind::StartObject | TokenKind::StartArray)
    }

    /// Check if token closes a container
    #[inline]
    #[must_use]
    pub const fn is_struct_end(self) -> bool {
        matches!(self, TokenKind::EndObject | TokenKind::EndArray)
    }

    /// Check if token is a boolean scalar
    #[inline]
    #[must_use]
    pub const fn is_boolean(self) -> bool {
        matches!(self, TokenKind::ValueTrue | TokenKind::ValueFalse)
    }

    /// Check if token is a numeric scalar
    #[inline]
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, TokenKind::ValueInt | TokenKind::ValueFloat)
    }

    /// Get string representation for debugging
    #[must_use]
    pub const fn as_debug_str(self) -> &'static str {
        match self {
            TokenKind::StartObject => "{",
            TokenKind::EndObject => "}",
            TokenKind::StartArray => "[",
            TokenKind::EndArray => "]",
            TokenKind::PropertyName => "name",
            TokenKind::ValueString => "string",
            TokenKind::ValueInt => "int",
            TokenKind::ValueFloat => "float",
            TokenKind::ValueTrue => "true",
            TokenKind::ValueFalse => "false",
            TokenKind::ValueNull => "null",
        }
    }
}

/// Borrowed view of a scalar value, handed to filter predicates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarValue<'a> {
    /// String scalar
    Str(&'a str),
    /// Integral number scalar
    Int(i64),
    /// Floating-point number scalar
    Float(f64),
    /// Boolean scalar
    Bool(bool),
    /// Null scalar
    Null,
}

impl ScalarValue<'_> {
    /// Check if this scalar is a null
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }

    /// The token kind this scalar is reported as
    #[must_use]
    pub const fn token_kind(&self) -> TokenKind {
        match self {
            ScalarValue::Str(_) => TokenKind::ValueString,
            ScalarValue::Int(_) => TokenKind::ValueInt,
            ScalarValue::Float(_) => TokenKind::ValueFloat,
            ScalarValue::Bool(true) => TokenKind::ValueTrue,
            ScalarValue::Bool(false) => TokenKind::ValueFalse,
            ScalarValue::Null => TokenKind::ValueNull,
        }
    }
}
