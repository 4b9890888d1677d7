//! Value token types per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
//!
//! Only the tokens that can occur inside a declaration *value* are modeled
//! here; block and rule punctuation (`{`, `}`, `;`, `@word`) never reaches
//! the value grammar and is not represented.

use core::fmt;

/// [§ 4.2 Definitions](https://www.w3.org/TR/css-syntax-3/#token-diagrams)
///
/// A single token of a declaration value, as defined by the CSS Syntax
/// Module Level 3 railroad diagrams.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueToken {
    /// "`<ident-token>`"
    /// "has a value composed of one or more code points"
    Ident(String),

    /// "`<function-token>`"
    /// "has a value composed of one or more code points, followed by U+0028 LEFT PARENTHESIS"
    Function(String),

    /// "`<hash-token>`"
    /// "has a value composed of one or more code points, preceded by U+0023 NUMBER SIGN (#)"
    ///
    /// NOTE: The id/unrestricted type flag only matters for selectors, so the
    /// value grammar drops it.
    Hash(String),

    /// "`<string-token>`"
    /// "has a value composed of zero or more code points"
    String(String),

    /// "`<url-token>`"
    /// "has a value composed of zero or more code points"
    Url(String),

    /// "`<number-token>`"
    /// "has a numeric value"
    Number(f64),

    /// "`<percentage-token>`"
    /// "has a numeric value"
    Percentage(f64),

    /// "`<dimension-token>`"
    /// "has a numeric value, a type flag, and a unit"
    Dimension {
        /// "a numeric value"
        value: f64,
        /// "a unit"
        unit: String,
    },

    /// "`<whitespace-token>`"
    /// "represents one or more whitespace code points"
    Whitespace,

    /// "`<comma-token>`"
    /// "represents U+002C COMMA (,)"
    Comma,

    /// `<)-token>`
    /// "represents U+0029 RIGHT PARENTHESIS ())"
    RightParen,

    /// "`<delim-token>`"
    /// "has a value composed of a single code point"
    Delim(char),

    /// End of input - signals the end of the declaration value.
    Eof,
}

impl ValueToken {
    /// Create a new ident token.
    #[must_use]
    pub fn ident(value: impl Into<String>) -> Self {
        Self::Ident(value.into())
    }

    /// Create a new function token.
    #[must_use]
    pub fn function(name: impl Into<String>) -> Self {
        Self::Function(name.into())
    }

    /// Create a new hash token.
    #[must_use]
    pub fn hash(value: impl Into<String>) -> Self {
        Self::Hash(value.into())
    }

    /// Create a new URL token.
    #[must_use]
    pub fn url(value: impl Into<String>) -> Self {
        Self::Url(value.into())
    }

    /// Create a new dimension token.
    #[must_use]
    pub fn dimension(value: f64, unit: impl Into<String>) -> Self {
        Self::Dimension {
            value,
            unit: unit.into(),
        }
    }

    /// Returns true if this is a whitespace token.
    #[must_use]
    pub const fn is_whitespace(&self) -> bool {
        matches!(self, Self::Whitespace)
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }
}

impl fmt::Display for ValueToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(v) => write!(f, "<ident:{v}>"),
            Self::Function(v) => write!(f, "<function:{v}(>"),
            Self::Hash(v) => write!(f, "<hash:#{v}>"),
            Self::String(v) => write!(f, "<string:\"{v}\">"),
            Self::Url(v) => write!(f, "<url:{v}>"),
            Self::Number(v) => write!(f, "<number:{v}>"),
            Self::Percentage(v) => write!(f, "<percentage:{v}%>"),
            Self::Dimension { value, unit } => write!(f, "<dimension:{value}{unit}>"),
            Self::Whitespace => write!(f, "<whitespace>"),
            Self::Comma => write!(f, "<comma>"),
            Self::RightParen => write!(f, "<)>"),
            Self::Delim(c) => write!(f, "<delim:{c}>"),
            Self::Eof => write!(f, "<EOF>"),
        }
    }
}
