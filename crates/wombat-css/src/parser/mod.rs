//! Component value reader module.

/// Component value reader per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
pub mod value_parser;

pub use value_parser::{ComponentValue, ValueParser, parse_value_list};
