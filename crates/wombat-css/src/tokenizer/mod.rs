//! CSS value tokenizer module.

/// Value token types per [CSS Syntax Level 3 § 4](https://www.w3.org/TR/css-syntax-3/#tokenization).
pub mod token;
/// Value tokenizer implementation.
pub mod tokenizer;

pub use token::ValueToken;
pub use tokenizer::ValueTokenizer;
