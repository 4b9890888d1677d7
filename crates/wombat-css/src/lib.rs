//! Background shorthand decomposition for the Wombat renderer.
//!
//! # Scope
//!
//! This crate implements:
//! - **Value Tokenizer** ([§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization))
//!   - The declaration-value token subset: ident, function, hash, string,
//!     url, number, percentage, dimension, comma, delim
//!   - Comment handling
//!
//! - **Component Value Reader** ([§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing))
//!   - Preserved tokens and nested function values
//!
//! - **Background Shorthand Grammar** ([CSS Backgrounds and Borders Level 3 § 2.10](https://www.w3.org/TR/css-backgrounds-3/#the-background))
//!   - Order-flexible per-layer decomposition into eight longhands
//!   - Layer separators, the position/size `/` delimiter, the final-layer
//!     color rule, and per-component initial values
//!
//! - **Longhand Stores** ([§ 2.2 - § 2.9](https://www.w3.org/TR/css-backgrounds-3/))
//!   - Validating stores with typed per-layer accessors for image,
//!     position, size, repeat, attachment, origin, clip, and color
//!
//! # Not Yet Implemented
//!
//! - Gradient image functions (linear-gradient, radial-gradient)
//! - hsl()/hwb() color functions and the extended named-color set
//! - Escape sequences and scientific notation in the tokenizer

/// Longhand property stores per [CSS Backgrounds and Borders Level 3](https://www.w3.org/TR/css-backgrounds-3/).
pub mod longhand;
/// Component value reader per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
pub mod parser;
/// The background shorthand property container.
pub mod property;
/// Shorthand grammar decomposition per [§ 2.10 The background shorthand](https://www.w3.org/TR/css-backgrounds-3/#the-background).
pub mod shorthand;
/// Declaration value tokenizer per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
pub mod tokenizer;
/// CSS value types and queries per [CSS Values Level 4](https://www.w3.org/TR/css-values-4/) and [CSS Color Level 4](https://www.w3.org/TR/css-color-4/).
pub mod value;

// Re-exports for convenience
pub use longhand::{BackgroundSize, LonghandStore, Position, SizeComponent};
pub use parser::{ComponentValue, ValueParser, parse_value_list};
pub use property::BackgroundProperty;
pub use shorthand::{GrammarError, ShorthandComposites, decompose, split_layers};
pub use tokenizer::{ValueToken, ValueTokenizer};
pub use value::{
    BackgroundAttachment, BackgroundRepeat, BoxModel, ColorValue, Distance, ImageSource,
    LengthValue,
};
