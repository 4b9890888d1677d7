//! CSS value model queries for the background shorthand grammar.
//!
//! This module implements the value-level operations per:
//! - [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//! - [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//! - [CSS Backgrounds and Borders Level 3](https://www.w3.org/TR/css-backgrounds-3/)
//!
//! Each query takes one [`ComponentValue`] and answers "does this token parse
//! as X" without consuming or mutating anything; the shorthand engine composes
//! these tests into its greedy walk.

pub mod color;
pub mod length;

pub use color::ColorValue;
pub use length::{Distance, LengthValue};

use serde::Serialize;
use strum_macros::{Display, EnumString};

use crate::parser::ComponentValue;
use crate::tokenizer::ValueToken;

/// [§ 2.4 Tiling Images: the background-repeat property](https://www.w3.org/TR/css-backgrounds-3/#the-background-repeat)
///
/// One axis of a background tiling mode. The `repeat-x`/`repeat-y` shorthand
/// keywords are not axis values; the repeat store expands them into a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum BackgroundRepeat {
    /// "The image is repeated in this direction as often as needed."
    Repeat,
    /// "The image is repeated as often as will fit... the first and last
    /// images touch the edges... extra space is distributed between them."
    Space,
    /// "The image is repeated as often as will fit... rescaled so that it does."
    Round,
    /// "The image is placed once and not repeated in this direction."
    NoRepeat,
}

/// [§ 2.5 Attaching: the background-attachment property](https://www.w3.org/TR/css-backgrounds-3/#the-background-attachment)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum BackgroundAttachment {
    /// "The background is fixed with regard to the element itself."
    Scroll,
    /// "The background is fixed with regard to the viewport."
    Fixed,
    /// "The background is fixed with regard to the element's contents."
    Local,
}

/// [`<box>`](https://www.w3.org/TR/css-backgrounds-3/#typedef-box)
///
/// "`<box>` = border-box | padding-box | content-box"
///
/// Used by both `background-origin` and `background-clip`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum BoxModel {
    /// "The border box."
    BorderBox,
    /// "The padding box."
    PaddingBox,
    /// "The content box."
    ContentBox,
}

/// [§ 2.3 Image Sources: the background-image property](https://www.w3.org/TR/css-backgrounds-3/#the-background-image)
///
/// "Value: `<bg-image>` [ , `<bg-image>` ]*" where
/// "`<bg-image>` = `<image>` | none"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ImageSource {
    /// "A value of none counts as an image layer but draws nothing."
    None,
    /// A `url()` image reference.
    Url(String),
    // TODO: gradient functions (linear-gradient, radial-gradient) once the
    // paint side can rasterize them.
}

/// Test whether a component value is the given keyword (ASCII case-insensitive).
///
/// [CSS Values § 2.1](https://www.w3.org/TR/css-values-4/#keywords):
/// "All CSS syntax is case-insensitive within the ASCII range."
#[must_use]
pub fn is_keyword(v: &ComponentValue, keyword: &str) -> bool {
    matches!(v, ComponentValue::Token(ValueToken::Ident(name)) if name.eq_ignore_ascii_case(keyword))
}

/// Test whether a component value is one of the given keywords.
#[must_use]
pub fn is_one_of(v: &ComponentValue, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| is_keyword(v, keyword))
}

/// [CSS Values § 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths) /
/// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
///
/// Try to read a component value as a `<length-percentage>` distance.
#[must_use]
pub fn to_distance(v: &ComponentValue) -> Option<Distance> {
    match v {
        ComponentValue::Token(ValueToken::Dimension { value, unit }) => {
            length::parse_dimension(*value, unit).map(Distance::Length)
        }
        // "A <percentage> value... consists of a <number> immediately
        // followed by a percent sign '%'."
        ComponentValue::Token(ValueToken::Percentage(value)) => Some(Distance::Percent(*value)),
        // "0 can be written without a unit..."
        ComponentValue::Token(ValueToken::Number(value)) if *value == 0.0 => {
            Some(Distance::Length(LengthValue::Px(0.0)))
        }
        _ => None,
    }
}

/// [CSS Color § 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
///
/// Try to read a component value as a `<color>`.
#[must_use]
pub fn to_color(v: &ComponentValue) -> Option<ColorValue> {
    match v {
        ComponentValue::Token(ValueToken::Hash(value)) => ColorValue::from_hex(value),
        ComponentValue::Token(ValueToken::Ident(name)) => ColorValue::from_named(name),
        // [§ 4.1 The RGB functions](https://www.w3.org/TR/css-color-4/#funcdef-rgb)
        ComponentValue::Function { name, value }
            if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
        {
            color::parse_rgb_function(value)
        }
        // TODO: hsl()/hwb() once the color store needs them.
        _ => None,
    }
}

/// [§ 2.3 background-image](https://www.w3.org/TR/css-backgrounds-3/#the-background-image)
///
/// Try to read a component value as a `<bg-image>`. The `none` keyword is a
/// valid image value ("counts as an image layer but draws nothing").
#[must_use]
pub fn to_image(v: &ComponentValue) -> Option<ImageSource> {
    match v {
        ComponentValue::Token(ValueToken::Ident(name)) if name.eq_ignore_ascii_case("none") => {
            Some(ImageSource::None)
        }
        ComponentValue::Token(ValueToken::Url(url)) => Some(ImageSource::Url(url.clone())),
        // url("quoted.png") arrives as a function with a string argument.
        ComponentValue::Function { name, value } if name.eq_ignore_ascii_case("url") => {
            match value.as_slice() {
                [ComponentValue::Token(ValueToken::String(url))] => {
                    Some(ImageSource::Url(url.clone()))
                }
                _ => None,
            }
        }
        _ => None,
    }
}

/// [`<box>`](https://www.w3.org/TR/css-backgrounds-3/#typedef-box)
///
/// Try to read a component value as a box-model keyword.
#[must_use]
pub fn to_box_model(v: &ComponentValue) -> Option<BoxModel> {
    match v {
        ComponentValue::Token(ValueToken::Ident(name)) => name.parse().ok(),
        _ => None,
    }
}
