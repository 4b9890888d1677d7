//! CSS length and distance values.
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)

use serde::Serialize;
use wombat_common::warning::warn_once;

/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
/// "Lengths refer to distance measurements and are denoted by `<length>` in
/// the property definitions."
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum LengthValue {
    /// [§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    /// "1px = 1/96th of 1in"
    Px(f64),
    /// [§ 5.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    /// "Equal to the computed value of the font-size property of the element"
    Em(f64),
    /// [§ 5.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    /// "1vw = 1% of viewport width"
    Vw(f64),
    /// [§ 5.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    /// "1vh = 1% of viewport height"
    Vh(f64),
}

/// [`<length-percentage>`](https://www.w3.org/TR/css-values-4/#typedef-length-percentage)
///
/// "Where `<length-percentage>` is used... it represents a value that can be
/// either a `<length>` or a `<percentage>`."
///
/// The background position and size grammars accept either form, so the
/// shorthand grammar carries them as one distance type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Distance {
    /// An absolute or relative length value.
    Length(LengthValue),
    /// A percentage value, resolved against the background positioning area.
    Percent(f64),
}

/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
///
/// "A dimension is a `<number>` immediately followed by a unit identifier."
///
/// Map a dimension token to a length; unknown units warn once and are not
/// a `<length>` for grammar purposes.
#[must_use]
pub fn parse_dimension(value: f64, unit: &str) -> Option<LengthValue> {
    if unit.eq_ignore_ascii_case("px") {
        Some(LengthValue::Px(value))
    } else if unit.eq_ignore_ascii_case("em") {
        Some(LengthValue::Em(value))
    } else if unit.eq_ignore_ascii_case("vw") {
        Some(LengthValue::Vw(value))
    } else if unit.eq_ignore_ascii_case("vh") {
        Some(LengthValue::Vh(value))
    } else {
        warn_once(
            "CSS",
            &format!("unsupported unit '{unit}' in value {value}{unit}"),
        );
        None
    }
}
