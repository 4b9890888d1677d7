//! CSS Color values and parsing
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)

use serde::Serialize;

use crate::parser::ComponentValue;
use crate::tokenizer::ValueToken;

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
/// sRGB color represented as RGBA components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorValue {
    /// "the red color channel" (0-255)
    pub r: u8,
    /// "the green color channel" (0-255)
    pub g: u8,
    /// "the blue color channel" (0-255)
    pub b: u8,
    /// "the alpha channel" (0-255, 255 = fully opaque)
    pub a: u8,
}

impl ColorValue {
    /// [§ 6.1 transparent](https://www.w3.org/TR/css-color-4/#transparent-color)
    /// "Fully transparent. This keyword can be considered a shorthand for
    /// rgb(0 0 0 / 0)."
    pub const TRANSPARENT: Self = Self { r: 0, g: 0, b: 0, a: 0 };

    /// Fully-opaque color from RGB channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    /// "The syntax of a `<hex-color>` is a `<hash-token>` token whose value
    /// consists of 3, 4, 6, or 8 hexadecimal digits."
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        /// One replicated hex digit ("The three-digit RGB notation (#RGB) is
        /// converted into six-digit form (#RRGGBB) by replicating digits").
        fn short(hex: &str, i: usize) -> Option<u8> {
            u8::from_str_radix(&hex[i..=i].repeat(2), 16).ok()
        }
        /// One two-digit hex channel.
        fn long(hex: &str, i: usize) -> Option<u8> {
            u8::from_str_radix(&hex[i..i + 2], 16).ok()
        }

        // A <hash-token> can carry any ident code point; only ASCII hex
        // digits form a color, and the digit slicing needs ASCII anyway.
        if !hex.is_ascii() {
            return None;
        }

        match hex.len() {
            // Three-digit RGB notation (#RGB)
            3 => Some(Self {
                r: short(hex, 0)?,
                g: short(hex, 1)?,
                b: short(hex, 2)?,
                a: 255,
            }),
            // Four-digit RGBA notation (#RGBA)
            4 => Some(Self {
                r: short(hex, 0)?,
                g: short(hex, 1)?,
                b: short(hex, 2)?,
                a: short(hex, 3)?,
            }),
            // Six-digit RGB notation (#RRGGBB)
            6 => Some(Self {
                r: long(hex, 0)?,
                g: long(hex, 2)?,
                b: long(hex, 4)?,
                a: 255,
            }),
            // Eight-digit RGBA notation (#RRGGBBAA)
            8 => Some(Self {
                r: long(hex, 0)?,
                g: long(hex, 2)?,
                b: long(hex, 4)?,
                a: long(hex, 6)?,
            }),
            _ => None,
        }
    }

    /// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
    /// "CSS defines a large set of named colors..."
    ///
    /// The basic 16 HTML colors plus `transparent` and the gray/grey pair.
    // TODO: extended X11 keywords (~140) via a generated lookup table.
    #[must_use]
    pub fn from_named(name: &str) -> Option<Self> {
        let (r, g, b) = match name.to_ascii_lowercase().as_str() {
            "transparent" => return Some(Self::TRANSPARENT),
            "white" => (255, 255, 255),
            "black" => (0, 0, 0),
            "red" => (255, 0, 0),
            "green" => (0, 128, 0),
            "blue" => (0, 0, 255),
            "yellow" => (255, 255, 0),
            "gray" | "grey" => (128, 128, 128),
            "aqua" | "cyan" => (0, 255, 255),
            "fuchsia" | "magenta" => (255, 0, 255),
            "lime" => (0, 255, 0),
            "maroon" => (128, 0, 0),
            "navy" => (0, 0, 128),
            "olive" => (128, 128, 0),
            "purple" => (128, 0, 128),
            "silver" => (192, 192, 192),
            "teal" => (0, 128, 128),
            _ => return None,
        };
        Some(Self::rgb(r, g, b))
    }

    /// Convert to hex string notation (#RRGGBB or #RRGGBBAA if alpha != 255)
    ///
    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    #[must_use]
    pub fn to_hex_string(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// [§ 4.1 The RGB functions](https://www.w3.org/TR/css-color-4/#funcdef-rgb)
///
/// "rgb() = rgb( `<number>{3}` [ / `<alpha-value>` ]? )" - legacy
/// comma-separated arguments are also accepted, and rgba() is "a legacy alias
/// for rgb()".
///
/// Only the numeric channel forms are handled; percentages in channels are
/// not part of any value the renderer currently emits.
#[must_use]
pub fn parse_rgb_function(args: &[ComponentValue]) -> Option<ColorValue> {
    let mut channels: Vec<f64> = Vec::with_capacity(4);

    for arg in args {
        match arg {
            // Argument separators in both legacy (,) and modern (/) syntax.
            ComponentValue::Token(ValueToken::Comma | ValueToken::Delim('/')) => {}
            ComponentValue::Token(ValueToken::Number(value)) => channels.push(*value),
            // "<alpha-value> = <number> | <percentage>"
            ComponentValue::Token(ValueToken::Percentage(value)) if channels.len() == 3 => {
                channels.push(*value / 100.0);
            }
            _ => return None,
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let clamp = |v: f64| -> u8 {
        if v <= 0.0 {
            0
        } else if v >= 255.0 {
            255
        } else {
            v.round() as u8
        }
    };

    match channels.as_slice() {
        [r, g, b] => Some(ColorValue::rgb(clamp(*r), clamp(*g), clamp(*b))),
        [r, g, b, a] => Some(ColorValue {
            r: clamp(*r),
            g: clamp(*g),
            b: clamp(*b),
            a: clamp(a * 255.0),
        }),
        _ => None,
    }
}
