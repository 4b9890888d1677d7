//! Background shorthand decomposition per
//! [§ 2.10 The background shorthand](https://www.w3.org/TR/css-backgrounds-3/#the-background).
//!
//! "The background property is a shorthand property for setting most
//! background properties at the same place in the style sheet."
//!
//! The grammar is order-flexible: within one comma-separated layer the
//! components may appear in any order, position/size are coupled through a
//! `/` delimiter, and a color is only permitted on the final layer. The
//! decomposition walks each layer once, claiming component values in a fixed
//! priority order (position/size first because its match is a variable-length
//! run, color last as the explicit fallback) and fills the initial value for
//! every component the layer left unset.

use thiserror::Error;

use crate::parser::ComponentValue;
use crate::value::{ColorValue, is_one_of, to_box_model, to_color, to_distance, to_image};

/// [§ 2.6 background-position](https://www.w3.org/TR/css-backgrounds-3/#the-background-position)
/// keyword set: "left | center | right | top | bottom".
pub const POSITION_KEYWORDS: &[&str] = &["top", "left", "center", "bottom", "right"];

/// [§ 2.9 background-size](https://www.w3.org/TR/css-backgrounds-3/#the-background-size)
/// keyword set of the first size component.
pub const SIZE_KEYWORDS: &[&str] = &["auto", "contain", "cover"];

/// [§ 2.4 background-repeat](https://www.w3.org/TR/css-backgrounds-3/#the-background-repeat)
/// single-value keyword set, including the two-axis shorthands.
pub const REPEAT_KEYWORDS: &[&str] =
    &["repeat-x", "repeat-y", "repeat", "space", "round", "no-repeat"];

/// Repeat keywords valid as the second of a two-value pair
/// ("repeat-x" / "repeat-y" may only appear alone).
pub const REPEAT_AXIS_KEYWORDS: &[&str] = &["repeat", "space", "round", "no-repeat"];

/// [§ 2.5 background-attachment](https://www.w3.org/TR/css-backgrounds-3/#the-background-attachment)
/// keyword set: "scroll | fixed | local".
pub const ATTACHMENT_KEYWORDS: &[&str] = &["scroll", "fixed", "local"];

/// The background shorthand cannot be decomposed under its grammar.
///
/// Errors are total: one malformed layer invalidates the whole declaration,
/// matching the CSS rule that invalid declarations are dropped, never
/// partially applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// A `/` delimiter appeared without a valid background-size value after it.
    #[error("expected a background-size value after '/'")]
    DanglingDelimiter,

    /// A value was left over once every component of its layer was claimed.
    /// This covers both a duplicate color and a color outside the final layer.
    #[error("no background component can consume {0}")]
    UnexpectedValue(String),

    /// The fallback color slot was open but the value does not parse as a color.
    #[error("{0} is not a color")]
    InvalidColor(String),

    /// A longhand store rejected its decomposed value. The grammar walk
    /// should never hand a store a list it cannot hold, so hitting this
    /// indicates a bug rather than bad input, but it is still reported as a
    /// rejection instead of a panic.
    #[error("the background-{0} longhand rejected its decomposed value")]
    StoreRejected(&'static str),
}

/// The eight per-component value lists produced by a successful decomposition.
///
/// Every list except `color` is a *composite*: one segment per layer with a
/// separator marker between segments, so the Nth segment of any component
/// lines up with the Nth segment of every other. The color is a single
/// resolved value because background-color is not layered.
#[derive(Debug, Clone, PartialEq)]
pub struct ShorthandComposites {
    /// Per-layer background-image values.
    pub image: Vec<ComponentValue>,
    /// Per-layer background-position values (one or two components each).
    pub position: Vec<ComponentValue>,
    /// Per-layer background-size values (one or two components each).
    pub size: Vec<ComponentValue>,
    /// Per-layer background-repeat values (one or two keywords each).
    pub repeat: Vec<ComponentValue>,
    /// Per-layer background-attachment keywords.
    pub attachment: Vec<ComponentValue>,
    /// Per-layer background-origin keywords.
    pub origin: Vec<ComponentValue>,
    /// Per-layer background-clip keywords.
    pub clip: Vec<ComponentValue>,
    /// The single resolved background-color value.
    pub color: ComponentValue,
}

/// One layer's worth of claimed and defaulted component values.
#[derive(Debug, Default)]
struct LayerValues {
    image: Vec<ComponentValue>,
    position: Vec<ComponentValue>,
    size: Vec<ComponentValue>,
    repeat: Vec<ComponentValue>,
    attachment: Vec<ComponentValue>,
    origin: Vec<ComponentValue>,
    clip: Vec<ComponentValue>,
    /// The layer's color candidate, if the fallback slot claimed one.
    color: Option<ColorValue>,
}

/// A successful position/size sub-match: the claimed values and how many
/// component values of the layer they consumed.
struct PositionSizeMatch {
    position: Vec<ComponentValue>,
    size: Vec<ComponentValue>,
    consumed: usize,
}

/// Decompose a background shorthand value into its eight longhand lists.
///
/// [§ 2.10](https://www.w3.org/TR/css-backgrounds-3/#the-background):
/// "Given a valid declaration, for each layer the shorthand behaves as if
/// each of its corresponding longhand properties were set on the element."
///
/// # Errors
///
/// Returns [`GrammarError`] if any layer cannot be decomposed; no partial
/// result is produced.
pub fn decompose(values: &[ComponentValue]) -> Result<ShorthandComposites, GrammarError> {
    let layers = split_layers(values);
    let layer_count = layers.len();

    let mut image = Vec::new();
    let mut position = Vec::new();
    let mut size = Vec::new();
    let mut repeat = Vec::new();
    let mut attachment = Vec::new();
    let mut origin = Vec::new();
    let mut clip = Vec::new();
    let mut color_candidates: Vec<ColorValue> = Vec::new();

    for (index, layer) in layers.iter().enumerate() {
        let is_final = index + 1 == layer_count;
        let layer_values = decompose_layer(layer, is_final)?;

        image.extend(layer_values.image);
        position.extend(layer_values.position);
        size.extend(layer_values.size);
        repeat.extend(layer_values.repeat);
        attachment.extend(layer_values.attachment);
        origin.extend(layer_values.origin);
        clip.extend(layer_values.clip);
        color_candidates.extend(layer_values.color);

        // One separator marker after every non-final layer, in every
        // composite, keeps the Nth segments aligned across components.
        if !is_final {
            image.push(ComponentValue::separator());
            position.push(ComponentValue::separator());
            size.push(ComponentValue::separator());
            repeat.push(ComponentValue::separator());
            attachment.push(ComponentValue::separator());
            origin.push(ComponentValue::separator());
            clip.push(ComponentValue::separator());
        }
    }

    Ok(ShorthandComposites {
        image,
        position,
        size,
        repeat,
        attachment,
        origin,
        clip,
        color: color_token(resolve_color(&color_candidates)),
    })
}

/// Split a component value list into layers on the separator marker.
///
/// A value without any separator is a single layer; the result is never empty.
#[must_use]
pub fn split_layers(values: &[ComponentValue]) -> Vec<&[ComponentValue]> {
    let mut layers = Vec::new();
    let mut start = 0;

    for (index, value) in values.iter().enumerate() {
        if value.is_separator() {
            layers.push(&values[start..index]);
            start = index + 1;
        }
    }
    layers.push(&values[start..]);

    layers
}

/// [§ 2.2 background-color](https://www.w3.org/TR/css-backgrounds-3/#the-background-color)
///
/// "Initial: transparent" - background-color is not a layered property, so
/// the candidates recorded per layer reduce to the last one written, or the
/// initial value when no layer supplied one.
fn resolve_color(candidates: &[ColorValue]) -> ColorValue {
    candidates.last().copied().unwrap_or(ColorValue::TRANSPARENT)
}

/// Wrap a resolved color back into a singleton component value (a hex
/// `<hash-token>`) for the color store.
fn color_token(color: ColorValue) -> ComponentValue {
    let hex = color.to_hex_string();
    ComponentValue::Token(crate::tokenizer::ValueToken::hash(
        hex.trim_start_matches('#'),
    ))
}

/// Decompose one layer, claiming component values in the fixed priority
/// order and filling the initial value of every unclaimed component.
///
/// `color_permitted` is false for every non-final layer: the color slot then
/// starts out as already consumed, so a stray value fails immediately
/// instead of being mistaken for a color candidate.
fn decompose_layer(
    layer: &[ComponentValue],
    color_permitted: bool,
) -> Result<LayerValues, GrammarError> {
    let mut out = LayerValues::default();
    let mut has_image = false;
    let mut has_position = false;
    let mut has_repeat = false;
    let mut has_attachment = false;
    let mut has_box = false;
    let mut has_color = !color_permitted;

    let mut cursor = 0;
    while cursor < layer.len() {
        let rest = &layer[cursor..];

        // Position/size goes first: its match is a variable-length run and
        // must claim those values before the fixed-arity components can.
        if !has_position
            && let Some(matched) = match_position_size(rest)?
        {
            has_position = true;
            out.position.extend(matched.position);
            out.size.extend(matched.size);
            cursor += matched.consumed;
            continue;
        }

        if !has_image && to_image(&rest[0]).is_some() {
            has_image = true;
            out.image.push(rest[0].clone());
            cursor += 1;
            continue;
        }

        if !has_repeat
            && let Some((values, consumed)) = match_repeat(rest)
        {
            has_repeat = true;
            out.repeat.extend(values);
            cursor += consumed;
            continue;
        }

        if !has_attachment && is_one_of(&rest[0], ATTACHMENT_KEYWORDS) {
            has_attachment = true;
            out.attachment.push(rest[0].clone());
            cursor += 1;
            continue;
        }

        if !has_box && to_box_model(&rest[0]).is_some() {
            has_box = true;
            out.origin.push(rest[0].clone());

            // A second <box> keyword is the clip value; otherwise clip takes
            // its initial border-box.
            if rest.len() > 1 && to_box_model(&rest[1]).is_some() {
                out.clip.push(rest[1].clone());
                cursor += 2;
            } else {
                out.clip.push(ComponentValue::ident("border-box"));
                cursor += 1;
            }
            continue;
        }

        // Fallback: anything unclaimed by the structural components is, by
        // the grammar, the layer's color.
        if has_color {
            return Err(GrammarError::UnexpectedValue(describe(&rest[0])));
        }
        let color = to_color(&rest[0]).ok_or_else(|| GrammarError::InvalidColor(describe(&rest[0])))?;
        has_color = true;
        out.color = Some(color);
        cursor += 1;
    }

    // Initial values for everything the layer left unset.
    if !has_image {
        out.image.push(ComponentValue::ident("none"));
    }
    if !has_position {
        out.position.push(ComponentValue::ident("center"));
        out.size.push(ComponentValue::ident("auto"));
    }
    if !has_repeat {
        out.repeat.push(ComponentValue::ident("repeat"));
    }
    if !has_attachment {
        out.attachment.push(ComponentValue::ident("scroll"));
    }
    if !has_box {
        out.origin.push(ComponentValue::ident("border-box"));
        out.clip.push(ComponentValue::ident("border-box"));
    }

    Ok(out)
}

/// Test for a `<bg-position>` component: a position keyword or a distance.
fn is_position_component(v: &ComponentValue) -> bool {
    is_one_of(v, POSITION_KEYWORDS) || to_distance(v).is_some()
}

/// Test for a `<bg-size>` component following the first: "auto | `<length-percentage>`".
fn is_size_tail_component(v: &ComponentValue) -> bool {
    is_one_of(v, &["auto"]) || to_distance(v).is_some()
}

/// [§ 2.10](https://www.w3.org/TR/css-backgrounds-3/#the-background):
/// "`<bg-position>` [ / `<bg-size>` ]?"
///
/// Greedily consume a run of position components, then - only behind a `/`
/// delimiter - one or two size components. Without a delimiter the size
/// defaults to a single `auto`.
fn match_position_size(rest: &[ComponentValue]) -> Result<Option<PositionSizeMatch>, GrammarError> {
    if !is_position_component(&rest[0]) {
        return Ok(None);
    }

    let mut position = vec![rest[0].clone()];
    let mut cursor = 1;
    while cursor < rest.len() && is_position_component(&rest[cursor]) {
        position.push(rest[cursor].clone());
        cursor += 1;
    }

    let mut size = Vec::new();
    if cursor < rest.len() && rest[cursor].is_delimiter() {
        cursor += 1; // the '/'

        // "If a <bg-size> is present, it must immediately follow
        // '<bg-position> /'" - a dangling delimiter fails the declaration.
        let first = rest
            .get(cursor)
            .filter(|v| is_one_of(v, SIZE_KEYWORDS) || to_distance(v).is_some())
            .ok_or(GrammarError::DanglingDelimiter)?;
        size.push(first.clone());
        cursor += 1;

        if let Some(second) = rest.get(cursor).filter(|v| is_size_tail_component(v)) {
            size.push(second.clone());
            cursor += 1;
        }
    } else {
        size.push(ComponentValue::ident("auto"));
    }

    Ok(Some(PositionSizeMatch {
        position,
        size,
        consumed: cursor,
    }))
}

/// [§ 2.4](https://www.w3.org/TR/css-backgrounds-3/#the-background-repeat):
/// "`<repeat-style>` = repeat-x | repeat-y | [repeat | space | round | no-repeat]{1,2}"
///
/// Consume one repeat keyword, plus a second axis keyword when present
/// (the repeat-x/repeat-y shorthands may not be part of a pair).
fn match_repeat(rest: &[ComponentValue]) -> Option<(Vec<ComponentValue>, usize)> {
    if !is_one_of(&rest[0], REPEAT_KEYWORDS) {
        return None;
    }

    let mut values = vec![rest[0].clone()];
    let mut consumed = 1;
    if let Some(second) = rest.get(1)
        && is_one_of(second, REPEAT_AXIS_KEYWORDS)
    {
        values.push(second.clone());
        consumed = 2;
    }

    Some((values, consumed))
}

/// Render a component value for an error message.
fn describe(v: &ComponentValue) -> String {
    match v {
        ComponentValue::Token(token) => token.to_string(),
        ComponentValue::Function { name, .. } => format!("<function:{name}(>"),
    }
}
