//! Longhand background property stores.
//!
//! [§ 2.10](https://www.w3.org/TR/css-backgrounds-3/#the-background):
//! "for each layer the shorthand behaves as if each of its corresponding
//! longhand properties were set on the element".
//!
//! Each store holds one longhand's resolved per-layer values and validates
//! its own, narrower grammar on the way in: the shorthand walk claims values
//! by loose category tests, and the store is where a claimed segment must fit
//! an exact shape (one or two components, axis-compatible keywords, and so
//! on). A store only replaces its contents when the whole composite
//! validates; on rejection it is left untouched.

use serde::Serialize;

use crate::parser::ComponentValue;
use crate::shorthand::{POSITION_KEYWORDS, split_layers};
use crate::value::{
    BackgroundAttachment, BackgroundRepeat, BoxModel, ColorValue, Distance, ImageSource, is_keyword,
    is_one_of, to_box_model, to_color, to_distance, to_image,
};

/// Common interface of the eight background longhand stores.
pub trait LonghandStore {
    /// Restore the longhand's initial value.
    fn reset(&mut self);

    /// Validate a composite value list and, on success, replace the stored
    /// layers with it. Returns false (leaving the store unchanged) when any
    /// segment fails the longhand's grammar.
    fn accept(&mut self, values: &[ComponentValue]) -> bool;
}

/// [§ 2.6 background-position](https://www.w3.org/TR/css-backgrounds-3/#the-background-position)
///
/// One layer's resolved position: offsets of the image's origin from the
/// top-left of the background positioning area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    /// Horizontal offset.
    pub x: Distance,
    /// Vertical offset.
    pub y: Distance,
}

impl Position {
    /// "Initial: 0% 0%" is the property's own initial; the shorthand default
    /// segment is `center`, which resolves to 50% on both axes.
    pub const CENTER: Self = Self {
        x: Distance::Percent(50.0),
        y: Distance::Percent(50.0),
    };
}

/// [§ 2.9 background-size](https://www.w3.org/TR/css-backgrounds-3/#the-background-size)
///
/// One width or height component of an explicit size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SizeComponent {
    /// "An auto value for one dimension is resolved by using the image's
    /// intrinsic ratio..."
    Auto,
    /// An explicit `<length-percentage>` extent.
    Value(Distance),
}

/// [§ 2.9 background-size](https://www.w3.org/TR/css-backgrounds-3/#the-background-size)
///
/// One layer's resolved size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum BackgroundSize {
    /// "Scale the image... to the largest size such that both its width and
    /// its height can fit inside the background positioning area."
    Contain,
    /// "Scale the image... to the smallest size such that both its width and
    /// its height can completely cover the background positioning area."
    Cover,
    /// "[ `<length-percentage [0,∞]>` | auto ]{1,2}"
    Explicit {
        /// The width component.
        width: SizeComponent,
        /// The height component.
        height: SizeComponent,
    },
}

impl BackgroundSize {
    /// The initial value, `auto auto`.
    pub const AUTO: Self = Self::Explicit {
        width: SizeComponent::Auto,
        height: SizeComponent::Auto,
    };
}

/// Which axis a position component can bind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
    Either,
}

/// Map a position component to its axis constraint and resolved offset.
///
/// [§ 2.6](https://www.w3.org/TR/css-backgrounds-3/#the-background-position):
/// keyword offsets compute to percentages ("left = 0%, right = 100%,
/// top = 0%, bottom = 100%, center = 50%").
fn position_component(v: &ComponentValue) -> Option<(Axis, Distance)> {
    if is_keyword(v, "left") {
        Some((Axis::Horizontal, Distance::Percent(0.0)))
    } else if is_keyword(v, "right") {
        Some((Axis::Horizontal, Distance::Percent(100.0)))
    } else if is_keyword(v, "top") {
        Some((Axis::Vertical, Distance::Percent(0.0)))
    } else if is_keyword(v, "bottom") {
        Some((Axis::Vertical, Distance::Percent(100.0)))
    } else if is_keyword(v, "center") {
        Some((Axis::Either, Distance::Percent(50.0)))
    } else {
        to_distance(v).map(|d| (Axis::Either, d))
    }
}

/// Resolve one position segment (one or two components) into offsets.
///
/// "If only one value is specified, the second value is assumed to be
/// center." Keyword pairs may appear in either order; a pair that binds both
/// components to the same axis does not resolve.
fn resolve_position(segment: &[ComponentValue]) -> Option<Position> {
    match segment {
        [single] => {
            let (axis, d) = position_component(single)?;
            Some(match axis {
                Axis::Vertical => Position {
                    x: Distance::Percent(50.0),
                    y: d,
                },
                Axis::Horizontal | Axis::Either => Position {
                    x: d,
                    y: Distance::Percent(50.0),
                },
            })
        }
        [first, second] => {
            let (first_axis, a) = position_component(first)?;
            let (second_axis, b) = position_component(second)?;

            // Only keyword pairs are order-free; an offset always binds the
            // axis of its grammar slot.
            let both_keywords =
                is_one_of(first, POSITION_KEYWORDS) && is_one_of(second, POSITION_KEYWORDS);
            if both_keywords
                && (first_axis == Axis::Vertical || second_axis == Axis::Horizontal)
            {
                (first_axis != Axis::Horizontal && second_axis != Axis::Vertical)
                    .then_some(Position { x: b, y: a })
            } else {
                (first_axis != Axis::Vertical && second_axis != Axis::Horizontal)
                    .then_some(Position { x: a, y: b })
            }
        }
        _ => None,
    }
}

/// Resolve one size component: "auto | `<length-percentage>`".
fn size_component(v: &ComponentValue) -> Option<SizeComponent> {
    if is_keyword(v, "auto") {
        Some(SizeComponent::Auto)
    } else {
        to_distance(v).map(SizeComponent::Value)
    }
}

/// Resolve one size segment.
///
/// "`<bg-size>` = [ `<length-percentage [0,∞]>` | auto ]{1,2} | cover | contain" -
/// cover/contain stand alone and cannot be half of a pair.
fn resolve_size(segment: &[ComponentValue]) -> Option<BackgroundSize> {
    match segment {
        [single] => {
            if is_keyword(single, "cover") {
                Some(BackgroundSize::Cover)
            } else if is_keyword(single, "contain") {
                Some(BackgroundSize::Contain)
            } else {
                // "If only one value is given the second is assumed to be auto."
                size_component(single).map(|width| BackgroundSize::Explicit {
                    width,
                    height: SizeComponent::Auto,
                })
            }
        }
        [width, height] => Some(BackgroundSize::Explicit {
            width: size_component(width)?,
            height: size_component(height)?,
        }),
        _ => None,
    }
}

/// Resolve one repeat keyword usable as a single axis value.
fn axis_repeat(v: &ComponentValue) -> Option<BackgroundRepeat> {
    match v {
        ComponentValue::Token(crate::tokenizer::ValueToken::Ident(name)) => name.parse().ok(),
        _ => None,
    }
}

/// Resolve one repeat segment into its (horizontal, vertical) pair.
///
/// [§ 2.4](https://www.w3.org/TR/css-backgrounds-3/#the-background-repeat):
/// "repeat-x computes to repeat no-repeat", "repeat-y computes to
/// no-repeat repeat", and "a single keyword is shorthand for the
/// two-keyword form with both values the same".
fn resolve_repeat(segment: &[ComponentValue]) -> Option<(BackgroundRepeat, BackgroundRepeat)> {
    match segment {
        [single] => {
            if is_keyword(single, "repeat-x") {
                Some((BackgroundRepeat::Repeat, BackgroundRepeat::NoRepeat))
            } else if is_keyword(single, "repeat-y") {
                Some((BackgroundRepeat::NoRepeat, BackgroundRepeat::Repeat))
            } else {
                axis_repeat(single).map(|r| (r, r))
            }
        }
        // repeat-x / repeat-y are not axis values, so axis_repeat rejects
        // them as either half of a pair.
        [horizontal, vertical] => Some((axis_repeat(horizontal)?, axis_repeat(vertical)?)),
        _ => None,
    }
}

/// Split a composite into segments and resolve each, all-or-nothing.
fn resolve_segments<T>(
    values: &[ComponentValue],
    resolve: impl Fn(&[ComponentValue]) -> Option<T>,
) -> Option<Vec<T>> {
    split_layers(values).into_iter().map(resolve).collect()
}

/// Store for per-layer background-image values.
#[derive(Debug, Clone)]
pub struct ImageStore {
    layers: Vec<ImageSource>,
}

impl ImageStore {
    /// The resolved image of every layer.
    #[must_use]
    pub fn layers(&self) -> &[ImageSource] {
        &self.layers
    }
}

impl Default for ImageStore {
    /// "Initial: none"
    fn default() -> Self {
        Self {
            layers: vec![ImageSource::None],
        }
    }
}

impl LonghandStore for ImageStore {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn accept(&mut self, values: &[ComponentValue]) -> bool {
        let resolved = resolve_segments(values, |segment| match segment {
            [single] => to_image(single),
            _ => None,
        });
        match resolved {
            Some(layers) => {
                self.layers = layers;
                true
            }
            None => false,
        }
    }
}

/// Store for per-layer background-position offsets.
#[derive(Debug, Clone)]
pub struct PositionStore {
    layers: Vec<Position>,
}

impl PositionStore {
    /// The resolved position of every layer.
    #[must_use]
    pub fn layers(&self) -> &[Position] {
        &self.layers
    }
}

impl Default for PositionStore {
    fn default() -> Self {
        Self {
            layers: vec![Position::CENTER],
        }
    }
}

impl LonghandStore for PositionStore {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn accept(&mut self, values: &[ComponentValue]) -> bool {
        match resolve_segments(values, resolve_position) {
            Some(layers) => {
                self.layers = layers;
                true
            }
            None => false,
        }
    }
}

/// Store for per-layer background-size values.
#[derive(Debug, Clone)]
pub struct SizeStore {
    layers: Vec<BackgroundSize>,
}

impl SizeStore {
    /// The resolved size of every layer.
    #[must_use]
    pub fn layers(&self) -> &[BackgroundSize] {
        &self.layers
    }
}

impl Default for SizeStore {
    /// "Initial: auto"
    fn default() -> Self {
        Self {
            layers: vec![BackgroundSize::AUTO],
        }
    }
}

impl LonghandStore for SizeStore {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn accept(&mut self, values: &[ComponentValue]) -> bool {
        match resolve_segments(values, resolve_size) {
            Some(layers) => {
                self.layers = layers;
                true
            }
            None => false,
        }
    }
}

/// Store for per-layer background-repeat values, split per axis.
#[derive(Debug, Clone)]
pub struct RepeatStore {
    horizontal: Vec<BackgroundRepeat>,
    vertical: Vec<BackgroundRepeat>,
}

impl RepeatStore {
    /// The resolved horizontal tiling mode of every layer.
    #[must_use]
    pub fn horizontal(&self) -> &[BackgroundRepeat] {
        &self.horizontal
    }

    /// The resolved vertical tiling mode of every layer.
    #[must_use]
    pub fn vertical(&self) -> &[BackgroundRepeat] {
        &self.vertical
    }
}

impl Default for RepeatStore {
    /// "Initial: repeat"
    fn default() -> Self {
        Self {
            horizontal: vec![BackgroundRepeat::Repeat],
            vertical: vec![BackgroundRepeat::Repeat],
        }
    }
}

impl LonghandStore for RepeatStore {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn accept(&mut self, values: &[ComponentValue]) -> bool {
        match resolve_segments(values, resolve_repeat) {
            Some(pairs) => {
                (self.horizontal, self.vertical) = pairs.into_iter().unzip();
                true
            }
            None => false,
        }
    }
}

/// Store for per-layer background-attachment keywords.
#[derive(Debug, Clone)]
pub struct AttachmentStore {
    layers: Vec<BackgroundAttachment>,
}

impl AttachmentStore {
    /// The resolved attachment of every layer.
    #[must_use]
    pub fn layers(&self) -> &[BackgroundAttachment] {
        &self.layers
    }
}

impl Default for AttachmentStore {
    /// "Initial: scroll"
    fn default() -> Self {
        Self {
            layers: vec![BackgroundAttachment::Scroll],
        }
    }
}

impl LonghandStore for AttachmentStore {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn accept(&mut self, values: &[ComponentValue]) -> bool {
        let resolved = resolve_segments(values, |segment| match segment {
            [ComponentValue::Token(crate::tokenizer::ValueToken::Ident(name))] => name.parse().ok(),
            _ => None,
        });
        match resolved {
            Some(layers) => {
                self.layers = layers;
                true
            }
            None => false,
        }
    }
}

/// Resolve per-layer `<box>` keyword segments, shared by origin and clip.
fn resolve_boxes(values: &[ComponentValue]) -> Option<Vec<BoxModel>> {
    resolve_segments(values, |segment| match segment {
        [single] => to_box_model(single),
        _ => None,
    })
}

/// Store for per-layer background-origin keywords.
#[derive(Debug, Clone)]
pub struct OriginStore {
    layers: Vec<BoxModel>,
}

impl OriginStore {
    /// The resolved positioning area of every layer.
    #[must_use]
    pub fn layers(&self) -> &[BoxModel] {
        &self.layers
    }
}

impl Default for OriginStore {
    fn default() -> Self {
        Self {
            layers: vec![BoxModel::BorderBox],
        }
    }
}

impl LonghandStore for OriginStore {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn accept(&mut self, values: &[ComponentValue]) -> bool {
        match resolve_boxes(values) {
            Some(layers) => {
                self.layers = layers;
                true
            }
            None => false,
        }
    }
}

/// Store for per-layer background-clip keywords.
#[derive(Debug, Clone)]
pub struct ClipStore {
    layers: Vec<BoxModel>,
}

impl ClipStore {
    /// The resolved painting area of every layer.
    #[must_use]
    pub fn layers(&self) -> &[BoxModel] {
        &self.layers
    }
}

impl Default for ClipStore {
    /// "Initial: border-box"
    fn default() -> Self {
        Self {
            layers: vec![BoxModel::BorderBox],
        }
    }
}

impl LonghandStore for ClipStore {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn accept(&mut self, values: &[ComponentValue]) -> bool {
        match resolve_boxes(values) {
            Some(layers) => {
                self.layers = layers;
                true
            }
            None => false,
        }
    }
}

/// Store for the single background-color value.
///
/// background-color is not a layered property, so this store holds exactly
/// one resolved color rather than per-layer segments.
#[derive(Debug, Clone)]
pub struct ColorStore {
    color: ColorValue,
}

impl ColorStore {
    /// The resolved color.
    #[must_use]
    pub const fn color(&self) -> ColorValue {
        self.color
    }
}

impl Default for ColorStore {
    /// "Initial: transparent"
    fn default() -> Self {
        Self {
            color: ColorValue::TRANSPARENT,
        }
    }
}

impl LonghandStore for ColorStore {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn accept(&mut self, values: &[ComponentValue]) -> bool {
        match values {
            [single] => match to_color(single) {
                Some(color) => {
                    self.color = color;
                    true
                }
                None => false,
            },
            _ => false,
        }
    }
}
