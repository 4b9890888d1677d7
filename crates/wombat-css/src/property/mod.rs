//! The background shorthand property.
//!
//! [§ 2.10 Backgrounds Shorthand: the background property](https://www.w3.org/TR/css-backgrounds-3/#the-background)
//!
//! The container owns the eight longhand stores and drives the full
//! pipeline: decompose a declaration value into per-longhand composites,
//! then commit every composite into its store. A declaration is applied
//! atomically: if the grammar or any store rejects, nothing changes.

use crate::longhand::{
    AttachmentStore, BackgroundSize, ClipStore, ColorStore, ImageStore, LonghandStore,
    OriginStore, Position, PositionStore, RepeatStore, SizeStore,
};
use crate::parser::{ComponentValue, parse_value_list};
use crate::shorthand::{GrammarError, decompose};
use crate::value::{BackgroundAttachment, BackgroundRepeat, BoxModel, ColorValue, ImageSource};

/// The background shorthand property and its longhand stores.
#[derive(Debug, Clone, Default)]
pub struct BackgroundProperty {
    image: ImageStore,
    position: PositionStore,
    size: SizeStore,
    repeat: RepeatStore,
    attachment: AttachmentStore,
    origin: OriginStore,
    clip: ClipStore,
    color: ColorStore,
}

impl BackgroundProperty {
    /// Create the property at its initial value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore every longhand to its initial value.
    pub fn reset(&mut self) {
        self.image.reset();
        self.position.reset();
        self.size.reset();
        self.repeat.reset();
        self.attachment.reset();
        self.origin.reset();
        self.clip.reset();
        self.color.reset();
    }

    /// Apply a background shorthand declaration value.
    ///
    /// Decomposes the value and commits all eight longhands, or leaves the
    /// property untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GrammarError`] when the value does not match the shorthand
    /// grammar, or when a store rejects its decomposed composite.
    pub fn try_set_value(&mut self, values: &[ComponentValue]) -> Result<(), GrammarError> {
        let composites = decompose(values)?;

        // Validate into fresh stores first so a late rejection cannot leave
        // the property half-updated.
        let mut next = Self::new();
        if !next.image.accept(&composites.image) {
            return Err(GrammarError::StoreRejected("image"));
        }
        if !next.position.accept(&composites.position) {
            return Err(GrammarError::StoreRejected("position"));
        }
        if !next.size.accept(&composites.size) {
            return Err(GrammarError::StoreRejected("size"));
        }
        if !next.repeat.accept(&composites.repeat) {
            return Err(GrammarError::StoreRejected("repeat"));
        }
        if !next.attachment.accept(&composites.attachment) {
            return Err(GrammarError::StoreRejected("attachment"));
        }
        if !next.origin.accept(&composites.origin) {
            return Err(GrammarError::StoreRejected("origin"));
        }
        if !next.clip.accept(&composites.clip) {
            return Err(GrammarError::StoreRejected("clip"));
        }
        if !next.color.accept(std::slice::from_ref(&composites.color)) {
            return Err(GrammarError::StoreRejected("color"));
        }

        *self = next;
        Ok(())
    }

    /// Tokenize, read, and apply a background declaration value.
    ///
    /// # Errors
    ///
    /// Returns [`GrammarError`] as [`Self::try_set_value`] does.
    pub fn try_set_text(&mut self, input: &str) -> Result<(), GrammarError> {
        self.try_set_value(&parse_value_list(input))
    }

    /// The number of background layers.
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.image.layers().len()
    }

    /// Per-layer background-image values.
    #[must_use]
    pub fn images(&self) -> &[ImageSource] {
        self.image.layers()
    }

    /// Per-layer background-position offsets.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        self.position.layers()
    }

    /// Per-layer background-size values.
    #[must_use]
    pub fn sizes(&self) -> &[BackgroundSize] {
        self.size.layers()
    }

    /// Per-layer horizontal background-repeat modes.
    #[must_use]
    pub fn horizontal_repeats(&self) -> &[BackgroundRepeat] {
        self.repeat.horizontal()
    }

    /// Per-layer vertical background-repeat modes.
    #[must_use]
    pub fn vertical_repeats(&self) -> &[BackgroundRepeat] {
        self.repeat.vertical()
    }

    /// Per-layer background-attachment modes.
    #[must_use]
    pub fn attachments(&self) -> &[BackgroundAttachment] {
        self.attachment.layers()
    }

    /// Per-layer background-origin boxes.
    #[must_use]
    pub fn origins(&self) -> &[BoxModel] {
        self.origin.layers()
    }

    /// Per-layer background-clip boxes.
    #[must_use]
    pub fn clips(&self) -> &[BoxModel] {
        self.clip.layers()
    }

    /// The resolved background-color.
    #[must_use]
    pub const fn color(&self) -> ColorValue {
        self.color.color()
    }

    /// [CSS Transitions § 2](https://www.w3.org/TR/css-transitions-1/#animatable-properties):
    /// the background longhands (color, position, size) are animatable, so
    /// the shorthand reports as animatable.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn is_animatable(&self) -> bool {
        true
    }
}
