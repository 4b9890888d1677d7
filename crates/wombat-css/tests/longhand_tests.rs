//! Integration tests for the longhand stores and the background property.

use wombat_css::longhand::{
    BackgroundSize, LonghandStore, Position, PositionStore, SizeComponent,
};
use wombat_css::parser::{ComponentValue, parse_value_list};
use wombat_css::property::BackgroundProperty;
use wombat_css::shorthand::GrammarError;
use wombat_css::value::{
    BackgroundAttachment, BackgroundRepeat, BoxModel, ColorValue, Distance, ImageSource,
    LengthValue,
};

fn set(input: &str) -> BackgroundProperty {
    let mut background = BackgroundProperty::new();
    background.try_set_text(input).unwrap();
    background
}

#[test]
fn test_initial_values() {
    let background = BackgroundProperty::new();

    assert_eq!(background.layer_count(), 1);
    assert_eq!(background.images(), &[ImageSource::None]);
    assert_eq!(background.positions(), &[Position::CENTER]);
    assert_eq!(background.sizes(), &[BackgroundSize::AUTO]);
    assert_eq!(background.horizontal_repeats(), &[BackgroundRepeat::Repeat]);
    assert_eq!(background.vertical_repeats(), &[BackgroundRepeat::Repeat]);
    assert_eq!(background.attachments(), &[BackgroundAttachment::Scroll]);
    assert_eq!(background.origins(), &[BoxModel::BorderBox]);
    assert_eq!(background.clips(), &[BoxModel::BorderBox]);
    assert_eq!(background.color(), ColorValue::TRANSPARENT);
    assert!(background.is_animatable());
}

#[test]
fn test_full_single_layer() {
    let background =
        set("url(cat.png) left top / 100px 50% no-repeat fixed padding-box content-box red");

    assert_eq!(background.layer_count(), 1);
    assert_eq!(background.images(), &[ImageSource::Url("cat.png".to_string())]);
    assert_eq!(
        background.positions(),
        &[Position {
            x: Distance::Percent(0.0),
            y: Distance::Percent(0.0),
        }]
    );
    assert_eq!(
        background.sizes(),
        &[BackgroundSize::Explicit {
            width: SizeComponent::Value(Distance::Length(LengthValue::Px(100.0))),
            height: SizeComponent::Value(Distance::Percent(50.0)),
        }]
    );
    assert_eq!(background.horizontal_repeats(), &[BackgroundRepeat::NoRepeat]);
    assert_eq!(background.vertical_repeats(), &[BackgroundRepeat::NoRepeat]);
    assert_eq!(background.attachments(), &[BackgroundAttachment::Fixed]);
    assert_eq!(background.origins(), &[BoxModel::PaddingBox]);
    assert_eq!(background.clips(), &[BoxModel::ContentBox]);
    assert_eq!(background.color(), ColorValue::rgb(255, 0, 0));
}

#[test]
fn test_multi_layer_accessors_line_up() {
    let background = set("url(a.png) top / cover no-repeat, bottom right / contain red");

    assert_eq!(background.layer_count(), 2);
    assert_eq!(
        background.images(),
        &[ImageSource::Url("a.png".to_string()), ImageSource::None]
    );
    assert_eq!(
        background.positions(),
        &[
            // "top" alone implies a centered horizontal axis
            Position {
                x: Distance::Percent(50.0),
                y: Distance::Percent(0.0),
            },
            // "bottom right" reorders to x=right, y=bottom
            Position {
                x: Distance::Percent(100.0),
                y: Distance::Percent(100.0),
            },
        ]
    );
    assert_eq!(
        background.sizes(),
        &[BackgroundSize::Cover, BackgroundSize::Contain]
    );
    assert_eq!(
        background.horizontal_repeats(),
        &[BackgroundRepeat::NoRepeat, BackgroundRepeat::Repeat]
    );
    assert_eq!(
        background.attachments(),
        &[BackgroundAttachment::Scroll, BackgroundAttachment::Scroll]
    );
    assert_eq!(background.vertical_repeats().len(), 2);
    assert_eq!(background.origins(), &[BoxModel::BorderBox, BoxModel::BorderBox]);
    assert_eq!(background.clips(), &[BoxModel::BorderBox, BoxModel::BorderBox]);
    assert_eq!(background.color(), ColorValue::rgb(255, 0, 0));
}

#[test]
fn test_repeat_x_expands_per_axis() {
    let background = set("repeat-x");
    assert_eq!(background.horizontal_repeats(), &[BackgroundRepeat::Repeat]);
    assert_eq!(background.vertical_repeats(), &[BackgroundRepeat::NoRepeat]);

    let background = set("repeat-y");
    assert_eq!(background.horizontal_repeats(), &[BackgroundRepeat::NoRepeat]);
    assert_eq!(background.vertical_repeats(), &[BackgroundRepeat::Repeat]);
}

#[test]
fn test_repeat_pair_sets_each_axis() {
    let background = set("space round");
    assert_eq!(background.horizontal_repeats(), &[BackgroundRepeat::Space]);
    assert_eq!(background.vertical_repeats(), &[BackgroundRepeat::Round]);
}

#[test]
fn test_hex_color_shorthand() {
    let background = set("#0f0");
    assert_eq!(background.color(), ColorValue::rgb(0, 255, 0));
}

#[test]
fn test_rejection_is_atomic() {
    let mut background = set("blue");

    // A duplicate color fails the grammar; the stored value must survive.
    assert!(background.try_set_text("red green").is_err());
    assert_eq!(background.color(), ColorValue::rgb(0, 0, 255));
    assert_eq!(background.layer_count(), 1);
}

#[test]
fn test_reset_restores_initial_values() {
    let mut background = set("url(a.png) fixed red");
    background.reset();

    assert_eq!(background.images(), &[ImageSource::None]);
    assert_eq!(background.attachments(), &[BackgroundAttachment::Scroll]);
    assert_eq!(background.color(), ColorValue::TRANSPARENT);
}

#[test]
fn test_overlong_position_run_is_rejected_by_the_store() {
    // The grammar walk happily claims a three-value run; the store is the
    // narrower gate.
    let mut background = BackgroundProperty::new();
    assert_eq!(
        background.try_set_text("left top center"),
        Err(GrammarError::StoreRejected("position"))
    );
}

#[test]
fn test_same_axis_keyword_pair_is_rejected() {
    let mut background = BackgroundProperty::new();
    assert_eq!(
        background.try_set_text("left right"),
        Err(GrammarError::StoreRejected("position"))
    );
}

#[test]
fn test_cover_cannot_be_half_of_a_size_pair() {
    let mut background = BackgroundProperty::new();
    assert_eq!(
        background.try_set_text("center / cover auto"),
        Err(GrammarError::StoreRejected("size"))
    );
}

#[test]
fn test_position_store_leaves_layers_on_rejection() {
    let mut store = PositionStore::default();
    let overlong: Vec<ComponentValue> = parse_value_list("left top center");

    assert!(!store.accept(&overlong));
    assert_eq!(store.layers(), &[Position::CENTER]);

    assert!(store.accept(&parse_value_list("10px 2em")));
    assert_eq!(
        store.layers(),
        &[Position {
            x: Distance::Length(LengthValue::Px(10.0)),
            y: Distance::Length(LengthValue::Em(2.0)),
        }]
    );
}

#[test]
fn test_zero_number_is_a_valid_offset() {
    let background = set("0 50%");
    assert_eq!(
        background.positions(),
        &[Position {
            x: Distance::Length(LengthValue::Px(0.0)),
            y: Distance::Percent(50.0),
        }]
    );
}
