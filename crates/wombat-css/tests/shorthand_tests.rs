//! Integration tests for the background shorthand decomposition.

use wombat_css::parser::{ComponentValue, parse_value_list};
use wombat_css::shorthand::{GrammarError, ShorthandComposites, decompose};
use wombat_css::tokenizer::ValueToken;

fn decompose_text(input: &str) -> Result<ShorthandComposites, GrammarError> {
    decompose(&parse_value_list(input))
}

fn ident(name: &str) -> ComponentValue {
    ComponentValue::ident(name)
}

#[test]
fn test_empty_value_fills_every_default() {
    let composites = decompose_text("").unwrap();

    assert_eq!(composites.image, vec![ident("none")]);
    assert_eq!(composites.position, vec![ident("center")]);
    assert_eq!(composites.size, vec![ident("auto")]);
    assert_eq!(composites.repeat, vec![ident("repeat")]);
    assert_eq!(composites.attachment, vec![ident("scroll")]);
    assert_eq!(composites.origin, vec![ident("border-box")]);
    assert_eq!(composites.clip, vec![ident("border-box")]);
    // transparent renders as an eight-digit hash
    assert_eq!(
        composites.color,
        ComponentValue::Token(ValueToken::hash("00000000"))
    );
}

#[test]
fn test_single_color_layer() {
    let composites = decompose_text("red").unwrap();

    assert_eq!(
        composites.color,
        ComponentValue::Token(ValueToken::hash("ff0000"))
    );
    assert_eq!(composites.image, vec![ident("none")]);
    assert_eq!(composites.repeat, vec![ident("repeat")]);
}

#[test]
fn test_rgb_function_color() {
    let composites = decompose_text("rgb(0, 128, 0)").unwrap();
    assert_eq!(
        composites.color,
        ComponentValue::Token(ValueToken::hash("008000"))
    );
}

#[test]
fn test_full_layer_claims_every_component() {
    let composites =
        decompose_text("url(a.png) top / cover no-repeat fixed padding-box content-box").unwrap();

    assert_eq!(
        composites.image,
        vec![ComponentValue::Token(ValueToken::url("a.png"))]
    );
    assert_eq!(composites.position, vec![ident("top")]);
    assert_eq!(composites.size, vec![ident("cover")]);
    assert_eq!(composites.repeat, vec![ident("no-repeat")]);
    assert_eq!(composites.attachment, vec![ident("fixed")]);
    assert_eq!(composites.origin, vec![ident("padding-box")]);
    assert_eq!(composites.clip, vec![ident("content-box")]);
}

#[test]
fn test_component_order_does_not_matter() {
    let a = decompose_text("url(a.png) no-repeat fixed").unwrap();
    let b = decompose_text("fixed url(a.png) no-repeat").unwrap();
    let c = decompose_text("no-repeat fixed url(a.png)").unwrap();

    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[test]
fn test_position_without_delimiter_defaults_size_to_auto() {
    let composites = decompose_text("left top").unwrap();

    assert_eq!(composites.position, vec![ident("left"), ident("top")]);
    assert_eq!(composites.size, vec![ident("auto")]);
}

#[test]
fn test_position_with_explicit_size_pair() {
    let composites = decompose_text("center / 50% auto").unwrap();

    assert_eq!(composites.position, vec![ident("center")]);
    assert_eq!(
        composites.size,
        vec![
            ComponentValue::Token(ValueToken::Percentage(50.0)),
            ident("auto"),
        ]
    );
}

#[test]
fn test_dangling_delimiter_is_rejected() {
    assert_eq!(decompose_text("center /"), Err(GrammarError::DanglingDelimiter));
}

#[test]
fn test_delimiter_followed_by_non_size_is_rejected() {
    // "fixed" is an attachment keyword, not a <bg-size>.
    assert_eq!(
        decompose_text("center / fixed"),
        Err(GrammarError::DanglingDelimiter)
    );
}

#[test]
fn test_two_layers_share_one_separator_in_every_composite() {
    let composites = decompose_text("url(a.png), url(b.png)").unwrap();

    assert_eq!(
        composites.image,
        vec![
            ComponentValue::Token(ValueToken::url("a.png")),
            ComponentValue::separator(),
            ComponentValue::Token(ValueToken::url("b.png")),
        ]
    );
    // Every other composite gets the same one-separator shape from defaults.
    assert_eq!(
        composites.attachment,
        vec![ident("scroll"), ComponentValue::separator(), ident("scroll")]
    );
    assert_eq!(
        composites.size,
        vec![ident("auto"), ComponentValue::separator(), ident("auto")]
    );

    let separators = |values: &[ComponentValue]| values.iter().filter(|v| v.is_separator()).count();
    assert_eq!(separators(&composites.position), 1);
    assert_eq!(separators(&composites.repeat), 1);
    assert_eq!(separators(&composites.origin), 1);
    assert_eq!(separators(&composites.clip), 1);
}

#[test]
fn test_color_rejected_on_non_final_layer() {
    let result = decompose_text("red, url(a.png)");
    assert!(matches!(result, Err(GrammarError::UnexpectedValue(_))));
}

#[test]
fn test_color_accepted_on_final_layer() {
    let composites = decompose_text("url(a.png), url(b.png) blue").unwrap();
    assert_eq!(
        composites.color,
        ComponentValue::Token(ValueToken::hash("0000ff"))
    );
}

#[test]
fn test_duplicate_color_is_rejected() {
    let result = decompose_text("red blue");
    assert!(matches!(result, Err(GrammarError::UnexpectedValue(_))));
}

#[test]
fn test_malformed_hash_is_rejected_not_a_panic() {
    // Hash tokens may carry arbitrary ident code points; only hex digit
    // runs of a valid length are colors.
    let result = decompose_text("#\u{2603}");
    assert!(matches!(result, Err(GrammarError::InvalidColor(_))));

    let result = decompose_text("#12");
    assert!(matches!(result, Err(GrammarError::InvalidColor(_))));
}

#[test]
fn test_unclaimable_value_is_rejected() {
    let result = decompose_text("url(a.png) bogus-keyword");
    assert!(matches!(result, Err(GrammarError::InvalidColor(_))));
}

#[test]
fn test_repeat_alone_still_defaults_position_and_size() {
    let composites = decompose_text("repeat-x").unwrap();
    assert_eq!(composites.repeat, vec![ident("repeat-x")]);
    assert_eq!(composites.position, vec![ident("center")]);
    assert_eq!(composites.size, vec![ident("auto")]);
}

#[test]
fn test_repeat_pair_is_claimed_together() {
    let composites = decompose_text("repeat round").unwrap();
    assert_eq!(composites.repeat, vec![ident("repeat"), ident("round")]);
}

#[test]
fn test_repeat_x_cannot_be_second_axis() {
    // "repeat repeat-x" leaves repeat-x unclaimed, and it is not a color.
    let result = decompose_text("repeat repeat-x");
    assert!(matches!(result, Err(GrammarError::InvalidColor(_))));
}

#[test]
fn test_single_box_keyword_defaults_clip() {
    let composites = decompose_text("padding-box").unwrap();
    assert_eq!(composites.origin, vec![ident("padding-box")]);
    assert_eq!(composites.clip, vec![ident("border-box")]);
}

#[test]
fn test_box_pair_sets_origin_then_clip() {
    let composites = decompose_text("padding-box content-box").unwrap();
    assert_eq!(composites.origin, vec![ident("padding-box")]);
    assert_eq!(composites.clip, vec![ident("content-box")]);
}

#[test]
fn test_decompose_is_idempotent_on_its_own_output() {
    let first = decompose_text("left top, right").unwrap();
    let second = decompose(&first.position).unwrap();
    assert_eq!(second.position, first.position);

    let repeats = decompose_text("repeat-x, space round").unwrap();
    let again = decompose(&repeats.repeat).unwrap();
    assert_eq!(again.repeat, repeats.repeat);
}
