//! Integration tests for the component value reader.

use wombat_css::parser::{ComponentValue, parse_value_list};
use wombat_css::tokenizer::ValueToken;

#[test]
fn test_whitespace_is_dropped() {
    let values = parse_value_list("  red   blue  ");
    assert_eq!(
        values,
        vec![ComponentValue::ident("red"), ComponentValue::ident("blue")]
    );
}

#[test]
fn test_function_collects_arguments() {
    let values = parse_value_list("rgb(255, 0, 0)");
    assert_eq!(
        values,
        vec![ComponentValue::Function {
            name: "rgb".to_string(),
            value: vec![
                ComponentValue::Token(ValueToken::Number(255.0)),
                ComponentValue::Token(ValueToken::Comma),
                ComponentValue::Token(ValueToken::Number(0.0)),
                ComponentValue::Token(ValueToken::Comma),
                ComponentValue::Token(ValueToken::Number(0.0)),
            ],
        }]
    );
}

#[test]
fn test_quoted_url_becomes_function_with_string() {
    let values = parse_value_list("url(\"cat.png\")");
    assert_eq!(
        values,
        vec![ComponentValue::Function {
            name: "url".to_string(),
            value: vec![ComponentValue::Token(ValueToken::String(
                "cat.png".to_string()
            ))],
        }]
    );
}

#[test]
fn test_unquoted_url_stays_a_token() {
    let values = parse_value_list("url(cat.png)");
    assert_eq!(values, vec![ComponentValue::Token(ValueToken::url("cat.png"))]);
}

#[test]
fn test_separator_and_delimiter_markers() {
    let values = parse_value_list("top, center / cover");
    assert_eq!(values.len(), 5);
    assert!(values[1].is_separator());
    assert!(values[3].is_delimiter());
    assert!(!values[0].is_separator());
    assert!(!values[0].is_delimiter());
}

#[test]
fn test_empty_input_yields_no_values() {
    assert!(parse_value_list("").is_empty());
    assert!(parse_value_list("   ").is_empty());
}
