//! Integration tests for the declaration value tokenizer.

use wombat_css::tokenizer::{ValueToken, ValueTokenizer};

fn tokenize(input: &str) -> Vec<ValueToken> {
    let mut tokenizer = ValueTokenizer::new(input);
    tokenizer.run();
    tokenizer.into_tokens()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("no-repeat fixed");
    assert_eq!(
        tokens,
        vec![
            ValueToken::ident("no-repeat"),
            ValueToken::Whitespace,
            ValueToken::ident("fixed"),
            ValueToken::Eof,
        ]
    );
}

#[test]
fn test_tokenize_unquoted_url() {
    let tokens = tokenize("url(images/cat.png)");
    assert_eq!(tokens, vec![ValueToken::url("images/cat.png"), ValueToken::Eof]);
}

#[test]
fn test_tokenize_quoted_url_is_a_function() {
    // A quoted argument keeps url() as a <function-token> plus a string.
    let tokens = tokenize("url(\"cat.png\")");
    assert_eq!(
        tokens,
        vec![
            ValueToken::function("url"),
            ValueToken::String("cat.png".to_string()),
            ValueToken::RightParen,
            ValueToken::Eof,
        ]
    );
}

#[test]
fn test_tokenize_url_trims_whitespace() {
    let tokens = tokenize("url(  cat.png  )");
    assert_eq!(tokens, vec![ValueToken::url("cat.png"), ValueToken::Eof]);
}

#[test]
fn test_tokenize_hash() {
    let tokens = tokenize("#ff0000");
    assert_eq!(tokens, vec![ValueToken::hash("ff0000"), ValueToken::Eof]);
}

#[test]
fn test_tokenize_numeric_tokens() {
    let tokens = tokenize("10px 50% 0 1.5em");
    assert_eq!(
        tokens,
        vec![
            ValueToken::dimension(10.0, "px"),
            ValueToken::Whitespace,
            ValueToken::Percentage(50.0),
            ValueToken::Whitespace,
            ValueToken::Number(0.0),
            ValueToken::Whitespace,
            ValueToken::dimension(1.5, "em"),
            ValueToken::Eof,
        ]
    );
}

#[test]
fn test_tokenize_negative_dimension() {
    let tokens = tokenize("-5px");
    assert_eq!(tokens, vec![ValueToken::dimension(-5.0, "px"), ValueToken::Eof]);
}

#[test]
fn test_tokenize_comma_and_slash() {
    let tokens = tokenize("a, b / c");
    assert_eq!(
        tokens,
        vec![
            ValueToken::ident("a"),
            ValueToken::Comma,
            ValueToken::Whitespace,
            ValueToken::ident("b"),
            ValueToken::Whitespace,
            ValueToken::Delim('/'),
            ValueToken::Whitespace,
            ValueToken::ident("c"),
            ValueToken::Eof,
        ]
    );
}

#[test]
fn test_tokenize_skips_comments() {
    let tokens = tokenize("/* before */red/* after */");
    assert_eq!(tokens, vec![ValueToken::ident("red"), ValueToken::Eof]);
}

#[test]
fn test_tokenize_rgb_function() {
    let tokens = tokenize("rgb(255, 0, 0)");
    assert_eq!(
        tokens,
        vec![
            ValueToken::function("rgb"),
            ValueToken::Number(255.0),
            ValueToken::Comma,
            ValueToken::Whitespace,
            ValueToken::Number(0.0),
            ValueToken::Comma,
            ValueToken::Whitespace,
            ValueToken::Number(0.0),
            ValueToken::RightParen,
            ValueToken::Eof,
        ]
    );
}

#[test]
fn test_tokenize_empty_input() {
    assert_eq!(tokenize(""), vec![ValueToken::Eof]);
}
