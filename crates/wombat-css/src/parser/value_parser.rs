//! Component value reader per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
//!
//! "The input to the parsing stage is a stream of tokens from the tokenization
//! stage." This reader covers exactly the subset a declaration value needs:
//! preserved tokens and functions. Simple blocks (`[...]`, `{...}`) cannot
//! appear in the background grammar and are not represented.

use crate::tokenizer::{ValueToken, ValueTokenizer};

/// [§ 5.3.7 Consume a component value](https://www.w3.org/TR/css-syntax-3/#consume-a-component-value)
///
/// A component value in a declaration value.
///
/// Two members of this tree double as the structural markers of the shorthand
/// grammar: [`ValueToken::Comma`] is the *layer separator* and `Delim('/')`
/// is the *position/size delimiter*.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentValue {
    /// A preserved token.
    Token(ValueToken),
    /// A function with its contents.
    Function {
        /// The function name.
        name: String,
        /// The function arguments.
        value: Vec<ComponentValue>,
    },
}

impl ComponentValue {
    /// Create a preserved ident component value.
    #[must_use]
    pub fn ident(value: impl Into<String>) -> Self {
        Self::Token(ValueToken::ident(value))
    }

    /// The layer separator marker (a preserved `<comma-token>`).
    #[must_use]
    pub const fn separator() -> Self {
        Self::Token(ValueToken::Comma)
    }

    /// Returns true if this is the layer separator marker.
    #[must_use]
    pub fn is_separator(&self) -> bool {
        matches!(self, Self::Token(ValueToken::Comma))
    }

    /// Returns true if this is the position/size delimiter marker.
    #[must_use]
    pub fn is_delimiter(&self) -> bool {
        matches!(self, Self::Token(ValueToken::Delim('/')))
    }
}

/// Reader that turns a token stream into component values.
pub struct ValueParser {
    tokens: Vec<ValueToken>,
    position: usize,
}

impl ValueParser {
    /// Create a new reader from a list of tokens.
    #[must_use]
    pub const fn new(tokens: Vec<ValueToken>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Consume the whole token stream as a list of component values.
    ///
    /// Whitespace tokens are dropped: the value grammar operates on the
    /// whitespace-free sequence, the way a `CSSValueList` is built.
    pub fn parse_component_values(&mut self) -> Vec<ComponentValue> {
        let mut values = Vec::new();

        loop {
            match self.peek() {
                None | Some(ValueToken::Eof) => return values,
                Some(ValueToken::Whitespace) => {
                    let _ = self.consume();
                }
                Some(_) => {
                    if let Some(value) = self.consume_component_value() {
                        values.push(value);
                    }
                }
            }
        }
    }

    /// [§ 5.4.7 Consume a component value](https://www.w3.org/TR/css-syntax-3/#consume-component-value)
    fn consume_component_value(&mut self) -> Option<ComponentValue> {
        match self.peek() {
            // "<function-token>"
            // "Consume a function and return it."
            Some(ValueToken::Function(_)) => {
                let name = match self.consume() {
                    Some(ValueToken::Function(name)) => name.clone(),
                    _ => return None,
                };
                let mut value = Vec::new();
                loop {
                    match self.peek() {
                        Some(ValueToken::RightParen) => {
                            let _ = self.consume();
                            break;
                        }
                        None | Some(ValueToken::Eof) => break,
                        Some(ValueToken::Whitespace) => {
                            let _ = self.consume();
                        }
                        Some(_) => {
                            if let Some(v) = self.consume_component_value() {
                                value.push(v);
                            }
                        }
                    }
                }
                Some(ComponentValue::Function { name, value })
            }

            // "anything else"
            // "Return the current input token."
            Some(_) => {
                let token = self.consume()?.clone();
                Some(ComponentValue::Token(token))
            }

            None => None,
        }
    }

    fn consume(&mut self) -> Option<&ValueToken> {
        if self.position < self.tokens.len() {
            let token = &self.tokens[self.position];
            self.position += 1;
            Some(token)
        } else {
            None
        }
    }

    fn peek(&self) -> Option<&ValueToken> {
        self.tokens.get(self.position)
    }
}

/// Tokenize and read one declaration value into component values.
///
/// This is the entry point the shorthand engine's callers use:
///
/// ```
/// use wombat_css::parser::parse_value_list;
///
/// let values = parse_value_list("url(a.png) top / cover no-repeat");
/// assert!(!values.is_empty());
/// ```
#[must_use]
pub fn parse_value_list(input: &str) -> Vec<ComponentValue> {
    let mut tokenizer = ValueTokenizer::new(input);
    tokenizer.run();
    ValueParser::new(tokenizer.into_tokens()).parse_component_values()
}
