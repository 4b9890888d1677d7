use super::token::ValueToken;

/// [§ 4.3 Tokenizer Algorithms](https://www.w3.org/TR/css-syntax-3/#tokenizer-algorithms)
///
/// Tokenizer for a single declaration value, following the CSS Syntax Module
/// Level 3 consumption algorithms for the token types a value can contain.
///
/// NOTE: Escape sequences (`\26`) are not interpreted; none of the keywords
/// or units in the background grammar require them.
pub struct ValueTokenizer {
    /// The input string being tokenized
    input: Vec<char>,
    /// Current position in the input
    position: usize,
    /// Collected tokens
    tokens: Vec<ValueToken>,
}

impl ValueTokenizer {
    /// Create a new value tokenizer with the given input.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into().chars().collect(),
            position: 0,
            tokens: Vec::new(),
        }
    }

    /// [§ 4.3.1 Consume a token](https://www.w3.org/TR/css-syntax-3/#consume-token)
    ///
    /// Repeatedly consume tokens until EOF.
    pub fn run(&mut self) {
        loop {
            let token = self.consume_token();
            let is_eof = token.is_eof();
            self.tokens.push(token);
            if is_eof {
                break;
            }
        }
    }

    /// Return the collected tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<ValueToken> {
        self.tokens
    }

    /// [§ 4.3.1 Consume a token](https://www.w3.org/TR/css-syntax-3/#consume-token)
    fn consume_token(&mut self) -> ValueToken {
        // "Consume comments."
        self.consume_comments();

        // "Consume the next input code point."
        let Some(c) = self.consume() else {
            return ValueToken::Eof;
        };

        match c {
            // "whitespace"
            // "Consume as much whitespace as possible. Return a <whitespace-token>."
            c if is_whitespace(c) => {
                self.consume_whitespace();
                ValueToken::Whitespace
            }

            // "U+0022 QUOTATION MARK (")" or "U+0027 APOSTROPHE (')"
            // "Consume a string token and return it."
            '"' | '\'' => self.consume_string_token(c),

            // "U+0023 NUMBER SIGN (#)"
            '#' => {
                // "If the next input code point is an ident code point..."
                // "Consume an ident sequence, and set the <hash-token>'s value
                // to the returned string."
                if self.peek().is_some_and(is_ident_code_point) {
                    ValueToken::Hash(self.consume_ident_sequence())
                } else {
                    ValueToken::Delim('#')
                }
            }

            // "U+0029 RIGHT PARENTHESIS ())"
            // "Return a <)-token>."
            ')' => ValueToken::RightParen,

            // "U+002C COMMA (,)"
            // "Return a <comma-token>."
            ',' => ValueToken::Comma,

            // "U+002B PLUS SIGN (+)", "U+002D HYPHEN-MINUS (-)", "U+002E FULL STOP (.)"
            // "If the input stream starts with a number, reconsume the current
            // input code point, consume a numeric token, and return it."
            '+' | '-' | '.' => {
                if self.would_start_number_after(c) {
                    self.reconsume();
                    self.consume_numeric_token()
                } else if c == '-' && self.peek().is_some_and(is_ident_start_code_point) {
                    // "-moz-..." style idents
                    self.reconsume();
                    self.consume_ident_like_token()
                } else {
                    ValueToken::Delim(c)
                }
            }

            // "digit"
            // "Reconsume the current input code point. Consume a numeric token and return it."
            c if c.is_ascii_digit() => {
                self.reconsume();
                self.consume_numeric_token()
            }

            // "ident-start code point"
            // "Reconsume the current input code point. Consume an ident-like token and return it."
            c if is_ident_start_code_point(c) => {
                self.reconsume();
                self.consume_ident_like_token()
            }

            // "anything else"
            // "Return a <delim-token> with its value set to the current input code point."
            c => ValueToken::Delim(c),
        }
    }

    /// [§ 4.3.2 Consume comments](https://www.w3.org/TR/css-syntax-3/#consume-comment)
    ///
    /// "If the next two input code points are U+002F SOLIDUS (/) followed by
    /// U+002A ASTERISK (*), consume them and all following code points up to
    /// and including the first U+002A ASTERISK (*) followed by U+002F SOLIDUS (/),
    /// or up to an EOF code point."
    fn consume_comments(&mut self) {
        while self.peek() == Some('/') && self.peek_at(1) == Some('*') {
            let _ = self.consume(); // /
            let _ = self.consume(); // *

            loop {
                match self.consume() {
                    Some('*') if self.peek() == Some('/') => {
                        let _ = self.consume(); // /
                        break;
                    }
                    Some(_) => continue,
                    None => break, // EOF
                }
            }
        }
    }

    /// Consume whitespace characters.
    fn consume_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            let _ = self.consume();
        }
    }

    /// [§ 4.3.4 Consume a string token](https://www.w3.org/TR/css-syntax-3/#consume-string-token)
    fn consume_string_token(&mut self, ending_code_point: char) -> ValueToken {
        // "Initially create a <string-token> with its value set to the empty string."
        let mut value = String::new();

        loop {
            match self.consume() {
                // "anything else"
                // "Append the current input code point to the <string-token>'s value."
                Some(c) if c != ending_code_point => value.push(c),

                // "ending code point" / "EOF"
                // "Return the <string-token>."
                _ => return ValueToken::String(value),
            }
        }
    }

    /// [§ 4.3.5 Consume a numeric token](https://www.w3.org/TR/css-syntax-3/#consume-numeric-token)
    fn consume_numeric_token(&mut self) -> ValueToken {
        // "Consume a number and let number be the result."
        let value = self.consume_number();

        // "If the next 3 input code points would start an ident sequence..."
        // "Create a <dimension-token>... Consume an ident sequence. Set the
        // <dimension-token>'s unit to the returned value."
        if self.peek().is_some_and(is_ident_start_code_point) {
            let unit = self.consume_ident_sequence();
            ValueToken::Dimension { value, unit }
        }
        // "Otherwise, if the next input code point is U+0025 PERCENTAGE SIGN (%)..."
        else if self.peek() == Some('%') {
            let _ = self.consume();
            ValueToken::Percentage(value)
        }
        // "Otherwise, create a <number-token> with the same value... and return it."
        else {
            ValueToken::Number(value)
        }
    }

    /// [§ 4.3.6 Consume an ident-like token](https://www.w3.org/TR/css-syntax-3/#consume-ident-like-token)
    fn consume_ident_like_token(&mut self) -> ValueToken {
        // "Consume an ident sequence, and let string be the result."
        let string = self.consume_ident_sequence();

        // "If string's value is an ASCII case-insensitive match for 'url',
        // and the next input code point is U+0028 LEFT PARENTHESIS (()"
        if string.eq_ignore_ascii_case("url") && self.peek() == Some('(') {
            let _ = self.consume(); // (
            self.consume_whitespace();

            // "If the next one or two input code points are U+0022 QUOTATION
            // MARK, U+0027 APOSTROPHE, or whitespace followed by [either],
            // return a <function-token>... Otherwise, consume a url token."
            match self.peek() {
                Some('"' | '\'') => ValueToken::Function(string),
                _ => self.consume_url_token(),
            }
        }
        // "Otherwise, if the next input code point is U+0028 LEFT PARENTHESIS (()"
        // "Return a <function-token> with its value set to string."
        else if self.peek() == Some('(') {
            let _ = self.consume();
            ValueToken::Function(string)
        }
        // "Otherwise, return an <ident-token> with its value set to string."
        else {
            ValueToken::Ident(string)
        }
    }

    /// [§ 4.3.7 Consume a url token](https://www.w3.org/TR/css-syntax-3/#consume-url-token)
    ///
    /// Simplified: everything up to the closing parenthesis is the URL, with
    /// surrounding whitespace trimmed. The bad-url recovery states are not
    /// needed for values we control end to end.
    fn consume_url_token(&mut self) -> ValueToken {
        let mut value = String::new();

        loop {
            match self.consume() {
                // "U+0029 RIGHT PARENTHESIS ()) / EOF"
                // "Return the <url-token>."
                Some(')') | None => {
                    return ValueToken::Url(value.trim_end().to_string());
                }
                Some(c) => value.push(c),
            }
        }
    }

    /// [§ 4.3.11 Consume an ident sequence](https://www.w3.org/TR/css-syntax-3/#consume-name)
    fn consume_ident_sequence(&mut self) -> String {
        let mut result = String::new();

        while self.peek().is_some_and(is_ident_code_point) {
            if let Some(c) = self.consume() {
                result.push(c);
            }
        }

        result
    }

    /// [§ 4.3.12 Consume a number](https://www.w3.org/TR/css-syntax-3/#consume-number)
    ///
    /// "Execute the following steps... Repr is converted to a number at the end."
    fn consume_number(&mut self) -> f64 {
        let mut repr = String::new();

        // "If the next input code point is U+002B PLUS SIGN (+) or
        // U+002D HYPHEN-MINUS (-), consume it and append it to repr."
        if matches!(self.peek(), Some('+' | '-')) {
            if let Some(c) = self.consume() {
                repr.push(c);
            }
        }

        // "While the next input code point is a digit, consume it and append it to repr."
        self.consume_digits(&mut repr);

        // "If the next 2 input code points are U+002E FULL STOP (.) followed by a digit..."
        if self.peek() == Some('.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            if let Some(c) = self.consume() {
                repr.push(c);
            }
            self.consume_digits(&mut repr);
        }

        // "Convert repr to a number, and set the value to the returned value."
        repr.parse().unwrap_or(0.0)
    }

    /// Consume a run of ASCII digits onto `repr`.
    fn consume_digits(&mut self, repr: &mut String) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            if let Some(c) = self.consume() {
                repr.push(c);
            }
        }
    }

    /// [§ 4.3.10 Check if three code points would start a number](https://www.w3.org/TR/css-syntax-3/#starts-with-a-number)
    ///
    /// `first` has already been consumed from the stream.
    fn would_start_number_after(&self, first: char) -> bool {
        match first {
            '+' | '-' => {
                // "If the second code point is a digit, return true."
                self.peek().is_some_and(|c| c.is_ascii_digit())
                    // "Otherwise, if the second code point is U+002E FULL STOP (.)
                    // and the third code point is a digit, return true."
                    || (self.peek() == Some('.')
                        && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()))
            }
            '.' => self.peek().is_some_and(|c| c.is_ascii_digit()),
            _ => first.is_ascii_digit(),
        }
    }

    /// Consume and return the next character.
    fn consume(&mut self) -> Option<char> {
        if self.position < self.input.len() {
            let c = self.input[self.position];
            self.position += 1;
            Some(c)
        } else {
            None
        }
    }

    /// Put back the last consumed character.
    fn reconsume(&mut self) {
        if self.position > 0 {
            self.position -= 1;
        }
    }

    /// Peek at the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    /// Peek at a character at an offset from the current position.
    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }
}

/// [§ 4.2 Definitions - whitespace](https://www.w3.org/TR/css-syntax-3/#whitespace)
///
/// "A newline, U+0009 CHARACTER TABULATION, or U+0020 SPACE."
fn is_whitespace(c: char) -> bool {
    matches!(c, '\n' | '\t' | ' ' | '\r' | '\x0C')
}

/// [§ 4.2 Definitions - ident-start code point](https://www.w3.org/TR/css-syntax-3/#ident-start-code-point)
///
/// "A letter, a non-ASCII code point, or U+005F LOW LINE (_)."
fn is_ident_start_code_point(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// [§ 4.2 Definitions - ident code point](https://www.w3.org/TR/css-syntax-3/#ident-code-point)
///
/// "An ident-start code point, a digit, or U+002D HYPHEN-MINUS (-)."
fn is_ident_code_point(c: char) -> bool {
    is_ident_start_code_point(c) || c.is_ascii_digit() || c == '-'
}
