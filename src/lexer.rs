use std::iter;
use crate::error::LexingError;
use crate::token::{Kind, Token};

/// Pull-based tokenizer. Each call to [`Lexer::next_token`] scans exactly one
/// token; the source is read with a one character lookahead.
pub struct Lexer {
    chars: Vec<char>,
    current: usize,
    line: usize,
    position: usize,
    finished: bool,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            // Every statement ends with a newline, including the last one.
            chars: input.chars().chain(iter::once('\n')).collect(),
            current: 0,
            line: 1,
            position: 1,
            finished: false,
        }
    }

    fn at(&self) -> char {
        self.chars.get(self.current).copied().unwrap_or('\0')
    }

    fn peek(&self) -> char {
        self.chars.get(self.current + 1).copied().unwrap_or('\0')
    }

    fn is_eof(&self) -> bool {
        self.current >= self.chars.len()
    }

    fn advance(&mut self) {
        if self.is_eof() {
            return;
        }
        if self.at() == '\n' {
            self.line += 1;
            self.position = 1;
        } else {
            self.position += 1;
        }
        self.current += 1;
    }

    fn error(&self, message: String, character: char) -> LexingError {
        LexingError::new(message, character, self.line, self.position)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.at(), ' ' | '\t' | '\r') {
            self.advance();
        }
    }

    fn skip_comment(&mut self) {
        if self.at() == '#' {
            while !self.is_eof() && self.at() != '\n' {
                self.advance();
            }
        }
    }

    fn text_from(&self, start: usize) -> String {
        self.chars[start..=self.current].iter().collect()
    }

    pub fn next_token(&mut self) -> Result<Token, LexingError> {
        self.skip_whitespace();
        self.skip_comment();

        let (line, position) = (self.line, self.position);

        if self.is_eof() {
            return Ok(Token::new(Kind::Eof, "", line, position));
        }

        let ch = self.at();
        let (kind, text) = match ch {
            '+' => (Kind::Plus, ch.to_string()),
            '-' => (Kind::Minus, ch.to_string()),
            '*' => (Kind::Asterisk, ch.to_string()),
            '/' => (Kind::Slash, ch.to_string()),
            '{' => (Kind::LBrace, ch.to_string()),
            '}' => (Kind::RBrace, ch.to_string()),
            '\n' => (Kind::Newline, ch.to_string()),
            '=' | '<' | '>' => {
                if self.peek() == '=' {
                    self.advance(); // consume the '='
                    let kind = match ch {
                        '=' => Kind::EqEq,
                        '<' => Kind::LtEq,
                        _ => Kind::GtEq,
                    };
                    (kind, format!("{}=", ch))
                } else {
                    let kind = match ch {
                        '=' => Kind::Eq,
                        '<' => Kind::Lt,
                        _ => Kind::Gt,
                    };
                    (kind, ch.to_string())
                }
            }
            '!' => {
                if self.peek() != '=' {
                    return Err(self.error(format!("Expected !=, got !{}", self.peek()), ch));
                }
                self.advance();
                (Kind::NotEq, "!=".to_string())
            }
            '"' => {
                self.advance(); // skip the opening quote
                let start = self.current;

                while self.at() != '"' {
                    let c = self.at();
                    if matches!(c, '\n' | '\r' | '\t' | '\\' | '%') {
                        return Err(self.error(
                            format!("Unwanted character in string: {:?}", c),
                            c,
                        ));
                    }
                    self.advance();
                }

                let text: String = self.chars[start..self.current].iter().collect();
                (Kind::String, text)
            }
            c if c.is_ascii_digit() => {
                let start = self.current;

                while self.peek().is_ascii_digit() {
                    self.advance();
                }

                if self.peek() == '.' {
                    self.advance();

                    // At least one digit after the decimal point
                    if !self.peek().is_ascii_digit() {
                        return Err(self.error(
                            format!("Invalid number: {}", self.text_from(start)),
                            '.',
                        ));
                    }

                    while self.peek().is_ascii_digit() {
                        self.advance();
                    }
                }

                (Kind::Number, self.text_from(start))
            }
            c if c.is_ascii_alphabetic() => {
                let start = self.current;

                while self.peek().is_ascii_alphanumeric() {
                    self.advance();
                }

                let text = self.text_from(start);
                let kind = Kind::keyword(&text).unwrap_or(Kind::Identifier);
                (kind, text)
            }
            c => return Err(self.error(format!("Unknown token: {}", c), c)),
        };

        self.advance();
        Ok(Token::new(kind, text, line, position))
    }

    /// Drains the lexer into a vector ending with the EOF token.
    pub fn tokenize(self) -> Result<Vec<Token>, LexingError> {
        self.collect()
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, LexingError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        match &result {
            Ok(token) if token.kind != Kind::Eof => {}
            _ => self.finished = true,
        }
        Some(result)
    }
}
