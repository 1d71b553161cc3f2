use std::num::IntErrorKind;

use thiserror::Error;
use tracing::{debug, trace};

use crate::reporter::ErrorReporter;
use crate::token::{Keyword, Literal, Token, TokenKind};

const QUOTE: char = '\'';

/// public interface for tokenizing.
/// The returned tokens borrow `source`, and always end with exactly one `Eof`.
pub fn tokenize<'src, R>(source: &'src str, reporter: &mut R) -> Vec<Token<'src>>
where
    R: ErrorReporter + ?Sized,
{
    let mut scanner = Scanner::new(source, reporter);
    scanner.scan_tokens();
    scanner.tokens
}

struct Scanner<'src, 'r, R: ErrorReporter + ?Sized> {
    source: &'src str,
    tokens: Vec<Token<'src>>,
    reporter: &'r mut R,

    // byte offsets, start of the current lexeme and next unread character
    start: usize,
    current: usize,
    line: usize,
    // line on which the current lexeme began
    start_line: usize,
}

#[derive(Debug, Error, PartialEq)]
pub enum ScanError {
    #[error("Unexpected character: '{character}'")]
    UnexpectedCharacter { line: usize, character: char },
    #[error("Unterminated string.")]
    UnterminatedString { line: usize },
    #[error("Integer literal '{lexeme}' does not fit in 64 bits.")]
    IntegerOverflow { line: usize, lexeme: String },
}

impl ScanError {
    pub fn line(&self) -> usize {
        match self {
            ScanError::UnexpectedCharacter { line, .. }
            | ScanError::UnterminatedString { line }
            | ScanError::IntegerOverflow { line, .. } => *line,
        }
    }
}

impl<'src, 'r, R: ErrorReporter + ?Sized> Scanner<'src, 'r, R> {
    fn new(source: &'src str, reporter: &'r mut R) -> Scanner<'src, 'r, R> {
        Scanner {
            source,
            tokens: vec![],
            reporter,
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
        }
    }

    fn scan_tokens(&mut self) {
        let mut errors = 0;
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            if let Err(scanning_error) = self.scan_token() {
                errors += 1;
                self.reporter
                    .error(scanning_error.line(), &scanning_error.to_string());
            }
        }
        self.tokens.push(Token::eof(self.line));
        debug!(
            tokens = self.tokens.len(),
            errors,
            lines = self.line,
            "scan finished"
        );
    }

    fn scan_token(&mut self) -> Result<(), ScanError> {
        let Some(c) = self.advance() else {
            return Ok(());
        };
        let (kind, literal) = match c {
            '(' => (TokenKind::LeftParen, None),
            ')' => (TokenKind::RightParen, None),
            '{' => (TokenKind::LeftBrace, None),
            '}' => (TokenKind::RightBrace, None),
            ',' => (TokenKind::Comma, None),
            '.' => (TokenKind::Dot, None),
            '-' => (TokenKind::Minus, None),
            '+' => (TokenKind::Plus, None),
            ';' => (TokenKind::Semicolon, None),
            '*' => (TokenKind::Star, None),
            '!' => match self.match_one('=') {
                true => (TokenKind::BangEqual, None),
                false => (TokenKind::Bang, None),
            },
            '=' => match self.match_one('=') {
                true => (TokenKind::EqualEqual, None),
                false => (TokenKind::Equal, None),
            },
            '<' => match self.match_one('=') {
                true => (TokenKind::LessEqual, None),
                false => (TokenKind::Less, None),
            },
            '>' => match self.match_one('=') {
                true => (TokenKind::GreaterEqual, None),
                false => (TokenKind::Greater, None),
            },
            '/' => {
                if self.match_one('/') {
                    // the newline is left for the next iteration to count
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                    return Ok(());
                }
                (TokenKind::Slash, None)
            }
            ' ' | '\r' | '\t' => return Ok(()),
            '\n' => {
                self.line += 1;
                return Ok(());
            }
            QUOTE => (TokenKind::String, Some(self.consume_string()?)),
            c if is_digit(c) => (TokenKind::Number, Some(self.consume_number()?)),
            c if is_alpha(c) => (self.consume_identifier(), None),
            _ => {
                return Err(ScanError::UnexpectedCharacter {
                    line: self.line,
                    character: c,
                });
            }
        };

        self.add_token(kind, literal);
        Ok(())
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        Some(c)
    }

    fn match_one(&mut self, expected: char) -> bool {
        if self.peek() != Some(expected) {
            return false;
        }
        self.advance();
        true
    }

    /// 1 lookahead, `None` at end of input.
    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    /// 2 lookahead
    fn peek_next(&self) -> Option<char> {
        self.source[self.current..].chars().nth(1)
    }

    fn add_token(&mut self, kind: TokenKind, literal: Option<Literal<'src>>) {
        // start and current always sit on char boundaries, advance moves by whole chars
        let token = Token {
            kind,
            lexeme: &self.source[self.start..self.current],
            literal,
            line: self.start_line,
        };
        trace!(%token, "token");
        self.tokens.push(token);
    }

    fn consume_string(&mut self) -> Result<Literal<'src>, ScanError> {
        while let Some(c) = self.peek() {
            if c == QUOTE {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            return Err(ScanError::UnterminatedString {
                line: self.start_line,
            });
        }

        // consume closing quote
        self.advance();

        let quote_len = QUOTE.len_utf8();
        Ok(Literal::Text(
            &self.source[self.start + quote_len..self.current - quote_len],
        ))
    }

    fn consume_number(&mut self) -> Result<Literal<'src>, ScanError> {
        self.consume_digits();

        // a trailing '.' without a digit after it belongs to the next token
        let has_fraction = self.peek() == Some('.') && self.peek_next().is_some_and(is_digit);
        if has_fraction {
            self.advance();
            self.consume_digits();
        }

        let lexeme = &self.source[self.start..self.current];
        if has_fraction {
            return match lexeme.parse::<f64>() {
                Ok(value) => Ok(Literal::Float(value)),
                Err(err) => unreachable!("scanned float literal {lexeme:?} does not parse: {err}"),
            };
        }
        match lexeme.parse::<i64>() {
            Ok(value) => Ok(Literal::Integer(value)),
            Err(err) if *err.kind() == IntErrorKind::PosOverflow => {
                Err(ScanError::IntegerOverflow {
                    line: self.start_line,
                    lexeme: lexeme.to_string(),
                })
            }
            Err(err) => unreachable!("scanned integer literal {lexeme:?} does not parse: {err}"),
        }
    }

    fn consume_digits(&mut self) {
        while self.peek().is_some_and(is_digit) {
            self.advance();
        }
    }

    fn consume_identifier(&mut self) -> TokenKind {
        while self.peek().is_some_and(is_alphanumeric) {
            self.advance();
        }

        match Keyword::from_lexeme(&self.source[self.start..self.current]) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier,
        }
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}
fn is_alpha(c: char) -> bool {
    matches!(c, 'a'..='z' | 'A'..='Z' | '_')
}
fn is_alphanumeric(c: char) -> bool {
    is_digit(c) || is_alpha(c)
}
