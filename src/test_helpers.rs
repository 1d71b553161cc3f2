use crate::reporter::{Diagnostic, ErrorHandler, ErrorReporter};
use crate::scanner::tokenize;
use crate::token::{Token, TokenKind};

/// Scan `code`, failing the test on any lexical error.
pub fn scan_ok(code: &str) -> Vec<Token<'_>> {
    let mut handler = ErrorHandler::new();
    let tokens = tokenize(code, &mut handler);
    assert!(
        !handler.had_error(),
        "unexpected errors scanning {code:?}: {:?}",
        handler.diagnostics()
    );
    tokens
}

pub fn scan_with_errors(code: &str) -> (Vec<Token<'_>>, Vec<Diagnostic>) {
    let mut handler = ErrorHandler::new();
    let tokens = tokenize(code, &mut handler);
    (tokens, handler.diagnostics().to_vec())
}

pub fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

/// Byte offset of `lexeme` inside `source`. Lexemes are always slices of the source.
pub fn offset_in(source: &str, lexeme: &str) -> usize {
    let offset = lexeme.as_ptr() as usize - source.as_ptr() as usize;
    assert!(offset + lexeme.len() <= source.len());
    offset
}
