//! Lexical scanner for the zoof scripting language.
//!
//! ```
//! use zoof::{tokenize, ErrorHandler, ErrorReporter, Literal, TokenKind};
//!
//! let mut handler = ErrorHandler::new();
//! let tokens = tokenize("x = 1.5;", &mut handler);
//! assert!(!handler.had_error());
//! assert_eq!(tokens[2].literal, Some(Literal::Float(1.5)));
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//! ```

pub mod repl;
pub mod reporter;
pub mod scanner;
pub mod token;

#[cfg(test)]
mod test_helpers;

pub use reporter::{Diagnostic, ErrorHandler, ErrorReporter};
pub use scanner::{tokenize, ScanError};
pub use token::{Keyword, Literal, Token, TokenKind};
