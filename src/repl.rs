use std::io::{self, BufRead, Lines};

use crate::reporter::ErrorHandler;
use crate::scanner::{tokenize, ScanError};
use crate::token::TokenKind;

/// Collects prompt lines until they form a complete input.
///
/// An input is complete on an empty line, or once it has no open string and
/// its parentheses and braces are balanced. Brackets are counted on scanned
/// tokens, so the ones inside strings and comments do not count.
/// Going negative is complete too: reporting that is left to later stages.
pub struct MultilineInput<T: BufRead> {
    lines: Lines<T>,
}

impl<T: BufRead> MultilineInput<T> {
    pub fn new(lines: Lines<T>) -> MultilineInput<T> {
        MultilineInput { lines }
    }
}

impl<T: BufRead> Iterator for MultilineInput<T> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut current_input = String::new();
        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(err)) => return Some(Err(err)),
                // stdin closed, run what we have like python does on CTRL+D
                None if current_input.is_empty() => return None,
                None => return Some(Ok(current_input)),
            };
            if line.is_empty() {
                if current_input.is_empty() {
                    continue;
                }
                return Some(Ok(current_input));
            }
            if !current_input.is_empty() {
                current_input.push('\n');
            }
            current_input += &line;

            if is_complete(&current_input) {
                return Some(Ok(current_input));
            }
        }
    }
}

fn is_complete(input: &str) -> bool {
    let mut handler = ErrorHandler::new();
    let tokens = tokenize(input, &mut handler);

    let unterminated = ScanError::UnterminatedString { line: 0 }.to_string();
    if handler
        .diagnostics()
        .iter()
        .any(|diagnostic| diagnostic.message == unterminated)
    {
        return false;
    }

    let mut open_braces: i32 = 0;
    let mut open_parens: i32 = 0;
    for token in &tokens {
        match token.kind {
            TokenKind::LeftBrace => open_braces += 1,
            TokenKind::RightBrace => open_braces -= 1,
            TokenKind::LeftParen => open_parens += 1,
            TokenKind::RightParen => open_parens -= 1,
            _ => {}
        }
    }
    open_braces <= 0 && open_parens <= 0
}

#[cfg(test)]
mod tests {
    use std::io::{BufRead, Cursor};

    use pretty_assertions::assert_eq;

    use super::MultilineInput;

    fn inputs(text: &str) -> Vec<String> {
        MultilineInput::new(Cursor::new(text.to_string()).lines())
            .collect::<Result<_, _>>()
            .expect("reading from memory does not fail")
    }

    #[test]
    fn test_single_lines_are_complete() {
        assert_eq!(inputs("a = 1\nprint a\n"), vec!["a = 1", "print a"]);
    }

    #[test]
    fn test_open_brace_waits_for_close() {
        assert_eq!(
            inputs("fun f() {\n  return 1\n}\nf()\n"),
            vec!["fun f() {\n  return 1\n}", "f()"]
        );
    }

    #[test]
    fn test_brackets_in_strings_and_comments_are_ignored() {
        assert_eq!(
            inputs("a = '{('\nb // {\n"),
            vec!["a = '{('", "b // {"]
        );
    }

    #[test]
    fn test_open_string_waits_for_quote() {
        assert_eq!(inputs("s = 'one\ntwo'\n"), vec!["s = 'one\ntwo'"]);
    }

    #[test]
    fn test_empty_line_forces_run() {
        assert_eq!(inputs("f(\n\nx\n"), vec!["f(", "x"]);
    }

    #[test]
    fn test_blank_lines_between_inputs_are_skipped() {
        assert_eq!(inputs("\n\na\n"), vec!["a"]);
    }

    #[test]
    fn test_pending_input_returned_at_end() {
        assert_eq!(inputs("{\nx"), vec!["{\nx"]);
        assert!(inputs("").is_empty());
    }
}
