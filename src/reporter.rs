use std::fmt;

use tracing::debug;

/// Receives lexical errors. Owned by the caller and passed by reference
/// into a scan, so the error state outlives it.
pub trait ErrorReporter {
    fn report(&mut self, line: usize, location: &str, message: &str);

    fn had_error(&self) -> bool;

    fn error(&mut self, line: usize, message: &str) {
        self.report(line, "", message)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Diagnostic {
    pub line: usize,
    pub location: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] Error{}: {}",
            self.line, self.location, self.message
        )
    }
}

/// Collects diagnostics in the order they were reported.
/// Printing them is left to whoever owns the handler.
#[derive(Debug, Default)]
pub struct ErrorHandler {
    diagnostics: Vec<Diagnostic>,
}

impl ErrorHandler {
    pub fn new() -> ErrorHandler {
        ErrorHandler::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Forget everything reported so far. The prompt calls this between inputs.
    pub fn reset(&mut self) {
        self.diagnostics.clear();
    }
}

impl ErrorReporter for ErrorHandler {
    fn report(&mut self, line: usize, location: &str, message: &str) {
        debug!(line, location, message, "lexical error reported");
        self.diagnostics.push(Diagnostic {
            line,
            location: location.to_string(),
            message: message.to_string(),
        });
    }

    fn had_error(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
