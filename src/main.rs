use std::fs::read_to_string;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::exit;

use clap::Parser;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use zoof::repl::MultilineInput;
use zoof::{tokenize, ErrorHandler, ErrorReporter};

/// sysexits EX_DATAERR
const EXIT_DATA_ERROR: i32 = 65;

#[derive(Parser, Debug)]
#[command(name = "zoof", about = "Scan zoof source and print its tokens")]
struct Cli {
    /// Script to scan. Starts an interactive prompt when omitted.
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    IoError(#[from] io::Error),
    #[error("unable to read {path}: {source}")]
    UnreadableFile { path: PathBuf, source: io::Error },
}

fn main() -> Result<(), color_eyre::eyre::Error> {
    color_eyre::install()?;
    init_tracing();

    let cli = Cli::parse();
    match cli.script {
        Some(path) => run_file(&path)?,
        None => run_prompt()?,
    }
    Ok(())
}

/// Logs go to stderr, and only when `RUST_LOG` is set.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn run_file(path: &Path) -> Result<(), CliError> {
    let source = read_to_string(path).map_err(|source| CliError::UnreadableFile {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = source.len(), "scanning file");

    let mut handler = ErrorHandler::new();
    run(&source, &mut handler)?;
    if handler.had_error() {
        exit(EXIT_DATA_ERROR);
    }
    Ok(())
}

fn run_prompt() -> Result<(), CliError> {
    fn prompt() -> io::Result<()> {
        print!("> ");
        io::stdout().flush()
    }

    let mut handler = ErrorHandler::new();
    prompt()?;
    for input in MultilineInput::new(io::stdin().lock().lines()) {
        run(&input?, &mut handler)?;
        // one bad input should not poison the next one
        handler.reset();
        prompt()?;
    }
    Ok(())
}

fn run(source: &str, handler: &mut ErrorHandler) -> io::Result<()> {
    let tokens = tokenize(source, handler);

    let mut stdout = io::stdout().lock();
    for token in &tokens {
        writeln!(stdout, "{token}")?;
    }
    let mut stderr = io::stderr().lock();
    for diagnostic in handler.diagnostics() {
        writeln!(stderr, "{diagnostic}")?;
    }
    Ok(())
}
