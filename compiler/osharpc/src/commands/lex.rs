//! `osharp lex`: print the token stream of a file.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use osharp_lexer::{lex, LexOutput};
use tracing::{debug, info};

use super::read_file;
use crate::DriverError;

/// How each token line is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `Kind("lexeme") @ line:col`
    #[default]
    Plain,
    /// Full `Debug` form of every token, flags included.
    Debug,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "plain" => Some(OutputFormat::Plain),
            "debug" => Some(OutputFormat::Debug),
            _ => None,
        }
    }
}

/// Options for the `lex` command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Print whitespace and comment tokens.
    pub trivia: bool,
    /// Print byte spans after positions.
    pub spans: bool,
    /// Report diagnostics and fail if any exist.
    pub check: bool,
    pub format: OutputFormat,
}

/// Parse `lex` arguments (everything after the command name).
///
/// Flags may come before or after the path.
pub fn parse_lex_args(args: &[String]) -> Result<(PathBuf, LexOptions), DriverError> {
    let mut options = LexOptions::default();
    let mut path = None;

    for arg in args {
        if arg == "--trivia" {
            options.trivia = true;
        } else if arg == "--spans" {
            options.spans = true;
        } else if arg == "--check" {
            options.check = true;
        } else if let Some(format) = arg.strip_prefix("--format=") {
            options.format = OutputFormat::from_str(format)
                .ok_or_else(|| DriverError::UnknownFormat(format.to_string()))?;
        } else if arg.starts_with('-') {
            return Err(DriverError::UnknownOption(arg.clone()));
        } else if path.is_none() {
            path = Some(PathBuf::from(arg));
        }
    }

    let path = path.ok_or(DriverError::MissingPath)?;
    Ok((path, options))
}

/// Write the token listing for `output` to `out`.
pub fn render_tokens(
    out: &mut impl Write,
    name: &str,
    output: &LexOutput<'_>,
    options: &LexOptions,
) -> io::Result<()> {
    writeln!(out, "Tokens for '{}' ({} tokens):", name, output.tokens.len())?;
    for tok in &output.tokens {
        if !options.trivia && tok.kind.is_trivia() {
            continue;
        }
        match options.format {
            OutputFormat::Plain => {
                write!(
                    out,
                    "  {}({:?}) @ {}:{}",
                    tok.kind, tok.lexeme, tok.line, tok.column
                )?;
            }
            OutputFormat::Debug => write!(out, "  {tok:?}")?,
        }
        if options.spans {
            write!(out, " [{}]", tok.span)?;
        }
        writeln!(out)?;
    }

    if options.check {
        for error in &output.errors {
            writeln!(
                out,
                "{}:{}:{}: error: {}",
                name, error.line, error.column, error.kind
            )?;
            writeln!(out, "  help: {}", error.help())?;
        }
    }
    Ok(())
}

/// Lex a file and print its token stream to stdout.
pub fn lex_file(path: &Path, options: &LexOptions) -> Result<(), DriverError> {
    let content = read_file(path)?;
    let name = path.display().to_string();
    info!(file = %name, bytes = content.len(), "lexing");

    let output = lex(&content);
    debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "lex finished"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_tokens(&mut out, &name, &output, options)?;

    if options.check && output.has_errors() {
        return Err(DriverError::LexErrors {
            count: output.errors.len(),
        });
    }
    Ok(())
}
