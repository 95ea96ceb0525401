//! Command handlers for the `osharp` CLI.
//!
//! Shared utilities like `read_file` live here in the module root.

use std::path::Path;

use crate::DriverError;

mod lex;

pub use lex::{lex_file, parse_lex_args, render_tokens, LexOptions, OutputFormat};

/// Read a source file, classifying I/O failures into [`DriverError`].
pub fn read_file(path: &Path) -> Result<String, DriverError> {
    std::fs::read_to_string(path).map_err(|e| DriverError::from_io(path, e))
}
