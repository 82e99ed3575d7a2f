//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use std::fmt;
use std::path::PathBuf;

/// Pattern that selects standard input
pub const STDIN_MARKER: &str = "-";

/// One document to segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Read the whole document
    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::Stdin => FileReader::read_stdin(),
            InputSource::File(path) => FileReader::read_text(path),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolve command-line inputs, with `-` standing for standard input
pub fn resolve_inputs(patterns: &[String]) -> Result<Vec<InputSource>> {
    let (stdin, globs): (Vec<String>, Vec<String>) = patterns
        .iter()
        .cloned()
        .partition(|pattern| pattern == STDIN_MARKER);

    let mut inputs = Vec::new();
    if !stdin.is_empty() {
        inputs.push(InputSource::Stdin);
    }
    if !globs.is_empty() {
        inputs.extend(resolve_patterns(&globs)?.into_iter().map(InputSource::File));
    }

    Ok(inputs)
}
