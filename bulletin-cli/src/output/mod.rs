//! Output formatting module

use anyhow::Result;
use bulletin_core::Segmentation;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the bullets of one document
    fn format_document(&mut self, source: &str, segmentation: &Segmentation) -> Result<()>;

    /// Finalize output (e.g., write the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
