//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use bulletin_core::Segmentation;
use std::io::Write;

/// Markdown formatter - outputs each document as a bullet list under a heading
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    bullet_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            bullet_count: 0,
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, source: &str, segmentation: &Segmentation) -> Result<()> {
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        for bullet in &segmentation.bullets {
            writeln!(self.writer, "- {bullet}")?;
        }
        writeln!(self.writer)?;
        self.bullet_count += segmentation.bullets.len();
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total bullets: {}*", self.bullet_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
