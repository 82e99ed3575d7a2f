//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use bulletin_core::Segmentation;
use std::io::{self, Write};

/// Plain text formatter - outputs one bullet per line
///
/// Documents are separated by a blank line, so the output can be fed back
/// through the segmenter.
pub struct TextFormatter<W: Write> {
    writer: W,
    documents: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: 0,
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, _source: &str, segmentation: &Segmentation) -> Result<()> {
        if segmentation.bullets.is_empty() {
            return Ok(());
        }
        if self.documents > 0 {
            writeln!(self.writer)?;
        }
        for bullet in &segmentation.bullets {
            writeln!(self.writer, "{bullet}")?;
        }
        self.documents += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(bullets: &[&str]) -> Segmentation {
        Segmentation {
            bullets: bullets.iter().map(|b| b.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_one_bullet_per_line() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter
            .format_document("a.txt", &doc(&["Stocks fell.", "Bonds rallied."]))
            .unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(output, "Stocks fell.\nBonds rallied.\n");
    }

    #[test]
    fn test_documents_separated_by_blank_line() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter.format_document("a.txt", &doc(&["A."])).unwrap();
        formatter.format_document("empty.txt", &doc(&[])).unwrap();
        formatter.format_document("b.txt", &doc(&["B."])).unwrap();

        let output = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(output, "A.\n\nB.\n");
    }
}
