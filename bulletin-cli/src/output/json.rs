//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use bulletin_core::{Segmentation, SegmentationStats};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs documents as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct DocumentData {
    /// Input the bullets came from
    pub source: String,
    /// Bullets in order
    pub bullets: Vec<String>,
    /// Segmentation counters
    pub stats: SegmentationStats,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, source: &str, segmentation: &Segmentation) -> Result<()> {
        self.documents.push(DocumentData {
            source: source.to_string(),
            bullets: segmentation.bullets.clone(),
            stats: segmentation.stats,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn render(pretty: bool) -> String {
        let mut formatter = JsonFormatter::new(Vec::new(), pretty);
        let segmentation = Segmentation {
            bullets: vec!["Stocks fell.".to_string()],
            stats: SegmentationStats {
                paragraphs: 1,
                sentences: 2,
                skipped_sentences: 1,
                committed: 1,
                merged: 0,
            },
        };
        formatter.format_document("news.txt", &segmentation).unwrap();
        formatter.finish().unwrap();
        String::from_utf8(formatter.into_inner()).unwrap()
    }

    #[test]
    fn test_document_shape() {
        let value: Value = serde_json::from_str(&render(true)).unwrap();
        let doc = &value[0];

        assert_eq!(doc["source"], "news.txt");
        assert_eq!(doc["bullets"][0], "Stocks fell.");
        assert_eq!(doc["stats"]["sentences"], 2);
        assert_eq!(doc["stats"]["skipped_sentences"], 1);
    }

    #[test]
    fn test_compact_output_is_single_line() {
        let output = render(false);
        assert_eq!(output.lines().count(), 1);
        assert!(render(true).lines().count() > 1);
    }

    #[test]
    fn test_no_documents_is_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter.finish().unwrap();
        assert_eq!(String::from_utf8(formatter.into_inner()).unwrap(), "[]\n");
    }
}
