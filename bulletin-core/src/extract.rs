//! Paragraph and sentence extraction
//!
//! Raw generated prose arrives with escaped newlines, Windows line endings,
//! ad hoc ` / ` separators, markdown list markers and inline citation
//! markers. The extractor normalizes all of that, splits the text into
//! paragraphs on blank lines, and each paragraph into sentences.
//!
//! Sentence splitting is a boundary pattern with an always-succeeding
//! fallback: text between boundaries is never dropped, and a paragraph with
//! no boundary at all is a single sentence.

use crate::rules::AbbreviationTable;
use crate::text;
use regex::Regex;

/// A normalized sentence and its derived properties
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Normalized text, citation markers retained
    pub text: String,
    /// Word count, citation markers excluded
    pub words: usize,
    /// Whether the sentence ends in terminal punctuation
    pub terminated: bool,
}

impl Sentence {
    /// Build from raw sentence text
    ///
    /// Returns `None` when nothing is left after normalization.
    pub fn from_raw(raw: &str) -> Option<Self> {
        let normalized = text::normalize(text::strip_list_marker(raw));
        if normalized.is_empty() {
            return None;
        }

        Some(Self {
            words: text::word_count(&normalized),
            terminated: text::ends_with_terminal(&normalized),
            text: normalized,
        })
    }
}

/// Compiled extraction patterns plus the abbreviation guard
#[derive(Debug, Clone)]
pub struct Extractor {
    /// ` / ` followed by something that opens a sentence
    slash_break: Regex,
    /// Horizontal whitespace around a newline
    newline_padding: Regex,
    /// Three or more newlines
    excess_newlines: Regex,
    /// Blank-line paragraph separator
    paragraph_break: Regex,
    /// List markers and heading hashes at line start
    line_marker: Regex,
    /// Terminators, closers, citations, then whitespace or end
    boundary: Regex,
    abbreviations: AbbreviationTable,
}

impl Extractor {
    /// Compile the extraction patterns
    pub fn new(abbreviations: AbbreviationTable) -> Self {
        Self {
            slash_break: Regex::new(r#"\s+/\s+([A-Z0-9"'\x{201C}\x{2018}(\[\-\x{2013}\x{2014}])"#)
                .expect("slash pattern is valid"),
            newline_padding: Regex::new(r"[ \t]*\n[ \t]*").expect("padding pattern is valid"),
            excess_newlines: Regex::new(r"\n{3,}").expect("newline pattern is valid"),
            paragraph_break: Regex::new(r"\n{2,}").expect("paragraph pattern is valid"),
            line_marker: Regex::new(
                r"(?m)^(?:[-*\x{2022}\x{00B7}+>]+|#{1,6}|\d{1,3}[.)])[ \t]+",
            )
            .expect("line marker pattern is valid"),
            boundary: Regex::new(
                r#"[.!?]+["'\x{201D}\x{2019}\x{00BB})\]]*(?:\[\^?\d+\])*(?:\s+|$)"#,
            )
            .expect("boundary pattern is valid"),
            abbreviations,
        }
    }

    /// Normalize raw text and split it into paragraphs
    ///
    /// Empty and whitespace-only input yields no paragraphs.
    pub fn paragraphs(&self, raw: &str) -> Vec<String> {
        let text = raw
            .replace("\r\n", "\n")
            .replace('\r', "\n")
            .replace("\\r\\n", "\n")
            .replace("\\n", "\n");

        let text = self.slash_break.replace_all(&text, "\n\n$1");
        let text = self.newline_padding.replace_all(&text, "\n");
        let text = self.excess_newlines.replace_all(&text, "\n\n");
        let text = self.line_marker.replace_all(&text, "");

        self.paragraph_break
            .split(text.trim())
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Split a paragraph into normalized sentences
    pub fn sentences(&self, paragraph: &str) -> Vec<Sentence> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for m in self.boundary.find_iter(paragraph) {
            if self.is_abbreviation(paragraph, start, m.start(), m.end(), m.as_str()) {
                continue;
            }
            sentences.extend(Sentence::from_raw(&paragraph[start..m.end()]));
            start = m.end();
        }

        // Fallback: trailing fragment, or the whole paragraph without a boundary
        if start < paragraph.len() {
            sentences.extend(Sentence::from_raw(&paragraph[start..]));
        }

        sentences
    }

    /// Extract every paragraph's sentences
    pub fn extract(&self, raw: &str) -> Vec<Vec<Sentence>> {
        self.paragraphs(raw)
            .iter()
            .map(|paragraph| self.sentences(paragraph))
            .collect()
    }

    /// Check whether a boundary match is really an abbreviation period
    fn is_abbreviation(
        &self,
        paragraph: &str,
        sentence_start: usize,
        match_start: usize,
        match_end: usize,
        matched: &str,
    ) -> bool {
        // Only a bare single period can belong to an abbreviation
        if matched.trim_end() != "." {
            return false;
        }

        let token = paragraph[sentence_start..match_start]
            .split_whitespace()
            .next_back()
            .unwrap_or("");
        let next = paragraph[match_end..].chars().next();

        self.abbreviations.suppresses_boundary(token, next)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(AbbreviationTable::default())
    }
}
