//! Phrase lookup for conclusion and transition detection
//!
//! Conclusion phrases mark sentences that restate rather than inform; they
//! are dropped before accumulation. Transition starters mark sentences that
//! open a new line of thought; they bias the accumulator toward a new bullet.

/// Lowercased phrase list with cheap length pre-filtering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseTable {
    /// Phrases, lowercased, longest first so multi-word phrases win
    phrases: Vec<String>,
    /// Shortest phrase length in bytes (optimization)
    min_length: usize,
}

impl PhraseTable {
    /// Build from a list of phrases
    ///
    /// Phrases are trimmed, lowercased and deduplicated; blank entries are
    /// ignored.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut phrases: Vec<String> = phrases
            .into_iter()
            .map(|p| p.as_ref().trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        phrases.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        phrases.dedup();

        let min_length = phrases.iter().map(String::len).min().unwrap_or(0);

        Self {
            phrases,
            min_length,
        }
    }

    /// Create an empty table
    pub fn empty() -> Self {
        Self {
            phrases: Vec::new(),
            min_length: 0,
        }
    }

    /// Check if there are no phrases
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Number of phrases
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Iterate over the phrases, longest first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }

    /// Check if lowercased text opens with a phrase at a word boundary
    ///
    /// `"overall, sales rose"` matches `overall`; `"overalls sold out"` does not.
    pub fn starts_with_phrase(&self, lower: &str) -> bool {
        if lower.len() < self.min_length {
            return false;
        }

        self.phrases.iter().any(|phrase| {
            lower.strip_prefix(phrase.as_str()).is_some_and(|rest| {
                rest.chars()
                    .next()
                    .map_or(true, |next| !next.is_alphanumeric())
            })
        })
    }

    /// Check if lowercased text contains a phrase used as a clear transition
    ///
    /// A clear transition is either a parenthetical aside (`, phrase,`) or a
    /// phrase opening a clause right after a period (`. phrase`).
    pub fn contains_transition(&self, lower: &str) -> bool {
        self.phrases.iter().any(|phrase| {
            lower.contains(&format!(", {phrase},")) || lower.contains(&format!(". {phrase}"))
        })
    }

    /// Check whether the first `window` tokens of text open with a phrase
    ///
    /// Tokens lose their trailing punctuation before matching, so
    /// `"However, prices"` matches `however`. Leading punctuation is kept:
    /// a sentence opening mid-quote does not match.
    pub fn leads_within(&self, text: &str, window: usize) -> bool {
        let head = text
            .split_whitespace()
            .take(window)
            .map(|token| {
                token
                    .trim_end_matches(|c: char| !c.is_alphanumeric())
                    .to_lowercase()
            })
            .collect::<Vec<_>>()
            .join(" ");

        self.starts_with_phrase(&head)
    }
}

impl Default for PhraseTable {
    fn default() -> Self {
        Self::empty()
    }
}
