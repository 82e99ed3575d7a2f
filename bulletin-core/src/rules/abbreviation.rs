//! Abbreviation lookup for sentence boundary suppression
//!
//! A period after an abbreviation is not a sentence end. Titles (`Dr.`,
//! `Mr.`) are always followed by a name, so they never end a sentence.
//! Other terms (`U.S.`, `Inc.`, `e.g.`) may close a sentence, so they only
//! suppress the boundary when the next word continues it.

use std::collections::HashSet;

/// Case-insensitive abbreviation table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbbreviationTable {
    /// Abbreviations that always precede a name
    titles: HashSet<String>,
    /// Abbreviations that may end a sentence
    terms: HashSet<String>,
}

impl AbbreviationTable {
    /// Build from title and term lists
    ///
    /// Entries are stored lowercased without their final period, so both
    /// `"U.S."` and `"U.S"` are accepted.
    pub fn new<T, U, S1, S2>(titles: T, terms: U) -> Self
    where
        T: IntoIterator<Item = S1>,
        U: IntoIterator<Item = S2>,
        S1: AsRef<str>,
        S2: AsRef<str>,
    {
        Self {
            titles: titles.into_iter().filter_map(Self::key).collect(),
            terms: terms.into_iter().filter_map(Self::key).collect(),
        }
    }

    fn key<S: AsRef<str>>(entry: S) -> Option<String> {
        let key = entry.as_ref().trim().trim_end_matches('.').to_lowercase();
        (!key.is_empty()).then_some(key)
    }

    /// Check if the table holds no abbreviations
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty() && self.terms.is_empty()
    }

    /// Titles, sorted
    pub fn titles(&self) -> Vec<&str> {
        let mut titles: Vec<&str> = self.titles.iter().map(String::as_str).collect();
        titles.sort_unstable();
        titles
    }

    /// Terms, sorted
    pub fn terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.terms.iter().map(String::as_str).collect();
        terms.sort_unstable();
        terms
    }

    /// Decide whether a period after `token` is not a sentence end
    ///
    /// `token` is the word immediately before the period (without it);
    /// `next` is the first character after the whitespace that follows, if
    /// any.
    pub fn suppresses_boundary(&self, token: &str, next: Option<char>) -> bool {
        let key = token
            .trim_start_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if key.is_empty() {
            return false;
        }

        if self.titles.contains(&key) {
            return true;
        }

        self.terms.contains(&key)
            && next.is_some_and(|ch| ch.is_lowercase() || ch.is_ascii_digit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> AbbreviationTable {
        AbbreviationTable::new(["Dr", "Mr."], ["U.S", "e.g.", "Inc"])
    }

    #[test]
    fn test_titles_always_suppress() {
        let table = table();
        assert!(table.suppresses_boundary("Dr", Some('S')));
        assert!(table.suppresses_boundary("mr", Some('J')));
        assert!(table.suppresses_boundary("(Dr", None));
    }

    #[test]
    fn test_terms_suppress_only_before_continuation() {
        let table = table();
        assert!(table.suppresses_boundary("U.S", Some('o')));
        assert!(table.suppresses_boundary("e.g", Some('t')));
        assert!(table.suppresses_boundary("Inc", Some('4')));
        assert!(!table.suppresses_boundary("U.S", Some('T')));
        assert!(!table.suppresses_boundary("Inc", None));
    }

    #[test]
    fn test_unknown_tokens_do_not_suppress() {
        let table = table();
        assert!(!table.suppresses_boundary("store", Some('h')));
        assert!(!table.suppresses_boundary("", Some('h')));
        assert!(!table.suppresses_boundary("...", Some('h')));
    }

    #[test]
    fn test_listing_is_sorted() {
        let table = table();
        assert_eq!(table.titles(), vec!["dr", "mr"]);
        assert_eq!(table.terms(), vec!["e.g", "inc", "u.s"]);
        assert!(!table.is_empty());
        assert!(AbbreviationTable::default().is_empty());
    }
}
