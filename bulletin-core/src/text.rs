//! Word counting and punctuation helpers
//!
//! These are the leaves every stage builds on. All of them are total: any
//! string goes in, a best-effort answer comes out.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Sentence-ending punctuation
pub const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Closing quotes and brackets that may trail a terminator
pub const CLOSERS: [char; 7] = ['"', '\'', '\u{201D}', '\u{2019}', '\u{00BB}', ')', ']'];

/// Trailing punctuation replaced by a period when a bullet is terminated
const DANGLING: [char; 5] = [',', ';', ':', '-', '\u{2014}'];

static CITATION: OnceLock<Regex> = OnceLock::new();
static TRAILING_CITATION: OnceLock<Regex> = OnceLock::new();
static SPACE_BEFORE_PUNCT: OnceLock<Regex> = OnceLock::new();
static LEADING_MARKER: OnceLock<Regex> = OnceLock::new();

fn citation() -> &'static Regex {
    CITATION.get_or_init(|| Regex::new(r"\[\^?\d+\]").expect("citation pattern is valid"))
}

fn trailing_citation() -> &'static Regex {
    TRAILING_CITATION
        .get_or_init(|| Regex::new(r"\[\^?\d+\]\s*$").expect("citation pattern is valid"))
}

fn space_before_punct() -> &'static Regex {
    SPACE_BEFORE_PUNCT.get_or_init(|| {
        Regex::new(r"\s+([.,;:!?%\)\]\x{201D}])").expect("punctuation pattern is valid")
    })
}

fn leading_marker() -> &'static Regex {
    // "- ", "* ", "• ", "> ", "## ", "1. ", "2) " and stacks like "> - "
    LEADING_MARKER.get_or_init(|| {
        Regex::new(r"^(?:(?:[-*\x{2022}\x{00B7}+>\x{2013}\x{2014}]+|#{1,6}|\d{1,3}[.)])\s+)+")
            .expect("list marker pattern is valid")
    })
}

/// Remove citation markers (`[^1]`, `[12]`) from text
pub fn strip_citations(text: &str) -> Cow<'_, str> {
    citation().replace_all(text, "")
}

/// Count words, ignoring citation markers and punctuation-only tokens
///
/// A word is any whitespace-separated token holding at least one
/// alphanumeric character once citation markers are removed.
pub fn word_count(text: &str) -> usize {
    strip_citations(text)
        .split_whitespace()
        .filter(|token| token.chars().any(char::is_alphanumeric))
        .count()
}

/// Strip leading bullet glyphs, markdown list markers and heading hashes
pub fn strip_list_marker(text: &str) -> &str {
    let trimmed = text.trim_start();
    match leading_marker().find(trimmed) {
        Some(m) => &trimmed[m.end()..],
        None => trimmed,
    }
}

/// Collapse whitespace runs to single spaces and drop spaces before punctuation
pub fn normalize(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    space_before_punct()
        .replace_all(&collapsed, "$1")
        .trim()
        .to_string()
}

/// Whether text ends in terminal punctuation
///
/// Trailing citation markers and closing quotes/brackets are looked through,
/// so `rose sharply.[^1]` and `he said "no."` both count as terminated.
pub fn ends_with_terminal(text: &str) -> bool {
    let mut rest = text.trim_end();
    loop {
        if let Some(m) = trailing_citation().find(rest) {
            rest = rest[..m.start()].trim_end();
        } else if let Some(stripped) = rest.strip_suffix(&CLOSERS[..]) {
            rest = stripped.trim_end();
        } else {
            break;
        }
    }
    rest.ends_with(&TERMINATORS[..])
}

/// Return the text with terminal punctuation guaranteed
///
/// Dangling separators (`,` `;` `:` dashes) are replaced rather than
/// followed by the period.
pub fn ensure_terminal(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() || ends_with_terminal(trimmed) {
        return trimmed.to_string();
    }

    let mut bullet = trimmed.trim_end_matches(&DANGLING[..]).trim_end().to_string();
    if bullet.is_empty() {
        bullet = trimmed.to_string();
    }
    bullet.push('.');
    bullet
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_basic() {
        assert_eq!(word_count("Revenues rose sharply."), 3);
        assert_eq!(word_count("  spaced   out\twords \n here "), 4);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_word_count_ignores_citations() {
        assert_eq!(word_count("Revenues rose sharply.[^1]"), 3);
        assert_eq!(word_count("Revenues [2] rose [^13] sharply."), 3);
        assert_eq!(word_count("[1] [^2]"), 0);
    }

    #[test]
    fn test_word_count_ignores_punctuation_tokens() {
        assert_eq!(word_count("Prices - as expected - fell ..."), 4);
        assert_eq!(word_count("... !!! --"), 0);
    }

    #[test]
    fn test_malformed_citation_counts_as_word() {
        // Only well-formed markers are excluded
        assert_eq!(word_count("Growth [^a] slowed."), 3);
    }

    #[test]
    fn test_strip_list_marker() {
        assert_eq!(strip_list_marker("- Markets fell."), "Markets fell.");
        assert_eq!(strip_list_marker("* Markets fell."), "Markets fell.");
        assert_eq!(strip_list_marker("\u{2022} Markets fell."), "Markets fell.");
        assert_eq!(strip_list_marker("## Markets"), "Markets");
        assert_eq!(strip_list_marker("3. Markets fell."), "Markets fell.");
        assert_eq!(strip_list_marker("> - Markets fell."), "Markets fell.");
        assert_eq!(strip_list_marker("-5% overnight"), "-5% overnight");
        assert_eq!(strip_list_marker("2024 was long."), "2024 was long.");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  a   b \n c  "), "a b c");
        assert_eq!(normalize("Prices rose , then fell ."), "Prices rose, then fell.");
        assert_eq!(normalize("Really ?"), "Really?");
        assert_eq!(normalize("Up 5 %"), "Up 5%");
        assert_eq!(normalize("(see note )"), "(see note)");
    }

    #[test]
    fn test_ends_with_terminal() {
        assert!(ends_with_terminal("Done."));
        assert!(ends_with_terminal("Done!"));
        assert!(ends_with_terminal("Done?  "));
        assert!(ends_with_terminal("He said \"done.\""));
        assert!(ends_with_terminal("(Done.)"));
        assert!(ends_with_terminal("Revenues rose sharply.[^1]"));
        assert!(ends_with_terminal("Revenues rose sharply.[1][^2]"));
        assert!(!ends_with_terminal("Revenues rose sharply[^1]"));
        assert!(!ends_with_terminal("Not done"));
        assert!(!ends_with_terminal(""));
    }

    #[test]
    fn test_ensure_terminal() {
        assert_eq!(ensure_terminal("Not done"), "Not done.");
        assert_eq!(ensure_terminal("Done."), "Done.");
        assert_eq!(ensure_terminal("A list follows:"), "A list follows.");
        assert_eq!(ensure_terminal("Trailing comma, "), "Trailing comma.");
        assert_eq!(ensure_terminal("See (note)"), "See (note).");
        assert_eq!(ensure_terminal("Revenues rose sharply.[^1]"), "Revenues rose sharply.[^1]");
        assert_eq!(ensure_terminal(""), "");
    }
}
