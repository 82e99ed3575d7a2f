//! Property-based tests for segmentation invariants
//!
//! These hold for every input, not just hand-picked examples: the output
//! never contains blank bullets, every bullet is terminated, and only the
//! first bullet may be undersized.

use bulletin_core::text::{ends_with_terminal, word_count};
use bulletin_core::{segment, RuleSet, Segmenter};
use proptest::prelude::*;

/// Tokens that exercise every extraction rule
fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => "[a-zA-Z]{1,10}",
        2 => Just(".".to_string()),
        1 => Just("!".to_string()),
        1 => Just("?".to_string()),
        1 => Just(",".to_string()),
        1 => Just("[^1]".to_string()),
        1 => Just("[12]".to_string()),
        1 => Just("\n\n".to_string()),
        1 => Just("\\n".to_string()),
        1 => Just("\r\n".to_string()),
        1 => Just("- ".to_string()),
        1 => Just(" / ".to_string()),
        1 => Just("\"".to_string()),
        1 => Just("However,".to_string()),
        1 => Just("In conclusion,".to_string()),
        1 => Just("Dr.".to_string()),
        1 => Just("3.5".to_string()),
    ]
}

fn prose() -> impl Strategy<Value = String> {
    prop::collection::vec(token(), 0..300).prop_map(|tokens| tokens.join(" "))
}

fn check_invariants(bullets: &[String]) -> Result<(), TestCaseError> {
    let rules = RuleSet::default();

    for (i, bullet) in bullets.iter().enumerate() {
        prop_assert!(!bullet.trim().is_empty(), "blank bullet at {}", i);
        prop_assert!(word_count(bullet) >= 1, "wordless bullet {:?}", bullet);
        prop_assert!(ends_with_terminal(bullet), "unterminated bullet {:?}", bullet);
        if i > 0 {
            prop_assert!(
                !rules.thresholds().is_undersized(word_count(bullet)),
                "undersized bullet {:?} at {}",
                bullet,
                i
            );
        }
    }

    Ok(())
}

proptest! {
    #[test]
    fn prose_output_satisfies_invariants(text in prose()) {
        let bullets = segment(&text);
        check_invariants(&bullets)?;
    }

    #[test]
    fn arbitrary_strings_never_panic(text in "\\PC*") {
        let bullets = segment(&text);
        check_invariants(&bullets)?;
    }

    #[test]
    fn segmentation_is_deterministic(text in prose()) {
        let segmenter = Segmenter::new();
        prop_assert_eq!(segmenter.segment(&text), segmenter.segment(&text));
    }

    #[test]
    fn output_is_empty_only_without_words(text in prose()) {
        let bullets = segment(&text);
        if bullets.is_empty() {
            // Nothing left but punctuation, markers or conclusions
            let detailed = Segmenter::new().segment_detailed(&text);
            prop_assert_eq!(detailed.stats.committed, 0);
        } else {
            prop_assert!(word_count(&text) > 0);
        }
    }

    #[test]
    fn no_words_are_invented(text in prose()) {
        let bullets = segment(&text);
        let produced: usize = bullets.iter().map(|b| word_count(b)).sum();
        prop_assert!(produced <= word_count(&text.replace("\\n", " ")));
    }
}
