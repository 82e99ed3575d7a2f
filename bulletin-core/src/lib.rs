//! Deterministic prose-to-bullet-list segmentation
//!
//! This crate re-flows a block of free-form generated prose into a list of
//! well-bounded, grammatically terminated bullet points. It uses surface
//! cues only (punctuation, word counts and a few phrase tables), performs
//! no I/O and never fails.
//!
//! # Architecture
//!
//! Three stages run strictly forward:
//! - **Extraction** ([`extract`]): normalize the text, split paragraphs and
//!   sentences
//! - **Accumulation** ([`accumulate`]): greedily group sentences into bullets
//!   inside a word-count band, dropping concluding sentences
//! - **Refinement** ([`refine`]): fold undersized bullets into their
//!   predecessor
//!
//! # Example
//!
//! ```rust
//! use bulletin_core::segment;
//!
//! let bullets = segment("Short fact one. In conclusion, this is done.");
//! assert_eq!(bullets, vec!["Short fact one."]);
//!
//! let bullets = segment("Revenues rose sharply.[^1]");
//! assert_eq!(bullets, vec!["Revenues rose sharply.[^1]"]);
//!
//! assert!(segment("   ").is_empty());
//! ```

pub mod accumulate;
pub mod error;
pub mod extract;
pub mod refine;
pub mod rules;
pub mod segmenter;
pub mod text;

pub use error::{ConfigError, Result};
pub use rules::{RuleConfig, RuleSet, Thresholds};
pub use segmenter::{Segmentation, SegmentationStats, Segmenter};

use std::sync::OnceLock;

static DEFAULT_SEGMENTER: OnceLock<Segmenter> = OnceLock::new();

/// Segment text into bullets with the built-in rules
pub fn segment(text: &str) -> Vec<String> {
    DEFAULT_SEGMENTER.get_or_init(Segmenter::new).segment(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_exports() {
        let _rules: RuleSet = RuleSet::default();
        let _segmenter: Segmenter = Segmenter::default();
        let _stats = SegmentationStats::default();
        let _thresholds = Thresholds::default();
    }

    #[test]
    fn test_default_segment_matches_fresh_segmenter() {
        let text = "Stocks fell. Bonds rallied.\n\nGold rose.";
        assert_eq!(segment(text), Segmenter::new().segment(text));
    }
}
