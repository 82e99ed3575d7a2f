//! Segmenter facade
//!
//! Wires the three stages together: extraction, accumulation, refinement.
//! A [`Segmenter`] owns its rule set and compiled patterns, holds no mutable
//! state, and can be shared freely across threads.

use crate::accumulate;
use crate::extract::Extractor;
use crate::refine;
use crate::rules::RuleSet;
use serde::Serialize;

/// Counters describing one segmentation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SegmentationStats {
    /// Paragraphs found after normalization
    pub paragraphs: usize,
    /// Sentences extracted
    pub sentences: usize,
    /// Sentences dropped as conclusions
    pub skipped_sentences: usize,
    /// Bullets committed by accumulation
    pub committed: usize,
    /// Bullets folded into their predecessor by refinement
    pub merged: usize,
}

/// Bullets plus the statistics of how they were produced
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Segmentation {
    /// Final bullets
    pub bullets: Vec<String>,
    /// Processing counters
    pub stats: SegmentationStats,
}

/// Prose-to-bullet segmenter
#[derive(Debug, Clone)]
pub struct Segmenter {
    rules: RuleSet,
    extractor: Extractor,
}

impl Segmenter {
    /// Create a segmenter with the built-in rules
    pub fn new() -> Self {
        Self::with_rules(RuleSet::default())
    }

    /// Create a segmenter with a custom rule set
    pub fn with_rules(rules: RuleSet) -> Self {
        let extractor = Extractor::new(rules.abbreviations().clone());
        Self { rules, extractor }
    }

    /// Get the rule set
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Segment text into bullets
    ///
    /// Total over all inputs: text without extractable sentences yields an
    /// empty list.
    pub fn segment(&self, text: &str) -> Vec<String> {
        self.segment_detailed(text).bullets
    }

    /// Segment text and report processing counters
    pub fn segment_detailed(&self, text: &str) -> Segmentation {
        let paragraphs = self.extractor.extract(text);
        let accumulated = accumulate::accumulate(&paragraphs, &self.rules);
        let committed = accumulated.bullets.len();
        let refined = refine::refine(accumulated.bullets, &self.rules);

        let stats = SegmentationStats {
            paragraphs: paragraphs.len(),
            sentences: accumulated.sentences,
            skipped_sentences: accumulated.skipped,
            committed,
            merged: refined.merged,
        };

        log::debug!(
            "segmented {} bytes into {} bullets ({:?})",
            text.len(),
            refined.bullets.len(),
            stats
        );

        Segmentation {
            bullets: refined.bullets,
            stats,
        }
    }

    /// Segment many independent documents, preserving input order
    #[cfg(feature = "parallel")]
    pub fn segment_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<Vec<String>> {
        use rayon::prelude::*;

        texts
            .par_iter()
            .map(|text| self.segment(text.as_ref()))
            .collect()
    }

    /// Segment many independent documents, preserving input order
    #[cfg(not(feature = "parallel"))]
    pub fn segment_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<Vec<String>> {
        texts.iter().map(|text| self.segment(text.as_ref())).collect()
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segmenter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Segmenter>();
    }

    #[test]
    fn test_detailed_stats() {
        let segmenter = Segmenter::new();
        let result = segmenter
            .segment_detailed("Short fact one. In conclusion, this is done.\n\nAnother short fact.");

        assert_eq!(result.stats.paragraphs, 2);
        assert_eq!(result.stats.sentences, 3);
        assert_eq!(result.stats.skipped_sentences, 1);
        assert_eq!(result.stats.committed, 1);
        assert_eq!(result.stats.merged, 0);
        assert_eq!(
            result.bullets,
            vec!["Short fact one. Another short fact."]
        );
    }

    #[test]
    fn test_merge_is_counted() {
        let segmenter = Segmenter::new();
        let first = "The central bank held its benchmark rate steady on Wednesday, citing slowing inflation and a cooling labor market across most regions.";
        let second = "Shares rallied.";
        let result = segmenter.segment_detailed(&format!("{first}\n\n{second}"));

        assert_eq!(result.stats.committed, 2);
        assert_eq!(result.stats.merged, 1);
        assert_eq!(result.bullets, vec![format!("{first} {second}")]);
    }

    #[test]
    fn test_batch_preserves_order() {
        let segmenter = Segmenter::new();
        let docs = ["First doc.", "", "Third doc."];
        let results = segmenter.segment_batch(&docs[..]);
        assert_eq!(
            results,
            vec![
                vec!["First doc.".to_string()],
                Vec::new(),
                vec!["Third doc.".to_string()]
            ]
        );
    }

    #[test]
    fn test_custom_rules_change_band() {
        let rules = RuleSet::from_toml_str(
            "[thresholds]\nmin_words = 2\nmax_words = 4\nshort_sentence_words = 1",
        )
        .unwrap();
        let segmenter = Segmenter::with_rules(rules);
        let bullets = segmenter.segment("One two three. Four five six. Seven eight nine.");
        assert_eq!(
            bullets,
            vec!["One two three.", "Four five six.", "Seven eight nine."]
        );
    }
}
