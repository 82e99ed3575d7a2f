//! Segmentation rules
//!
//! A [`RuleSet`] bundles every tunable the engine consults: the word-count
//! band, the conclusion and transition phrase tables, and the abbreviation
//! table. It is immutable once built. [`RuleSet::default`] holds the built-in
//! constants; alternatives are loaded from TOML.

pub mod abbreviation;
pub mod config;
pub mod defaults;
pub mod loader;
pub mod phrases;

pub use abbreviation::AbbreviationTable;
pub use config::RuleConfig;
pub use phrases::PhraseTable;

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// Word-count band and ratios that drive accumulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Minimum words before a bullet may be closed
    pub min_words: usize,
    /// Word count at which a bullet is closed immediately
    pub max_words: usize,
    /// Sentences with fewer words always join the current bullet
    pub short_sentence_words: usize,
    /// A sentence is long at `min_words / long_sentence_divisor` words
    pub long_sentence_divisor: f64,
    /// Bullets under `merge_ratio * min_words` fold into their predecessor
    pub merge_ratio: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_words: defaults::MIN_WORDS,
            max_words: defaults::MAX_WORDS,
            short_sentence_words: defaults::SHORT_SENTENCE_WORDS,
            long_sentence_divisor: defaults::LONG_SENTENCE_DIVISOR,
            merge_ratio: defaults::MERGE_RATIO,
        }
    }
}

impl Thresholds {
    /// Whether a sentence is short enough to always join the current bullet
    pub fn is_short(&self, words: usize) -> bool {
        words < self.short_sentence_words
    }

    /// Whether a sentence is long relative to the minimum
    pub fn is_long(&self, words: usize) -> bool {
        words as f64 >= self.min_words as f64 / self.long_sentence_divisor
    }

    /// Whether a committed bullet is small enough to fold into its predecessor
    pub fn is_undersized(&self, words: usize) -> bool {
        (words as f64) < self.min_words as f64 * self.merge_ratio
    }
}

/// Immutable bundle of segmentation rules
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    name: String,
    thresholds: Thresholds,
    conclusions: PhraseTable,
    transitions: PhraseTable,
    transition_window: usize,
    abbreviations: AbbreviationTable,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            thresholds: Thresholds::default(),
            conclusions: PhraseTable::new(defaults::CONCLUSION_PHRASES),
            transitions: PhraseTable::new(defaults::TRANSITION_STARTERS),
            transition_window: defaults::TRANSITION_WINDOW,
            abbreviations: AbbreviationTable::new(
                defaults::TITLE_ABBREVIATIONS,
                defaults::TERM_ABBREVIATIONS,
            ),
        }
    }
}

impl RuleSet {
    /// Build a rule set from a parsed configuration
    pub fn from_config(config: &RuleConfig) -> Result<Self> {
        config.validate().map_err(ConfigError::Invalid)?;

        Ok(Self {
            name: config.metadata.name.clone(),
            thresholds: config.thresholds,
            conclusions: PhraseTable::new(&config.conclusions.phrases),
            transitions: PhraseTable::new(&config.transitions.phrases),
            transition_window: config.transitions.window,
            abbreviations: AbbreviationTable::new(
                &config.abbreviations.titles,
                &config.abbreviations.terms,
            ),
        })
    }

    /// Parse and validate a rule set from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        loader::load_from_str(toml_str)
    }

    /// Load and validate a rule set from a TOML file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        loader::load_from_file(path.as_ref())
    }

    /// Render as a configuration that round-trips through [`RuleSet::from_config`]
    pub fn to_config(&self) -> RuleConfig {
        RuleConfig {
            metadata: config::Metadata {
                name: self.name.clone(),
            },
            thresholds: self.thresholds,
            conclusions: config::Conclusions {
                phrases: self.conclusions.iter().map(str::to_string).collect(),
            },
            transitions: config::Transitions {
                window: self.transition_window,
                phrases: self.transitions.iter().map(str::to_string).collect(),
            },
            abbreviations: config::Abbreviations {
                titles: self
                    .abbreviations
                    .titles()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
                terms: self
                    .abbreviations
                    .terms()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            },
        }
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(&self.to_config())?)
    }

    /// Rule set name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Word-count band and ratios
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Conclusion phrase table
    pub fn conclusions(&self) -> &PhraseTable {
        &self.conclusions
    }

    /// Transition starter table
    pub fn transitions(&self) -> &PhraseTable {
        &self.transitions
    }

    /// Leading words inspected for a transition starter
    pub fn transition_window(&self) -> usize {
        self.transition_window
    }

    /// Abbreviation table
    pub fn abbreviations(&self) -> &AbbreviationTable {
        &self.abbreviations
    }

    /// Whether a sentence is a concluding restatement to drop
    pub fn is_conclusion(&self, sentence: &str) -> bool {
        let lower = sentence.to_lowercase();
        self.conclusions.starts_with_phrase(&lower) || self.conclusions.contains_transition(&lower)
    }

    /// Whether a sentence opens with a transition starter
    pub fn starts_transition(&self, sentence: &str) -> bool {
        self.transitions
            .leads_within(sentence, self.transition_window)
    }
}
