//! Rule file schema
//!
//! Mirrors the TOML layout of a rule file. Every section is optional; a
//! missing section or field takes its built-in default.

use super::defaults;
use super::Thresholds;
use serde::{Deserialize, Serialize};

/// Root rule configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub thresholds: Thresholds,
    #[serde(default)]
    pub conclusions: Conclusions,
    #[serde(default)]
    pub transitions: Transitions,
    #[serde(default)]
    pub abbreviations: Abbreviations,
}

/// Rule set metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub name: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
        }
    }
}

/// Conclusion phrases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conclusions {
    pub phrases: Vec<String>,
}

impl Default for Conclusions {
    fn default() -> Self {
        Self {
            phrases: to_strings(defaults::CONCLUSION_PHRASES),
        }
    }
}

/// Transition starters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transitions {
    /// Leading tokens inspected
    pub window: usize,
    pub phrases: Vec<String>,
}

impl Default for Transitions {
    fn default() -> Self {
        Self {
            window: defaults::TRANSITION_WINDOW,
            phrases: to_strings(defaults::TRANSITION_STARTERS),
        }
    }
}

/// Abbreviations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Abbreviations {
    pub titles: Vec<String>,
    pub terms: Vec<String>,
}

impl Default for Abbreviations {
    fn default() -> Self {
        Self {
            titles: to_strings(defaults::TITLE_ABBREVIATIONS),
            terms: to_strings(defaults::TERM_ABBREVIATIONS),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl RuleConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        let t = &self.thresholds;

        if t.min_words == 0 {
            return Err("min_words must be at least 1".to_string());
        }

        if t.max_words < t.min_words {
            return Err(format!(
                "max_words ({}) must not be less than min_words ({})",
                t.max_words, t.min_words
            ));
        }

        if !(t.long_sentence_divisor.is_finite() && t.long_sentence_divisor > 0.0) {
            return Err("long_sentence_divisor must be a positive number".to_string());
        }

        if !(t.merge_ratio > 0.0 && t.merge_ratio <= 1.0) {
            return Err("merge_ratio must be in (0, 1]".to_string());
        }

        if self.transitions.window == 0 {
            return Err("transition window must be at least 1".to_string());
        }

        let blank = |phrases: &[String]| phrases.iter().any(|p| p.trim().is_empty());
        if blank(&self.conclusions.phrases) {
            return Err("conclusion phrases must not be empty".to_string());
        }
        if blank(&self.transitions.phrases) {
            return Err("transition phrases must not be empty".to_string());
        }
        if blank(&self.abbreviations.titles) || blank(&self.abbreviations.terms) {
            return Err("abbreviations must not be empty".to_string());
        }

        Ok(())
    }
}
