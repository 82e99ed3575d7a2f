//! Validate command implementation

use crate::error::CliError;
use anyhow::Result;
use bulletin_core::RuleSet;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the rule file to validate
    #[arg(short, long, value_name = "RULES.toml", required = true)]
    pub rules: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating rule set: {}", self.rules.display());

        match RuleSet::from_file(&self.rules) {
            Ok(rules) => {
                let thresholds = rules.thresholds();
                println!("✓ Rule set is valid!");
                println!("  Name: {}", rules.name());
                println!(
                    "  Words per bullet: {}-{}",
                    thresholds.min_words, thresholds.max_words
                );
                println!("  Conclusion phrases: {}", rules.conclusions().len());
                println!("  Transition starters: {}", rules.transitions().len());
                println!(
                    "  Abbreviations: {} titles, {} terms",
                    rules.abbreviations().titles().len(),
                    rules.abbreviations().terms().len()
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Rule set is invalid!");
                println!("  Error: {e}");
                Err(CliError::InvalidRules(e.to_string()).into())
            }
        }
    }
}
