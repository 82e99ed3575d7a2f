//! Generate config command implementation

use anyhow::{Context, Result};
use bulletin_core::RuleSet;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Name recorded in the rule file
    #[arg(short, long, value_name = "NAME", default_value = "custom")]
    pub name: String,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating rule set template...");
        println!("  Name: {}", self.name);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Rule set template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the thresholds and phrase lists to suit your text");
        println!("2. Validate your rules:");
        println!("   bulletin validate --rules {}", self.output.display());
        println!("3. Use them for processing:");
        println!(
            "   bulletin process -i input.txt --rules {}",
            self.output.display()
        );

        Ok(())
    }

    /// Render the built-in rules under the requested name
    fn generate_template(&self) -> Result<String> {
        let mut config = RuleSet::default().to_config();
        config.metadata.name = self.name.clone();

        let body = RuleSet::from_config(&config)?
            .to_toml_string()
            .context("Failed to render rule set")?;

        Ok(format!(
            "# Bulletin rule set\n\
             #\n\
             # Every section is optional. Missing fields take the built-in defaults.\n\
             # [thresholds] sets the word-count band for each bullet.\n\
             # Phrase matching is case-insensitive.\n\n\
             {body}"
        ))
    }
}
