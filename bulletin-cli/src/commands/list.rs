//! List command implementation

use anyhow::Result;
use bulletin_core::RuleSet;
use clap::Subcommand;
use std::io::{self, Write};

/// List subcommands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum ListCommands {
    /// List built-in conclusion phrases
    Conclusions,

    /// List built-in transition starters
    Transitions,

    /// List built-in abbreviations
    Abbreviations,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        self.write_to(&mut stdout.lock(), &RuleSet::default())
    }

    /// Write the selected table of `rules`
    pub fn write_to<W: Write>(&self, writer: &mut W, rules: &RuleSet) -> Result<()> {
        match self {
            ListCommands::Conclusions => {
                writeln!(
                    writer,
                    "Conclusion phrases (sentences starting with these are dropped):"
                )?;
                for phrase in rules.conclusions().iter() {
                    writeln!(writer, "  {phrase}")?;
                }
            }
            ListCommands::Transitions => {
                writeln!(
                    writer,
                    "Transition starters (checked in the first {} words):",
                    rules.transition_window()
                )?;
                for phrase in rules.transitions().iter() {
                    writeln!(writer, "  {phrase}")?;
                }
            }
            ListCommands::Abbreviations => {
                let table = rules.abbreviations();
                writeln!(writer, "Titles (never end a sentence):")?;
                for title in table.titles() {
                    writeln!(writer, "  {title}.")?;
                }
                writeln!(writer, "Terms (end a sentence only before a capital):")?;
                for term in table.terms() {
                    writeln!(writer, "  {term}.")?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(command: ListCommands) -> String {
        let mut out = Vec::new();
        command.write_to(&mut out, &RuleSet::default()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_conclusions() {
        let output = render(ListCommands::Conclusions);
        assert!(output.contains("  in conclusion\n"));
        assert!(output.contains("  overall\n"));
    }

    #[test]
    fn test_list_transitions() {
        let output = render(ListCommands::Transitions);
        assert!(output.contains("first 4 words"));
        assert!(output.contains("  however\n"));
        assert!(output.contains("  on the other hand\n"));
    }

    #[test]
    fn test_list_abbreviations() {
        let output = render(ListCommands::Abbreviations);
        assert!(output.contains("  dr.\n"));
        assert!(output.contains("  u.s.\n"));
        assert!(output.find("Titles").unwrap() < output.find("Terms").unwrap());
    }
}
