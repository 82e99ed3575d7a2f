//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod list;
pub mod process;
pub mod validate;

pub use list::ListCommands;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Segment prose files into bullet lists
    Process(process::ProcessArgs),

    /// Validate a rule file
    Validate(validate::ValidateArgs),

    /// Write the built-in rules to a TOML template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List built-in phrase tables
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}
