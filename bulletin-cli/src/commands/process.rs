//! Process command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::resolve_inputs;
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use bulletin_core::{RuleSet, Segmentation, Segmenter};
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Rule file overriding the built-in rules
    #[arg(short, long, value_name = "RULES.toml")]
    pub rules: Option<PathBuf>,

    /// CLI defaults file
    #[arg(short, long, value_name = "FILE", env = "BULLETIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Segment files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel processing (default: all cores)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one bullet per line
    Text,
    /// JSON array of documents with bullets and statistics
    Json,
    /// Markdown bullet list per document
    Markdown,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting text processing");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let format = self.resolve_format(&config)?;
        let segmenter = Segmenter::with_rules(self.load_rules(&config)?);

        let inputs = resolve_inputs(&self.input)?;
        log::info!("Found {} input(s) to process", inputs.len());

        let documents = inputs
            .iter()
            .map(|input| Ok((input.to_string(), input.read()?)))
            .collect::<Result<Vec<_>>>()?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(documents.len() as u64);

        let results = if self.parallel || config.processing.parallel {
            self.segment_parallel(&segmenter, &documents, &progress)?
        } else {
            documents
                .iter()
                .map(|(source, text)| segment_one(&segmenter, source, text, &progress))
                .collect()
        };
        progress.finish();

        let mut formatter = create_formatter(format, config.output.pretty_json, self.writer()?);
        for ((source, _), segmentation) in documents.iter().zip(&results) {
            formatter.format_document(source, segmentation)?;
        }
        formatter.finish()?;

        let total: usize = results.iter().map(|s| s.bullets.len()).sum();
        log::info!(
            "Produced {} bullet(s) from {} document(s)",
            total,
            documents.len()
        );

        Ok(())
    }

    /// Pick the format from the flag, falling back to the defaults file
    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }

        let name = &config.output.default_format;
        <OutputFormat as ValueEnum>::from_str(name, true)
            .map_err(|_| CliError::UnknownFormat(name.clone()).into())
    }

    /// Load the rule file from the flag or the defaults file, if any
    fn load_rules(&self, config: &CliConfig) -> Result<RuleSet> {
        let path = self
            .rules
            .as_ref()
            .or(config.processing.rules_file.as_ref());

        match path {
            Some(path) => {
                let rules = RuleSet::from_file(path)
                    .with_context(|| format!("Failed to load rules: {}", path.display()))?;
                log::info!("Using rule set '{}' from {}", rules.name(), path.display());
                Ok(rules)
            }
            None => Ok(RuleSet::default()),
        }
    }

    fn segment_parallel(
        &self,
        segmenter: &Segmenter,
        documents: &[(String, String)],
        progress: &ProgressReporter,
    ) -> Result<Vec<Segmentation>> {
        let threads = match self.threads {
            Some(0) => return Err(CliError::InvalidThreads(0).into()),
            Some(n) => n,
            None => num_cpus::get(),
        };
        log::info!("Segmenting in parallel with {} thread(s)", threads);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build thread pool")?;

        Ok(pool.install(|| {
            documents
                .par_iter()
                .map(|(source, text)| segment_one(segmenter, source, text, progress))
                .collect()
        }))
    }

    fn writer(&self) -> Result<Box<dyn Write + Send + Sync>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

fn segment_one(
    segmenter: &Segmenter,
    source: &str,
    text: &str,
    progress: &ProgressReporter,
) -> Segmentation {
    let segmentation = segmenter.segment_detailed(text);
    log::debug!("{}: {} bullet(s)", source, segmentation.bullets.len());
    progress.file_completed(source);
    segmentation
}

fn create_formatter(
    format: OutputFormat,
    pretty_json: bool,
    writer: Box<dyn Write + Send + Sync>,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
