use crate::config::Config;
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "docxtract")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Batch-convert DOCX documents into plain-text files")]
#[command(
    long_about = "Docxtract reads every DOCX file in a configured source directory and \
                  writes one plain-text file per document into a destination directory, \
                  preserving paragraph text and flattening table rows."
)]
#[command(after_help = "EXAMPLES:\n  \
    docxtract\n  \
    docxtract --config my-config.toml\n  \
    docxtract --dry-run -v\n  \
    docxtract --generate-config\n\n\
    The source and destination directories are read from the configuration \
    file (docxtract.toml by default); they cannot be passed on the command line.")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Dry run (show what would be done without executing)
    #[arg(long, help = "Show what would be converted without writing anything")]
    pub dry_run: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let config = Config::load_with_defaults(self.config.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose > 0 && !self.quiet
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}
