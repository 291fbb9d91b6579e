pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod reader;
pub mod scanner;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{Config, ConversionConfig, DirectoryConfig};
pub use error::{DocxtractError, Result, UserFriendlyError};

// Core functionality re-exports
pub use converter::{
    BatchConverter, ConfigSnapshot, ConversionProgress, ConversionReport, OutputManager,
};
pub use reader::{DocumentContent, DocumentReader, DocxReader};
pub use scanner::{DocumentFile, DocumentScanner};
pub use ui::{OutputFormatter, OutputMode, ProgressManager};

use std::path::PathBuf;

/// Main library interface: one batch run over the configured source and
/// destination directories.
pub struct Docxtract {
    config: Config,
    output_formatter: OutputFormatter,
    progress_manager: ProgressManager,
}

impl Docxtract {
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);
        // A bar only makes sense for interactive human output.
        let progress_manager =
            ProgressManager::new(!quiet && output_mode == OutputMode::Human);

        Self {
            config,
            output_formatter,
            progress_manager,
        }
    }

    /// Create a Docxtract instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            crate::cli::OutputFormat::Human => OutputMode::Human,
            crate::cli::OutputFormat::Json => OutputMode::Json,
            crate::cli::OutputFormat::Plain => OutputMode::Plain,
        };

        Ok(Self::new(
            config,
            output_mode,
            cli_args.verbose,
            cli_args.quiet,
        ))
    }

    /// Convert every matching document in the source directory.
    ///
    /// Per-file failures are reported and recorded but never abort the
    /// batch; only setup problems (destination creation, source listing)
    /// return an error.
    pub fn convert_documents(&self) -> Result<ConversionReport> {
        self.output_formatter
            .start_operation("Starting document conversion");

        // Destination first, before any document is touched.
        let output_manager = self.setup_destination()?;

        let documents = self.scan_source()?;
        self.output_formatter
            .info(&format!("Found {} matching documents", documents.len()));

        let progress_bar = self
            .progress_manager
            .create_file_progress(documents.len() as u64);

        let converter = BatchConverter::new();
        let progress =
            converter.convert_files(&documents, &output_manager, |document, result, progress| {
                self.progress_manager.suspend(|| match result {
                    Ok(_) => self.output_formatter.file_converted(&document.filename),
                    Err(error) => self
                        .output_formatter
                        .file_failed(&document.filename, &error.to_string()),
                });
                ui::progress::update_file_progress(&progress_bar, progress);
            });

        progress_bar.finish_and_clear();

        // The summary line prints no matter how many files failed.
        self.output_formatter
            .conversion_summary(output_manager.destination());

        Ok(output_manager.create_conversion_report(
            &self.config.directories.source,
            &progress,
            ConfigSnapshot::from(&self.config.conversion),
        ))
    }

    fn setup_destination(&self) -> Result<OutputManager> {
        let output_manager = OutputManager::new(
            self.config.directories.destination.clone(),
            &self.config.conversion,
        );
        output_manager.initialize()?;

        self.output_formatter.info(&format!(
            "Initialized destination directory: {}",
            output_manager.destination().display()
        ));

        Ok(output_manager)
    }

    /// Scan the source directory for convertible documents.
    pub fn scan_source(&self) -> Result<Vec<DocumentFile>> {
        let scanner = DocumentScanner::new(&self.config.conversion);
        let documents = scanner.scan_directory(&self.config.directories.source)?;

        let stats = scanner.get_statistics(&documents);
        self.output_formatter.debug(&stats.display_summary());

        Ok(documents)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<std::path::Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config).map_err(DocxtractError::Io)?;
        Ok(())
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &DocxtractError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Convenience function to convert a directory with default settings.
pub fn convert_documents_simple(
    source: PathBuf,
    destination: PathBuf,
    verbose: bool,
) -> Result<ConversionReport> {
    let config = Config::new(source, destination);
    let app = Docxtract::new(
        config,
        OutputMode::Plain,
        if verbose { 1 } else { 0 },
        false,
    );

    app.convert_documents()
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_docxtract_creation() {
        let config = Config::new(PathBuf::from("in"), PathBuf::from("out"));
        let app = Docxtract::new(config, OutputMode::Plain, 0, true);
        assert_eq!(app.config().conversion.document_suffix, ".docx");
    }

    #[test]
    fn test_sample_config_generation() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("sample.toml");

        Docxtract::generate_sample_config(&config_path).unwrap();
        assert!(config_path.exists());

        let content = std::fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[directories]"));
        assert!(content.contains("[conversion]"));
    }

    #[test]
    fn test_missing_source_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::new(
            temp_dir.path().join("does_not_exist"),
            temp_dir.path().join("out"),
        );
        let app = Docxtract::new(config, OutputMode::Plain, 0, true);

        let result = app.convert_documents();
        assert!(matches!(
            result,
            Err(DocxtractError::SourceDirectory { .. })
        ));
    }

    #[test]
    fn test_empty_source_still_reports() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("src");
        std::fs::create_dir(&source).unwrap();
        let destination = temp_dir.path().join("dst");

        let config = Config::new(source, destination.clone());
        let app = Docxtract::new(config, OutputMode::Plain, 0, true);

        let report = app.convert_documents().unwrap();
        assert_eq!(report.summary.total_documents, 0);
        assert_eq!(report.summary.converted, 0);
        // The destination is created even when nothing matched.
        assert!(destination.is_dir());
    }

    #[test]
    fn test_version_info() {
        assert!(!version_info().is_empty());
    }
}
