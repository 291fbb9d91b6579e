use crate::converter::output_manager::OutputManager;
use crate::converter::text_renderer::render_document;
use crate::error::{DocxtractError, Result};
use crate::reader::{DocumentReader, DocxReader};
use crate::scanner::DocumentFile;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Outcome of one attempted file: either the path of the written output or
/// the error description. Never persisted, only reported.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub filename: String,
    pub output_file: Option<PathBuf>,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ConversionProgress {
    pub files_processed: usize,
    pub total_files: usize,
    pub converted: usize,
    pub failed: usize,
    pub current_file: Option<String>,
    pub start_time: Instant,
    pub outcomes: Vec<FileOutcome>,
    pub errors: Vec<String>,
}

impl ConversionProgress {
    pub fn new(total_files: usize) -> Self {
        Self {
            files_processed: 0,
            total_files,
            converted: 0,
            failed: 0,
            current_file: None,
            start_time: Instant::now(),
            outcomes: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn record_success(&mut self, filename: &str, output_file: PathBuf) {
        self.files_processed += 1;
        self.converted += 1;
        self.current_file = Some(filename.to_string());
        self.outcomes.push(FileOutcome {
            filename: filename.to_string(),
            output_file: Some(output_file),
            error: None,
        });
    }

    pub fn record_failure(&mut self, filename: &str, error: &DocxtractError) {
        self.files_processed += 1;
        self.failed += 1;
        self.current_file = Some(filename.to_string());
        self.errors
            .push(format!("Error extracting {}: {}", filename, error));
        self.outcomes.push(FileOutcome {
            filename: filename.to_string(),
            output_file: None,
            error: Some(error.to_string()),
        });
    }

    pub fn percentage(&self) -> f64 {
        if self.total_files == 0 {
            0.0
        } else {
            (self.files_processed as f64 / self.total_files as f64) * 100.0
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn estimated_remaining(&self) -> Duration {
        if self.files_processed == 0 {
            return Duration::from_secs(0);
        }

        let elapsed = self.elapsed();
        let rate = self.files_processed as f64 / elapsed.as_secs_f64();
        let remaining_files = self.total_files - self.files_processed;

        if rate > 0.0 {
            Duration::from_secs_f64(remaining_files as f64 / rate)
        } else {
            Duration::from_secs(0)
        }
    }
}

/// Converts documents one at a time, in order. Per-file failures are caught,
/// recorded, and never stop the batch; this covers both the parse step and
/// the output write.
pub struct BatchConverter<R = DocxReader> {
    reader: R,
}

impl BatchConverter<DocxReader> {
    pub fn new() -> Self {
        Self {
            reader: DocxReader::new(),
        }
    }
}

impl Default for BatchConverter<DocxReader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: DocumentReader> BatchConverter<R> {
    pub fn with_reader(reader: R) -> Self {
        Self { reader }
    }

    /// Converts one document: parse, render, write. Nothing is written when
    /// parsing fails.
    pub fn convert_file(
        &self,
        document: &DocumentFile,
        output: &OutputManager,
    ) -> Result<PathBuf> {
        let content = self.reader.read_document(&document.source_path)?;
        let text = render_document(&content);
        output.write_output(&document.filename, &text)
    }

    /// Converts every document sequentially, invoking `on_file` after each
    /// attempt with the outcome and the progress so far.
    pub fn convert_files<F>(
        &self,
        documents: &[DocumentFile],
        output: &OutputManager,
        mut on_file: F,
    ) -> ConversionProgress
    where
        F: FnMut(&DocumentFile, &Result<PathBuf>, &ConversionProgress),
    {
        let mut progress = ConversionProgress::new(documents.len());

        for document in documents {
            let result = self.convert_file(document, output);

            match &result {
                Ok(path) => progress.record_success(&document.filename, path.clone()),
                Err(error) => progress.record_failure(&document.filename, error),
            }

            on_file(document, &result, &progress);
        }

        progress
    }
}
