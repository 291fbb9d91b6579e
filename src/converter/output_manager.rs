use crate::config::ConversionConfig;
use crate::converter::batch_converter::ConversionProgress;
use crate::error::{DocxtractError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionReport {
    pub source_directory: String,
    pub destination_directory: String,
    pub summary: ConversionSummary,
    pub files: Vec<FileReport>,
    pub converted_at: DateTime<Utc>,
    pub config_used: ConfigSnapshot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionSummary {
    pub total_documents: usize,
    pub converted: usize,
    pub failed: usize,
    pub duration: Duration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub filename: String,
    pub output_file: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    pub document_suffix: String,
    pub output_suffix: String,
    pub sort_entries: bool,
}

impl From<&ConversionConfig> for ConfigSnapshot {
    fn from(config: &ConversionConfig) -> Self {
        Self {
            document_suffix: config.document_suffix.clone(),
            output_suffix: config.output_suffix.clone(),
            sort_entries: config.sort_entries,
        }
    }
}

/// Owns the destination directory: creates it, derives output filenames and
/// writes output files. Existing files are overwritten; two sources mapping
/// to the same derived name silently overwrite each other.
pub struct OutputManager {
    destination: PathBuf,
    document_suffix: String,
    output_suffix: String,
}

impl OutputManager {
    pub fn new(destination: PathBuf, conversion: &ConversionConfig) -> Self {
        Self {
            destination,
            document_suffix: conversion.document_suffix.clone(),
            output_suffix: conversion.output_suffix.clone(),
        }
    }

    /// Creates the destination directory, parents included. Creating a
    /// directory that already exists is a no-op, not an error.
    pub fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.destination).map_err(|e| DocxtractError::DestinationDirectory {
            path: self.destination.display().to_string(),
            source: e,
        })
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn output_name_for(&self, source_filename: &str) -> String {
        derive_output_name(source_filename, &self.document_suffix, &self.output_suffix)
    }

    pub fn output_path_for(&self, source_filename: &str) -> PathBuf {
        self.destination.join(self.output_name_for(source_filename))
    }

    /// Writes the rendered text for one source document, UTF-8, overwriting
    /// any previous output.
    pub fn write_output(&self, source_filename: &str, content: &str) -> Result<PathBuf> {
        let output_path = self.output_path_for(source_filename);

        fs::write(&output_path, content).map_err(|e| DocxtractError::OutputWrite {
            filename: source_filename.to_string(),
            source: e,
        })?;

        Ok(output_path)
    }

    pub fn create_conversion_report(
        &self,
        source: &Path,
        progress: &ConversionProgress,
        config: ConfigSnapshot,
    ) -> ConversionReport {
        let files = progress
            .outcomes
            .iter()
            .map(|outcome| FileReport {
                filename: outcome.filename.clone(),
                output_file: outcome
                    .output_file
                    .as_ref()
                    .map(|p| p.display().to_string()),
                error: outcome.error.clone(),
            })
            .collect();

        ConversionReport {
            source_directory: source.display().to_string(),
            destination_directory: self.destination.display().to_string(),
            summary: ConversionSummary {
                total_documents: progress.total_files,
                converted: progress.converted,
                failed: progress.failed,
                duration: progress.elapsed(),
            },
            files,
            converted_at: Utc::now(),
            config_used: config,
        }
    }
}

/// Replaces the trailing document suffix with the output suffix. This is a
/// literal suffix replacement, not an extension swap: `my.docx.docx` becomes
/// `my.docx.txt`.
pub fn derive_output_name(filename: &str, document_suffix: &str, output_suffix: &str) -> String {
    match filename.strip_suffix(document_suffix) {
        Some(stem) => format!("{}{}", stem, output_suffix),
        None => format!("{}{}", filename, output_suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager(destination: PathBuf) -> OutputManager {
        OutputManager::new(destination, &ConversionConfig::default())
    }

    #[test]
    fn test_output_name_derivation() {
        assert_eq!(derive_output_name("Survey1.docx", ".docx", ".txt"), "Survey1.txt");
        assert_eq!(derive_output_name("my.docx.docx", ".docx", ".txt"), "my.docx.txt");
        assert_eq!(
            derive_output_name("notes.backup.docx", ".docx", ".txt"),
            "notes.backup.txt"
        );
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let destination = temp_dir.path().join("nested").join("out");

        let manager = manager(destination.clone());
        manager.initialize().unwrap();
        assert!(destination.is_dir());

        // Pre-existing directory is a no-op.
        manager.initialize().unwrap();
    }

    #[test]
    fn test_write_output_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager(temp_dir.path().to_path_buf());

        let first = manager.write_output("doc.docx", "first").unwrap();
        let second = manager.write_output("doc.docx", "second").unwrap();

        assert_eq!(first, second);
        assert_eq!(std::fs::read_to_string(&second).unwrap(), "second");
    }

    #[test]
    fn test_output_path_uses_derived_name() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager(temp_dir.path().to_path_buf());

        assert_eq!(
            manager.output_path_for("Survey1.docx"),
            temp_dir.path().join("Survey1.txt")
        );
    }
}
