use crate::config::ConversionConfig;
use crate::error::{DocxtractError, Result};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct DocumentFile {
    pub source_path: PathBuf,
    pub filename: String,
    pub size: u64,
    pub modified: SystemTime,
}

impl DocumentFile {
    pub fn new(source_path: PathBuf, size: u64, modified: SystemTime) -> Self {
        let filename = source_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_string();

        Self {
            source_path,
            filename,
            size,
            modified,
        }
    }

    pub fn format_size(&self) -> String {
        format_bytes(self.size)
    }
}

/// Enumerates convertible documents directly inside the source directory.
///
/// The scan is non-recursive and the suffix match is case-sensitive; every
/// entry that does not match is ignored silently.
pub struct DocumentScanner {
    document_suffix: String,
    sort_entries: bool,
}

impl DocumentScanner {
    pub fn new(config: &ConversionConfig) -> Self {
        Self {
            document_suffix: config.document_suffix.clone(),
            sort_entries: config.sort_entries,
        }
    }

    pub fn scan_directory<P: AsRef<Path>>(&self, source: P) -> Result<Vec<DocumentFile>> {
        let source = source.as_ref();

        if !source.exists() {
            return Err(DocxtractError::SourceDirectory {
                path: source.display().to_string(),
            });
        }

        if !source.is_dir() {
            return Err(DocxtractError::SourceDirectory {
                path: format!("{} is not a directory", source.display()),
            });
        }

        let mut documents = Vec::new();

        let walker = WalkDir::new(source)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false);

        for entry in walker {
            // Listing failures happen before any per-file work starts, so
            // they abort the whole run.
            let entry = entry.map_err(|e| {
                DocxtractError::Io(e.into_io_error().unwrap_or_else(|| {
                    std::io::Error::new(std::io::ErrorKind::Other, "directory walk failed")
                }))
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let Some(name) = entry.file_name().to_str() else {
                continue;
            };

            if !name.ends_with(&self.document_suffix) {
                continue;
            }

            let metadata = entry.metadata().map_err(|e| {
                DocxtractError::Io(e.into_io_error().unwrap_or_else(|| {
                    std::io::Error::new(std::io::ErrorKind::Other, "metadata read failed")
                }))
            })?;
            let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);

            documents.push(DocumentFile::new(
                entry.path().to_path_buf(),
                metadata.len(),
                modified,
            ));
        }

        if self.sort_entries {
            documents.sort_by(|a, b| a.filename.cmp(&b.filename));
        }

        Ok(documents)
    }

    pub fn get_statistics(&self, documents: &[DocumentFile]) -> ScanStatistics {
        ScanStatistics {
            total_files: documents.len(),
            total_size: documents.iter().map(|d| d.size).sum(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ScanStatistics {
    pub total_files: usize,
    pub total_size: u64,
}

impl ScanStatistics {
    pub fn display_summary(&self) -> String {
        format!(
            "Scan Results:\n  Total files: {}\n  Total size: {}",
            self.total_files,
            format_bytes(self.total_size)
        )
    }
}

fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}
