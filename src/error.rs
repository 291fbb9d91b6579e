use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocxtractError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Source directory not usable: {path}")]
    SourceDirectory { path: String },

    #[error("Failed to create destination directory {path}: {source}")]
    DestinationDirectory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("document parse failed: {message}")]
    DocumentParse { filename: String, message: String },

    #[error("failed to write output file: {source}")]
    OutputWrite {
        filename: String,
        #[source]
        source: std::io::Error,
    },
}

impl DocxtractError {
    /// Whether the error is recoverable per-file, i.e. the batch keeps going.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            DocxtractError::DocumentParse { .. } | DocxtractError::OutputWrite { .. }
        )
    }
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for DocxtractError {
    fn user_message(&self) -> String {
        match self {
            DocxtractError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            DocxtractError::SourceDirectory { path } => {
                format!("Source directory not usable: {}", path)
            }
            DocxtractError::DestinationDirectory { path, source } => {
                format!("Failed to create destination directory {}: {}", path, source)
            }
            DocxtractError::DocumentParse { filename, message } => {
                format!("Cannot read {}: {}", filename, message)
            }
            DocxtractError::OutputWrite { filename, source } => {
                format!("Cannot write output for {}: {}", filename, source)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            DocxtractError::Config { .. } => Some(
                "Check your configuration file syntax. Run with --generate-config to create a sample docxtract.toml.".to_string()
            ),
            DocxtractError::SourceDirectory { .. } => Some(
                "Verify that directories.source in your configuration points at an existing, readable directory.".to_string()
            ),
            DocxtractError::DestinationDirectory { .. } => Some(
                "Ensure you have write permission for the destination path.".to_string()
            ),
            DocxtractError::DocumentParse { .. } => Some(
                "The file may be corrupt, password-protected, or not a real DOCX document.".to_string()
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for DocxtractError {
    fn from(error: toml::de::Error) -> Self {
        DocxtractError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DocxtractError>;
