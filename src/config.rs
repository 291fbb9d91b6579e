use crate::error::{DocxtractError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub directories: DirectoryConfig,
    #[serde(default)]
    pub conversion: ConversionConfig,
}

/// Source and destination paths. Both are required; there are no defaults
/// and no environment-variable overrides.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DirectoryConfig {
    pub source: PathBuf,
    pub destination: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConversionConfig {
    #[serde(default = "default_document_suffix")]
    pub document_suffix: String,
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,
    #[serde(default = "default_sort_entries")]
    pub sort_entries: bool,
}

fn default_document_suffix() -> String {
    ".docx".to_string()
}

fn default_output_suffix() -> String {
    ".txt".to_string()
}

fn default_sort_entries() -> bool {
    true
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            document_suffix: default_document_suffix(),
            output_suffix: default_output_suffix(),
            sort_entries: default_sort_entries(),
        }
    }
}

impl Config {
    pub fn new(source: PathBuf, destination: PathBuf) -> Self {
        Self {
            directories: DirectoryConfig {
                source,
                destination,
            },
            conversion: ConversionConfig::default(),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(DocxtractError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| DocxtractError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| DocxtractError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    /// Load from an explicit path, or fall back to the default config file
    /// locations. The directory paths have no built-in defaults, so a missing
    /// configuration file is an error rather than an implicit empty config.
    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = [
                    "docxtract.toml",
                    "docxtract.config.toml",
                    ".docxtract.toml",
                ];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Err(DocxtractError::Config {
                    message: "No configuration file found; source and destination \
                              directories must be configured (see --generate-config)"
                        .to_string(),
                })
            }
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| DocxtractError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| DocxtractError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.directories.source.as_os_str().is_empty() {
            return Err(DocxtractError::Config {
                message: "Source directory must not be empty".to_string(),
            });
        }

        if self.directories.destination.as_os_str().is_empty() {
            return Err(DocxtractError::Config {
                message: "Destination directory must not be empty".to_string(),
            });
        }

        if self.conversion.document_suffix.is_empty() {
            return Err(DocxtractError::Config {
                message: "Document suffix must not be empty".to_string(),
            });
        }

        if self.conversion.output_suffix.is_empty() {
            return Err(DocxtractError::Config {
                message: "Output suffix must not be empty".to_string(),
            });
        }

        Ok(())
    }

    pub fn create_sample_config() -> String {
        let sample = Config::new(
            PathBuf::from("./documents"),
            PathBuf::from("./extracted"),
        );
        toml::to_string_pretty(&sample).unwrap_or_else(|_| String::new())
    }
}
