//! Host configuration and size-limited document loading.

use crate::decode::DecodeOptions;
use crate::error::{LoadError, Result};
use anyhow::Context;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::Path;

/// Default cap on the size of a document read from disk (256 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 256 * 1024 * 1024;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Settings read from an optional TOML file, overridable from the command line.
///
/// ```toml
/// strict = true
/// max_input_bytes = 1048576
/// log_format = "json"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub strict: bool,
    pub max_input_bytes: u64,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict: false,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            log_format: LogFormat::Compact,
        }
    }
}

impl Config {
    /// Read a config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    pub const fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            strict: self.strict,
        }
    }
}

/// Read a rustdoc JSON file, refusing anything over `limit` bytes.
pub fn read_document(path: &Path, limit: u64) -> std::result::Result<Vec<u8>, LoadError> {
    let io_error = |source: std::io::Error| match source.kind() {
        ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    };

    let size = std::fs::metadata(path).map_err(io_error)?.len();
    if size > limit {
        return Err(LoadError::TooLarge {
            path: path.to_path_buf(),
            size,
            limit,
        });
    }
    tracing::debug!(path = %path.display(), size, "reading document");
    std::fs::read(path).map_err(io_error)
}
