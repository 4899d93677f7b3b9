use std::fmt;
use std::path::Path;

use crate::error::{LoadError, LoadResult};

/// Source format of a declaration file or data document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Detect the format from a file extension (`.yaml`, `.yml`, `.json`).
    pub fn from_path(path: &Path) -> LoadResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => Err(LoadError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Parse source text into a generic tree. JSON keeps its key order.
    pub(crate) fn parse(self, source: &str) -> LoadResult<serde_yaml::Value> {
        match self {
            Format::Yaml => Ok(serde_yaml::from_str(source)?),
            Format::Json => Ok(serde_json::from_str(source)?),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Yaml => f.write_str("yaml"),
            Format::Json => f.write_str("json"),
        }
    }
}
