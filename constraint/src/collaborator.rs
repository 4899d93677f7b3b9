//! Ports for the I/O a few validators need.
//!
//! The engine never performs network or filesystem access itself. Email MX
//! checks and File checks go through these traits, injected by the caller,
//! who is responsible for bounding their running time.

use std::fs;
use std::path::Path;

/// Confirms that a mail domain accepts mail.
pub trait MxResolver: Send + Sync {
    /// Returns true if `domain` has at least one MX record.
    fn has_mx_record(&self, domain: &str) -> bool;
}

/// What a `FileProbe` knows about a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    NotFound,
    NotReadable,
    Found { size: u64, mime_type: String },
}

/// Inspects files referenced by values.
pub trait FileProbe: Send + Sync {
    fn probe(&self, path: &str) -> FileStatus;
}

/// `FileProbe` backed by `std::fs`. Mime types are guessed from the extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileProbe;

impl FileProbe for StdFileProbe {
    fn probe(&self, path: &str) -> FileStatus {
        let path = Path::new(path);
        let metadata = match fs::metadata(path) {
            Ok(metadata) if metadata.is_file() => metadata,
            Ok(_) => return FileStatus::NotReadable,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return FileStatus::NotFound,
            Err(_) => return FileStatus::NotReadable,
        };
        if fs::File::open(path).is_err() {
            return FileStatus::NotReadable;
        }
        FileStatus::Found {
            size: metadata.len(),
            mime_type: guess_mime_type(path).to_string(),
        }
    }
}

/// Mime type for a file extension; `application/octet-stream` when unknown.
pub fn guess_mime_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "txt" | "text" | "log" => "text/plain",
        "csv" => "text/csv",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "md" => "text/markdown",
        "json" => "application/json",
        "xml" => "application/xml",
        "yaml" | "yml" => "application/yaml",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "mp4" => "video/mp4",
        _ => "application/octet-stream",
    }
}
