//! Character encodings used to measure string length.

use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

/// How the length of a string is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Charset {
    /// Unicode scalar values (`UTF-8` characters).
    #[default]
    Utf8,
    /// UTF-16 code units.
    Utf16,
    /// Raw bytes: single-byte charsets such as `ASCII`, `ISO-8859-1` or `8bit`.
    SingleByte,
    /// Extended grapheme clusters (user-perceived characters).
    Graphemes,
}

impl Charset {
    /// Resolve a charset name. Matching is case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "utf-8" | "utf8" => Some(Charset::Utf8),
            "utf-16" | "utf16" => Some(Charset::Utf16),
            "ascii" | "us-ascii" | "iso-8859-1" | "latin1" | "8bit" | "binary" => {
                Some(Charset::SingleByte)
            }
            "graphemes" | "grapheme" => Some(Charset::Graphemes),
            _ => None,
        }
    }

    /// Canonical name of the charset.
    pub fn name(&self) -> &'static str {
        match self {
            Charset::Utf8 => "UTF-8",
            Charset::Utf16 => "UTF-16",
            Charset::SingleByte => "8bit",
            Charset::Graphemes => "graphemes",
        }
    }

    /// Length of `text` measured in this charset.
    pub fn length(&self, text: &str) -> usize {
        match self {
            Charset::Utf8 => text.chars().count(),
            Charset::Utf16 => text.encode_utf16().count(),
            Charset::SingleByte => text.len(),
            Charset::Graphemes => text.graphemes(true).count(),
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
