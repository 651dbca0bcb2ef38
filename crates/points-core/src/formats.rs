//! Input and report format selection by file extension.

use clap::ValueEnum;
use std::fmt;
use std::path::Path;

/// The five supported input encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum InputFormat {
    /// `&`-separated lines, fixed field order (`.txt`).
    #[value(name = "txt")]
    Delimited,
    /// Line-oriented array of objects (`.json`).
    Json,
    /// Comma-separated with a header row (`.csv`).
    Csv,
    /// Tab-separated with a header row (`.tsv`).
    Tsv,
    /// `<entries>`/`<entry>` tagged blocks (`.xml`).
    Xml,
}

impl InputFormat {
    pub const ALL: [InputFormat; 5] = [
        InputFormat::Delimited,
        InputFormat::Json,
        InputFormat::Csv,
        InputFormat::Tsv,
        InputFormat::Xml,
    ];

    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            InputFormat::Delimited => "txt",
            InputFormat::Json => "json",
            InputFormat::Csv => "csv",
            InputFormat::Tsv => "tsv",
            InputFormat::Xml => "xml",
        }
    }

    /// Resolve a format from a path's extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = extension_of(path)?;
        InputFormat::ALL.into_iter().find(|f| f.extension() == ext)
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// The two report encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum ReportFormat {
    /// `House#Total` lines.
    #[default]
    Txt,
    /// `Category,Total` header followed by one row per house.
    Csv,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Txt => "txt",
            ReportFormat::Csv => "csv",
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        match extension_of(path)?.as_str() {
            "txt" => Some(ReportFormat::Txt),
            "csv" => Some(ReportFormat::Csv),
            _ => None,
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
}
