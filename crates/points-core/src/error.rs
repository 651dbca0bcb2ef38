use std::path::PathBuf;
use thiserror::Error;

use crate::models::Field;

/// A single field value that could not be interpreted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// An integer field held something other than a decimal integer.
    #[error("Invalid integer for {field}: {value:?}")]
    InvalidInteger { field: Field, value: String },

    /// A house value is not one of the four known houses.
    #[error("Unknown house: {0:?}")]
    UnknownHouse(String),

    /// A unit ended before every field was set.
    #[error("Missing field: {0}")]
    MissingField(Field),
}

/// All errors produced while loading records and writing reports.
#[derive(Error, Debug)]
pub enum PointsError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A report file could not be created or written.
    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A field value on the given line could not be interpreted.
    #[error("Line {line}: {source}")]
    Field {
        line: usize,
        #[source]
        source: FieldError,
    },

    /// The input does not have the shape its format requires.
    #[error("Line {line}: {message}")]
    Malformed { line: usize, message: String },

    /// A structural error inside a specific input file.
    #[error("{path}: {source}")]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<PointsError>,
    },

    /// No parser is known for the file's extension.
    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(PathBuf),

    /// A directory contained no file with a supported extension.
    #[error("No record files found in {0}")]
    NoDataFiles(PathBuf),

    /// The ranked listing could not be rendered as JSON.
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PointsError {
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        PointsError::Malformed {
            line,
            message: message.into(),
        }
    }

    pub fn field(line: usize, source: FieldError) -> Self {
        PointsError::Field { line, source }
    }

    /// Attach the file a structural error was found in.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        PointsError::InFile {
            path: path.into(),
            source: Box::new(self),
        }
    }

    /// `true` for errors caused by the input's content rather than by I/O.
    pub fn is_structural(&self) -> bool {
        match self {
            PointsError::Field { .. } | PointsError::Malformed { .. } => true,
            PointsError::InFile { source, .. } => source.is_structural(),
            _ => false,
        }
    }

    /// The 1-based line a structural error points at.
    pub fn line(&self) -> Option<usize> {
        match self {
            PointsError::Field { line, .. } | PointsError::Malformed { line, .. } => Some(*line),
            PointsError::InFile { source, .. } => source.line(),
            _ => None,
        }
    }
}

/// Convenience alias used throughout the points crates.
pub type Result<T> = std::result::Result<T, PointsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = PointsError::FileRead {
            path: PathBuf::from("/some/punkte.csv"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("/some/punkte.csv"));
        assert!(msg.contains("no such file"));
        assert!(!err.is_structural());
    }

    #[test]
    fn test_error_display_file_write() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = PointsError::FileWrite {
            path: PathBuf::from("/ro/ergebnis.txt"),
            source: io_err,
        };
        assert_eq!(err.to_string(), "Failed to write file /ro/ergebnis.txt: denied");
    }

    #[test]
    fn test_error_display_malformed() {
        let err = PointsError::malformed(3, "expected <entry>");
        assert_eq!(err.to_string(), "Line 3: expected <entry>");
        assert!(err.is_structural());
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_error_display_invalid_integer() {
        let err = PointsError::field(
            2,
            FieldError::InvalidInteger {
                field: Field::Points,
                value: "fifty".to_string(),
            },
        );
        assert_eq!(err.to_string(), "Line 2: Invalid integer for punkte: \"fifty\"");
        assert!(err.is_structural());
    }

    #[test]
    fn test_error_display_unknown_house() {
        let err = FieldError::UnknownHouse("Durmstrang".to_string());
        assert_eq!(err.to_string(), "Unknown house: \"Durmstrang\"");
    }

    #[test]
    fn test_error_display_missing_field() {
        let err = FieldError::MissingField(Field::Teacher);
        assert_eq!(err.to_string(), "Missing field: lehrerName");
    }

    #[test]
    fn test_error_display_in_file() {
        let err = PointsError::malformed(4, "expected '}'").in_file("data/punkte.json");
        assert_eq!(err.to_string(), "data/punkte.json: Line 4: expected '}'");
        assert!(err.is_structural());
        assert_eq!(err.line(), Some(4));
    }

    #[test]
    fn test_error_display_unsupported_format() {
        let err = PointsError::UnsupportedFormat(PathBuf::from("data.yaml"));
        assert_eq!(err.to_string(), "Unsupported input format: data.yaml");
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_error_display_no_data_files() {
        let err = PointsError::NoDataFiles(PathBuf::from("/empty/dir"));
        assert_eq!(err.to_string(), "No record files found in /empty/dir");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: PointsError = io_err.into();
        assert!(err.to_string().contains("denied"));
        assert!(!err.is_structural());
    }
}
