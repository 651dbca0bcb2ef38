//! Record file discovery and loading.
//!
//! Resolves an input path to a format, reads it and hands the text to the
//! matching parser. A directory input loads every supported file below it.

use std::path::{Path, PathBuf};

use points_core::error::{PointsError, Result};
use points_core::formats::InputFormat;
use points_core::models::Record;
use tracing::{debug, warn};

use crate::parsers;

// ── Public API ────────────────────────────────────────────────────────────────

/// Load records from a file or a directory of files.
///
/// * `format` – overrides extension detection. For a directory it restricts
///   loading to files with that format's extension.
pub fn load_records(path: &Path, format: Option<InputFormat>) -> Result<Vec<Record>> {
    if path.is_dir() {
        load_directory(path, format)
    } else {
        load_file(path, format)
    }
}

/// Load one file, with its format given or detected from the extension.
pub fn load_file(path: &Path, format: Option<InputFormat>) -> Result<Vec<Record>> {
    let format = format
        .or_else(|| InputFormat::from_path(path))
        .ok_or_else(|| PointsError::UnsupportedFormat(path.to_path_buf()))?;

    let text = std::fs::read_to_string(path).map_err(|source| PointsError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parsers::parse(format, &text).map_err(|e| e.in_file(path))?;

    debug!(
        "Parsed {} records from {} as {}",
        records.len(),
        path.display(),
        format
    );
    Ok(records)
}

/// Find all supported record files recursively under `dir`, sorted by path.
///
/// Any entry that cannot be read (a dangling link, a permission failure)
/// fails the whole search with [`PointsError::FileRead`] naming that entry.
pub fn find_record_files(dir: &Path, format: Option<InputFormat>) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        warn!("Data path does not exist: {}", dir.display());
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(dir).follow_links(true) {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(dir).to_path_buf();
            PointsError::FileRead {
                path,
                source: err.into(),
            }
        })?;

        let selected = match (format, InputFormat::from_path(entry.path())) {
            (Some(wanted), Some(found)) => wanted == found,
            (None, found) => found.is_some(),
            (Some(_), None) => false,
        };
        if entry.file_type().is_file() && selected {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn load_directory(dir: &Path, format: Option<InputFormat>) -> Result<Vec<Record>> {
    let files = find_record_files(dir, format)?;
    if files.is_empty() {
        return Err(PointsError::NoDataFiles(dir.to_path_buf()));
    }

    let mut all_records = Vec::new();
    for file in &files {
        all_records.extend(load_file(file, format)?);
    }

    debug!(
        "Loaded {} records from {} files under {}",
        all_records.len(),
        files.len(),
        dir.display()
    );
    Ok(all_records)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
