//! Header-mapped delimited tables (CSV and TSV).
//!
//! The header row names the fields in any column order; every data row is
//! dispatched column by column through the header mapping.

use points_core::error::{PointsError, Result};
use points_core::models::{Field, Record, RecordDraft};
use tracing::debug;

use super::DataLines;

pub fn parse_csv(text: &str) -> Result<Vec<Record>> {
    parse_with_header(text, ',')
}

pub fn parse_tsv(text: &str) -> Result<Vec<Record>> {
    parse_with_header(text, '\t')
}

/// Parse a header row followed by data rows, all split on `delimiter`.
pub fn parse_with_header(text: &str, delimiter: char) -> Result<Vec<Record>> {
    let mut lines = DataLines::new(text);

    let (header_number, header) = match lines.next() {
        Some(line) => line?,
        None => return Err(PointsError::malformed(1, "missing header row")),
    };

    let columns: Vec<Option<Field>> = header
        .split(delimiter)
        .map(|name| Field::from_name(unquote(name.trim())))
        .collect();
    for (name, column) in header.split(delimiter).zip(&columns) {
        if column.is_none() {
            debug!(
                "Line {}: ignoring unknown column {:?}",
                header_number,
                name.trim()
            );
        }
    }

    let mut records = Vec::new();
    for line in lines {
        let (number, line) = line?;
        let values: Vec<&str> = line.split(delimiter).collect();
        if values.len() < columns.len() {
            return Err(PointsError::malformed(
                number,
                format!(
                    "expected {} columns, found {}",
                    columns.len(),
                    values.len()
                ),
            ));
        }

        let mut draft = RecordDraft::new();
        for (column, value) in columns.iter().zip(values) {
            if let Some(field) = column {
                draft
                    .set(*field, unquote(value))
                    .map_err(|e| PointsError::field(number, e))?;
            }
        }
        records.push(draft.finish().map_err(|e| PointsError::field(number, e))?);
    }

    Ok(records)
}

/// Strip one pair of surrounding double quotes.
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
