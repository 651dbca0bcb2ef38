//! Line-oriented JSON-like arrays of objects.
//!
//! Only this fixed layout is accepted, one token per line:
//!
//! ```text
//! [
//!     {
//!         "id": 1,
//!         "studentName": "Harry Potter",
//!         "haus": "Gryffindor",
//!         "lehrerName": "Professor McGonagall",
//!         "punkte": 50
//!     },
//!     ...
//! ]
//! ```
//!
//! The five member lines may come in any order.

use points_core::error::{PointsError, Result};
use points_core::models::{Field, Record, RecordDraft};
use tracing::debug;

use super::LineCursor;

const FIELDS_PER_OBJECT: usize = 5;

pub fn parse_nested(text: &str) -> Result<Vec<Record>> {
    let mut cursor = LineCursor::new(text);

    match cursor.next_non_blank() {
        Some((_, line)) if line.contains('[') => {}
        Some((number, _)) => {
            return Err(PointsError::malformed(number, "expected '[' to open the array"));
        }
        None => {
            return Err(PointsError::malformed(
                1,
                "expected '[' to open the array, found end of input",
            ));
        }
    }

    let mut records = Vec::new();
    loop {
        let (number, line) = cursor.expect("'{' or ']'")?;
        if line.contains(']') {
            break;
        }
        if !line.contains('{') {
            return Err(PointsError::malformed(number, "expected '{' to open an object"));
        }

        let mut draft = RecordDraft::new();
        for _ in 0..FIELDS_PER_OBJECT {
            let (number, line) = cursor.expect("a 'name: value' line")?;
            let (name, value) = split_member(line)
                .ok_or_else(|| PointsError::malformed(number, "expected 'name: value'"))?;
            match Field::from_name(&name) {
                Some(field) => draft
                    .set(field, value)
                    .map_err(|e| PointsError::field(number, e))?,
                None => debug!("Line {}: ignoring unknown member {:?}", number, name),
            }
        }

        let (number, line) = cursor.expect("'}'")?;
        if !line.contains('}') {
            return Err(PointsError::malformed(
                number,
                format!("expected '}}' after {} members", FIELDS_PER_OBJECT),
            ));
        }
        records.push(draft.finish().map_err(|e| PointsError::field(number, e))?);
    }

    Ok(records)
}

/// Split `"name": "value",` into the unquoted name and value.
fn split_member(line: &str) -> Option<(String, &str)> {
    let (name, value) = line.split_once(':')?;
    let name = name.replace('"', "").trim().to_string();

    let value = value.trim();
    let value = value.strip_suffix(',').unwrap_or(value).trim_end();
    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value);

    Some((name, value))
}
