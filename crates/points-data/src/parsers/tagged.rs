//! XML-like `<entries>` documents with one tag per line.
//!
//! ```text
//! <entries>
//!     <entry>
//!         <id>1</id>
//!         <studentName>Harry Potter</studentName>
//!         <haus>Gryffindor</haus>
//!         <lehrerName>Professor McGonagall</lehrerName>
//!         <punkte>50</punkte>
//!     </entry>
//! </entries>
//! ```
//!
//! Tag lines must match as a whole line; anything else inside an entry is
//! skipped.

use regex::Regex;

use points_core::error::{PointsError, Result};
use points_core::models::{Field, House, Record, RecordDraft};
use tracing::debug;

use super::LineCursor;

pub const OUTER_OPEN: &str = "<entries>";
pub const OUTER_CLOSE: &str = "</entries>";
pub const INNER_OPEN: &str = "<entry>";
pub const INNER_CLOSE: &str = "</entry>";

/// A whole line holding one `<name>value</name>` element.
const TAG_LINE: &str = r"^\s*<([A-Za-z]+)>(.*)</([A-Za-z]+)>$";

pub fn parse_tagged(text: &str) -> Result<Vec<Record>> {
    let tag_line = tag_line_regex();
    let mut cursor = LineCursor::new(text);

    let (number, first) = cursor.expect(OUTER_OPEN)?;
    if first != OUTER_OPEN {
        return Err(PointsError::malformed(
            number,
            format!("expected {} as the first line", OUTER_OPEN),
        ));
    }

    let mut records = Vec::new();
    loop {
        let (number, line) = cursor.expect(OUTER_CLOSE)?;
        if line.trim() == OUTER_CLOSE {
            break;
        }
        if !line.contains(INNER_OPEN) {
            return Err(PointsError::malformed(
                number,
                format!("expected {} or {}", INNER_OPEN, OUTER_CLOSE),
            ));
        }

        let mut draft = RecordDraft::new();
        let closed_at = loop {
            let (number, line) = cursor.expect(INNER_CLOSE)?;
            if line.contains(INNER_CLOSE) {
                break number;
            }
            match match_tag(&tag_line, line) {
                Some((field, value)) => draft
                    .set(field, value)
                    .map_err(|e| PointsError::field(number, e))?,
                None => debug!("Line {}: skipping {:?}", number, line),
            }
        };
        records.push(draft.finish().map_err(|e| PointsError::field(closed_at, e))?);
    }

    Ok(records)
}

fn tag_line_regex() -> Regex {
    Regex::new(TAG_LINE).expect("regex is valid")
}

/// Match `<name>value</name>` against the whole line.
///
/// The opening and closing names must agree and name a known field. A
/// house tag only matches when its payload is one of the four houses.
fn match_tag<'a>(tag_line: &Regex, line: &'a str) -> Option<(Field, &'a str)> {
    let caps = tag_line.captures(line)?;
    let open = caps.get(1)?.as_str();
    let close = caps.get(3)?.as_str();
    if open != close {
        return None;
    }

    let field = Field::from_name(open)?;
    let value = caps.get(2)?.as_str();
    if field == Field::House && value.parse::<House>().is_err() {
        return None;
    }
    Some((field, value))
}
