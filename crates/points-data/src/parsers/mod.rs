//! Hand-rolled, line-oriented parsers for the five input encodings.
//!
//! Each parser is a single forward pass over the input's lines and either
//! returns every record in file order or fails on the first structural
//! problem; partial results are never returned.

pub mod delimited;
pub mod nested;
pub mod tabular;
pub mod tagged;

use std::iter::Enumerate;
use std::str::Lines;

use points_core::error::{PointsError, Result};
use points_core::formats::InputFormat;
use points_core::models::Record;

pub use delimited::parse_delimited;
pub use nested::parse_nested;
pub use tabular::{parse_csv, parse_tsv, parse_with_header};
pub use tagged::parse_tagged;

/// Parse `text` with the parser for `format`.
pub fn parse(format: InputFormat, text: &str) -> Result<Vec<Record>> {
    match format {
        InputFormat::Delimited => parse_delimited(text),
        InputFormat::Json => parse_nested(text),
        InputFormat::Csv => parse_csv(text),
        InputFormat::Tsv => parse_tsv(text),
        InputFormat::Xml => parse_tagged(text),
    }
}

// ── Line helpers ──────────────────────────────────────────────────────────────

/// Numbered lines of a row-per-line format.
///
/// Blank lines at the end of the input are dropped; a blank line followed
/// by more content yields an error pointing at the blank line.
pub(crate) struct DataLines<'a> {
    lines: Enumerate<Lines<'a>>,
    blank_at: Option<usize>,
}

impl<'a> DataLines<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            blank_at: None,
        }
    }
}

impl<'a> Iterator for DataLines<'a> {
    type Item = Result<(usize, &'a str)>;

    fn next(&mut self) -> Option<Self::Item> {
        for (idx, line) in self.lines.by_ref() {
            let number = idx + 1;
            if line.trim().is_empty() {
                self.blank_at.get_or_insert(number);
                continue;
            }
            if let Some(blank) = self.blank_at.take() {
                return Some(Err(PointsError::malformed(blank, "unexpected blank line")));
            }
            return Some(Ok((number, line)));
        }
        None
    }
}

/// Forward-only cursor over numbered lines for the block formats.
pub(crate) struct LineCursor<'a> {
    lines: Enumerate<Lines<'a>>,
    position: usize,
}

impl<'a> LineCursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            position: 0,
        }
    }

    pub(crate) fn next_line(&mut self) -> Option<(usize, &'a str)> {
        let (idx, line) = self.lines.next()?;
        self.position = idx + 1;
        Some((self.position, line))
    }

    pub(crate) fn next_non_blank(&mut self) -> Option<(usize, &'a str)> {
        while let Some((number, line)) = self.next_line() {
            if !line.trim().is_empty() {
                return Some((number, line));
            }
        }
        None
    }

    /// The next line, or an error naming what was expected at end of input.
    pub(crate) fn expect(&mut self, wanted: &str) -> Result<(usize, &'a str)> {
        match self.next_line() {
            Some(line) => Ok(line),
            None => Err(PointsError::malformed(
                self.position + 1,
                format!("expected {}, found end of input", wanted),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use points_core::models::House;

    #[test]
    fn test_data_lines_drop_trailing_blanks() {
        let lines: Vec<(usize, &str)> = DataLines::new("a\nb\n\n  \n")
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(lines, vec![(1, "a"), (2, "b")]);
    }

    #[test]
    fn test_data_lines_reject_inner_blank() {
        let err = DataLines::new("a\n\nb\n")
            .collect::<Result<Vec<_>>>()
            .unwrap_err();
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn test_data_lines_handle_crlf() {
        let lines: Vec<(usize, &str)> = DataLines::new("a\r\nb\r\n")
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(lines, vec![(1, "a"), (2, "b")]);
    }

    #[test]
    fn test_cursor_expect_at_end_of_input() {
        let mut cursor = LineCursor::new("only\n");
        assert_eq!(cursor.expect("x").unwrap(), (1, "only"));
        let err = cursor.expect("'}'").unwrap_err();
        assert_eq!(err.to_string(), "Line 2: expected '}', found end of input");
    }

    #[test]
    fn test_parse_dispatches_by_format() {
        let fixtures = [
            (InputFormat::Delimited, "1&Harry&Gryffindor&Prof&5\n".to_string()),
            (
                InputFormat::Json,
                "[\n{\n\"id\": 1,\n\"studentName\": \"Harry\",\n\"haus\": \"Gryffindor\",\n\"lehrerName\": \"Prof\",\n\"punkte\": 5\n}\n]\n"
                    .to_string(),
            ),
            (
                InputFormat::Csv,
                "id,studentName,haus,lehrerName,punkte\n1,Harry,Gryffindor,Prof,5\n".to_string(),
            ),
            (
                InputFormat::Tsv,
                "id\tstudentName\thaus\tlehrerName\tpunkte\n1\tHarry\tGryffindor\tProf\t5\n"
                    .to_string(),
            ),
            (
                InputFormat::Xml,
                "<entries>\n<entry>\n<id>1</id>\n<studentName>Harry</studentName>\n<haus>Gryffindor</haus>\n<lehrerName>Prof</lehrerName>\n<punkte>5</punkte>\n</entry>\n</entries>\n"
                    .to_string(),
            ),
        ];

        let expected = Record::new(1, "Harry", House::Gryffindor, "Prof", 5);
        for (format, text) in fixtures {
            let records = parse(format, &text).unwrap();
            assert_eq!(records, vec![expected.clone()], "format {}", format);
        }
    }
}
