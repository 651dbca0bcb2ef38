//! `&`-separated records, one per line, in fixed field order.
//!
//! ```text
//! 1&Harry Potter&Gryffindor&Professor McGonagall&50
//! 3&Draco Malfoy&Slytherin&Professor Snape&40
//! ```

use points_core::error::{PointsError, Result};
use points_core::models::{Field, Record, RecordDraft};

use super::DataLines;

/// Field separator. Not expected to occur inside values.
pub const DELIMITER: char = '&';

/// Parse every line of `text` as a record.
pub fn parse_delimited(text: &str) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for line in DataLines::new(text) {
        let (number, line) = line?;
        records.push(parse_line(number, line)?);
    }
    Ok(records)
}

fn parse_line(number: usize, line: &str) -> Result<Record> {
    let values: Vec<&str> = line.split(DELIMITER).collect();
    if values.len() != Field::ALL.len() {
        return Err(PointsError::malformed(
            number,
            format!(
                "expected {} fields separated by '{}', found {}",
                Field::ALL.len(),
                DELIMITER,
                values.len()
            ),
        ));
    }

    // Positional: id, studentName, haus, lehrerName, punkte.
    let mut draft = RecordDraft::new();
    for (field, value) in Field::ALL.into_iter().zip(values) {
        draft
            .set(field, value)
            .map_err(|e| PointsError::field(number, e))?;
    }
    draft.finish().map_err(|e| PointsError::field(number, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use points_core::error::FieldError;
    use points_core::models::House;

    #[test]
    fn test_parses_records_in_file_order() {
        let text = "1&Harry&Gryffindor&Prof&50\n2&Draco&Slytherin&Prof&40\n";
        let records = parse_delimited(text).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], Record::new(1, "Harry", House::Gryffindor, "Prof", 50));
        assert_eq!(records[1], Record::new(2, "Draco", House::Slytherin, "Prof", 40));
    }

    #[test]
    fn test_keeps_spaces_inside_values() {
        let text = "7&Luna Lovegood&Ravenclaw&Professor Flitwick&-10";
        let records = parse_delimited(text).unwrap();
        assert_eq!(records[0].student(), "Luna Lovegood");
        assert_eq!(records[0].teacher(), "Professor Flitwick");
        assert_eq!(records[0].points(), -10);
    }

    #[test]
    fn test_empty_input_yields_no_records() {
        assert!(parse_delimited("").unwrap().is_empty());
        assert!(parse_delimited("\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_trailing_blank_lines_end_input() {
        let text = "1&Harry&Gryffindor&Prof&50\n\n   \n";
        assert_eq!(parse_delimited(text).unwrap().len(), 1);
    }

    #[test]
    fn test_rejects_blank_line_between_records() {
        let text = "1&Harry&Gryffindor&Prof&50\n\n2&Draco&Slytherin&Prof&40\n";
        let err = parse_delimited(text).unwrap_err();
        assert!(err.is_structural());
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn test_rejects_too_few_fields() {
        let text = "1&Harry&Gryffindor&Prof&50\n2&Draco&Slytherin&40\n";
        let err = parse_delimited(text).unwrap_err();
        assert_eq!(err.line(), Some(2));
        assert!(err.to_string().contains("found 4"));
    }

    #[test]
    fn test_rejects_too_many_fields() {
        let err = parse_delimited("1&Harry&Gryffindor&Prof&50&extra").unwrap_err();
        assert!(err.to_string().contains("found 6"));
    }

    #[test]
    fn test_rejects_non_numeric_points() {
        let err = parse_delimited("1&Harry&Gryffindor&Prof&fifty").unwrap_err();
        match err {
            PointsError::Field { line, source } => {
                assert_eq!(line, 1);
                assert_eq!(
                    source,
                    FieldError::InvalidInteger {
                        field: Field::Points,
                        value: "fifty".to_string()
                    }
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_non_numeric_id() {
        assert!(parse_delimited("x&Harry&Gryffindor&Prof&5").is_err());
    }

    #[test]
    fn test_rejects_unknown_house() {
        let err = parse_delimited("1&Cedric&hufflepuff&Prof&5").unwrap_err();
        assert!(matches!(
            err,
            PointsError::Field {
                source: FieldError::UnknownHouse(_),
                ..
            }
        ));
    }
}
