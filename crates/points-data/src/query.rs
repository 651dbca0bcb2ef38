//! Student-name lookups used for console output.

use std::collections::HashSet;

use points_core::models::{House, Record};

/// Distinct student names whose first character is `initial` (case-sensitive).
pub fn students_starting_with(records: &[Record], initial: char) -> HashSet<String> {
    records
        .iter()
        .map(|r| r.student())
        .filter(|name| name.starts_with(initial))
        .map(str::to_string)
        .collect()
}

/// Distinct student names belonging to `house`.
pub fn students_in_house(records: &[Record], house: House) -> HashSet<String> {
    records
        .iter()
        .filter(|r| r.house() == house)
        .map(|r| r.student().to_string())
        .collect()
}

pub fn gryffindor_students(records: &[Record]) -> HashSet<String> {
    students_in_house(records, House::Gryffindor)
}

/// Sorted copy of a name set, for stable console output.
pub fn sorted(names: HashSet<String>) -> Vec<String> {
    let mut names: Vec<String> = names.into_iter().collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<Record> {
        vec![
            Record::new(1, "Harry Potter", House::Gryffindor, "McGonagall", 50),
            Record::new(2, "Hermione Granger", House::Gryffindor, "McGonagall", 60),
            Record::new(3, "Harry Potter", House::Gryffindor, "Snape", -5),
            Record::new(4, "Draco Malfoy", House::Slytherin, "Snape", 40),
            Record::new(5, "hannah Abbott", House::Hufflepuff, "Sprout", 10),
        ]
    }

    #[test]
    fn test_starting_with_collapses_duplicates() {
        let names = students_starting_with(&records(), 'H');
        assert_eq!(sorted(names), vec!["Harry Potter", "Hermione Granger"]);
    }

    #[test]
    fn test_starting_with_is_case_sensitive() {
        let names = students_starting_with(&records(), 'h');
        assert_eq!(sorted(names), vec!["hannah Abbott"]);
    }

    #[test]
    fn test_starting_with_no_match() {
        assert!(students_starting_with(&records(), 'Z').is_empty());
        assert!(students_starting_with(&[], 'H').is_empty());
    }

    #[test]
    fn test_gryffindor_students() {
        let names = gryffindor_students(&records());
        assert_eq!(sorted(names), vec!["Harry Potter", "Hermione Granger"]);
    }

    #[test]
    fn test_students_in_house() {
        let names = students_in_house(&records(), House::Slytherin);
        assert_eq!(names.len(), 1);
        assert!(names.contains("Draco Malfoy"));
        assert!(students_in_house(&records(), House::Ravenclaw).is_empty());
    }
}
