use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FieldError;

/// One of the four houses a record's points are credited to.
///
/// Declaration order is significant: the aggregator breaks ties between
/// equal totals in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum House {
    Gryffindor,
    Ravenclaw,
    Hufflepuff,
    Slytherin,
}

impl House {
    /// Every house, in declaration order.
    pub const ALL: [House; 4] = [
        House::Gryffindor,
        House::Ravenclaw,
        House::Hufflepuff,
        House::Slytherin,
    ];

    /// The byte-exact literal used in every input and output format.
    pub fn as_str(&self) -> &'static str {
        match self {
            House::Gryffindor => "Gryffindor",
            House::Ravenclaw => "Ravenclaw",
            House::Hufflepuff => "Hufflepuff",
            House::Slytherin => "Slytherin",
        }
    }

    /// Position in [`House::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for House {
    type Err = FieldError;

    /// Exact, case-sensitive match against the four literals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        House::ALL
            .into_iter()
            .find(|h| h.as_str() == s)
            .ok_or_else(|| FieldError::UnknownHouse(s.to_string()))
    }
}

/// A single fully parsed row of input data.
///
/// Records are immutable once built; the only ways to obtain one are
/// [`Record::new`] and [`RecordDraft::finish`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: i64,
    student: String,
    house: House,
    teacher: String,
    points: i32,
}

impl Record {
    pub fn new(
        id: i64,
        student: impl Into<String>,
        house: House,
        teacher: impl Into<String>,
        points: i32,
    ) -> Self {
        Self {
            id,
            student: student.into(),
            house,
            teacher: teacher.into(),
            points,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn student(&self) -> &str {
        &self.student
    }

    pub fn house(&self) -> House {
        self.house
    }

    pub fn teacher(&self) -> &str {
        &self.teacher
    }

    /// Points awarded (or deducted, when negative).
    pub fn points(&self) -> i32 {
        self.points
    }
}

// ── Field dispatch ────────────────────────────────────────────────────────────

/// The five fields of a [`Record`], as named in input files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Student,
    House,
    Teacher,
    Points,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Id,
        Field::Student,
        Field::House,
        Field::Teacher,
        Field::Points,
    ];

    /// Name used in data files (`id`, `studentName`, `haus`, `lehrerName`, `punkte`).
    pub fn name(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Student => "studentName",
            Field::House => "haus",
            Field::Teacher => "lehrerName",
            Field::Points => "punkte",
        }
    }

    /// Schema name accepted as an alias for [`Field::name`].
    pub fn alias(&self) -> &'static str {
        match self {
            Field::Id => "identifier",
            Field::Student => "subjectName",
            Field::House => "category",
            Field::Teacher => "ownerName",
            Field::Points => "score",
        }
    }

    /// Resolve a column, key or tag name. Exact and case-sensitive.
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|f| f.name() == name || f.alias() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A record under construction inside a parser.
///
/// Every format that dispatches values by field name funnels them through
/// [`RecordDraft::set`], so the interpretation of each field lives here.
#[derive(Debug, Clone, Default)]
pub struct RecordDraft {
    id: Option<i64>,
    student: Option<String>,
    house: Option<House>,
    teacher: Option<String>,
    points: Option<i32>,
}

impl RecordDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpret `raw` as the value of `field`. A later value for the same
    /// field replaces an earlier one.
    pub fn set(&mut self, field: Field, raw: &str) -> Result<(), FieldError> {
        match field {
            Field::Id => self.id = Some(parse_integer(field, raw)?),
            Field::Student => self.student = Some(raw.to_string()),
            Field::House => self.house = Some(raw.parse()?),
            Field::Teacher => self.teacher = Some(raw.to_string()),
            Field::Points => self.points = Some(parse_integer(field, raw)?),
        }
        Ok(())
    }

    /// Number of distinct fields set so far.
    pub fn filled(&self) -> usize {
        [
            self.id.is_some(),
            self.student.is_some(),
            self.house.is_some(),
            self.teacher.is_some(),
            self.points.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    /// Convert into a [`Record`], failing on the first field never set.
    pub fn finish(self) -> Result<Record, FieldError> {
        Ok(Record {
            id: self.id.ok_or(FieldError::MissingField(Field::Id))?,
            student: self.student.ok_or(FieldError::MissingField(Field::Student))?,
            house: self.house.ok_or(FieldError::MissingField(Field::House))?,
            teacher: self.teacher.ok_or(FieldError::MissingField(Field::Teacher))?,
            points: self.points.ok_or(FieldError::MissingField(Field::Points))?,
        })
    }
}

fn parse_integer<T: FromStr>(field: Field, raw: &str) -> Result<T, FieldError> {
    raw.parse().map_err(|_| FieldError::InvalidInteger {
        field,
        value: raw.to_string(),
    })
}
