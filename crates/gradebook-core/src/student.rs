//! The student record and its grade history.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::{GradebookError, Result};

/// Lowest accepted grade.
pub const MIN_GRADE: u8 = 1;
/// Highest accepted grade.
pub const MAX_GRADE: u8 = 5;

/// Identifier assigned to a student by the gradebook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StudentId(u64);

impl StudentId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StudentId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(StudentId)
    }
}

/// One student and their grades.
///
/// Records are only created by [`Gradebook::add_student`](crate::Gradebook::add_student).
/// Names are fixed at creation; grades can only be appended.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    id: StudentId,
    given_name: String,
    family_name: String,
    patronymic: String,
    grades: Vec<u8>,
}

impl Student {
    pub(crate) fn new(
        id: StudentId,
        given_name: String,
        family_name: String,
        patronymic: String,
    ) -> Self {
        Self {
            id,
            given_name,
            family_name,
            patronymic,
            grades: Vec::new(),
        }
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn given_name(&self) -> &str {
        &self.given_name
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    pub fn patronymic(&self) -> &str {
        &self.patronymic
    }

    /// Grades in the order they were added.
    pub fn grades(&self) -> &[u8] {
        &self.grades
    }

    /// Family name, given name and patronymic, separated by single spaces.
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.family_name, self.given_name, self.patronymic)
    }

    /// Append a grade.
    ///
    /// Values outside `MIN_GRADE..=MAX_GRADE` are rejected with
    /// [`GradebookError::InvalidGrade`] and the grade history is left untouched.
    pub fn add_grade(&mut self, value: i64) -> Result<()> {
        let grade = u8::try_from(value)
            .ok()
            .filter(|g| (MIN_GRADE..=MAX_GRADE).contains(g))
            .ok_or(GradebookError::InvalidGrade { value })?;
        self.grades.push(grade);
        Ok(())
    }

    /// Arithmetic mean of the grades, or `0.0` when there are none.
    pub fn average_grade(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        let sum: u64 = self.grades.iter().map(|&g| u64::from(g)).sum();
        sum as f64 / self.grades.len() as f64
    }
}

impl Serialize for Student {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Student", 6)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("given_name", &self.given_name)?;
        state.serialize_field("family_name", &self.family_name)?;
        state.serialize_field("patronymic", &self.patronymic)?;
        state.serialize_field("grades", &self.grades)?;
        state.serialize_field("average", &self.average_grade())?;
        state.end()
    }
}
