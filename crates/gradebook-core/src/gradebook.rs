//! The gradebook store.
//!
//! A [`Gradebook`] exclusively owns its [`Student`] records and hands out
//! shared references for the duration of a query. Records are keyed by id, so
//! every view it produces comes back in ascending id order unless sorted.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::error::{GradebookError, Result};
use crate::student::{Student, StudentId};

/// In-memory collection of students keyed by generated id.
#[derive(Debug, Clone)]
pub struct Gradebook {
    students: BTreeMap<StudentId, Student>,
    next_id: u64,
}

impl Default for Gradebook {
    fn default() -> Self {
        Self::new()
    }
}

impl Gradebook {
    /// Create an empty gradebook. The first student gets id 1.
    pub fn new() -> Self {
        Self {
            students: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Add a student with no grades and return the id assigned to them.
    ///
    /// Ids increase by one per call and are never reused.
    pub fn add_student(
        &mut self,
        given_name: impl Into<String>,
        family_name: impl Into<String>,
        patronymic: impl Into<String>,
    ) -> StudentId {
        let id = StudentId::new(self.next_id);
        self.next_id += 1;

        let student = Student::new(id, given_name.into(), family_name.into(), patronymic.into());
        tracing::debug!(%id, name = %student.full_name(), "student added");
        self.students.insert(id, student);
        id
    }

    /// Append a grade to the student with the given id.
    pub fn add_grade_to_student(&mut self, id: StudentId, value: i64) -> Result<()> {
        let student = self
            .students
            .get_mut(&id)
            .ok_or(GradebookError::StudentNotFound(id))?;
        if let Err(e) = student.add_grade(value) {
            tracing::debug!(%id, value, "grade rejected");
            return Err(e);
        }
        Ok(())
    }

    /// Look up a single student.
    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.students.get(&id)
    }

    pub fn contains(&self, id: StudentId) -> bool {
        self.students.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Every student, in ascending id order.
    pub fn all_students(&self) -> impl Iterator<Item = &Student> + '_ {
        self.students.values()
    }

    /// Students whose average is strictly below `threshold`, in ascending id order.
    ///
    /// Students without grades count as having an average of `0.0`.
    pub fn students_below_average(&self, threshold: f64) -> Vec<&Student> {
        self.all_students()
            .filter(|s| s.average_grade() < threshold)
            .collect()
    }

    /// Every student ordered by average grade.
    ///
    /// Students with equal averages are ordered by id ascending in both directions.
    pub fn sort_by_average(&self, ascending: bool) -> Vec<&Student> {
        let mut students: Vec<&Student> = self.all_students().collect();
        students.sort_by(|a, b| {
            let by_average = compare_by_average(a, b);
            let by_average = if ascending {
                by_average
            } else {
                by_average.reverse()
            };
            by_average.then_with(|| a.id().cmp(&b.id()))
        });
        students
    }
}

fn compare_by_average(a: &Student, b: &Student) -> Ordering {
    a.average_grade().total_cmp(&b.average_grade())
}
