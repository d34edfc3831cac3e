//! Gradebook error types.
//!
//! Both conditions are expected outcomes of bad input. Operations that return
//! them leave the gradebook unchanged.

use thiserror::Error;

use crate::student::{StudentId, MAX_GRADE, MIN_GRADE};

/// Result type alias
pub type Result<T> = std::result::Result<T, GradebookError>;

/// Errors returned by gradebook operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradebookError {
    /// The grade lies outside the accepted range.
    #[error("grade must be between {min} and {max}, got {value}", min = MIN_GRADE, max = MAX_GRADE)]
    InvalidGrade { value: i64 },

    /// No student with this id is held by the gradebook.
    #[error("student with ID {0} not found")]
    StudentNotFound(StudentId),
}

impl GradebookError {
    /// Returns `true` if the error was caused by an out-of-range grade.
    pub fn is_invalid_grade(&self) -> bool {
        matches!(self, GradebookError::InvalidGrade { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_grade_message_names_range() {
        let err = GradebookError::InvalidGrade { value: 7 };
        assert_eq!(err.to_string(), "grade must be between 1 and 5, got 7");
        assert!(err.is_invalid_grade());
    }

    #[test]
    fn student_not_found_carries_id() {
        let err = GradebookError::StudentNotFound(StudentId::new(42));
        assert_eq!(err.to_string(), "student with ID 42 not found");
        assert!(!err.is_invalid_grade());
    }
}
