//! gradebook-core: Student records, grades, and gradebook queries.
//!
//! This crate holds the in-memory data model the gradebook CLI builds on:
//! the [`Student`] record, the [`Gradebook`] store that owns every record,
//! and the [`GradebookError`] conditions its operations return.

pub mod error;
pub mod gradebook;
pub mod student;

pub use error::{GradebookError, Result};
pub use gradebook::Gradebook;
pub use student::{Student, StudentId, MAX_GRADE, MIN_GRADE};
