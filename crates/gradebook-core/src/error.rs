//! Record model error types.
//!
//! These errors describe why an operation on the grade book was refused.
//! I/O and parse failures at the snapshot and config edges are reported
//! through `anyhow` instead, since callers only ever print them.

use thiserror::Error;

/// Errors returned by [`GradeBook`](crate::gradebook::GradeBook) and
/// [`Student`](crate::model::Student) operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradebookError {
    /// No student is registered under this email.
    #[error("student not found: {0}")]
    StudentNotFound(String),

    /// No course exists with this name.
    #[error("course not found: {0}")]
    CourseNotFound(String),

    /// A student with this email already exists.
    #[error("student already exists: {0}")]
    DuplicateStudent(String),

    /// A course with this name already exists.
    #[error("course already exists: {0}")]
    DuplicateCourse(String),

    /// The student is already enrolled in the course.
    #[error("{email} is already enrolled in {course}")]
    AlreadyEnrolled { email: String, course: String },

    /// The student is not enrolled in the course.
    #[error("{email} is not enrolled in {course}")]
    NotEnrolled { email: String, course: String },

    /// The grade is not finite or falls outside the grade scale.
    #[error("invalid grade {value}: must be between {min} and {max}")]
    InvalidGrade { value: f64, min: f64, max: f64 },

    /// A required field is empty or malformed.
    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl GradebookError {
    /// Returns `true` if the error means a student or course lookup failed.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GradebookError::StudentNotFound(_) | GradebookError::CourseNotFound(_)
        )
    }
}

/// Convenience alias for record model results.
pub type Result<T> = std::result::Result<T, GradebookError>;
