//! Core record types for gradebook.
//!
//! A [`Student`] owns its enrollments as an ordered list of course names with
//! a [`Grade`] each. A [`Course`] is a plain catalog entry. Students only ever
//! hold course names, so later changes to a course never reach them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GradebookError, Result};
use crate::statistics;

/// A student's grade in one course.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    /// Enrolled, but no grade recorded yet.
    Ungraded,
    /// A recorded numeric score.
    Graded(f64),
}

impl Grade {
    /// The numeric score, if one has been recorded.
    pub fn value(&self) -> Option<f64> {
        match self {
            Grade::Ungraded => None,
            Grade::Graded(v) => Some(*v),
        }
    }

    pub fn is_graded(&self) -> bool {
        matches!(self, Grade::Graded(_))
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::Ungraded => write!(f, "Not graded"),
            Grade::Graded(v) => write!(f, "{v}"),
        }
    }
}

/// Inclusive range of accepted numeric grades.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeScale {
    #[serde(default = "default_min")]
    pub min: f64,
    #[serde(default = "default_max")]
    pub max: f64,
}

fn default_min() -> f64 {
    0.0
}

fn default_max() -> f64 {
    100.0
}

impl Default for GradeScale {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: default_max(),
        }
    }
}

impl GradeScale {
    /// Reject non-finite values and values outside `min..=max`.
    pub fn check(&self, value: f64) -> Result<()> {
        if value.is_finite() && (self.min..=self.max).contains(&value) {
            Ok(())
        } else {
            Err(GradebookError::InvalidGrade {
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// One course a student is registered for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    /// Name of the course.
    pub course: String,
    /// Grade recorded for the course.
    pub grade: Grade,
}

/// A student and their enrollments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier within a grade book.
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Enrollments in registration order.
    #[serde(default)]
    pub courses: Vec<Enrollment>,
    /// Mean of the recorded grades; kept in sync by every grade mutation.
    #[serde(default)]
    pub gpa: f64,
}

impl Student {
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into().trim().to_string(),
            first_name: first_name.into().trim().to_string(),
            last_name: last_name.into().trim().to_string(),
            courses: Vec::new(),
            gpa: 0.0,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Check the identifying fields before the student enters a grade book.
    pub fn validate(&self) -> Result<()> {
        if self.email.is_empty() {
            return Err(GradebookError::InvalidField {
                field: "email",
                reason: "cannot be empty".into(),
            });
        }
        if !self.email.contains('@') {
            return Err(GradebookError::InvalidField {
                field: "email",
                reason: format!("'{}' is missing '@'", self.email),
            });
        }
        Ok(())
    }

    pub fn is_enrolled(&self, course_name: &str) -> bool {
        self.courses.iter().any(|e| e.course == course_name)
    }

    /// The grade for `course_name`, or `None` if not enrolled.
    pub fn grade_for(&self, course_name: &str) -> Option<Grade> {
        self.courses
            .iter()
            .find(|e| e.course == course_name)
            .map(|e| e.grade)
    }

    /// Number of courses with a recorded grade.
    pub fn graded_count(&self) -> usize {
        self.courses.iter().filter(|e| e.grade.is_graded()).count()
    }

    /// Enroll in `course` with no grade.
    ///
    /// Registering twice for the same course is refused so an existing grade
    /// is never discarded.
    pub fn register(&mut self, course: &Course) -> Result<()> {
        if self.is_enrolled(&course.name) {
            return Err(GradebookError::AlreadyEnrolled {
                email: self.email.clone(),
                course: course.name.clone(),
            });
        }
        self.courses.push(Enrollment {
            course: course.name.clone(),
            grade: Grade::Ungraded,
        });
        Ok(())
    }

    /// Record `grade` for an enrolled course and refresh the GPA.
    ///
    /// The value is not checked here; [`GradeBook::grade`](crate::GradeBook::grade)
    /// validates it against the book's scale before calling this.
    pub(crate) fn assign_grade(&mut self, course_name: &str, grade: f64) -> Result<()> {
        let enrollment = self
            .courses
            .iter_mut()
            .find(|e| e.course == course_name)
            .ok_or_else(|| GradebookError::NotEnrolled {
                email: self.email.clone(),
                course: course_name.to_string(),
            })?;
        enrollment.grade = Grade::Graded(grade);
        self.gpa = self.compute_gpa();
        Ok(())
    }

    /// Unweighted mean of the recorded grades. Ungraded courses do not count;
    /// with nothing graded the GPA is `0.0`.
    pub fn compute_gpa(&self) -> f64 {
        statistics::mean(self.courses.iter().filter_map(|e| e.grade.value())).unwrap_or(0.0)
    }

    /// Recompute the stored GPA from the enrollments.
    pub(crate) fn refresh_gpa(&mut self) {
        self.gpa = self.compute_gpa();
    }

    /// Render the student's transcript as plain text.
    pub fn render_transcript(&self) -> String {
        let mut out = format!(
            "Transcript for {} ({})\nGPA: {:.2}\nCourses:\n",
            self.full_name(),
            self.email,
            self.gpa
        );
        for e in &self.courses {
            out.push_str(&format!("- {}: {}\n", e.course, e.grade));
        }
        out
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier within a grade book.
    pub name: String,
    /// Term label, e.g. "Fall" or "T2".
    pub term: String,
    pub credits: u32,
}

impl Course {
    pub fn new(name: impl Into<String>, term: impl Into<String>, credits: u32) -> Self {
        Self {
            name: name.into().trim().to_string(),
            term: term.into().trim().to_string(),
            credits,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(GradebookError::InvalidField {
                field: "course name",
                reason: "cannot be empty".into(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {} credits)", self.name, self.term, self.credits)
    }
}
