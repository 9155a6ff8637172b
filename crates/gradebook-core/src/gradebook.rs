//! The grade book registry.
//!
//! [`GradeBook`] owns every student and course in insertion order. Each
//! collection is backed by a `Vec` plus a key index, so identifiers are unique
//! and lookups never have to pick between shadowed duplicates.

use std::collections::HashMap;

use crate::error::{GradebookError, Result};
use crate::model::{Course, GradeScale, Student};
use crate::statistics::{summarize_course, CourseSummary};

/// Tolerance used when matching a queried grade against recorded grades.
pub const GRADE_EPSILON: f64 = 1e-9;

/// In-memory record of students, courses, enrollments and grades.
///
/// No method here touches the filesystem; see [`crate::snapshot`] for
/// persistence.
#[derive(Debug, Clone, Default)]
pub struct GradeBook {
    students: Vec<Student>,
    courses: Vec<Course>,
    student_index: HashMap<String, usize>,
    course_index: HashMap<String, usize>,
    scale: GradeScale,
}

impl GradeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty book that accepts grades within `scale`.
    pub fn with_scale(scale: GradeScale) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    pub fn scale(&self) -> GradeScale {
        self.scale
    }

    /// Add a student. Fails if the email is invalid or already taken.
    pub fn add_student(&mut self, student: Student) -> Result<()> {
        student.validate()?;
        if self.student_index.contains_key(&student.email) {
            return Err(GradebookError::DuplicateStudent(student.email));
        }
        tracing::debug!(email = %student.email, "adding student");
        self.student_index.insert(student.email.clone(), self.students.len());
        self.students.push(student);
        Ok(())
    }

    /// Add a course. Fails if the name is empty or already taken.
    pub fn add_course(&mut self, course: Course) -> Result<()> {
        course.validate()?;
        if self.course_index.contains_key(&course.name) {
            return Err(GradebookError::DuplicateCourse(course.name));
        }
        tracing::debug!(course = %course.name, "adding course");
        self.course_index.insert(course.name.clone(), self.courses.len());
        self.courses.push(course);
        Ok(())
    }

    pub fn find_student(&self, email: &str) -> Option<&Student> {
        self.student_index.get(email.trim()).map(|&i| &self.students[i])
    }

    pub fn find_course(&self, name: &str) -> Option<&Course> {
        self.course_index.get(name.trim()).map(|&i| &self.courses[i])
    }

    fn student_mut(&mut self, email: &str) -> Result<&mut Student> {
        let email = email.trim();
        match self.student_index.get(email) {
            Some(&i) => Ok(&mut self.students[i]),
            None => Err(GradebookError::StudentNotFound(email.to_string())),
        }
    }

    /// Enroll a student in a course.
    ///
    /// Both must exist; nothing changes when either lookup fails.
    pub fn enroll(&mut self, email: &str, course_name: &str) -> Result<()> {
        let course = self
            .find_course(course_name)
            .cloned()
            .ok_or_else(|| GradebookError::CourseNotFound(course_name.trim().to_string()))?;
        let student = self.student_mut(email)?;
        student.register(&course)?;
        tracing::debug!(email = %student.email, course = %course.name, "enrolled");
        Ok(())
    }

    /// Record a grade for an enrolled student.
    ///
    /// Returns `Ok` only when the grade was actually stored.
    pub fn grade(&mut self, email: &str, course_name: &str, value: f64) -> Result<()> {
        self.scale.check(value)?;
        let student = self.student_mut(email)?;
        student.assign_grade(course_name.trim(), value)?;
        tracing::debug!(
            email = %student.email,
            course = course_name.trim(),
            grade = value,
            gpa = student.gpa,
            "grade recorded"
        );
        Ok(())
    }

    /// All students ordered by descending GPA. Equal GPAs keep insertion order.
    pub fn rank_by_gpa(&self) -> Vec<&Student> {
        let mut ranked: Vec<&Student> = self.students.iter().collect();
        ranked.sort_by(|a, b| b.gpa.total_cmp(&a.gpa));
        ranked
    }

    /// Students whose recorded grade for `course_name` equals `value`.
    pub fn search_by_grade(&self, course_name: &str, value: f64) -> Vec<&Student> {
        let course_name = course_name.trim();
        self.students
            .iter()
            .filter(|s| {
                s.grade_for(course_name)
                    .and_then(|g| g.value())
                    .is_some_and(|v| (v - value).abs() <= GRADE_EPSILON)
            })
            .collect()
    }

    pub fn list_courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Transcripts for each email, in the order given. Unknown emails are
    /// reported as `Err` entries so callers can print them alongside.
    pub fn transcripts<'a>(
        &self,
        emails: impl IntoIterator<Item = &'a str>,
    ) -> Vec<Result<String>> {
        emails
            .into_iter()
            .map(|email| {
                self.find_student(email)
                    .map(Student::render_transcript)
                    .ok_or_else(|| GradebookError::StudentNotFound(email.trim().to_string()))
            })
            .collect()
    }

    /// Grade statistics for one course.
    pub fn course_summary(&self, course_name: &str) -> Result<CourseSummary> {
        let course = self
            .find_course(course_name)
            .ok_or_else(|| GradebookError::CourseNotFound(course_name.trim().to_string()))?;
        Ok(summarize_course(course, &self.students))
    }

    /// Statistics for every course, in catalog order.
    pub fn course_summaries(&self) -> Vec<CourseSummary> {
        self.courses
            .iter()
            .map(|c| summarize_course(c, &self.students))
            .collect()
    }
}
