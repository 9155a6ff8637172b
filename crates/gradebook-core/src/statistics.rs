//! Grade aggregation: means and per-course summaries.

use serde::{Deserialize, Serialize};

use crate::model::{Course, Student};

/// Arithmetic mean of `values`, or `None` when there are none.
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values
        .into_iter()
        .fold((0.0f64, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        None
    } else {
        Some(sum / n as f64)
    }
}

/// Grade statistics for one course across every enrolled student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSummary {
    /// Course name.
    pub course: String,
    pub term: String,
    pub credits: u32,
    /// Students enrolled, graded or not.
    pub enrolled: usize,
    /// Students with a recorded grade.
    pub graded: usize,
    /// Mean recorded grade.
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Summarize the grades recorded for `course` among `students`.
pub fn summarize_course(course: &Course, students: &[Student]) -> CourseSummary {
    let grades: Vec<_> = students
        .iter()
        .filter_map(|s| s.grade_for(&course.name))
        .collect();
    let values: Vec<f64> = grades.iter().filter_map(|g| g.value()).collect();

    CourseSummary {
        course: course.name.clone(),
        term: course.term.clone(),
        credits: course.credits,
        enrolled: grades.len(),
        graded: values.len(),
        mean: mean(values.iter().copied()),
        min: values.iter().copied().reduce(f64::min),
        max: values.iter().copied().reduce(f64::max),
    }
}
