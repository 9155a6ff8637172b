//! gradebook-core — Student, course and grade record model.
//!
//! This crate defines the in-memory record model ([`GradeBook`]), GPA
//! aggregation, transcript rendering, and the JSON snapshot boundary that the
//! `gradebook` CLI builds on.

pub mod config;
pub mod error;
pub mod gradebook;
pub mod model;
pub mod snapshot;
pub mod statistics;

pub use error::{GradebookError, Result};
pub use gradebook::GradeBook;
pub use model::{Course, Grade, GradeScale, Student};
