//! Tables and JSON views shared by the subcommands.

use comfy_table::{Cell, Table};
use serde::Serialize;

use gradebook_core::statistics::CourseSummary;
use gradebook_core::{Course, Student};

/// One row of a GPA ranking.
#[derive(Debug, Serialize)]
pub struct RankedStudent<'a> {
    pub rank: usize,
    pub email: &'a str,
    pub name: String,
    pub gpa: f64,
    pub graded_courses: usize,
}

pub fn ranking_rows<'a>(ranked: &[&'a Student]) -> Vec<RankedStudent<'a>> {
    ranked
        .iter()
        .enumerate()
        .map(|(i, s)| RankedStudent {
            rank: i + 1,
            email: &s.email,
            name: s.full_name(),
            gpa: s.gpa,
            graded_courses: s.graded_count(),
        })
        .collect()
}

pub fn ranking_table(rows: &[RankedStudent<'_>], precision: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Rank", "Name", "Email", "GPA", "Graded"]);
    for row in rows {
        table.add_row(vec![
            Cell::new(row.rank),
            Cell::new(&row.name),
            Cell::new(row.email),
            Cell::new(format!("{:.*}", precision, row.gpa)),
            Cell::new(row.graded_courses),
        ]);
    }
    table
}

pub fn courses_table(courses: &[Course]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Course", "Term", "Credits"]);
    for c in courses {
        table.add_row(vec![Cell::new(&c.name), Cell::new(&c.term), Cell::new(c.credits)]);
    }
    table
}

pub fn summary_table(summaries: &[CourseSummary], precision: usize) -> Table {
    let fmt = |v: Option<f64>| match v {
        Some(v) => format!("{v:.precision$}"),
        None => "-".to_string(),
    };

    let mut table = Table::new();
    table.set_header(vec![
        "Course", "Term", "Credits", "Enrolled", "Graded", "Mean", "Min", "Max",
    ]);
    for s in summaries {
        table.add_row(vec![
            Cell::new(&s.course),
            Cell::new(&s.term),
            Cell::new(s.credits),
            Cell::new(s.enrolled),
            Cell::new(s.graded),
            Cell::new(fmt(s.mean)),
            Cell::new(fmt(s.min)),
            Cell::new(fmt(s.max)),
        ]);
    }
    table
}
