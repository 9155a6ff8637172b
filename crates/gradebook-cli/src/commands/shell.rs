//! The `gradebook shell` command: the numbered interactive menu.
//!
//! Mistyped numbers and refused operations print an error and return to the
//! menu. End of input leaves the shell the same way as choosing Exit; nothing
//! is saved unless the user picks Save Data.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;

use gradebook_core::{Course, Student};

use crate::input;

use super::Workspace;

const MENU: &str = "\
Grade Book Application
1. Add Student
2. Add Course
3. Register Student for Course
4. Add Grade
5. View Student Transcript
6. Rank Students by GPA
7. Search Students by Grade
8. List all courses
9. Save Data
10. Exit";

pub fn execute(config_path: Option<&Path>, data_file: Option<PathBuf>) -> Result<()> {
    let ws = Workspace::open(config_path, data_file)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Shell::new(ws, stdin.lock(), stdout.lock()).run()
}

enum Flow {
    Continue,
    Exit,
}

/// Menu loop over any line-oriented input and output.
pub struct Shell<R, W> {
    ws: Workspace,
    input: R,
    out: W,
    dirty: bool,
}

/// Read one answer, leaving the shell if the input is exhausted.
macro_rules! ask {
    ($shell:expr, $label:expr) => {
        match $shell.prompt($label)? {
            Some(answer) => answer,
            None => return Ok(Flow::Exit),
        }
    };
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(ws: Workspace, input: R, out: W) -> Self {
        Self {
            ws,
            input,
            out,
            dirty: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        if self.ws.loaded_from_disk {
            writeln!(self.out, "Data loaded successfully.")?;
        } else {
            writeln!(self.out, "No saved data found.")?;
        }

        loop {
            writeln!(self.out, "\n{MENU}")?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                break;
            };
            let flow = match choice.trim() {
                "1" => self.add_students()?,
                "2" => self.add_course()?,
                "3" => self.enroll()?,
                "4" => self.add_grade()?,
                "5" => self.transcripts()?,
                "6" => self.rank()?,
                "7" => self.search()?,
                "8" => self.list_courses()?,
                "9" => self.save()?,
                "10" => Flow::Exit,
                _ => {
                    writeln!(self.out, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };
            if let Flow::Exit = flow {
                break;
            }
        }

        if self.dirty {
            writeln!(
                self.out,
                "Unsaved changes were not written to {}.",
                self.ws.data_file.display()
            )?;
        }
        writeln!(
            self.out,
            "Thank you for using the Grade Book Application. Goodbye!"
        )?;
        self.out.flush()?;
        Ok(())
    }

    #[cfg(test)]
    fn into_workspace(self) -> Workspace {
        self.ws
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn fail(&mut self, err: impl Display) -> Result<Flow> {
        writeln!(self.out, "Error: {err}")?;
        Ok(Flow::Continue)
    }

    fn add_students(&mut self) -> Result<Flow> {
        let raw = ask!(self, "Enter the number of students to add: ");
        let count = match input::parse_count(&raw) {
            Ok(n) => n,
            Err(e) => return self.fail(e),
        };

        let mut added = 0;
        for _ in 0..count {
            let email = ask!(self, "Enter student email: ");
            let first_name = ask!(self, "Enter first name: ");
            let last_name = ask!(self, "Enter last name: ");

            let student = Student::new(email, first_name, last_name);
            let name = student.full_name();
            match self.ws.book.add_student(student) {
                Ok(()) => {
                    added += 1;
                    self.dirty = true;
                    writeln!(self.out, "Student {name} added successfully.")?;
                }
                Err(e) => writeln!(self.out, "Error: {e}")?,
            }
        }
        writeln!(self.out, "{added} student(s) added to the grade book.")?;
        Ok(Flow::Continue)
    }

    fn add_course(&mut self) -> Result<Flow> {
        let name = ask!(self, "Enter course name: ");
        let term = ask!(self, "Enter trimester: ");
        let raw = ask!(self, "Enter credits: ");
        let credits = match input::parse_credits(&raw) {
            Ok(c) => c,
            Err(e) => return self.fail(e),
        };

        if let Err(e) = self.ws.book.add_course(Course::new(name, term, credits)) {
            return self.fail(e);
        }
        self.dirty = true;
        writeln!(self.out, "Course added successfully.")?;
        Ok(Flow::Continue)
    }

    fn enroll(&mut self) -> Result<Flow> {
        let email = ask!(self, "Enter student email: ");
        let course = ask!(self, "Enter course name: ");

        if let Err(e) = self.ws.book.enroll(&email, &course) {
            return self.fail(e);
        }
        self.dirty = true;
        writeln!(self.out, "Student registered for course successfully.")?;
        Ok(Flow::Continue)
    }

    fn add_grade(&mut self) -> Result<Flow> {
        let email = ask!(self, "Enter student email: ");
        let course = ask!(self, "Enter course name: ");
        let raw = ask!(self, "Enter grade: ");
        let grade = match input::parse_grade(&raw) {
            Ok(g) => g,
            Err(e) => return self.fail(e),
        };

        if let Err(e) = self.ws.book.grade(&email, &course, grade) {
            return self.fail(e);
        }
        self.dirty = true;
        writeln!(self.out, "Grade added successfully.")?;
        Ok(Flow::Continue)
    }

    fn transcripts(&mut self) -> Result<Flow> {
        let raw = ask!(
            self,
            "Enter the number of students to generate their transcripts: "
        );
        let count = match input::parse_count(&raw) {
            Ok(n) => n,
            Err(e) => return self.fail(e),
        };

        let mut emails = Vec::new();
        for i in 1..=count {
            emails.push(ask!(self, &format!("Enter student email {i}: ")));
        }

        let transcripts = self.ws.book.transcripts(emails.iter().map(String::as_str));
        for (i, transcript) in transcripts.into_iter().enumerate() {
            match transcript {
                Ok(text) => writeln!(self.out, "Transcript for student {}:\n{text}", i + 1)?,
                Err(e) => writeln!(self.out, "Error: {e}")?,
            }
        }
        Ok(Flow::Continue)
    }

    fn rank(&mut self) -> Result<Flow> {
        let precision = self.ws.gpa_precision();
        let ranked = self.ws.book.rank_by_gpa();
        if ranked.is_empty() {
            writeln!(self.out, "No students yet.")?;
        }
        for (i, s) in ranked.iter().enumerate() {
            writeln!(
                self.out,
                "{}. {} - GPA: {:.*}",
                i + 1,
                s.full_name(),
                precision,
                s.gpa
            )?;
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        let course = ask!(self, "Enter course name: ");
        let raw = ask!(self, "Enter grade to search for: ");
        let grade = match input::parse_grade(&raw) {
            Ok(g) => g,
            Err(e) => return self.fail(e),
        };

        let found = self.ws.book.search_by_grade(&course, grade);
        if found.is_empty() {
            writeln!(self.out, "No students found.")?;
        }
        for s in found {
            writeln!(self.out, "{} - {}", s.full_name(), s.email)?;
        }
        Ok(Flow::Continue)
    }

    fn list_courses(&mut self) -> Result<Flow> {
        let courses = self.ws.book.list_courses();
        if courses.is_empty() {
            writeln!(self.out, "No courses yet.")?;
        }
        for c in courses {
            writeln!(self.out, "- {c}")?;
        }
        Ok(Flow::Continue)
    }

    fn save(&mut self) -> Result<Flow> {
        match self.ws.save() {
            Ok(()) => {
                self.dirty = false;
                writeln!(self.out, "Data saved successfully.")?;
                Ok(Flow::Continue)
            }
            Err(e) => self.fail(format!("{e:#}")),
        }
    }
}
