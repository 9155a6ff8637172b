//! JSON snapshot persistence.
//!
//! A snapshot holds every student and every course as two ordered arrays.
//! Saving replaces the whole file; loading replaces the whole book. The
//! stored GPA is informational and is recomputed from the grades on load.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::gradebook::GradeBook;
use crate::model::{Course, Enrollment, Grade, GradeScale, Student};

/// Snapshot format version written by this crate.
pub const SNAPSHOT_VERSION: u32 = 1;

/// On-disk shape of a saved grade book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl Snapshot {
    /// Capture the current contents of `book`.
    pub fn capture(book: &GradeBook) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            students: book.students().to_vec(),
            courses: book.list_courses().to_vec(),
        }
    }

    /// Rebuild a grade book, enforcing the same rules as interactive edits.
    ///
    /// Every record is rebuilt through its constructor so stored fields are
    /// trimmed like typed input. Each stored grade must fit `scale`, and a
    /// student may list a given course only once.
    pub fn restore(self, scale: GradeScale) -> Result<GradeBook> {
        anyhow::ensure!(
            self.version == SNAPSHOT_VERSION,
            "unsupported snapshot version {} (expected {})",
            self.version,
            SNAPSHOT_VERSION
        );

        let mut book = GradeBook::with_scale(scale);
        for stored in self.courses {
            let course = Course::new(stored.name, stored.term, stored.credits);
            let name = course.name.clone();
            book.add_course(course)
                .with_context(|| format!("invalid course in snapshot: {name}"))?;
        }
        for stored in self.students {
            let mut student = Student::new(stored.email, stored.first_name, stored.last_name);
            let email = student.email.clone();
            for enrollment in stored.courses {
                let course = enrollment.course.trim().to_string();
                anyhow::ensure!(
                    !student.is_enrolled(&course),
                    "invalid student in snapshot: {email} is enrolled in {course} more than once"
                );
                if let Grade::Graded(value) = enrollment.grade {
                    scale.check(value).with_context(|| {
                        format!("invalid student in snapshot: {email} in {course}")
                    })?;
                }
                student.courses.push(Enrollment {
                    course,
                    grade: enrollment.grade,
                });
            }
            student.refresh_gpa();
            book.add_student(student)
                .with_context(|| format!("invalid student in snapshot: {email}"))?;
        }
        Ok(book)
    }
}

/// Serialize `book` to pretty-printed JSON.
pub fn to_json(book: &GradeBook) -> Result<String> {
    serde_json::to_string_pretty(&Snapshot::capture(book)).context("failed to serialize grade book")
}

/// Parse a snapshot document into a grade book.
pub fn load_str(content: &str, scale: GradeScale) -> Result<GradeBook> {
    let snapshot: Snapshot =
        serde_json::from_str(content).context("failed to parse snapshot JSON")?;
    snapshot.restore(scale)
}

/// Write `book` to `path`, replacing any previous snapshot.
///
/// The JSON is written to a temporary file in the target directory and then
/// renamed over `path`, so readers never observe a half-written file.
pub fn save(book: &GradeBook, path: &Path) -> Result<()> {
    let json = to_json(book)?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create directory {}", dir.display()))?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
    tmp.write_all(json.as_bytes())
        .context("failed to write snapshot")?;
    tmp.persist(path)
        .with_context(|| format!("failed to write snapshot to {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        students = book.student_count(),
        courses = book.course_count(),
        "snapshot saved"
    );
    Ok(())
}

/// Load a grade book from `path`. A missing file yields an empty book.
pub fn load(path: &Path, scale: GradeScale) -> Result<GradeBook> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no saved data found, starting empty");
        return Ok(GradeBook::with_scale(scale));
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot: {}", path.display()))?;
    let book = load_str(&content, scale)
        .with_context(|| format!("failed to load snapshot: {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        students = book.student_count(),
        courses = book.course_count(),
        "snapshot loaded"
    );
    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> GradeBook {
        let mut book = GradeBook::new();
        book.add_course(Course::new("Algebra", "Fall", 3)).unwrap();
        book.add_course(Course::new("Biology", "Spring", 4)).unwrap();
        book.add_student(Student::new("a@x.com", "Ann", "Lee")).unwrap();
        book.add_student(Student::new("b@x.com", "Bob", "Ray")).unwrap();
        book.enroll("a@x.com", "Algebra").unwrap();
        book.enroll("a@x.com", "Biology").unwrap();
        book.enroll("b@x.com", "Biology").unwrap();
        book.grade("a@x.com", "Algebra", 92.5).unwrap();
        book.grade("b@x.com", "Biology", 71.0).unwrap();
        book
    }

    #[test]
    fn roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("gradebook.json");
        let book = populated();

        save(&book, &path).unwrap();
        let loaded = load(&path, GradeScale::default()).unwrap();

        assert_eq!(loaded.students(), book.students());
        assert_eq!(loaded.list_courses(), book.list_courses());
        let ann = loaded.find_student("a@x.com").unwrap();
        assert_eq!(ann.grade_for("Biology"), Some(Grade::Ungraded));
        assert_eq!(ann.gpa, 92.5);
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradebook.json");

        save(&populated(), &path).unwrap();
        save(&GradeBook::new(), &path).unwrap();

        let loaded = load(&path, GradeScale::default()).unwrap();
        assert_eq!(loaded.student_count(), 0);
        assert_eq!(loaded.course_count(), 0);
    }

    #[test]
    fn missing_file_is_empty_book() {
        let dir = tempfile::tempdir().unwrap();
        let book = load(&dir.path().join("absent.json"), GradeScale::default()).unwrap();
        assert_eq!(book.student_count(), 0);
    }

    #[test]
    fn stored_gpa_is_recomputed() {
        let json = r#"{
  "version": 1,
  "saved_at": "2024-01-01T00:00:00Z",
  "students": [
    {
      "email": "a@x.com",
      "first_name": "Ann",
      "last_name": "Lee",
      "courses": [
        { "course": "Algebra", "grade": { "graded": 80.0 } },
        { "course": "Biology", "grade": "ungraded" }
      ],
      "gpa": 12.0
    }
  ],
  "courses": [
    { "name": "Algebra", "term": "Fall", "credits": 3 },
    { "name": "Biology", "term": "Fall", "credits": 4 }
  ]
}"#;
        let book = load_str(json, GradeScale::default()).unwrap();
        assert_eq!(book.find_student("a@x.com").unwrap().gpa, 80.0);
    }

    #[test]
    fn duplicate_entries_are_rejected_on_load() {
        let json = r#"{
  "version": 1,
  "saved_at": "2024-01-01T00:00:00Z",
  "students": [],
  "courses": [
    { "name": "Algebra", "term": "Fall", "credits": 3 },
    { "name": "Algebra", "term": "Spring", "credits": 4 }
  ]
}"#;
        let err = load_str(json, GradeScale::default()).unwrap_err();
        assert!(format!("{err:#}").contains("course already exists"));
    }

    fn single_student(email: &str, courses: &str) -> String {
        format!(
            r#"{{
  "version": 1,
  "saved_at": "2024-01-01T00:00:00Z",
  "students": [
    {{ "email": "{email}", "first_name": " Bob ", "last_name": "Ray", "courses": [{courses}] }}
  ],
  "courses": [{{ "name": "Algebra", "term": "Fall", "credits": 3 }}]
}}"#
        )
    }

    #[test]
    fn grades_outside_scale_are_rejected_on_load() {
        let json = single_student(
            "b@x.com",
            r#"{ "course": "Algebra", "grade": { "graded": 250.0 } }"#,
        );
        let scale = GradeScale { min: 0.0, max: 4.0 };
        let err = load_str(&json, scale).unwrap_err();
        assert!(format!("{err:#}").contains("invalid grade 250"));

        // The same document is fine once the scale allows it.
        assert!(load_str(&json, GradeScale { min: 0.0, max: 300.0 }).is_ok());
    }

    #[test]
    fn repeated_enrollment_is_rejected_on_load() {
        let json = single_student(
            "b@x.com",
            r#"{ "course": "Algebra", "grade": { "graded": 70.0 } },
               { "course": "Algebra ", "grade": "ungraded" }"#,
        );
        let err = load_str(&json, GradeScale::default()).unwrap_err();
        assert!(format!("{err:#}").contains("enrolled in Algebra more than once"));
    }

    #[test]
    fn stored_fields_are_trimmed_on_load() {
        let json = single_student(
            " b@x.com ",
            r#"{ "course": " Algebra", "grade": { "graded": 70.0 } }"#,
        );
        let book = load_str(&json, GradeScale::default()).unwrap();
        let bob = book.find_student("b@x.com").unwrap();
        assert_eq!(bob.email, "b@x.com");
        assert_eq!(bob.first_name, "Bob");
        assert_eq!(bob.grade_for("Algebra"), Some(Grade::Graded(70.0)));
        assert_eq!(bob.gpa, 70.0);
    }

    #[test]
    fn unknown_version_is_rejected() {
        let json = r#"{ "version": 99, "saved_at": "2024-01-01T00:00:00Z" }"#;
        assert!(load_str(json, GradeScale::default()).is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(load_str("not json", GradeScale::default()).is_err());
    }
}
