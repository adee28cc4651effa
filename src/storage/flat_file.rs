//! The line-oriented directory file format.
//!
//! One record per line, five fields separated by single spaces:
//!
//! ```text
//! id surname birth_year study_year gpa
//! ```
//!
//! The GPA is written with one fraction digit. The reader accepts any float
//! literal and any run of whitespace between fields.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    num::{ParseFloatError, ParseIntError},
    path::Path,
};

use crate::domain::Student;

/// Parses one line into a record. The record is not validated.
///
/// # Errors
///
/// Returns an error if the line does not hold exactly five fields or a
/// numeric field does not parse.
pub fn parse_line(line: &str) -> Result<Student, ParseLineError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let &[id, surname, birth_year, study_year, gpa] = tokens.as_slice() else {
        return Err(ParseLineError::FieldCount(tokens.len()));
    };

    Ok(Student {
        id: id.parse().map_err(|e| ParseLineError::Int("id", e))?,
        surname: surname.to_string(),
        birth_year: birth_year
            .parse()
            .map_err(|e| ParseLineError::Int("birth year", e))?,
        study_year: study_year
            .parse()
            .map_err(|e| ParseLineError::Int("study year", e))?,
        gpa: gpa.parse()?,
    })
}

/// Formats a record as one line, without the trailing newline.
#[must_use]
pub fn format_line(student: &Student) -> String {
    format!(
        "{} {} {} {} {:.1}",
        student.id, student.surname, student.birth_year, student.study_year, student.gpa
    )
}

/// Reads every valid record from a reader, preserving order.
///
/// Blank lines are ignored. Lines that do not parse are skipped; lines that
/// parse but fail validation are skipped with a warning. Duplicate ids are
/// kept. A read failure part way through keeps the records read so far.
pub fn read<R: BufRead>(reader: R) -> Vec<Student> {
    let mut students = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("Stopped reading at line {}: {e}", index + 1);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let student = match parse_line(&line) {
            Ok(student) => student,
            Err(e) => {
                tracing::debug!("Skipping unparsable line {}: {e}", index + 1);
                continue;
            }
        };

        match student.validate() {
            Ok(()) => students.push(student),
            Err(e) => tracing::warn!("Skipping invalid record (ID: {}): {e}", student.id),
        }
    }

    students
}

/// Writes every record, one per line.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write<'a, W: Write>(
    writer: &mut W,
    students: impl IntoIterator<Item = &'a Student>,
) -> io::Result<()> {
    for student in students {
        writeln!(writer, "{}", format_line(student))?;
    }
    writer.flush()
}

/// Loads the directory file at `path`.
///
/// A file that cannot be opened is not an error: a warning is logged and an
/// empty list returned.
#[must_use]
pub fn load(path: &Path) -> Vec<Student> {
    match File::open(path) {
        Ok(file) => read(BufReader::new(file)),
        Err(e) => {
            tracing::warn!(
                "Database file '{}' not found ({e}). Starting fresh.",
                path.display()
            );
            Vec::new()
        }
    }
}

/// Overwrites the file at `path` with every record.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save<'a>(path: &Path, students: impl IntoIterator<Item = &'a Student>) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write(&mut writer, students)
}

/// The reason a line could not be parsed into a record.
#[derive(Debug, thiserror::Error)]
pub enum ParseLineError {
    /// The line does not have exactly five fields.
    #[error("expected 5 fields, found {0}")]
    FieldCount(usize),
    /// An integer field does not parse.
    #[error("invalid {0}: {1}")]
    Int(&'static str, ParseIntError),
    /// The GPA does not parse.
    #[error("invalid GPA: {0}")]
    Gpa(#[from] ParseFloatError),
}
