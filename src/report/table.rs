//! Fixed-width tables of student records.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{
    domain::Student,
    report::sink::{open_report, Mode, Tee},
};

const RULE_WIDTH: usize = 60;

/// Writes `students` as a table headed by `title`.
///
/// Nothing is written when `students` is empty.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn render<'a, W, I>(out: &mut W, students: I, title: &str) -> io::Result<usize>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = &'a Student>,
{
    let mut students = students.into_iter().peekable();
    if students.peek().is_none() {
        return Ok(0);
    }

    let double = "=".repeat(RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "{double}")?;
    writeln!(out, "=== {title} ===")?;
    writeln!(out, "{double}")?;
    writeln!(
        out,
        "{:>6} | {:>15} | {:>11} | {:>5} | {:>6}",
        "ID", "Surname", "Birth Year", "Year", "GPA"
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    let mut count = 0;
    for student in students {
        writeln!(
            out,
            "{:>6} | {:>15} | {:>11} | {:>5} | {:>6.2}",
            student.id, student.surname, student.birth_year, student.study_year, student.gpa
        )?;
        count += 1;
    }

    writeln!(out, "{double}")?;
    writeln!(out, "Total records: {count}")?;
    out.flush()?;

    Ok(count)
}

/// Renders tables to the console and appends them to a cumulative report
/// file.
#[derive(Debug, Clone)]
pub struct Reporter {
    path: PathBuf,
}

impl Reporter {
    /// A reporter appending to the file at `path`.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The report file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Renders `students` to `console` and to the end of the report file.
    ///
    /// Returns the number of rows written. When `students` is empty nothing
    /// is rendered and the report file is not touched.
    ///
    /// # Errors
    ///
    /// Returns an error if the report file cannot be opened or either
    /// destination fails.
    pub fn publish<W: Write + ?Sized>(
        &self,
        console: &mut W,
        students: &[&Student],
        title: &str,
    ) -> io::Result<usize> {
        if students.is_empty() {
            return Ok(0);
        }

        let file = open_report(&self.path, Mode::Append)?;
        let mut tee = Tee::new().with(console).with(file);
        render(&mut tee, students.iter().copied(), title)
    }
}
