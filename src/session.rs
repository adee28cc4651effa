//! The interactive student directory menu.
//!
//! A [`Session`] alternates between waiting for a menu choice and
//! dispatching it. Bad input at any prompt prints a one-line diagnostic and
//! returns to the menu; end of input ends the session.

use std::io::{self, BufRead, Write};

use crate::{
    console::{Console, ConsoleError},
    domain::{Query, Student},
    report::Reporter,
    storage::{AddError, Directory},
};

/// One entry of the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1: search by exact id.
    SearchById,
    /// 2: search by exact surname.
    SearchBySurname,
    /// 3: search by birth year.
    SearchByBirthYear,
    /// 4: search by study year.
    SearchByStudyYear,
    /// 5: search by minimum GPA.
    SearchByGpa,
    /// 6: add a record.
    Add,
    /// 7: show every record.
    DisplayAll,
    /// 8: leave the menu.
    Exit,
}

impl MenuChoice {
    /// Every choice, in menu order.
    pub const ALL: [Self; 8] = [
        Self::SearchById,
        Self::SearchBySurname,
        Self::SearchByBirthYear,
        Self::SearchByStudyYear,
        Self::SearchByGpa,
        Self::Add,
        Self::DisplayAll,
        Self::Exit,
    ];

    /// The choice shown as `number` in the menu.
    #[must_use]
    pub fn from_number(number: i64) -> Option<Self> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// The menu text for this choice.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SearchById => "Search by ID",
            Self::SearchBySurname => "Search by Surname",
            Self::SearchByBirthYear => "Search by Birth Year",
            Self::SearchByStudyYear => "Search by Study Year",
            Self::SearchByGpa => "Search by GPA (>= threshold)",
            Self::Add => "Add New Student",
            Self::DisplayAll => "Display All Students",
            Self::Exit => "Exit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    MenuWait,
    Dispatching(MenuChoice),
    Exit,
}

/// An interactive session over a loaded directory.
#[derive(Debug)]
pub struct Session {
    directory: Directory,
    reporter: Reporter,
}

impl Session {
    /// Creates a session over `directory`, publishing results with
    /// `reporter`.
    #[must_use]
    pub const fn new(directory: Directory, reporter: Reporter) -> Self {
        Self {
            directory,
            reporter,
        }
    }

    /// The directory being managed.
    #[must_use]
    pub const fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Runs the menu loop until the operator exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only if a console stream fails.
    pub fn run<R, W, E>(&mut self, console: &mut Console<R, W, E>) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let out = console.output();
        writeln!(out, "\n========== STUDENT DATABASE SYSTEM ==========")?;
        writeln!(out, "Total students loaded: {}", self.directory.len())?;

        let mut state = State::MenuWait;
        loop {
            state = match state {
                State::MenuWait => Self::await_choice(console)?,
                State::Dispatching(choice) => self.dispatch(choice, console)?,
                State::Exit => return Ok(()),
            };
        }
    }

    fn await_choice<R, W, E>(console: &mut Console<R, W, E>) -> io::Result<State>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let out = console.output();
        let rule = "=".repeat(50);
        writeln!(out, "\n{rule}")?;
        writeln!(out, "=== STUDENT DATABASE MENU ===")?;
        writeln!(out, "{rule}")?;
        for (number, choice) in (1..).zip(MenuChoice::ALL) {
            writeln!(out, "{number}. {}", choice.label())?;
        }
        writeln!(out, "{rule}")?;

        let line = match console.prompt_line("Enter choice (1-8): ") {
            Ok(line) => Some(line),
            Err(ConsoleError::Closed) => return Ok(State::Exit),
            Err(ConsoleError::Io(e)) => return Err(e),
            Err(_) => None,
        };

        let Some(number) = line.and_then(|line| line.trim().parse::<i64>().ok()) else {
            console.report_error("Invalid input: Please enter a number 1-8.")?;
            return Ok(State::MenuWait);
        };

        match MenuChoice::from_number(number) {
            Some(MenuChoice::Exit) => {
                writeln!(console.output(), "Exiting student database system. Goodbye!")?;
                Ok(State::Exit)
            }
            Some(choice) => Ok(State::Dispatching(choice)),
            None => {
                console.report_error("Invalid choice: Please select an option 1-8.")?;
                Ok(State::MenuWait)
            }
        }
    }

    fn dispatch<R, W, E>(
        &mut self,
        choice: MenuChoice,
        console: &mut Console<R, W, E>,
    ) -> io::Result<State>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let outcome = match choice {
            MenuChoice::SearchById
            | MenuChoice::SearchByBirthYear
            | MenuChoice::SearchByStudyYear
            | MenuChoice::SearchByGpa => self.numeric_search(choice, console),
            MenuChoice::SearchBySurname => self.surname_search(console),
            MenuChoice::Add => self.add(console),
            MenuChoice::DisplayAll => self.display_all(console),
            MenuChoice::Exit => return Ok(State::Exit),
        };

        match outcome {
            Ok(()) => Ok(State::MenuWait),
            Err(ConsoleError::Closed) => Ok(State::Exit),
            Err(ConsoleError::Io(e)) => Err(e),
            Err(
                e @ (ConsoleError::Malformed { .. }
                | ConsoleError::OutOfRange { .. }
                | ConsoleError::InvalidText),
            ) => {
                console.report_error(e)?;
                Ok(State::MenuWait)
            }
        }
    }

    fn numeric_search<R, W, E>(
        &self,
        choice: MenuChoice,
        console: &mut Console<R, W, E>,
    ) -> Result<(), ConsoleError>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let value: f64 = console.prompt("Enter search value: ", "search value")?;
        let whole = || {
            truncate(value).ok_or_else(|| ConsoleError::OutOfRange {
                field: "search value",
                input: value.to_string(),
            })
        };

        let query = match choice {
            MenuChoice::SearchById => Query::ById(whole()?),
            MenuChoice::SearchByBirthYear => Query::ByBirthYear(whole()?),
            MenuChoice::SearchByStudyYear => Query::ByStudyYear(whole()?),
            _ => Query::ByGpaAtLeast(value),
        };
        self.show_results(&query, console)
    }

    fn surname_search<R, W, E>(&self, console: &mut Console<R, W, E>) -> Result<(), ConsoleError>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let surname = console.prompt_line("Enter surname to search: ")?;
        let surname = surname.trim();
        if surname.is_empty() {
            console.report_error("Error: Surname cannot be empty.")?;
            return Ok(());
        }
        self.show_results(&Query::BySurname(surname.to_string()), console)
    }

    fn show_results<R, W, E>(
        &self,
        query: &Query,
        console: &mut Console<R, W, E>,
    ) -> Result<(), ConsoleError>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let found = self.directory.search(query);
        if found.is_empty() {
            writeln!(console.output(), "No records found matching criteria.")?;
            return Ok(());
        }
        self.publish(&found, &query.title(), console)
    }

    fn display_all<R, W, E>(&self, console: &mut Console<R, W, E>) -> Result<(), ConsoleError>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        if self.directory.is_empty() {
            writeln!(console.output(), "Database is empty.")?;
            return Ok(());
        }
        let all: Vec<_> = self.directory.students().iter().collect();
        self.publish(&all, "ALL STUDENTS", console)
    }

    fn publish<R, W, E>(
        &self,
        students: &[&Student],
        title: &str,
        console: &mut Console<R, W, E>,
    ) -> Result<(), ConsoleError>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        if let Err(e) = self.reporter.publish(console.output(), students, title) {
            console.report_error(format!(
                "Error writing to output file '{}': {e}",
                self.reporter.path().display()
            ))?;
        }
        Ok(())
    }

    fn add<R, W, E>(&mut self, console: &mut Console<R, W, E>) -> Result<(), ConsoleError>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        writeln!(console.output(), "\n=== ADD NEW STUDENT ===")?;
        let id = console.prompt("Enter ID: ", "ID")?;

        let surname = console.prompt_line("Enter Surname: ")?;
        let surname = surname.trim();
        if surname.is_empty() {
            console.report_error("Error: Surname cannot be empty.")?;
            return Ok(());
        }

        let birth_year = console.prompt("Enter Birth Year (1950-2015): ", "birth year")?;
        let study_year = console.prompt("Enter Study Year (1-4): ", "study year")?;
        let gpa = console.prompt("Enter GPA (0.0-5.0): ", "GPA")?;

        let student = Student::new(id, surname, birth_year, study_year, gpa);
        match self.directory.add(student) {
            Ok(()) => writeln!(console.output(), "Student record added successfully.")?,
            Err(e @ AddError::Save(_)) => console.report_error(format!("File Error: {e}"))?,
            Err(e) => console.report_error(format!("Error: {e}"))?,
        }
        Ok(())
    }
}

/// `value` truncated toward zero, if the result fits an `i32`.
#[allow(clippy::cast_possible_truncation)]
fn truncate(value: f64) -> Option<i32> {
    let whole = value.trunc();
    (f64::from(i32::MIN)..=f64::from(i32::MAX))
        .contains(&whole)
        .then(|| whole as i32)
}
