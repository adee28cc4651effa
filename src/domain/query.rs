use std::fmt;

use crate::domain::Student;

/// A predicate selecting a subset of the directory.
///
/// The named variants are the searches offered at the menu. [`Query::Custom`]
/// accepts any boolean function of a record, so callers can select records
/// the menu has no entry for.
pub enum Query {
    /// Exact id match.
    ById(i32),
    /// Exact, case-sensitive surname match.
    BySurname(String),
    /// Exact birth year match.
    ByBirthYear(i32),
    /// Exact study year match.
    ByStudyYear(i32),
    /// GPA greater than or equal to the threshold.
    ByGpaAtLeast(f64),
    /// Any other predicate, with a label used in the report title.
    Custom {
        /// Describes the predicate in report titles.
        label: String,
        /// The predicate itself.
        predicate: Box<dyn Fn(&Student) -> bool>,
    },
}

impl Query {
    /// Builds a [`Query::Custom`] from a label and a closure.
    #[must_use]
    pub fn custom(
        label: impl Into<String>,
        predicate: impl Fn(&Student) -> bool + 'static,
    ) -> Self {
        Self::Custom {
            label: label.into(),
            predicate: Box::new(predicate),
        }
    }

    /// Returns `true` if the record satisfies the query.
    #[must_use]
    pub fn matches(&self, student: &Student) -> bool {
        match self {
            Self::ById(id) => student.id == *id,
            Self::BySurname(surname) => student.surname == *surname,
            Self::ByBirthYear(year) => student.birth_year == *year,
            Self::ByStudyYear(year) => student.study_year == *year,
            Self::ByGpaAtLeast(threshold) => student.gpa >= *threshold,
            Self::Custom { predicate, .. } => predicate(student),
        }
    }

    /// The banner shown above a table of this query's results.
    #[must_use]
    pub fn title(&self) -> String {
        format!("SEARCH RESULTS: {self}")
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ById(id) => write!(f, "ID = {id}"),
            Self::BySurname(surname) => write!(f, "Surname = {surname}"),
            Self::ByBirthYear(year) => write!(f, "Birth Year = {year}"),
            Self::ByStudyYear(year) => write!(f, "Study Year = {year}"),
            Self::ByGpaAtLeast(threshold) => write!(f, "GPA >= {threshold:.2}"),
            Self::Custom { label, .. } => f.write_str(label),
        }
    }
}

impl fmt::Debug for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Query({self})")
    }
}
