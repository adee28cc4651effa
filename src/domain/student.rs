use std::{fmt, ops::RangeInclusive};

/// Birth years a student record may carry.
pub const BIRTH_YEARS: RangeInclusive<i32> = 1950..=2015;

/// Years of study a student record may carry.
pub const STUDY_YEARS: RangeInclusive<i32> = 1..=4;

/// Grade point averages a student record may carry.
pub const GPA_RANGE: RangeInclusive<f64> = 0.0..=5.0;

/// One row of the student directory.
///
/// A `Student` can be constructed with any field values; use
/// [`Student::validate`] before storing it. The directory never holds
/// (or writes back) a record that fails validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    /// Primary key. Must be positive.
    pub id: i32,
    /// Family name. Must be a single non-empty word.
    pub surname: String,
    /// Year of birth.
    pub birth_year: i32,
    /// Current year of study.
    pub study_year: i32,
    /// Grade point average.
    pub gpa: f64,
}

impl Student {
    /// Creates a new record without validating it.
    #[must_use]
    pub fn new(
        id: i32,
        surname: impl Into<String>,
        birth_year: i32,
        study_year: i32,
        gpa: f64,
    ) -> Self {
        Self {
            id,
            surname: surname.into(),
            birth_year,
            study_year,
            gpa,
        }
    }

    /// Checks every field against its bounds.
    ///
    /// # Errors
    ///
    /// Returns the first violated bound, checked in field order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id <= 0 {
            return Err(ValidationError::Id(self.id));
        }
        if self.surname.is_empty() {
            return Err(ValidationError::EmptySurname);
        }
        // The flat-file format splits on whitespace.
        if self.surname.chars().any(char::is_whitespace) {
            return Err(ValidationError::SurnameWhitespace(self.surname.clone()));
        }
        if !BIRTH_YEARS.contains(&self.birth_year) {
            return Err(ValidationError::BirthYear(self.birth_year));
        }
        if !STUDY_YEARS.contains(&self.study_year) {
            return Err(ValidationError::StudyYear(self.study_year));
        }
        if !GPA_RANGE.contains(&self.gpa) {
            return Err(ValidationError::Gpa(self.gpa));
        }
        Ok(())
    }

    /// Returns `true` if every field is within bounds.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (born {}, year {}, GPA {:.2})",
            self.id, self.surname, self.birth_year, self.study_year, self.gpa
        )
    }
}

/// The reason a [`Student`] failed validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The id is zero or negative.
    #[error("ID must be positive, got {0}")]
    Id(i32),
    /// The surname is empty.
    #[error("surname cannot be empty")]
    EmptySurname,
    /// The surname contains whitespace.
    #[error("surname '{0}' must be a single word")]
    SurnameWhitespace(String),
    /// The birth year is outside [`BIRTH_YEARS`].
    #[error("birth year must be between 1950 and 2015, got {0}")]
    BirthYear(i32),
    /// The study year is outside [`STUDY_YEARS`].
    #[error("study year must be between 1 and 4, got {0}")]
    StudyYear(i32),
    /// The GPA is outside [`GPA_RANGE`].
    #[error("GPA must be between 0.0 and 5.0, got {0}")]
    Gpa(f64),
}

/// The records a directory is seeded with when nothing could be loaded.
#[must_use]
pub fn sample_students() -> Vec<Student> {
    vec![
        Student::new(101, "Ivanov", 2005, 1, 4.5),
        Student::new(102, "Petrov", 2004, 2, 3.8),
        Student::new(103, "Sidorov", 2006, 1, 4.2),
        Student::new(104, "Sokolov", 2003, 3, 3.9),
        Student::new(105, "Kozlov", 2004, 2, 3.6),
    ]
}
