//! Arithmetic progressions generated with three loop forms.

use std::{
    io::{self, Write},
    path::Path,
};

use crate::exercises::{read_values, ExerciseError};

/// The input file holding the first term.
pub const INPUT_FILE: &str = "input_task2.txt";
/// The output file conventionally used for this report.
pub const OUTPUT_FILE: &str = "output_task2.txt";
/// The running-sum ceiling for the bounded loop.
pub const SUM_LIMIT: f64 = 120.0;

/// An arithmetic progression `a0, a0 + d, a0 + 2d, ...`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progression {
    /// The first term.
    pub first: f64,
    /// The common difference.
    pub difference: f64,
}

impl Progression {
    /// The `i`th term, counting from 1.
    #[must_use]
    pub fn term(&self, i: u32) -> f64 {
        self.first + f64::from(i - 1) * self.difference
    }
}

/// Terms generated by one loop, with their sum.
#[derive(Debug, Clone, PartialEq)]
pub struct Terms {
    /// The terms in order.
    pub values: Vec<f64>,
    /// The sum of `values`.
    pub sum: f64,
}

impl Terms {
    fn new() -> Self {
        Self {
            values: Vec::new(),
            sum: 0.0,
        }
    }

    fn push(&mut self, term: f64) {
        self.values.push(term);
        self.sum += term;
    }

    /// The mean of the terms, or 0 when there are none.
    #[must_use]
    pub fn average(&self) -> f64 {
        if self.values.is_empty() {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            let count = self.values.len() as f64;
            self.sum / count
        }
    }
}

/// The first `n` terms, generated with a `for` loop.
#[must_use]
pub fn with_for(progression: Progression, n: u32) -> Terms {
    let mut terms = Terms::new();
    for i in 1..=n {
        terms.push(progression.term(i));
    }
    terms
}

/// The first `n` terms, generated with a `while` loop.
#[must_use]
pub fn with_while(progression: Progression, n: u32) -> Terms {
    let mut terms = Terms::new();
    let mut i = 1;
    while i <= n {
        terms.push(progression.term(i));
        i += 1;
    }
    terms
}

/// Up to `n` terms, generated with a post-tested loop that stops before the
/// running sum would reach `limit`.
#[must_use]
pub fn with_limit(progression: Progression, n: u32, limit: f64) -> Terms {
    let mut terms = Terms::new();
    if n == 0 {
        return terms;
    }

    let mut i = 1;
    loop {
        let term = progression.term(i);
        if terms.sum + term >= limit {
            break;
        }
        terms.push(term);
        i += 1;
        if i > n {
            break;
        }
    }
    terms
}

/// Reads the first term from the first token of `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not start with a
/// number.
pub fn read_first_term(path: &Path) -> Result<f64, ExerciseError> {
    read_values::<f64>(path)?.first().copied().ok_or_else(|| {
        ExerciseError::InvalidArgument(format!(
            "invalid data in input file '{}': expected numeric A0 value",
            path.display()
        ))
    })
}

/// Writes all three parts of the progression report.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn report<W: Write + ?Sized>(out: &mut W, progression: Progression, n: u32) -> io::Result<()> {
    writeln!(out, "=== PART 1: FOR LOOP ===")?;
    write!(out, "Sequence terms: ")?;
    write_terms(out, &with_for(progression, n))?;

    writeln!(out, "\n=== PART 2: WHILE LOOP ===")?;
    write!(out, "Sequence terms: ")?;
    write_terms(out, &with_while(progression, n))?;

    writeln!(out, "\n=== PART 3: DO...WHILE LOOP ===")?;
    write!(out, "Sequence terms (sum < {SUM_LIMIT}): ")?;
    write_terms(out, &with_limit(progression, n, SUM_LIMIT))?;

    out.flush()
}

fn write_terms<W: Write + ?Sized>(out: &mut W, terms: &Terms) -> io::Result<()> {
    for value in &terms.values {
        write!(out, "{value} ")?;
    }
    writeln!(out)?;
    writeln!(out, "Sum: {}", terms.sum)?;
    writeln!(out, "Average: {}", terms.average())
}
