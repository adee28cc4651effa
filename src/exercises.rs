//! Stateless report generators for the introductory exercises.
//!
//! Each generator takes its inputs as plain values and writes one formatted
//! report to any [`std::io::Write`]. Reading the inputs (from the operator or
//! from an input file) is left to the caller, apart from the small file
//! readers here.

pub mod arithmetic;
pub mod array;
pub mod fibonacci;
pub mod grid;
pub mod loops;
pub mod matrix;

use std::{
    fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

/// Failure to obtain or use an exercise's input.
#[derive(Debug, thiserror::Error)]
pub enum ExerciseError {
    /// The input file could not be read.
    #[error("input file '{}' not found: {source}", path.display())]
    MissingInput {
        /// The file that was looked for.
        path: PathBuf,
        /// Why it could not be read.
        source: io::Error,
    },
    /// The input file holds fewer values than needed.
    #[error("insufficient data in input file '{}': expected {expected} values, found {found}", path.display())]
    Insufficient {
        /// The input file.
        path: PathBuf,
        /// How many values are needed.
        expected: usize,
        /// How many valid values were read.
        found: usize,
    },
    /// The input file holds no usable values.
    #[error("input file '{}' is empty", .0.display())]
    Empty(PathBuf),
    /// An argument is out of range.
    #[error("{0}")]
    InvalidArgument(String),
    /// Writing the report failed.
    #[error("cannot write report: {0}")]
    Io(#[from] io::Error),
}

/// Reads whitespace-separated values from `path`, stopping at the first token
/// that does not parse as a `T`.
///
/// # Errors
///
/// Returns [`ExerciseError::MissingInput`] if the file cannot be read.
pub fn read_values<T: FromStr>(path: &Path) -> Result<Vec<T>, ExerciseError> {
    let content = fs::read_to_string(path).map_err(|source| ExerciseError::MissingInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content
        .split_whitespace()
        .map_while(|token| token.parse().ok())
        .collect())
}

/// Reads exactly `count` leading values from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds fewer than `count`
/// parsable leading values.
pub fn read_exact<T: FromStr>(path: &Path, count: usize) -> Result<Vec<T>, ExerciseError> {
    let mut values = read_values(path)?;
    if values.len() < count {
        return Err(ExerciseError::Insufficient {
            path: path.to_path_buf(),
            expected: count,
            found: values.len(),
        });
    }
    values.truncate(count);
    Ok(values)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn stops_at_first_unparsable_token() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("input.txt");
        fs::write(&path, "3 1\n4 x 5").unwrap();

        assert_eq!(read_values::<i64>(&path).unwrap(), [3, 1, 4]);
    }

    #[test]
    fn short_file_is_insufficient() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("input.txt");
        fs::write(&path, "1 2 3").unwrap();

        let err = read_exact::<f64>(&path, 4).unwrap_err();
        assert!(matches!(
            err,
            ExerciseError::Insufficient {
                expected: 4,
                found: 3,
                ..
            }
        ));
    }

    #[test]
    fn missing_file_is_reported() {
        let tmp = TempDir::new().unwrap();
        let err = read_values::<f64>(&tmp.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, ExerciseError::MissingInput { .. }));
    }
}
