//! Element-wise operations on two 4×3 matrices.

use std::{
    fmt::Display,
    io::{self, Write},
    path::Path,
};

use crate::exercises::{read_exact, ExerciseError};

/// The input file holding both matrices, row-major.
pub const INPUT_FILE: &str = "input_task3.txt";
/// The output file conventionally used for this report.
pub const OUTPUT_FILE: &str = "output_task3.txt";

/// Rows in each input matrix.
pub const ROWS: usize = 4;
/// Columns in each input matrix.
pub const COLS: usize = 3;

/// A fixed-size matrix stored row-major.
pub type Matrix<T, const R: usize, const C: usize> = [[T; C]; R];

/// The input matrix shape.
pub type Grid = Matrix<f64, ROWS, COLS>;

/// Combines two matrices cell by cell.
pub fn zip_with<T, U, const R: usize, const C: usize>(
    a: &Matrix<T, R, C>,
    b: &Matrix<T, R, C>,
    op: impl Fn(T, T) -> U,
) -> Matrix<U, R, C>
where
    T: Copy,
{
    std::array::from_fn(|i| std::array::from_fn(|j| op(a[i][j], b[i][j])))
}

/// Swaps rows and columns.
pub fn transpose<T: Copy, const R: usize, const C: usize>(
    matrix: &Matrix<T, R, C>,
) -> Matrix<T, C, R> {
    std::array::from_fn(|j| std::array::from_fn(|i| matrix[i][j]))
}

/// `x / y`, or 0 when `y` is zero.
#[must_use]
pub fn divide_or_zero(x: f64, y: f64) -> f64 {
    if y == 0.0 { 0.0 } else { x / y }
}

/// Builds a matrix from row-major values.
///
/// # Panics
///
/// Panics if `values` holds fewer than `R * C` items.
pub(crate) fn from_row_major<T: Copy, const R: usize, const C: usize>(
    values: &[T],
) -> Matrix<T, R, C> {
    std::array::from_fn(|i| std::array::from_fn(|j| values[i * C + j]))
}

/// Reads the two input matrices from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds fewer than
/// `2 * ROWS * COLS` leading numbers.
pub fn read_pair(path: &Path) -> Result<(Grid, Grid), ExerciseError> {
    let cells = ROWS * COLS;
    let values = read_exact::<f64>(path, 2 * cells)?;
    Ok((
        from_row_major(&values[..cells]),
        from_row_major(&values[cells..]),
    ))
}

/// Writes a matrix with each cell right-aligned to `width`.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_matrix<W, T, const R: usize, const C: usize>(
    out: &mut W,
    matrix: &Matrix<T, R, C>,
    width: usize,
    precision: Option<usize>,
) -> io::Result<()>
where
    W: Write + ?Sized,
    T: Display,
{
    for row in matrix {
        for cell in row {
            match precision {
                Some(precision) => write!(out, "{cell:>width$.precision$}")?,
                None => write!(out, "{cell:>width$}")?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Writes the full matrix report for `a` and `b`.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn report<W: Write + ?Sized>(out: &mut W, a: &Grid, b: &Grid) -> io::Result<()> {
    section(out, "--- Array 1 ---", a)?;
    section(out, "\n--- Array 2 ---", b)?;
    section(out, "\n--- Sum (+) ---", &zip_with(a, b, |x, y| x + y))?;
    section(out, "\n--- Diff (-) ---", &zip_with(a, b, |x, y| x - y))?;
    section(out, "\n--- Mult (*) ---", &zip_with(a, b, |x, y| x * y))?;
    section(out, "\n--- Div (/) ---", &zip_with(a, b, divide_or_zero))?;

    let max = zip_with(a, b, f64::max);
    section(out, "\n--- Max Elements ---", &max)?;

    writeln!(out, "\n--- Transposed Max Array ({COLS}x{ROWS}) ---")?;
    write_matrix(out, &transpose(&max), 8, Some(2))?;

    out.flush()
}

fn section<W: Write + ?Sized>(out: &mut W, title: &str, matrix: &Grid) -> io::Result<()> {
    writeln!(out, "{title}")?;
    write_matrix(out, matrix, 8, Some(2))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn counting() -> Grid {
        from_row_major(&(1..=12).map(f64::from).collect::<Vec<_>>())
    }

    #[test]
    fn transposes_rows_and_columns() {
        let grid = counting();
        let transposed = transpose(&grid);
        assert_eq!(transposed.len(), COLS);
        assert_eq!(transposed[0], [1.0, 4.0, 7.0, 10.0]);
        assert_eq!(transposed[2], [3.0, 6.0, 9.0, 12.0]);
    }

    #[test]
    fn division_by_zero_cell_is_zero() {
        let a = counting();
        let mut b = [[2.0; COLS]; ROWS];
        b[1][1] = 0.0;

        let quotient = zip_with(&a, &b, divide_or_zero);
        assert_eq!(quotient[0][0], 0.5);
        assert_eq!(quotient[1][1], 0.0);
    }

    #[test]
    fn element_wise_max() {
        let a = counting();
        let b = [[6.0; COLS]; ROWS];
        let max = zip_with(&a, &b, f64::max);
        assert_eq!(max[0], [6.0, 6.0, 6.0]);
        assert_eq!(max[3], [10.0, 11.0, 12.0]);
    }

    #[test]
    fn formats_cells_to_width_eight() {
        let mut out = Vec::new();
        write_matrix(&mut out, &[[1.0, -2.5]], 8, Some(2)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "    1.00   -2.50\n");
    }

    #[test]
    fn reads_both_matrices_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(INPUT_FILE);
        let values: Vec<String> = (1..=24).map(|v| v.to_string()).collect();
        std::fs::write(&path, values.join(" ")).unwrap();

        let (a, b) = read_pair(&path).unwrap();
        assert_eq!(a[0], [1.0, 2.0, 3.0]);
        assert_eq!(b[3], [22.0, 23.0, 24.0]);
    }

    #[test]
    fn short_input_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(INPUT_FILE);
        std::fs::write(&path, "1 2 3").unwrap();
        assert!(read_pair(&path).is_err());
    }

    #[test]
    fn report_lists_every_section() {
        let mut out = Vec::new();
        report(&mut out, &counting(), &[[1.0; COLS]; ROWS]).unwrap();
        let text = String::from_utf8(out).unwrap();

        for heading in [
            "--- Array 1 ---",
            "--- Array 2 ---",
            "--- Sum (+) ---",
            "--- Diff (-) ---",
            "--- Mult (*) ---",
            "--- Div (/) ---",
            "--- Max Elements ---",
            "--- Transposed Max Array (3x4) ---",
        ] {
            assert!(text.contains(heading), "missing {heading}");
        }
        assert!(text.ends_with("    3.00    6.00    9.00   12.00\n"));
    }
}
