//! Operator-selected operations on two 2×5 integer matrices.

use std::{
    io::{self, Write},
    path::Path,
    str::FromStr,
};

use crate::exercises::{
    matrix::{from_row_major, write_matrix, zip_with, Matrix},
    read_exact, ExerciseError,
};

/// The input file holding both matrices, row-major.
pub const INPUT_FILE: &str = "input_arrays.txt";
/// The output file conventionally used for this report.
pub const OUTPUT_FILE: &str = "output_matrix_operations.txt";
/// How many operations one run asks for.
pub const MAX_OPERATIONS: usize = 3;

/// Rows in each matrix.
pub const ROWS: usize = 2;
/// Columns in each matrix.
pub const COLS: usize = 5;

/// The matrix shape used by this exercise.
pub type IntGrid = Matrix<i64, ROWS, COLS>;

/// An element-wise arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, yielding 0 where the divisor is 0.
    Div,
}

impl Operator {
    /// Applies the operator to one pair of cells.
    #[must_use]
    pub const fn apply(self, x: i64, y: i64) -> i64 {
        match self {
            Self::Add => x.wrapping_add(y),
            Self::Sub => x.wrapping_sub(y),
            Self::Mul => x.wrapping_mul(y),
            Self::Div => match x.checked_div(y) {
                Some(quotient) => quotient,
                None => 0,
            },
        }
    }

    /// The operator's symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

/// Which matrix an extreme is taken from, and which extreme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    /// 1: maximum of the first matrix.
    MaxA,
    /// 2: minimum of the first matrix.
    MinA,
    /// 3: maximum of the second matrix.
    MaxB,
    /// 4: minimum of the second matrix.
    MinB,
}

impl Extreme {
    /// The extreme numbered `selector` in the prompt.
    #[must_use]
    pub const fn from_selector(selector: i64) -> Option<Self> {
        match selector {
            1 => Some(Self::MaxA),
            2 => Some(Self::MinA),
            3 => Some(Self::MaxB),
            4 => Some(Self::MinB),
            _ => None,
        }
    }

    const fn is_max(self) -> bool {
        matches!(self, Self::MaxA | Self::MaxB)
    }

    const fn uses_first(self) -> bool {
        matches!(self, Self::MaxA | Self::MinA)
    }
}

/// One requested operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Combine the two matrices element-wise.
    Arithmetic(Operator),
    /// Report a minimum or maximum.
    Extreme(Extreme),
}

/// What the operator typed at the operation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// An arithmetic operator.
    Arithmetic(Operator),
    /// `m`: an extreme, still needing its selector.
    Extreme,
}

impl FromStr for OperationKind {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Self::Arithmetic(Operator::Add)),
            "-" => Ok(Self::Arithmetic(Operator::Sub)),
            "*" => Ok(Self::Arithmetic(Operator::Mul)),
            "/" => Ok(Self::Arithmetic(Operator::Div)),
            "m" | "M" => Ok(Self::Extreme),
            other => Err(UnknownOperation(other.to_string())),
        }
    }
}

/// The operation text was not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid operation: '{0}'")]
pub struct UnknownOperation(pub String);

/// The two matrices an operation runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    /// The first matrix.
    pub a: IntGrid,
    /// The second matrix.
    pub b: IntGrid,
}

impl Pair {
    /// Reads both matrices from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds fewer than
    /// `2 * ROWS * COLS` leading integers.
    pub fn read(path: &Path) -> Result<Self, ExerciseError> {
        let cells = ROWS * COLS;
        let values = read_exact::<i64>(path, 2 * cells)?;
        Ok(Self {
            a: from_row_major(&values[..cells]),
            b: from_row_major(&values[cells..]),
        })
    }

    /// Combines the matrices with `operator`.
    #[must_use]
    pub fn combine(&self, operator: Operator) -> IntGrid {
        zip_with(&self.a, &self.b, |x, y| operator.apply(x, y))
    }

    /// The requested minimum or maximum.
    #[must_use]
    pub fn extreme(&self, extreme: Extreme) -> i64 {
        let matrix = if extreme.uses_first() { &self.a } else { &self.b };
        let cells = matrix.iter().flatten().copied();
        let value = if extreme.is_max() {
            cells.max()
        } else {
            cells.min()
        };
        // Both matrices are non-empty.
        value.unwrap_or_default()
    }

    /// Writes the report heading and both input matrices.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn write_header<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "========== MATRIX OPERATIONS ==========")?;
        writeln!(out, "\nArray 1:")?;
        write_matrix(out, &self.a, 5, None)?;
        writeln!(out, "\nArray 2:")?;
        write_matrix(out, &self.b, 5, None)
    }

    /// Writes the result of the `number`th operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn write_operation<W: Write + ?Sized>(
        &self,
        out: &mut W,
        number: usize,
        operation: Operation,
    ) -> io::Result<()> {
        writeln!(out, "\n--- Operation {number} ---")?;
        match operation {
            Operation::Arithmetic(operator) => {
                writeln!(out, "Operator: {}", operator.symbol())?;
                writeln!(out, "\nResult:")?;
                write_matrix(out, &self.combine(operator), 5, None)
            }
            Operation::Extreme(extreme) => {
                writeln!(out, "Operator: m")?;
                let label = if extreme.is_max() { "Maximum" } else { "Minimum" };
                writeln!(out, "\n{label} value: {}", self.extreme(extreme))
            }
        }
    }

    /// Writes the closing line of the report.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn write_footer<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
        writeln!(out, "\n========== TASK COMPLETED ==========")?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_case::test_case;

    use super::*;

    fn pair() -> Pair {
        Pair {
            a: [[1, 2, 3, 4, 5], [6, 7, 8, 9, 10]],
            b: [[2, 0, 3, -1, 5], [1, 1, 1, 1, 20]],
        }
    }

    #[test_case("+", OperationKind::Arithmetic(Operator::Add); "plus")]
    #[test_case(" / ", OperationKind::Arithmetic(Operator::Div); "divide with spaces")]
    #[test_case("M", OperationKind::Extreme; "upper m")]
    fn parses_operation(input: &str, expected: OperationKind) {
        assert_eq!(input.parse(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_operation() {
        assert_eq!(
            "%".parse::<OperationKind>(),
            Err(UnknownOperation("%".into()))
        );
    }

    #[test]
    fn integer_division_by_zero_is_zero() {
        let quotient = pair().combine(Operator::Div);
        assert_eq!(quotient[0], [0, 0, 1, -4, 1]);
        assert_eq!(quotient[1], [6, 7, 8, 9, 0]);
    }

    #[test_case(1, 10; "max of first")]
    #[test_case(2, 1; "min of first")]
    #[test_case(3, 20; "max of second")]
    #[test_case(4, -1; "min of second")]
    fn finds_extremes(selector: i64, expected: i64) {
        let extreme = Extreme::from_selector(selector).unwrap();
        assert_eq!(pair().extreme(extreme), expected);
    }

    #[test]
    fn selector_out_of_range() {
        assert_eq!(Extreme::from_selector(0), None);
        assert_eq!(Extreme::from_selector(5), None);
    }

    #[test]
    fn writes_operation_results() {
        let mut out = Vec::new();
        let pair = pair();
        pair.write_header(&mut out).unwrap();
        pair.write_operation(&mut out, 1, Operation::Arithmetic(Operator::Add))
            .unwrap();
        pair.write_operation(&mut out, 2, Operation::Extreme(Extreme::MinB))
            .unwrap();
        Pair::write_footer(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Array 1:\n    1    2    3    4    5\n"));
        assert!(text.contains("--- Operation 1 ---\nOperator: +\n\nResult:\n    3    2    6    3   10\n"));
        assert!(text.contains("--- Operation 2 ---\nOperator: m\n\nMinimum value: -1\n"));
        assert!(text.ends_with("========== TASK COMPLETED ==========\n"));
    }

    #[test]
    fn reads_pair_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(INPUT_FILE);
        std::fs::write(&path, "1 2 3 4 5\n6 7 8 9 10\n2 0 3 -1 5\n1 1 1 1 20\n").unwrap();

        assert_eq!(Pair::read(&path).unwrap(), pair());
    }
}
