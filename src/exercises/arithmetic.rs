//! Arithmetic and increment/decrement operators on two numbers.

use std::io::{self, Write};

/// The output file conventionally used for this report.
pub const OUTPUT_FILE: &str = "output_task1.txt";

/// `a / b`, or `None` when `b` is zero.
#[must_use]
pub fn checked_divide(a: f64, b: f64) -> Option<f64> {
    (b != 0.0).then(|| a / b)
}

/// Writes the arithmetic report for `a` and `b`.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn report<W: Write + ?Sized>(out: &mut W, a: f64, b: f64) -> io::Result<()> {
    writeln!(out, "\n--- Arithmetic Operations ---")?;
    writeln!(out, "A + B = {}", a + b)?;
    writeln!(out, "A - B = {}", a - b)?;
    writeln!(out, "A * B = {}", a * b)?;
    match checked_divide(a, b) {
        Some(quotient) => writeln!(out, "A / B = {quotient}")?,
        None => writeln!(out, "A / B = Error (Division by zero)")?,
    }

    writeln!(out, "\n--- Increment/Decrement (Postfix) ---")?;
    for (name, value, step, symbol) in [
        ("A", a, 1.0, "++"),
        ("B", b, 1.0, "++"),
        ("A", a, -1.0, "--"),
        ("B", b, -1.0, "--"),
    ] {
        // Work on a copy so the inputs stay as entered.
        let mut copy = value;
        let before = copy;
        copy += step;
        writeln!(out, "{name}{symbol}: {before} (now: {copy})")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(a: f64, b: f64) -> String {
        let mut out = Vec::new();
        report(&mut out, a, b).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn reports_all_operations() {
        let text = render(7.0, 2.0);
        assert!(text.contains("A + B = 9\n"));
        assert!(text.contains("A - B = 5\n"));
        assert!(text.contains("A * B = 14\n"));
        assert!(text.contains("A / B = 3.5\n"));
        assert!(text.contains("A++: 7 (now: 8)\n"));
        assert!(text.contains("B++: 2 (now: 3)\n"));
        assert!(text.contains("A--: 7 (now: 6)\n"));
        assert!(text.contains("B--: 2 (now: 1)\n"));
    }

    #[test]
    fn division_by_zero_is_reported() {
        assert_eq!(checked_divide(1.0, 0.0), None);
        assert!(render(1.0, 0.0).contains("A / B = Error (Division by zero)\n"));
    }

    #[test]
    fn fractional_inputs() {
        let text = render(1.5, -0.5);
        assert!(text.contains("A + B = 1\n"));
        assert!(text.contains("A / B = -3\n"));
        assert!(text.contains("B++: -0.5 (now: 0.5)\n"));
    }
}
