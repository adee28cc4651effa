//! Fibonacci numbers with a caller-owned memo.

use std::{
    collections::HashMap,
    io::{self, Write},
};

/// The output file conventionally used for this report.
pub const OUTPUT_FILE: &str = "output_fibonacci.txt";
/// The largest index the cache will compute.
pub const MAX_INDEX: u32 = 100;

/// Memoised Fibonacci values.
///
/// Each cache is independent; results computed through one are never seen
/// by another.
#[derive(Debug, Default, Clone)]
pub struct FibonacciCache {
    memo: HashMap<u32, u128>,
}

impl FibonacciCache {
    /// An empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `F(n)`, with `F(0) = 0` and `F(1) = 1`.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` exceeds [`MAX_INDEX`].
    pub fn compute(&mut self, n: u32) -> Result<u128, IndexTooLarge> {
        if n > MAX_INDEX {
            return Err(IndexTooLarge(n));
        }
        if n <= 1 {
            return Ok(u128::from(n));
        }
        if let Some(&value) = self.memo.get(&n) {
            return Ok(value);
        }

        let value = self.compute(n - 1)? + self.compute(n - 2)?;
        self.memo.insert(n, value);
        Ok(value)
    }

    /// The number of memoised entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.memo.len()
    }

    /// Returns `true` if nothing is memoised.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }

    /// Forgets every memoised value.
    pub fn clear(&mut self) {
        self.memo.clear();
    }
}

/// The index was above [`MAX_INDEX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Fibonacci index {0} too large (max: 100)")]
pub struct IndexTooLarge(pub u32);

/// Writes `F(0)` through `F(n)` and summary statistics.
///
/// # Errors
///
/// Returns an error if `n` is too large or the writer fails.
pub fn report<W: Write + ?Sized>(
    out: &mut W,
    cache: &mut FibonacciCache,
    n: u32,
) -> Result<(), ReportError> {
    if n > MAX_INDEX {
        return Err(IndexTooLarge(n).into());
    }

    writeln!(out, "=== FIBONACCI SEQUENCE (F(0) to F({n})) ===")?;
    let mut sum = 0u128;
    for i in 0..=n {
        let value = cache.compute(i)?;
        sum += value;
        writeln!(out, "F({i}) = {value}")?;
    }

    writeln!(out, "\n=== STATISTICS ===")?;
    writeln!(out, "Total terms: {}", n + 1)?;
    writeln!(out, "Sum of sequence: {sum}")?;
    writeln!(out, "Last term F({n}): {}", cache.compute(n)?)?;
    out.flush()?;
    Ok(())
}

/// Failure to produce the Fibonacci report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The requested index is out of range.
    #[error(transparent)]
    Index(#[from] IndexTooLarge),
    /// The writer failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(0, 0; "zero")]
    #[test_case(1, 1; "one")]
    #[test_case(2, 1; "two")]
    #[test_case(10, 55; "ten")]
    #[test_case(50, 12_586_269_025; "fifty")]
    #[test_case(100, 354_224_848_179_261_915_075; "largest supported")]
    fn computes_known_values(n: u32, expected: u128) {
        assert_eq!(FibonacciCache::new().compute(n), Ok(expected));
    }

    #[test]
    fn rejects_index_over_limit() {
        assert_eq!(FibonacciCache::new().compute(101), Err(IndexTooLarge(101)));
    }

    #[test]
    fn caches_are_independent() {
        let mut first = FibonacciCache::new();
        first.compute(20).unwrap();
        assert_eq!(first.len(), 19);

        let second = FibonacciCache::new();
        assert!(second.is_empty());

        first.clear();
        assert!(first.is_empty());
    }

    #[test]
    fn report_lists_terms_and_sum() {
        let mut out = Vec::new();
        report(&mut out, &mut FibonacciCache::new(), 5).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("=== FIBONACCI SEQUENCE (F(0) to F(5)) ===\nF(0) = 0\nF(1) = 1\n"));
        assert!(text.contains("F(5) = 5\n"));
        assert!(text.contains("Total terms: 6\n"));
        assert!(text.contains("Sum of sequence: 12\n"));
        assert!(text.contains("Last term F(5): 5\n"));
    }

    #[test]
    fn report_rejects_large_index_before_writing() {
        let mut out = Vec::new();
        let err = report(&mut out, &mut FibonacciCache::new(), 150).unwrap_err();
        assert!(matches!(err, ReportError::Index(IndexTooLarge(150))));
        assert!(out.is_empty());
    }
}
