//! Selection sort and linear search over integers.

use std::io::{self, Write};

/// The input file holding the integers.
pub const INPUT_FILE: &str = "input_task4.txt";
/// The output file conventionally used for this report.
pub const OUTPUT_FILE: &str = "output_task4.txt";

/// Sorts `values` ascending in place by repeatedly selecting the minimum.
pub fn selection_sort<T: Ord>(values: &mut [T]) {
    for i in 0..values.len() {
        let min = (i..values.len())
            .min_by(|&a, &b| values[a].cmp(&values[b]))
            .unwrap_or(i);
        values.swap(i, min);
    }
}

/// Every index at which `key` occurs, in ascending order.
#[must_use]
pub fn positions<T: PartialEq>(values: &[T], key: &T) -> Vec<usize> {
    values
        .iter()
        .enumerate()
        .filter_map(|(index, value)| (value == key).then_some(index))
        .collect()
}

/// Writes the sort and search report for `values` and `key`.
///
/// Returns the number of occurrences of `key`.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn report<W: Write + ?Sized>(out: &mut W, values: &[i64], key: i64) -> io::Result<usize> {
    let mut sorted = values.to_vec();
    selection_sort(&mut sorted);

    writeln!(out, "========== ARRAY OPERATIONS ==========")?;
    write_values(out, "Original", values)?;
    write_values(out, "Sorted", &sorted)?;

    writeln!(out, "Search key: {key}")?;
    let found = positions(values, &key);
    write!(out, "Found at: ")?;
    if found.is_empty() {
        write!(out, "Not found")?;
    }
    for index in &found {
        write!(out, "{index} ")?;
    }
    writeln!(out)?;

    writeln!(out, "========== STATISTICS ==========")?;
    writeln!(out, "Array size: {}", values.len())?;
    writeln!(out, "Occurrences found: {}", found.len())?;
    out.flush()?;

    Ok(found.len())
}

fn write_values<W: Write + ?Sized>(out: &mut W, label: &str, values: &[i64]) -> io::Result<()> {
    write!(out, "{label}: ")?;
    for value in values {
        write!(out, "{value:>4} ")?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_sort_matches_std_sort() {
        let mut values = vec![5, -3, 9, 0, 5, 2, -3, 11];
        let mut expected = values.clone();
        expected.sort_unstable();

        selection_sort(&mut values);
        assert_eq!(values, expected);
    }

    #[test]
    fn sorts_trivial_inputs() {
        let mut empty: [i64; 0] = [];
        selection_sort(&mut empty);

        let mut single = [4];
        selection_sort(&mut single);
        assert_eq!(single, [4]);
    }

    #[test]
    fn finds_every_position() {
        assert_eq!(positions(&[3, 1, 3, 2, 3], &3), [0, 2, 4]);
        assert!(positions(&[3, 1], &7).is_empty());
    }

    #[test]
    fn report_searches_unsorted_values() {
        let mut out = Vec::new();
        let found = report(&mut out, &[7, 2, 7], 7).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(found, 2);
        assert!(text.contains("Original:    7    2    7 \n"));
        assert!(text.contains("Sorted:    2    7    7 \n"));
        assert!(text.contains("Found at: 0 2 \n"));
        assert!(text.contains("Array size: 3\nOccurrences found: 2\n"));
    }

    #[test]
    fn report_missing_key() {
        let mut out = Vec::new();
        assert_eq!(report(&mut out, &[1, 2], 5).unwrap(), 0);
        assert!(String::from_utf8(out).unwrap().contains("Found at: Not found\n"));
    }
}
