//! Writers that fan output out to several destinations.

use std::{
    fs::{File, OpenOptions},
    io::{self, Write},
    path::Path,
};

/// How a report file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Start the file afresh.
    Truncate,
    /// Keep earlier contents and write after them.
    Append,
}

/// Opens (creating if needed) a report file.
///
/// The handle is closed when dropped, on every exit path.
///
/// # Errors
///
/// Returns an error if the file cannot be opened for writing.
pub fn open_report(path: &Path, mode: Mode) -> io::Result<File> {
    let mut options = OpenOptions::new();
    match mode {
        Mode::Truncate => options.write(true).truncate(true),
        Mode::Append => options.append(true),
    };
    options.create(true).open(path)
}

/// A writer that copies everything to each of its destinations.
///
/// Write failures on any destination are returned to the caller.
#[derive(Default)]
pub struct Tee<'a> {
    destinations: Vec<Box<dyn Write + 'a>>,
}

impl<'a> Tee<'a> {
    /// A tee with no destinations. Writes are discarded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a destination.
    #[must_use]
    pub fn with(mut self, destination: impl Write + 'a) -> Self {
        self.destinations.push(Box::new(destination));
        self
    }

    /// The number of destinations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Returns `true` if there are no destinations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

impl Write for Tee<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for destination in &mut self.destinations {
            destination.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        for destination in &mut self.destinations {
            destination.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn copies_to_every_destination() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        {
            let mut tee = Tee::new().with(&mut first).with(&mut second);
            assert_eq!(tee.len(), 2);
            write!(tee, "hello {}", 42).unwrap();
        }
        assert_eq!(first, b"hello 42");
        assert_eq!(second, b"hello 42");
    }

    #[test]
    fn append_mode_keeps_history() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("report.txt");

        writeln!(open_report(&path, Mode::Append).unwrap(), "first").unwrap();
        writeln!(open_report(&path, Mode::Append).unwrap(), "second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn truncate_mode_starts_afresh() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("report.txt");
        std::fs::write(&path, "stale contents\n").unwrap();

        writeln!(open_report(&path, Mode::Truncate).unwrap(), "fresh").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn unopenable_report_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing").join("report.txt");
        assert!(open_report(&path, Mode::Append).is_err());
    }
}
