//! Line-based operator input.
//!
//! A [`Console`] pairs an input reader with the streams prompts and
//! diagnostics are written to. Reading always consumes a whole line, so a
//! malformed answer never leaves stray input for the next prompt.

use std::{
    fmt::Display,
    io::{self, BufRead, Write},
    str::FromStr,
};

/// An interactive console over arbitrary streams.
pub struct Console<R, W, E> {
    input: R,
    output: W,
    errors: E,
}

/// A console on the process's standard streams.
pub type StdConsole = Console<io::StdinLock<'static>, io::Stdout, io::Stderr>;

impl StdConsole {
    /// Locks stdin and wraps the standard streams.
    #[must_use]
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout(), io::stderr())
    }
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    /// Wraps the given streams.
    pub const fn new(input: R, output: W, errors: E) -> Self {
        Self {
            input,
            output,
            errors,
        }
    }

    /// The stream prompts and reports are written to.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the console, returning its streams.
    pub fn into_parts(self) -> (R, W, E) {
        (self.input, self.output, self.errors)
    }

    /// Writes one line to the diagnostic stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the diagnostic stream fails.
    pub fn report_error(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.errors, "{message}")
    }

    /// Shows `prompt` and reads one line, without its line ending.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Closed`] at end of input, and
    /// [`ConsoleError::InvalidText`] if the line is not UTF-8. The whole line
    /// is consumed either way.
    pub fn prompt_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(ConsoleError::Closed);
        }
        let mut line = String::from_utf8(bytes).map_err(|_| ConsoleError::InvalidText)?;
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Shows `prompt` and parses the trimmed answer as a `T`.
    ///
    /// `field` names the value in the error message.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Malformed`] if the answer does not parse, and
    /// [`ConsoleError::Closed`] at end of input.
    pub fn prompt<T: FromStr>(
        &mut self,
        prompt: &str,
        field: &'static str,
    ) -> Result<T, ConsoleError> {
        let line = self.prompt_line(prompt)?;
        let answer = line.trim();
        answer.parse().map_err(|_| ConsoleError::Malformed {
            field,
            input: answer.to_string(),
        })
    }
}

/// Failure to obtain an answer from the operator.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// The answer could not be parsed.
    #[error("Invalid input: {field} must be a number, got '{input}'")]
    Malformed {
        /// The value being asked for.
        field: &'static str,
        /// What the operator typed.
        input: String,
    },
    /// A number was read but does not fit the value being asked for.
    #[error("Invalid input: {field} is out of range, got '{input}'")]
    OutOfRange {
        /// The value being asked for.
        field: &'static str,
        /// The number as read.
        input: String,
    },
    /// The answer is not valid UTF-8.
    #[error("Invalid input: answer is not valid text")]
    InvalidText,
    /// Input ended.
    #[error("input closed")]
    Closed,
    /// A console stream failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(input: &str) -> Console<&[u8], Vec<u8>, Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new(), Vec::new())
    }

    #[test]
    fn reads_lines_and_echoes_prompts() {
        let mut console = console("Ivanov\r\n  42 \n");
        assert_eq!(console.prompt_line("Surname: ").unwrap(), "Ivanov");
        assert_eq!(console.prompt::<i32>("Id: ", "ID").unwrap(), 42);

        let (_, output, _) = console.into_parts();
        assert_eq!(output, b"Surname: Id: ");
    }

    #[test]
    fn malformed_answer_consumes_the_line() {
        let mut console = console("abc\n7\n");
        let err = console.prompt::<i32>("> ", "ID").unwrap_err();
        assert!(matches!(err, ConsoleError::Malformed { field: "ID", .. }));
        assert_eq!(
            err.to_string(),
            "Invalid input: ID must be a number, got 'abc'"
        );
        assert_eq!(console.prompt::<i32>("> ", "ID").unwrap(), 7);
    }

    #[test]
    fn non_utf8_line_is_rejected_and_consumed() {
        let mut console = Console::new(&b"\xff\xfe\n7\n"[..], Vec::new(), Vec::new());
        assert!(matches!(
            console.prompt_line("> "),
            Err(ConsoleError::InvalidText)
        ));
        assert_eq!(console.prompt::<i32>("> ", "ID").unwrap(), 7);
    }

    #[test]
    fn end_of_input_is_closed() {
        let mut console = console("");
        assert!(matches!(
            console.prompt_line("> "),
            Err(ConsoleError::Closed)
        ));
    }

    #[test]
    fn diagnostics_go_to_error_stream() {
        let mut console = console("");
        console.report_error("Error: nope").unwrap();
        let (_, output, errors) = console.into_parts();
        assert!(output.is_empty());
        assert_eq!(errors, b"Error: nope\n");
    }
}
