use std::{
    fs::File,
    path::{Path, PathBuf},
};

mod arithmetic;
mod array;
mod fibonacci;
mod grid;
mod loops;
mod matrix;
mod select;
mod students;
mod terminal;

use anyhow::Context;
use arithmetic::Arithmetic;
use array::Array;
use clap::ArgAction;
use fibonacci::Fibonacci;
use grid::Grid;
use labs::report::{open_report, Mode};
use loops::Loops;
use matrix::Matrix;
use select::Select;
use students::Students;
use terminal::Colorize;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global=true)]
    verbose: u8,

    /// The directory holding input, output and database files
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or(Command::Select(Select {}))
            .run(&self.root)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout carries the reports
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Pick an exercise from a numbered list (default)
    Select(Select),

    /// Exercise 1: arithmetic and increment/decrement operators
    Arithmetic(Arithmetic),

    /// Exercise 2: an arithmetic progression built with three loop forms
    Loops(Loops),

    /// Exercise 3: element-wise operations on two 4x3 matrices
    Matrix(Matrix),

    /// Exercise 4: selection sort and linear search
    Array(Array),

    /// Exercise 5a: Fibonacci numbers with memoisation
    Fibonacci(Fibonacci),

    /// Exercise 5b: operator-selected operations on two 2x5 matrices
    Grid(Grid),

    /// Exercise 6: the interactive student directory
    ///
    /// Records are loaded from the database file under the root directory,
    /// searched and extended from a numbered menu, and every search result
    /// is appended to the report file.
    Students(Students),
}

impl Command {
    fn run(self, root: &Path) -> anyhow::Result<()> {
        match self {
            Self::Select(command) => command.run(root)?,
            Self::Arithmetic(command) => command.run(root)?,
            Self::Loops(command) => command.run(root)?,
            Self::Matrix(command) => command.run(root)?,
            Self::Array(command) => command.run(root)?,
            Self::Fibonacci(command) => command.run(root)?,
            Self::Grid(command) => command.run(root)?,
            Self::Students(command) => command.run(root)?,
        }
        Ok(())
    }
}

/// Creates (or truncates) an exercise's output file under `root`.
fn create_output(root: &Path, name: &str) -> anyhow::Result<(PathBuf, File)> {
    let path = root.join(name);
    let file = open_report(&path, Mode::Truncate)
        .with_context(|| format!("cannot open output file '{}'", path.display()))?;
    Ok((path, file))
}

fn saved(path: &Path) {
    println!(
        "{}",
        format!("\n✅ Results saved to '{}'", path.display()).success()
    );
}
