use std::path::Path;

use clap::Parser;
use labs::StdConsole;
use tracing::instrument;

use super::{terminal::Colorize, Arithmetic, Array, Fibonacci, Grid, Loops, Matrix, Students};

const EXERCISES: [&str; 6] = [
    "Arithmetic operators",
    "Loops (for, while, do-while)",
    "Matrix operations (4x3)",
    "Array sort and search",
    "Fibonacci and matrix operations (2x5)",
    "Student database",
];

#[derive(Debug, Parser, Default)]
#[command(about = "Choose an exercise from a numbered list")]
pub struct Select {}

impl Select {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        println!("========== EXERCISES ==========");
        for (number, title) in (1..).zip(EXERCISES) {
            println!("{number}. {title}");
        }

        // The console is released before the exercise locks stdin again.
        let choice: i64 = StdConsole::stdio().prompt("Select exercise (1-6): ", "exercise")?;

        match choice {
            1 => Arithmetic::default().run(root),
            2 => Loops::default().run(root),
            3 => Matrix::default().run(root),
            4 => Array::default().run(root),
            5 => {
                if let Err(e) = Fibonacci::default().run(root) {
                    eprintln!("{}", format!("Error: {e:#}").warning());
                }
                Grid::default().run(root)
            }
            6 => Students::default().run(root),
            other => anyhow::bail!("no exercise numbered {other}"),
        }
    }
}
