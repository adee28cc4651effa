use std::{io, path::Path};

use clap::Parser;
use labs::{exercises::arithmetic, StdConsole, Tee};
use tracing::instrument;

#[derive(Debug, Parser, Default)]
#[command(about = "Apply arithmetic and postfix operators to two numbers")]
pub struct Arithmetic {
    /// Value A (prompted when omitted)
    #[arg(allow_negative_numbers = true)]
    a: Option<f64>,

    /// Value B (prompted when omitted)
    #[arg(allow_negative_numbers = true)]
    b: Option<f64>,
}

impl Arithmetic {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let mut console = StdConsole::stdio();
        let a = match self.a {
            Some(a) => a,
            None => console.prompt("Enter value A: ", "A")?,
        };
        let b = match self.b {
            Some(b) => b,
            None => console.prompt("Enter value B: ", "B")?,
        };

        let (path, file) = super::create_output(root, arithmetic::OUTPUT_FILE)?;
        let mut out = Tee::new().with(io::stdout()).with(file);
        arithmetic::report(&mut out, a, b)?;

        super::saved(&path);
        Ok(())
    }
}
