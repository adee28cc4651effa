use std::{io, path::Path};

use clap::Parser;
use labs::{
    exercises::loops::{self, Progression},
    StdConsole, Tee,
};
use tracing::instrument;

#[derive(Debug, Parser, Default)]
#[command(about = "Generate an arithmetic progression with for, while and do-while loops")]
pub struct Loops {}

impl Loops {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let first = loops::read_first_term(&root.join(loops::INPUT_FILE))?;

        let mut console = StdConsole::stdio();
        let n: i64 = console.prompt("Enter n (number of terms): ", "n")?;
        let difference: f64 = console.prompt("Enter d (common difference): ", "d")?;
        let n = u32::try_from(n).map_err(|_| anyhow::anyhow!("'n' cannot be negative"))?;

        let progression = Progression { first, difference };
        let (path, file) = super::create_output(root, loops::OUTPUT_FILE)?;
        let mut out = Tee::new().with(io::stdout()).with(file);
        loops::report(&mut out, progression, n)?;

        super::saved(&path);
        Ok(())
    }
}
