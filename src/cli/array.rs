use std::{io, path::Path};

use clap::Parser;
use labs::{
    exercises::{array, read_values, ExerciseError},
    StdConsole, Tee,
};
use tracing::{debug, instrument};

#[derive(Debug, Parser, Default)]
#[command(about = "Sort integers from the input file and search them for a key")]
pub struct Array {}

impl Array {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let input = root.join(array::INPUT_FILE);
        let values = read_values::<i64>(&input)?;
        if values.is_empty() {
            return Err(ExerciseError::Empty(input).into());
        }

        let mut console = StdConsole::stdio();
        let n: i64 = console.prompt(
            &format!("File has {} numbers. Enter n to use: ", values.len()),
            "n",
        )?;
        let n = usize::try_from(n)
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| anyhow::anyhow!("invalid n: must be greater than 0"))?
            .min(values.len());
        debug!(n, available = values.len(), "using prefix of input values");
        let key: i64 = console.prompt("Search key: ", "search key")?;

        let (path, file) = super::create_output(root, array::OUTPUT_FILE)?;
        let mut out = Tee::new().with(io::stdout()).with(file);
        array::report(&mut out, &values[..n], key)?;

        super::saved(&path);
        Ok(())
    }
}
