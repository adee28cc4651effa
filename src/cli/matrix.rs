use std::{io, path::Path};

use clap::Parser;
use labs::{exercises::matrix, Tee};
use tracing::instrument;

#[derive(Debug, Parser, Default)]
#[command(about = "Combine two 4x3 matrices element by element")]
pub struct Matrix {}

impl Matrix {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let (a, b) = matrix::read_pair(&root.join(matrix::INPUT_FILE))?;

        let (path, file) = super::create_output(root, matrix::OUTPUT_FILE)?;
        let mut out = Tee::new().with(io::stdout()).with(file);
        matrix::report(&mut out, &a, &b)?;

        super::saved(&path);
        Ok(())
    }
}
