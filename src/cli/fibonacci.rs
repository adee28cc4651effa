use std::{io, path::Path};

use clap::Parser;
use labs::{
    exercises::fibonacci::{self, FibonacciCache},
    StdConsole, Tee,
};
use tracing::instrument;

#[derive(Debug, Parser, Default)]
#[command(about = "List Fibonacci numbers F(0) to F(n)")]
pub struct Fibonacci {
    /// The last index, 0 to 100 (prompted when omitted)
    n: Option<u32>,
}

impl Fibonacci {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let n = match self.n {
            Some(n) => n,
            None => {
                let n: i64 = StdConsole::stdio()
                    .prompt("\n=== FIBONACCI ===\nEnter n (0-100): ", "n")?;
                u32::try_from(n).map_err(|_| anyhow::anyhow!("n cannot be negative"))?
            }
        };
        if n > fibonacci::MAX_INDEX {
            return Err(fibonacci::IndexTooLarge(n).into());
        }

        let mut cache = FibonacciCache::new();
        let (path, file) = super::create_output(root, fibonacci::OUTPUT_FILE)?;
        let mut out = Tee::new().with(io::stdout()).with(file);
        fibonacci::report(&mut out, &mut cache, n)?;

        super::saved(&path);
        Ok(())
    }
}
