use std::{io, path::Path};

use clap::Parser;
use labs::{
    exercises::grid::{self, Extreme, Operation, OperationKind, Pair},
    StdConsole, Tee,
};
use tracing::instrument;

#[derive(Debug, Parser, Default)]
#[command(about = "Apply up to three chosen operations to two 2x5 matrices")]
pub struct Grid {}

impl Grid {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let pair = Pair::read(&root.join(grid::INPUT_FILE))?;

        let (path, file) = super::create_output(root, grid::OUTPUT_FILE)?;
        let mut out = Tee::new().with(io::stdout()).with(file);
        pair.write_header(&mut out)?;

        let mut console = StdConsole::stdio();
        for number in 1..=grid::MAX_OPERATIONS {
            let prompt = format!(
                "\nOperation {number}/{} (+, -, *, /, m for min/max): ",
                grid::MAX_OPERATIONS
            );
            let operation = match console.prompt_line(&prompt)?.parse::<OperationKind>()? {
                OperationKind::Arithmetic(operator) => Operation::Arithmetic(operator),
                OperationKind::Extreme => {
                    let selector: i64 = console.prompt(
                        "Select (1:max A, 2:min A, 3:max B, 4:min B): ",
                        "selection",
                    )?;
                    let extreme = Extreme::from_selector(selector)
                        .ok_or_else(|| anyhow::anyhow!("Invalid choice: must be 1-4"))?;
                    Operation::Extreme(extreme)
                }
            };
            pair.write_operation(&mut out, number, operation)?;
        }
        Pair::write_footer(&mut out)?;

        super::saved(&path);
        Ok(())
    }
}
