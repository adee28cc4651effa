use std::path::Path;

use clap::Parser;
use labs::{Config, Directory, Reporter, Session, StdConsole};
use tracing::{info, instrument};

#[derive(Debug, Parser, Default)]
#[command(about = "Search and extend the student directory from a menu")]
pub struct Students {}

impl Students {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let config = Config::load_or_default(root);
        let directory = Directory::open(config.database_path(root));
        info!(
            records = directory.len(),
            path = %directory.path().display(),
            "Loaded student directory"
        );

        let mut session = Session::new(directory, Reporter::new(config.report_path(root)));
        session.run(&mut StdConsole::stdio())?;
        Ok(())
    }
}
