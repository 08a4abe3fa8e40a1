//! CLI entry point for the module grid edit session

use clap::Parser;
use modulegrid::io::cli::{Cli, EditSession};
use modulegrid::io::logging;

fn main() -> modulegrid::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.quiet);
    let session = EditSession::new(cli);
    session.process()
}
