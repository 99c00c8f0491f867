//! crud-pack CLI tool

use anyhow::Result;
use clap::Parser;
use crud_pack::observability::{self, ObservabilityConfig};
use crud_pack_cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    observability::init(&ObservabilityConfig::new(cli.verbose));

    cli.run()
}
