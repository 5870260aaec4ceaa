//! CLI entry point for the photomosaic generator

use clap::Parser;
use photomosaic::io::cli::Cli;
use photomosaic::io::logging::init_logging;

fn main() -> photomosaic::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_filter());
    cli.run().map(|_| ())
}
