//! CLI entry point for batch Markov chain analysis

use clap::Parser;
use ergodic::io::cli::{Cli, FileProcessor};
use ergodic::io::logging;

fn main() -> ergodic::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let mut processor = FileProcessor::new(cli)?;
    processor.process()
}
