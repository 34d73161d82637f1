//! CLI entry point for the crossword-style word placement tool

use clap::Parser;
use wordweave::io::cli::{Cli, FileProcessor};

fn main() -> wordweave::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
