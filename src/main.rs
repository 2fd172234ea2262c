//! CLI entry point for the triangle-folding pattern generator

use clap::Parser;
use trifold::io::cli::{Cli, PuzzleRunner};

fn main() -> trifold::Result<()> {
    let cli = Cli::parse();
    let runner = PuzzleRunner::new(cli);
    runner.process()
}
