//! CLI entry point for combining independent-set visualizations

use clap::Parser;
use iscompose::io::cli::{Cli, CommandProcessor, exit_status};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = CommandProcessor::new(cli).process();
    ExitCode::from(exit_status(&result, &mut std::io::stderr()))
}
