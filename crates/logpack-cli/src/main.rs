//! Logpack - how many logs fit on the truck
//!
//! A CLI tool that reads a log length and reports how many logs of that
//! length the truck can carry within its payload capacity.

mod cli;
mod commands;
mod logging;
mod output;
mod style;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
