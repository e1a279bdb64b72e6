//! Headcount - per-category attendance counter for church services
//!
//! A CLI tool that tracks a running tally, saves timestamped records to a
//! history CSV, and generates chart-backed PDF reports.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
