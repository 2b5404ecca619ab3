//! shelve - a recursive file organizer
//!
//! shelve provides:
//! - Recursive scanning of a source tree with fail-fast permission checks
//! - Grouping of files by literal extension (case preserved)
//! - Collision-safe copying into per-extension destination folders
//! - Text or jsonl output, one observable event per copied file

use clap::Parser;

mod cli;
mod core;
mod organize;

fn main() {
    let cli = cli::Cli::parse();
    if let Err(err) = cli::run(cli) {
        // exactly one Error line per failed run
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
