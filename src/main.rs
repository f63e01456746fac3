//! meterdoc CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the selected
//! operation over a directory of images, and exit with appropriate status.
//! For programmatic use, prefer the library API (`meterdoc::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
