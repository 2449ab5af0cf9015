//! # build-deps CLI
//!
//! This is the binary entry point for the `build-deps` command-line tool.
//!
//! Its responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging.
//! - Loading, overlaying and saving the persisted settings.
//! - Handing off to the build driver in the `build_deps` library.

mod cli;

use anyhow::Result;
use clap::Parser;

use build_deps::options::Options;

fn main() -> Result<()> {
    let no_arguments = std::env::args_os().len() <= 1;
    let options = Options::parse();
    cli::execute(options, no_arguments)
}
