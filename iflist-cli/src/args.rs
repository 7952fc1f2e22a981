//! CLI argument parsing
//!
//! The tool takes no operational arguments; the clap surface exists so that
//! `--help` and `--version` behave like every other tool.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "iflist")]
#[command(
    version,
    about = "Print the name and IPv4 address of each configured network interface",
    long_about = None
)]
pub struct Cli {}
