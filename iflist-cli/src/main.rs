//! iflist: one-shot lister for IPv4-configured network interfaces
//!
//! Opens a control socket, asks the kernel for the configured interface
//! list, looks up each interface's IPv4 address, prints one block per
//! interface, and exits. The first failure aborts the run; interfaces
//! already printed stay printed.

mod args;
mod output;

use std::io::{self, Write};
use std::process;

use clap::Parser;
use tracing::Level;

use iflist_core::{ControlSocket, Result};

use crate::args::Cli;

fn run() -> Result<()> {
    let sock = ControlSocket::open()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for iface in sock.interfaces()? {
        let addr = sock.ipv4_addr(&iface)?;
        output::write_block(&mut out, iface.name(), addr)?;
    }
    out.flush()?;

    Ok(())
}

fn main() {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("iflist: {}", err);
        process::exit(err.exit_code());
    }
}
