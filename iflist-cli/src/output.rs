//! Output rendering
//!
//! One block per interface, line-oriented and human-readable:
//!
//! ```text
//! iface: lo
//! ip: 127.0.0.1
//!
//! ```
//!
//! A block is only written once the address lookup for that interface has
//! succeeded, so a failing interface never leaves a dangling name line.

use std::io::{self, Write};
use std::net::Ipv4Addr;

/// Write one complete interface block to `out`.
pub fn write_block<W: Write>(out: &mut W, name: &str, addr: Ipv4Addr) -> io::Result<()> {
    writeln!(out, "iface: {}", name)?;
    writeln!(out, "ip: {}", addr)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_format() {
        let mut buf = Vec::new();
        write_block(&mut buf, "lo", Ipv4Addr::LOCALHOST).unwrap();
        assert_eq!(buf, b"iface: lo\nip: 127.0.0.1\n\n");
    }

    #[test]
    fn test_blocks_keep_insertion_order() {
        let mut buf = Vec::new();
        write_block(&mut buf, "lo", Ipv4Addr::new(127, 0, 0, 1)).unwrap();
        write_block(&mut buf, "eth0", Ipv4Addr::new(192, 168, 1, 7)).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "iface: lo\nip: 127.0.0.1\n\niface: eth0\nip: 192.168.1.7\n\n"
        );
    }
}
