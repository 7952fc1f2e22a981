//! Network interface records

use libc::{c_char, IFNAMSIZ};
use std::fmt;

/// A network interface reported by the kernel
///
/// Records are produced by [`ControlSocket::interfaces`] and carry only the
/// interface name. The IPv4 address is looked up separately with
/// [`ControlSocket::ipv4_addr`], which can fail even for a name that was
/// just enumerated (the interface may vanish in between).
///
/// [`ControlSocket::interfaces`]: crate::probe::ControlSocket::interfaces
/// [`ControlSocket::ipv4_addr`]: crate::probe::ControlSocket::ipv4_addr
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    raw_name: [c_char; IFNAMSIZ],
}

impl Interface {
    /// Build a record from the name bytes of a kernel-filled `ifreq`.
    ///
    /// The raw bytes are kept alongside the decoded name so that the
    /// follow-up address lookup hands the kernel back exactly what it
    /// reported.
    pub(crate) fn from_raw_name(raw_name: [c_char; IFNAMSIZ]) -> Self {
        let bytes: Vec<u8> = raw_name
            .iter()
            .take_while(|&&c| c != 0)
            .map(|&c| c as u8)
            .collect();

        Self {
            name: String::from_utf8_lossy(&bytes).into_owned(),
            raw_name,
        }
    }

    /// Interface name (e.g., "eth0", "lo")
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn raw_name(&self) -> &[c_char; IFNAMSIZ] {
        &self.raw_name
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_name_from(name: &str) -> [c_char; IFNAMSIZ] {
        let mut raw = [0 as c_char; IFNAMSIZ];
        for (i, b) in name.as_bytes().iter().enumerate() {
            raw[i] = *b as c_char;
        }
        raw
    }

    #[test]
    fn test_name_decoding_stops_at_nul() {
        let iface = Interface::from_raw_name(raw_name_from("eth0"));
        assert_eq!(iface.name(), "eth0");
    }

    #[test]
    fn test_full_width_name_without_terminator() {
        // IFNAMSIZ includes the NUL, so 15 characters fill the name part
        let name = "abcdefghijklmno";
        assert_eq!(name.len(), IFNAMSIZ - 1);
        let iface = Interface::from_raw_name(raw_name_from(name));
        assert_eq!(iface.name(), name);
    }

    #[test]
    fn test_display_is_the_name() {
        let iface = Interface::from_raw_name(raw_name_from("lo"));
        assert_eq!(iface.to_string(), "lo");
    }
}
