//! ioctl probe layer
//!
//! Wraps the two netdevice requests the tool needs: `SIOCGIFCONF` to fetch
//! the list of configured interfaces and `SIOCGIFADDR` to fetch one
//! interface's IPv4 address. The kernel fills a caller-supplied `ifreq`
//! array in place; this module owns that buffer arithmetic and exposes only
//! validated records.

use std::io;
use std::mem;
use std::net::Ipv4Addr;
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd};
use std::ptr;

use libc::{ifconf, ifreq, sockaddr, sockaddr_in, AF_INET, SIOCGIFADDR, SIOCGIFCONF, SOCK_STREAM};
use tracing::debug;

use crate::error::{Error, Result};
use crate::iface::Interface;

/// Capacity of the buffer lent to the kernel during enumeration.
///
/// If more interfaces are configured than fit, the kernel fills the first
/// `MAX_INTERFACES` entries and the rest are silently dropped. There is no
/// truncation indicator in the `SIOCGIFCONF` interface itself.
pub const MAX_INTERFACES: usize = 128;

/// A socket used only to issue netdevice ioctls, never for data transfer
///
/// The descriptor is closed when the value is dropped, on every exit path.
pub struct ControlSocket {
    fd: OwnedFd,
}

impl ControlSocket {
    /// Open the control socket.
    ///
    /// The kernel does not care which family or type the socket has for
    /// netdevice ioctls, so an ordinary `AF_INET`/`SOCK_STREAM` socket is
    /// used.
    pub fn open() -> Result<Self> {
        let fd = unsafe { libc::socket(AF_INET, SOCK_STREAM, 0) };
        if fd < 0 {
            return Err(Error::Socket(io::Error::last_os_error()));
        }

        // SAFETY: fd is a freshly opened descriptor that nothing else owns
        let fd = unsafe { OwnedFd::from_raw_fd(fd) };
        Ok(Self { fd })
    }

    /// List the configured interfaces, in kernel-reported order.
    ///
    /// At most [`MAX_INTERFACES`] records are returned; see the constant for
    /// the truncation behavior. On Linux, `SIOCGIFCONF` only reports
    /// interfaces that have an IPv4 address assigned.
    pub fn interfaces(&self) -> Result<Vec<Interface>> {
        // SAFETY: ifreq is plain old data, all-zero bytes are a valid value
        let mut requests: [ifreq; MAX_INTERFACES] = unsafe { mem::zeroed() };
        // SAFETY: same for ifconf
        let mut conf: ifconf = unsafe { mem::zeroed() };
        conf.ifc_len = mem::size_of_val(&requests) as libc::c_int;
        conf.ifc_ifcu.ifcu_req = requests.as_mut_ptr();

        // SAFETY: conf describes a live buffer of ifc_len bytes; the kernel
        // writes at most that much and reports the written length back
        // through ifc_len.
        let rc = unsafe { libc::ioctl(self.fd.as_raw_fd(), SIOCGIFCONF, ptr::addr_of_mut!(conf)) };
        if rc < 0 {
            return Err(Error::Enumerate(io::Error::last_os_error()));
        }

        let count = conf.ifc_len as usize / mem::size_of::<ifreq>();
        debug!(count, "kernel reported configured interfaces");

        Ok(requests[..count]
            .iter()
            .map(|req| Interface::from_raw_name(req.ifr_name))
            .collect())
    }

    /// Look up the IPv4 address bound to `iface`.
    ///
    /// Fails if the interface has no IPv4 address or disappeared after
    /// enumeration.
    pub fn ipv4_addr(&self, iface: &Interface) -> Result<Ipv4Addr> {
        // SAFETY: all-zero bytes are a valid ifreq
        let mut req: ifreq = unsafe { mem::zeroed() };
        req.ifr_name = *iface.raw_name();

        // SAFETY: req is a live, properly named request structure
        let rc = unsafe { libc::ioctl(self.fd.as_raw_fd(), SIOCGIFADDR, ptr::addr_of_mut!(req)) };
        if rc < 0 {
            return Err(Error::Resolve {
                interface: iface.name().to_string(),
                source: io::Error::last_os_error(),
            });
        }

        // SAFETY: on success the kernel stored an AF_INET address in
        // ifru_addr, so reading it as sockaddr_in is valid.
        let addr = unsafe {
            ptr::read(ptr::addr_of!(req.ifr_ifru.ifru_addr) as *const sockaddr as *const sockaddr_in)
        };

        // s_addr is in network byte order; its memory bytes are the octets.
        Ok(Ipv4Addr::from(addr.sin_addr.s_addr.to_ne_bytes()))
    }
}
