//! iflist core library
//!
//! This crate provides the types and the ioctl-based probe layer used by the
//! `iflist` command-line tool to enumerate network interfaces that have an
//! IPv4 address bound to them. All unsafe FFI is confined to [`probe`].
//!
//! Linux only: the probe layer is built on the `SIOCGIFCONF` and
//! `SIOCGIFADDR` netdevice ioctls.

pub mod error;
pub mod iface;
pub mod probe;

// Re-export commonly used types
pub use error::{Error, Result};
pub use iface::Interface;
pub use probe::{ControlSocket, MAX_INTERFACES};
