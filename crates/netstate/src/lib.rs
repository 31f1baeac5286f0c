//! rtnetlink decoding for BMC network-state daemons.
//!
//! This crate translates raw rtnetlink messages (routes, addresses, and
//! neighbor entries as delivered by the kernel) into strongly-typed
//! records a state-mirroring daemon can apply. It deliberately stops at
//! the decode boundary: no sockets, no request encoding, no event loop.
//! The surrounding daemon reads datagrams and hands each one to
//! [`netlink::decode_datagram`] or to the per-message entry points.
//!
//! # Example
//!
//! ```ignore
//! use netstate::netlink::{StateEvent, decode_datagram};
//!
//! // `buf` is one datagram read from an NETLINK_ROUTE socket.
//! for event in decode_datagram(&buf) {
//!     match event {
//!         StateEvent::NewAddress(addr) => apply_address(addr),
//!         StateEvent::NewGateway(gw) => apply_gateway(gw),
//!         _ => {}
//!     }
//! }
//! ```
//!
//! Every decode is a pure function of its input buffer; malformed messages
//! fail individually and never poison the rest of a datagram.

// Core modules (always available)
pub mod netlink;
pub mod util;

// Re-export common types at crate root for convenience
pub use netlink::{Error, Result};
