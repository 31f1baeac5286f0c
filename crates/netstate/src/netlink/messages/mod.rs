//! Typed decoders for the rtnetlink messages the daemon mirrors.
//!
//! Each entry point takes one raw kernel message (the bytes after the
//! `nlmsghdr`) and produces a value object. Nothing here owns state; a
//! decoded record is handed to the state-synchronization layer and
//! dropped.

pub mod address;
pub mod neighbor;
pub mod route;

pub use address::{AddressInfo, PrefixedAddress, addr_from_rtm};
pub use neighbor::{NeighborInfo, neigh_from_rtm};
pub use route::{RouteGateway, gateway_from_rtm};
