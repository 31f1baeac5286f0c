//! rtnetlink message decoding.
//!
//! The layering mirrors the wire format:
//!
//! - [`message`] - `nlmsghdr` framing and iteration over a datagram
//! - [`attr`] - attribute (TLV) records, alignment, scalar extraction
//! - [`family`] - `AF_INET`/`AF_INET6` keyed address interpretation
//! - [`messages`] - the typed decoders for route, address, and neighbor
//!   messages
//! - [`events`] - dispatch of a whole datagram into [`StateEvent`]s
//!
//! Decoders hold no state between calls and are safe to invoke from any
//! number of threads on independent buffers.

pub mod attr;
mod error;
pub mod events;
pub mod family;
pub mod message;
pub mod messages;
pub mod types;

#[cfg(test)]
mod fixtures;

pub use attr::{AttrIter, NlAttr, split_header};
pub use error::{Error, Result};
pub use events::{StateEvent, decode_datagram, decode_msg};
pub use family::addr_from_payload;
pub use message::{MessageIter, NLMSG_HDRLEN, NlMsgHdr, NlMsgType};
pub use messages::{
    AddressInfo, NeighborInfo, PrefixedAddress, RouteGateway, addr_from_rtm, gateway_from_rtm,
    neigh_from_rtm,
};
