//! Dispatch of raw datagrams into decoded state events.
//!
//! The daemon's socket reader hands each received datagram to
//! [`decode_datagram`]; everything below that call is pure. A message
//! that fails to decode is logged and dropped; it never aborts the rest
//! of the datagram and never reaches the state-synchronization layer.

use super::error::Result;
use super::message::{MessageIter, NlMsgType};
use super::messages::{
    AddressInfo, NeighborInfo, RouteGateway, addr_from_rtm, gateway_from_rtm, neigh_from_rtm,
};

/// A decoded kernel state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateEvent {
    /// An address was added or changed.
    NewAddress(AddressInfo),
    /// An address was removed.
    DelAddress(AddressInfo),
    /// A neighbor entry was added or changed.
    NewNeighbor(NeighborInfo),
    /// A neighbor entry was removed.
    DelNeighbor(NeighborInfo),
    /// A default gateway was installed or changed.
    NewGateway(RouteGateway),
    /// A default gateway was removed.
    DelGateway(RouteGateway),
}

impl StateEvent {
    /// Returns the interface index the event applies to.
    pub fn ifindex(&self) -> u32 {
        match self {
            StateEvent::NewAddress(a) | StateEvent::DelAddress(a) => a.ifindex,
            StateEvent::NewNeighbor(n) | StateEvent::DelNeighbor(n) => n.ifindex,
            StateEvent::NewGateway(g) | StateEvent::DelGateway(g) => g.ifindex,
        }
    }
}

/// Decode a single message payload according to its message type.
///
/// Returns `Ok(None)` for message types the daemon does not mirror
/// (links, control messages, unknown types) and for route messages that
/// are not main-table default routes.
pub fn decode_msg(msg_type: u16, payload: &[u8]) -> Result<Option<StateEvent>> {
    match msg_type {
        t if t == NlMsgType::RTM_NEWADDR => {
            Ok(Some(StateEvent::NewAddress(addr_from_rtm(payload)?)))
        }
        t if t == NlMsgType::RTM_DELADDR => {
            Ok(Some(StateEvent::DelAddress(addr_from_rtm(payload)?)))
        }
        t if t == NlMsgType::RTM_NEWNEIGH => {
            Ok(Some(StateEvent::NewNeighbor(neigh_from_rtm(payload)?)))
        }
        t if t == NlMsgType::RTM_DELNEIGH => {
            Ok(Some(StateEvent::DelNeighbor(neigh_from_rtm(payload)?)))
        }
        t if t == NlMsgType::RTM_NEWROUTE => {
            Ok(gateway_from_rtm(payload)?.map(StateEvent::NewGateway))
        }
        t if t == NlMsgType::RTM_DELROUTE => {
            Ok(gateway_from_rtm(payload)?.map(StateEvent::DelGateway))
        }
        _ => Ok(None),
    }
}

/// Decode every message in a datagram.
///
/// Messages that fail to decode are logged and dropped individually; the
/// remaining messages in the datagram are still processed. Iteration
/// stops at NLMSG_DONE, and at a framing error (message boundaries are
/// unrecoverable past that point).
pub fn decode_datagram(data: &[u8]) -> Vec<StateEvent> {
    let mut events = Vec::new();
    for item in MessageIter::new(data) {
        let (header, payload) = match item {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("dropping remainder of datagram: {e}");
                break;
            }
        };
        if header.is_done() {
            break;
        }
        match decode_msg(header.nlmsg_type, payload) {
            Ok(Some(event)) => events.push(event),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(msg_type = header.nlmsg_type, "dropping message: {e}");
            }
        }
    }
    events
}
