//! Neighbor table entry decoding.

use std::net::IpAddr;

use crate::netlink::attr::{self, AttrIter, split_header};
use crate::netlink::error::Result;
use crate::netlink::family;
use crate::netlink::types::neigh::NdMsg;

/// Attribute IDs for NDA_* constants.
mod attr_ids {
    pub const NDA_DST: u16 = 1;
    pub const NDA_LLADDR: u16 = 2;
}

/// Neighbor table entry reported by a neighbor message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NeighborInfo {
    /// Interface index.
    pub ifindex: u32,
    /// Neighbor state (NUD_*).
    pub state: u16,
    /// Link-layer address (NDA_LLADDR). Absent while resolution is
    /// incomplete or failed.
    pub mac: Option<[u8; 6]>,
    /// Protocol address (NDA_DST).
    pub addr: Option<IpAddr>,
}

/// Decode a raw neighbor message.
///
/// Both the link-layer address and the protocol address are optional; an
/// entry with neither is still a valid neighbor record. The MAC copy is
/// lenient about payloads longer than six bytes (kernel padding quirk)
/// but refuses shorter ones.
pub fn neigh_from_rtm(msg: &[u8]) -> Result<NeighborInfo> {
    let (ndm, rest) = split_header::<NdMsg>(msg)?;

    let mut info = NeighborInfo {
        ifindex: ndm.ndm_ifindex as u32,
        state: ndm.ndm_state,
        mac: None,
        addr: None,
    };
    for item in AttrIter::new(rest) {
        let (kind, data) = item?;
        match kind {
            attr_ids::NDA_LLADDR => info.mac = Some(attr::get::mac(data)?),
            attr_ids::NDA_DST => {
                info.addr = Some(family::addr_from_payload(ndm.ndm_family, data)?)
            }
            _ => {} // Ignore unknown attributes
        }
    }
    Ok(info)
}
