//! Default-gateway extraction from route messages.

use std::net::IpAddr;

use crate::netlink::attr::{self, AttrIter, split_header};
use crate::netlink::error::Result;
use crate::netlink::family;
use crate::netlink::types::route::{RtMsg, rt_table};

/// Attribute IDs for RTA_* constants.
mod attr_ids {
    pub const RTA_OIF: u16 = 4;
    pub const RTA_GATEWAY: u16 = 5;
}

/// Default gateway reported by a route message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteGateway {
    /// Outgoing interface index (RTA_OIF).
    pub ifindex: u32,
    /// Gateway address (RTA_GATEWAY).
    pub gateway: IpAddr,
}

/// Extract the default gateway from a raw route message.
///
/// Only default routes (`rtm_dst_len == 0`) in the main routing table are
/// of interest; every other route (more specific prefixes, policy
/// tables, families the daemon does not mirror) returns `Ok(None)`.
/// `Ok(None)` is also the result when either RTA_OIF or RTA_GATEWAY is
/// absent: a partial default route carries no gateway info, which is not
/// a decode failure. Attributes may appear in any order and the last
/// occurrence of a repeated attribute wins.
pub fn gateway_from_rtm(msg: &[u8]) -> Result<Option<RouteGateway>> {
    let (rtm, rest) = split_header::<RtMsg>(msg)?;
    if rtm.rtm_table != rt_table::MAIN || rtm.rtm_dst_len != 0 {
        return Ok(None);
    }
    if family::addr_len(rtm.rtm_family).is_err() {
        // Route for a family the daemon does not mirror (MPLS etc).
        return Ok(None);
    }

    let mut ifindex = None;
    let mut gateway = None;
    for item in AttrIter::new(rest) {
        let (kind, data) = item?;
        match kind {
            attr_ids::RTA_OIF => ifindex = Some(attr::get::u32_ne(data)?),
            attr_ids::RTA_GATEWAY => {
                gateway = Some(family::addr_from_payload(rtm.rtm_family, data)?)
            }
            _ => {} // Ignore unknown attributes
        }
    }

    match (ifindex, gateway) {
        (Some(ifindex), Some(gateway)) => Ok(Some(RouteGateway { ifindex, gateway })),
        _ => Ok(None),
    }
}
