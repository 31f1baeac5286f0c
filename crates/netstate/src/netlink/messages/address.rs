//! Interface address decoding.

use std::fmt;
use std::net::IpAddr;

use crate::netlink::attr::{self, AttrIter, split_header};
use crate::netlink::error::{Error, Result};
use crate::netlink::family;
use crate::netlink::types::addr::IfAddrMsg;

/// Attribute IDs for IFA_* constants.
mod attr_ids {
    pub const IFA_ADDRESS: u16 = 1;
    pub const IFA_FLAGS: u16 = 8;
}

/// An address together with its prefix length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrefixedAddress {
    /// The interface address.
    pub addr: IpAddr,
    /// Prefix length in bits.
    pub prefix_len: u8,
}

impl fmt::Display for PrefixedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix_len)
    }
}

/// Interface address reported by an address message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddressInfo {
    /// Interface index.
    pub ifindex: u32,
    /// Address flags. Seeded from the 8-bit header field, replaced by the
    /// 32-bit IFA_FLAGS attribute when present.
    pub flags: u32,
    /// Address scope (RT_SCOPE_*).
    pub scope: u8,
    /// The address and prefix length.
    pub ifaddr: PrefixedAddress,
}

/// Decode a raw address message.
///
/// IFA_ADDRESS is mandatory: the daemon cannot represent an address entry
/// without an address, so its absence is a decode failure rather than a
/// partial result. IFA_FLAGS, when present, is authoritative over the
/// narrower header field; several flag bits do not fit in eight bits.
pub fn addr_from_rtm(msg: &[u8]) -> Result<AddressInfo> {
    let (ifa, rest) = split_header::<IfAddrMsg>(msg)?;

    let mut flags = u32::from(ifa.ifa_flags);
    let mut addr = None;
    for item in AttrIter::new(rest) {
        let (kind, data) = item?;
        match kind {
            attr_ids::IFA_ADDRESS => {
                addr = Some(family::addr_from_payload(ifa.ifa_family, data)?)
            }
            attr_ids::IFA_FLAGS => flags = attr::get::u32_ne(data)?,
            _ => {} // Ignore unknown attributes
        }
    }

    let addr = addr.ok_or(Error::MissingAttribute("IFA_ADDRESS"))?;
    Ok(AddressInfo {
        ifindex: ifa.ifa_index,
        flags,
        scope: ifa.ifa_scope,
        ifaddr: PrefixedAddress {
            addr,
            prefix_len: ifa.ifa_prefixlen,
        },
    })
}
