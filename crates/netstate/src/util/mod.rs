//! Shared utilities for netstate.

pub mod ifname;
pub mod mac;

pub use ifname::{ignored_interfaces, parse_interfaces, uboot_env_key};
pub use mac::{format_mac, is_empty, is_multicast, is_unicast, parse_mac};
