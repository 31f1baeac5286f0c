//! Interface-name policy helpers.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Environment variable listing interfaces the daemon must leave alone.
pub const IGNORED_INTERFACES_ENV: &str = "IGNORED_INTERFACES";

/// Parse a comma-separated interface list.
///
/// Entries are trimmed of surrounding whitespace; empty entries are
/// skipped.
pub fn parse_interfaces(list: &str) -> HashSet<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Interfaces the daemon must not manage.
///
/// Read once from `IGNORED_INTERFACES` and cached for the life of the
/// process.
pub fn ignored_interfaces() -> &'static HashSet<String> {
    static IGNORED: OnceLock<HashSet<String>> = OnceLock::new();
    IGNORED.get_or_init(|| {
        parse_interfaces(&std::env::var(IGNORED_INTERFACES_ENV).unwrap_or_default())
    })
}

/// U-Boot environment key holding the MAC address for an interface.
///
/// `eth0` maps to `ethaddr`, `ethN` to `ethNaddr`. Names that are not
/// `eth` followed by a decimal index have no key.
pub fn uboot_env_key(intf: &str) -> Option<String> {
    let idx = intf.strip_prefix("eth")?;
    if idx.is_empty() || !idx.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let idx: u32 = idx.parse().ok()?;
    if idx == 0 {
        Some("ethaddr".to_string())
    } else {
        Some(format!("eth{}addr", idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_interfaces() {
        let set = parse_interfaces(" eth0, ,eth1 ,, usb0");
        assert_eq!(set.len(), 3);
        assert!(set.contains("eth0"));
        assert!(set.contains("eth1"));
        assert!(set.contains("usb0"));

        assert!(parse_interfaces("").is_empty());
        assert!(parse_interfaces(" , ,").is_empty());
    }

    #[test]
    fn test_uboot_env_key() {
        assert_eq!(uboot_env_key("eth0").as_deref(), Some("ethaddr"));
        assert_eq!(uboot_env_key("eth1").as_deref(), Some("eth1addr"));
        assert_eq!(uboot_env_key("eth12").as_deref(), Some("eth12addr"));

        assert_eq!(uboot_env_key("wlan0"), None);
        assert_eq!(uboot_env_key("eth"), None);
        assert_eq!(uboot_env_key("ethx"), None);
        assert_eq!(uboot_env_key("eth-1"), None);
    }
}
