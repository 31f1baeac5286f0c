//! Address-family keyed interpretation of address payloads.
//!
//! The family field of a message header decides both the width and the
//! meaning of every address-typed attribute in that message. Decoding is
//! exact-width: a payload that does not match the family's address size
//! is refused rather than truncated or zero-padded.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use super::error::{Error, Result};

/// Address width for a family, or `UnsupportedFamily`.
pub fn addr_len(family: u8) -> Result<usize> {
    match family as i32 {
        libc::AF_INET => Ok(4),
        libc::AF_INET6 => Ok(16),
        _ => Err(Error::UnsupportedFamily { family }),
    }
}

/// Decode an address attribute payload according to the address family.
pub fn addr_from_payload(family: u8, data: &[u8]) -> Result<IpAddr> {
    match family as i32 {
        libc::AF_INET => {
            let octets: [u8; 4] = data.try_into().map_err(|_| Error::FamilyLengthMismatch {
                family,
                expected: 4,
                actual: data.len(),
            })?;
            Ok(IpAddr::V4(Ipv4Addr::from(octets)))
        }
        libc::AF_INET6 => {
            let octets: [u8; 16] = data.try_into().map_err(|_| Error::FamilyLengthMismatch {
                family,
                expected: 16,
                actual: data.len(),
            })?;
            Ok(IpAddr::V6(Ipv6Addr::from(octets)))
        }
        _ => Err(Error::UnsupportedFamily { family }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AF_INET: u8 = libc::AF_INET as u8;
    const AF_INET6: u8 = libc::AF_INET6 as u8;

    #[test]
    fn test_v4() {
        let addr = addr_from_payload(AF_INET, &[10, 0, 0, 1]).unwrap();
        assert_eq!(addr, IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)));
    }

    #[test]
    fn test_v6() {
        let mut octets = [0u8; 16];
        octets[0] = 0xfe;
        octets[1] = 0x80;
        octets[15] = 0x01;
        let addr = addr_from_payload(AF_INET6, &octets).unwrap();
        assert_eq!(addr.to_string(), "fe80::1");
    }

    #[test]
    fn test_width_must_be_exact() {
        assert!(matches!(
            addr_from_payload(AF_INET, &[10, 0, 0, 1, 0]),
            Err(Error::FamilyLengthMismatch {
                expected: 4,
                actual: 5,
                ..
            })
        ));
        assert!(matches!(
            addr_from_payload(AF_INET6, &[0u8; 4]),
            Err(Error::FamilyLengthMismatch {
                expected: 16,
                actual: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_unknown_family() {
        assert!(matches!(
            addr_from_payload(libc::AF_PACKET as u8, &[0u8; 4]),
            Err(Error::UnsupportedFamily { .. })
        ));
        assert!(addr_len(AF_INET).is_ok());
        assert!(addr_len(0).is_err());
    }
}
