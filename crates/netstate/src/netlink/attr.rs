//! Netlink attribute (rtattr/nlattr) handling.
//!
//! Attributes are self-describing `(length, type)` records, padded to a
//! 4-byte boundary on the wire. [`AttrIter`] walks them with explicit
//! bounds checks; a buffer that ends mid-record is a decode failure, not
//! a silent stop.

use super::error::{Error, Result};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// Netlink attribute alignment.
pub const NLA_ALIGNTO: usize = 4;

/// Align a length to NLA_ALIGNTO boundary.
#[inline]
pub const fn nla_align(len: usize) -> usize {
    (len + NLA_ALIGNTO - 1) & !(NLA_ALIGNTO - 1)
}

/// Size of the attribute header.
pub const NLA_HDRLEN: usize = 4; // nla_align(size_of::<NlAttr>())

/// Netlink attribute header (mirrors struct nlattr / struct rtattr).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, FromBytes, IntoBytes, Immutable, KnownLayout)]
pub struct NlAttr {
    /// Length including header.
    pub nla_len: u16,
    /// Attribute type.
    pub nla_type: u16,
}

/// Attribute type flags.
pub const NLA_F_NESTED: u16 = 1 << 15;
pub const NLA_F_NET_BYTEORDER: u16 = 1 << 14;
pub const NLA_TYPE_MASK: u16 = !(NLA_F_NESTED | NLA_F_NET_BYTEORDER);

impl NlAttr {
    /// Get the attribute type without flags.
    pub fn kind(&self) -> u16 {
        self.nla_type & NLA_TYPE_MASK
    }

    /// Get the payload length (total length minus header).
    pub fn payload_len(&self) -> usize {
        (self.nla_len as usize).saturating_sub(NLA_HDRLEN)
    }
}

/// Split a fixed-size kernel header off the front of a message payload.
///
/// Returns the header by value together with the bytes that follow it.
pub fn split_header<T: FromBytes>(data: &[u8]) -> Result<(T, &[u8])> {
    T::read_from_prefix(data).map_err(|_| Error::Truncated {
        expected: std::mem::size_of::<T>(),
        actual: data.len(),
    })
}

/// Iterator over netlink attributes in a buffer.
///
/// Yields `(attribute type, payload)` per record. Record lengths below the
/// header size, beyond the remaining buffer, or whose aligned advance
/// overruns the buffer all yield an error item, after which iteration
/// ends. Trailing bytes too short to hold a header are an error too.
pub struct AttrIter<'a> {
    data: &'a [u8],
    failed: bool,
}

impl<'a> AttrIter<'a> {
    /// Create a new attribute iterator.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            failed: false,
        }
    }

    fn fail(&mut self, err: Error) -> Option<Result<(u16, &'a [u8])>> {
        self.failed = true;
        Some(Err(err))
    }
}

impl<'a> Iterator for AttrIter<'a> {
    /// Each item is (attribute type, payload data).
    type Item = Result<(u16, &'a [u8])>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.data.is_empty() {
            return None;
        }

        let (attr, _) = match NlAttr::read_from_prefix(self.data) {
            Ok(v) => v,
            Err(_) => {
                return self.fail(Error::Truncated {
                    expected: NLA_HDRLEN,
                    actual: self.data.len(),
                });
            }
        };

        let len = attr.nla_len as usize;
        if len < NLA_HDRLEN {
            return self.fail(Error::InvalidAttribute(format!(
                "attribute length {} below header size",
                len
            )));
        }
        if len > self.data.len() {
            return self.fail(Error::Truncated {
                expected: len,
                actual: self.data.len(),
            });
        }

        let aligned = nla_align(len);
        if aligned > self.data.len() {
            return self.fail(Error::Truncated {
                expected: aligned,
                actual: self.data.len(),
            });
        }

        let payload = &self.data[NLA_HDRLEN..len];
        self.data = &self.data[aligned..];

        Some(Ok((attr.kind(), payload)))
    }
}

/// Helper functions for extracting typed values from attribute payloads.
///
/// Scalar extractors demand the exact width; the kernel emits these
/// attributes at fixed size and anything else is a malformed record.
/// [`mac`] is the one deliberate exception.
pub mod get {
    use super::*;

    /// Extract a u8 value.
    pub fn u8(data: &[u8]) -> Result<u8> {
        match data {
            [b] => Ok(*b),
            _ => Err(Error::InvalidAttribute(format!(
                "u8 attribute of {} bytes",
                data.len()
            ))),
        }
    }

    /// Extract a u16 value (native endian).
    pub fn u16_ne(data: &[u8]) -> Result<u16> {
        let bytes: [u8; 2] = data.try_into().map_err(|_| {
            Error::InvalidAttribute(format!("u16 attribute of {} bytes", data.len()))
        })?;
        Ok(u16::from_ne_bytes(bytes))
    }

    /// Extract a u32 value (native endian).
    pub fn u32_ne(data: &[u8]) -> Result<u32> {
        let bytes: [u8; 4] = data.try_into().map_err(|_| {
            Error::InvalidAttribute(format!("u32 attribute of {} bytes", data.len()))
        })?;
        Ok(u32::from_ne_bytes(bytes))
    }

    /// Extract a MAC address.
    ///
    /// NDA_LLADDR payloads can arrive padded past the six MAC bytes on
    /// some kernels; the tail is ignored. Shorter payloads are refused.
    pub fn mac(data: &[u8]) -> Result<[u8; 6]> {
        if data.len() < 6 {
            return Err(Error::Truncated {
                expected: 6,
                actual: data.len(),
            });
        }
        Ok(data[..6].try_into().unwrap())
    }
}
