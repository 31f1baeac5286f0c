//! Error types for rtnetlink decoding.

/// Result type for decode operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding a kernel message.
///
/// Every variant is fatal to the single decode that produced it; the
/// message-delivery loop logs and discards the offending message and
/// continues with the next one.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A fixed header or declared record length exceeds the remaining bytes.
    #[error("message truncated: expected {expected} bytes, got {actual}")]
    Truncated {
        /// Bytes the record claims to need.
        expected: usize,
        /// Bytes actually remaining.
        actual: usize,
    },

    /// Address family outside AF_INET/AF_INET6 where an address payload
    /// must be interpreted.
    #[error("unsupported address family: {family}")]
    UnsupportedFamily {
        /// The raw family value from the message header.
        family: u8,
    },

    /// Address payload width does not match the family's address size.
    #[error("address of {actual} bytes does not fit family {family} (expected {expected})")]
    FamilyLengthMismatch {
        /// The raw family value from the message header.
        family: u8,
        /// Address width the family requires.
        expected: usize,
        /// Payload width actually present.
        actual: usize,
    },

    /// A mandatory attribute was absent from the message.
    #[error("missing mandatory attribute: {0}")]
    MissingAttribute(&'static str),

    /// Malformed attribute record.
    #[error("invalid attribute: {0}")]
    InvalidAttribute(String),

    /// Malformed message framing.
    #[error("invalid message: {0}")]
    InvalidMessage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::Truncated {
            expected: 12,
            actual: 7,
        };
        assert_eq!(err.to_string(), "message truncated: expected 12 bytes, got 7");

        let err = Error::UnsupportedFamily { family: 3 };
        assert_eq!(err.to_string(), "unsupported address family: 3");

        let err = Error::FamilyLengthMismatch {
            family: 2,
            expected: 4,
            actual: 5,
        };
        assert_eq!(
            err.to_string(),
            "address of 5 bytes does not fit family 2 (expected 4)"
        );

        let err = Error::MissingAttribute("IFA_ADDRESS");
        assert_eq!(err.to_string(), "missing mandatory attribute: IFA_ADDRESS");
    }
}
