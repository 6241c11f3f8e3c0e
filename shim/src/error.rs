//! Errors raised by the peer's state stub.
//!
//! A chaincode treats these as opaque: write failures are passed back to
//! the peer unchanged, read failures are folded into the chaincode's own
//! retrieval error.

/// Error returned by `ChaincodeStub` methods.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StubError {
    /// Keys must contain at least one byte.
    #[error("key must not be an empty string")]
    EmptyKey,

    /// Key exceeds the stub's `max_key_len`.
    #[error("key is {len} bytes, limit is {max}")]
    KeyTooLarge { len: usize, max: usize },

    /// Value exceeds the stub's `max_value_len`.
    #[error("value is {len} bytes, limit is {max}")]
    ValueTooLarge { len: usize, max: usize },

    /// The backing store failed. Carries the backend's own message.
    #[error("state backend failure: {0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(StubError::EmptyKey.to_string(), "key must not be an empty string");

        let err = StubError::KeyTooLarge { len: 300, max: 256 };
        assert_eq!(err.to_string(), "key is 300 bytes, limit is 256");

        let err = StubError::Backend("disk full".into());
        assert!(err.to_string().contains("disk full"));
    }
}
