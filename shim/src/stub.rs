//! State accessor capability handed to a chaincode by its peer.
//!
//! Implementations:
//! - `MemStub` (this crate): in-memory BTreeMap for tests and the dev peer
//! - a networked peer connection in production deployments

use crate::error::StubError;

/// Key-value access to the ledger state owned by the peer.
///
/// Uniqueness of keys, durability, ordering and isolation between
/// transactions are the peer's responsibility. A chaincode only sees
/// a flat map from string keys to opaque bytes.
pub trait ChaincodeStub {
    /// Write `value` under `key`, replacing any previous value.
    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StubError>;

    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StubError>;
}
