//! Chaincode trait: the entry points a peer calls.
//!
//! A peer drives a chaincode through three entry points, each receiving
//! the state stub, a function name and positional string arguments:
//!
//! - `init`: run once when the chaincode is deployed
//! - `invoke`: a state-changing transaction
//! - `query`: a read-only call; receives a shared stub so it cannot write

use std::fmt;

use crate::stub::ChaincodeStub;

/// Which entry point a call arrived through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryPoint {
    Init,
    Invoke,
    Query,
}

impl EntryPoint {
    /// Lowercase name used in logs and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Invoke => "invoke",
            Self::Query => "query",
        }
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contract module hosted by a ledger peer.
///
/// Every call is synchronous and runs to completion before the peer
/// issues the next one. Implementations keep no state between calls
/// other than what they write through the stub.
pub trait Chaincode {
    /// Error returned to the peer as the call's failure result.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Deployment-time initialisation.
    fn init(
        &self,
        stub: &mut dyn ChaincodeStub,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, Self::Error>;

    /// Transaction entry point. Writes made here become part of the ledger
    /// once the peer commits the transaction.
    fn invoke(
        &self,
        stub: &mut dyn ChaincodeStub,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, Self::Error>;

    /// Read-only entry point.
    fn query(
        &self,
        stub: &dyn ChaincodeStub,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_point_display() {
        assert_eq!(EntryPoint::Init.to_string(), "init");
        assert_eq!(EntryPoint::Invoke.to_string(), "invoke");
        assert_eq!(EntryPoint::Query.to_string(), "query");
    }
}
