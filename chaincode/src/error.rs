//! Chaincode error types.

use ledger_shim::{EntryPoint, StubError};

/// Error returned by `SimpleChaincode` entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChaincodeError {
    /// Argument list has the wrong length for the function.
    #[error("Incorrect number of arguments. Expecting {expected}, got {got}")]
    InvalidArgumentCount { expected: usize, got: usize },

    /// Function name is not routed by this entry point.
    #[error("Received unknown function {entry}: {function}")]
    UnknownFunction { entry: EntryPoint, function: String },

    /// Reading `key` failed or found nothing.
    #[error("{}", state_retrieval_message(.key))]
    StateRetrieval { key: String },

    /// A state write failed.
    #[error(transparent)]
    Store(#[from] StubError),
}

impl ChaincodeError {
    /// Check that `args` has exactly `expected` entries.
    pub fn check_arity(args: &[String], expected: usize) -> Result<(), Self> {
        if args.len() != expected {
            return Err(Self::InvalidArgumentCount {
                expected,
                got: args.len(),
            });
        }
        Ok(())
    }
}

/// JSON body reported to clients when a read fails.
fn state_retrieval_message(key: &str) -> String {
    serde_json::json!({ "Error": format!("Failed to get state for {key}") }).to_string()
}
