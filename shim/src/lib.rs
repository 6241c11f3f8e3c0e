//! `ledger-shim`: the calling convention between a ledger peer and a chaincode.
//!
//! This crate defines both sides of the boundary a chaincode is hosted
//! behind:
//!
//! - `Chaincode` trait: the Init/Invoke/Query entry points the peer calls
//! - `ChaincodeStub` trait: the put/get state capability the peer injects per call
//! - `MemStub`: in-memory `ChaincodeStub` for tests and the development peer
//! - `StubConfig`: key/value size limits enforced by the stub
//! - `StubError`: errors raised by state access
//!
//! The stub is passed explicitly to every entry point; chaincodes never
//! hold on to it between calls.

pub mod error;
pub mod config;
pub mod stub;
pub mod mem_stub;
pub mod chaincode;

// Re-export commonly used types at the crate root.
pub use error::StubError;
pub use config::StubConfig;
pub use stub::ChaincodeStub;
pub use mem_stub::MemStub;
pub use chaincode::{Chaincode, EntryPoint};
