//! `hello-chaincode`: a minimal key-value ledger chaincode.
//!
//! Three operations are exposed through the peer calling convention:
//!
//! | entry point | function | args | effect |
//! |---|---|---|---|
//! | init / invoke | `init` | `[value]` | writes `value` under `hello_world` |
//! | invoke | `write` | `[key, value]` | writes `value` under `key` |
//! | query | `read` | `[key]` | returns the bytes stored under `key` |
//!
//! Function names are decoded into [`InvokeFunction`] / [`QueryFunction`]
//! once, at the boundary. Every call performs at most one state access.

pub mod error;
pub mod function;
pub mod simple;

pub use error::ChaincodeError;
pub use function::{InvokeFunction, QueryFunction};
pub use simple::{SimpleChaincode, HELLO_WORLD_KEY};
