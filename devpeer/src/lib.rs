//! `ledger-devpeer`: a single-process development peer for chaincodes.
//!
//! Hosts one chaincode over an in-memory `MemStub` and exposes it through
//! the JSON-RPC 2.0 deploy/invoke/query envelope that peers accept:
//!
//! - `rpc`: request/response wire types
//! - `peer`: `DevPeer`, deployment bookkeeping and staged commits
//! - `config`: `PeerConfig` with stub limits and logging options
//! - `logging`: `tracing-subscriber` setup for the binary
//!
//! Consensus, ordering and durability are out of scope: committed state
//! lives in memory for the lifetime of the process.

pub mod config;
pub mod logging;
pub mod rpc;
pub mod peer;

pub use config::PeerConfig;
pub use peer::{DevPeer, PeerError};
pub use rpc::{RpcId, RpcRequest, RpcResponse};
