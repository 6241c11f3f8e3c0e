//! Shared helpers for dev peer integration tests.

#![allow(dead_code)]

use hello_chaincode::SimpleChaincode;
use ledger_devpeer::{DevPeer, PeerConfig, RpcResponse};
use serde_json::{json, Value};

pub const CHAINCODE_PATH: &str = "github.com/example/learn-chaincode/finished";

pub fn new_peer() -> DevPeer<SimpleChaincode> {
    DevPeer::new(SimpleChaincode::new(), &PeerConfig::default())
}

/// Build one request line in the peer's JSON-RPC envelope.
pub fn request(method: &str, chaincode_id: Value, function: &str, args: &[&str], id: u64) -> String {
    json!({
        "jsonrpc": "2.0",
        "method": method,
        "params": {
            "type": 1,
            "chaincodeID": chaincode_id,
            "ctorMsg": { "function": function, "args": args },
            "secureContext": "admin"
        },
        "id": id
    })
    .to_string()
}

pub fn deploy_line(args: &[&str], id: u64) -> String {
    request("deploy", json!({ "path": CHAINCODE_PATH }), "init", args, id)
}

pub fn invoke_line(name: &str, function: &str, args: &[&str], id: u64) -> String {
    request("invoke", json!({ "name": name }), function, args, id)
}

pub fn query_line(name: &str, function: &str, args: &[&str], id: u64) -> String {
    request("query", json!({ "name": name }), function, args, id)
}

/// Message of a successful response; panics on an error response.
pub fn message(resp: &RpcResponse) -> &str {
    let result = resp
        .result
        .as_ref()
        .unwrap_or_else(|| panic!("expected success, got {:?}", resp.error));
    assert_eq!(result.status, "OK");
    &result.message
}

/// Code of an error response; panics on a successful response.
pub fn error_code(resp: &RpcResponse) -> i64 {
    resp.error
        .as_ref()
        .unwrap_or_else(|| panic!("expected error, got {:?}", resp.result))
        .code
}
