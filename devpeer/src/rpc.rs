//! JSON-RPC 2.0 envelope for deploy, invoke and query.
//!
//! Request shape:
//!
//! ```json
//! {
//!   "jsonrpc": "2.0",
//!   "method": "query",
//!   "params": {
//!     "type": 1,
//!     "chaincodeID": { "name": "<deployment name>" },
//!     "ctorMsg": { "function": "read", "args": ["hello_world"] },
//!     "secureContext": "admin"
//!   },
//!   "id": 2
//! }
//! ```
//!
//! `id` may be a number or a string and is echoed back unchanged.
//! Successful calls answer with `{"status": "OK", "message": ...}` in
//! `result`; failures carry a JSON-RPC `error` object instead.

use serde::{Deserialize, Serialize};

/// Protocol version string carried by every message.
pub const JSONRPC_VERSION: &str = "2.0";

/// Status string of a successful result.
pub const STATUS_OK: &str = "OK";

// ── Error Codes ──

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const DEPLOYMENT_FAILURE: i64 = -32001;
pub const INVOKE_FAILURE: i64 = -32002;
pub const QUERY_FAILURE: i64 = -32003;

// ── Requests ──

/// Request id: JSON-RPC 2.0 allows numbers and strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(u64),
    Str(String),
}

impl RpcId {
    /// Pull a usable id out of an otherwise malformed request object.
    pub fn from_raw(value: &serde_json::Value) -> Option<Self> {
        value
            .get("id")
            .and_then(|id| serde_json::from_value(id.clone()).ok())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RpcMethod {
    Deploy,
    Invoke,
    Query,
}

impl RpcMethod {
    /// Error code reported when this method fails inside the peer.
    pub fn failure_code(self) -> i64 {
        match self {
            Self::Deploy => DEPLOYMENT_FAILURE,
            Self::Invoke => INVOKE_FAILURE,
            Self::Query => QUERY_FAILURE,
        }
    }

    /// Error message reported when this method fails inside the peer.
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Deploy => "Deployment failure",
            Self::Invoke => "Invocation failure",
            Self::Query => "Query failure",
        }
    }
}

/// Identifies the target chaincode: `path` on deploy, `name` afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaincodeId {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Function name and positional arguments for the chaincode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtorMsg {
    #[serde(default)]
    pub function: String,
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcParams {
    /// Chaincode language tag. Only carried through; the dev peer hosts
    /// a native chaincode regardless.
    #[serde(rename = "type", default)]
    pub kind: u32,
    #[serde(rename = "chaincodeID")]
    pub chaincode_id: ChaincodeId,
    #[serde(rename = "ctorMsg")]
    pub ctor_msg: CtorMsg,
    #[serde(rename = "secureContext", default, skip_serializing_if = "Option::is_none")]
    pub secure_context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: RpcMethod,
    pub params: RpcParams,
    #[serde(default)]
    pub id: Option<RpcId>,
}

// ── Responses ──

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcResult {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcResponse {
    pub jsonrpc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<RpcResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
    pub id: Option<RpcId>,
}

impl RpcResponse {
    /// Successful response carrying `message`.
    pub fn ok(id: Option<RpcId>, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: Some(RpcResult {
                status: STATUS_OK.to_string(),
                message: message.into(),
            }),
            error: None,
            id,
        }
    }

    /// Error response; `data` holds the underlying failure text.
    pub fn error(id: Option<RpcId>, code: i64, message: &str, data: Option<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: None,
            error: Some(RpcError {
                code,
                message: message.to_string(),
                data,
            }),
            id,
        }
    }
}
