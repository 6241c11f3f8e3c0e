//! Development peer: deployment bookkeeping and staged execution.
//!
//! `DevPeer` owns the committed state and one chaincode. Each deploy or
//! invoke runs against a clone of the committed `MemStub`; the clone
//! replaces committed state only when the chaincode returns success, so a
//! failed transaction never leaves partial writes behind. Queries read
//! committed state through a shared reference.

use ledger_shim::{Chaincode, MemStub};

use crate::config::PeerConfig;
use crate::rpc::{self, RpcId, RpcMethod, RpcRequest, RpcResponse};

/// Errors raised by the development peer.
#[derive(Debug, thiserror::Error)]
pub enum PeerError {
    /// No deployment is registered under this name.
    #[error("chaincode {0} is not deployed")]
    ChaincodeNotFound(String),

    /// Deploy request without `chaincodeID.path`.
    #[error("deploy requires chaincodeID.path")]
    MissingPath,

    /// Invoke or query request without `chaincodeID.name`.
    #[error("request requires chaincodeID.name")]
    MissingName,

    /// The chaincode rejected the call.
    #[error("{0}")]
    Chaincode(Box<dyn std::error::Error + Send + Sync>),
}

impl PeerError {
    fn chaincode<E: std::error::Error + Send + Sync + 'static>(err: E) -> Self {
        Self::Chaincode(Box::new(err))
    }
}

/// Single-chaincode peer over in-memory state.
pub struct DevPeer<C> {
    chaincode: C,
    state: MemStub,
    deployment: Option<String>,
    tx_seq: u64,
}

impl<C: Chaincode> DevPeer<C> {
    /// Create a peer hosting `chaincode` with empty state.
    pub fn new(chaincode: C, config: &PeerConfig) -> Self {
        Self {
            chaincode,
            state: MemStub::with_config(config.stub),
            deployment: None,
            tx_seq: 0,
        }
    }

    /// Name of the current deployment, if any.
    pub fn deployment(&self) -> Option<&str> {
        self.deployment.as_deref()
    }

    /// Committed state.
    pub fn state(&self) -> &MemStub {
        &self.state
    }

    /// Number of committed invoke transactions.
    pub fn committed_transactions(&self) -> u64 {
        self.tx_seq
    }

    /// Run `Init` and register the deployment. Returns the deployment name.
    pub fn deploy(
        &mut self,
        path: &str,
        function: &str,
        args: &[String],
    ) -> Result<String, PeerError> {
        if path.is_empty() {
            return Err(PeerError::MissingPath);
        }

        let mut staged = self.state.clone();
        self.chaincode
            .init(&mut staged, function, args)
            .map_err(PeerError::chaincode)?;
        self.state = staged;

        let name = deployment_name(path, function, args);
        tracing::info!(path, name = %name, "chaincode deployed");
        self.deployment = Some(name.clone());
        Ok(name)
    }

    /// Run an invoke transaction and commit its writes. Returns the
    /// transaction id.
    pub fn invoke(
        &mut self,
        name: &str,
        function: &str,
        args: &[String],
    ) -> Result<String, PeerError> {
        self.check_deployed(name)?;

        let mut staged = self.state.clone();
        self.chaincode
            .invoke(&mut staged, function, args)
            .map_err(PeerError::chaincode)?;
        self.state = staged;

        let txid = transaction_id(name, self.tx_seq, function, args);
        self.tx_seq += 1;
        tracing::info!(txid = %txid, function, "transaction committed");
        Ok(txid)
    }

    /// Run a read-only query against committed state.
    pub fn query(
        &self,
        name: &str,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, PeerError> {
        self.check_deployed(name)?;
        self.chaincode
            .query(&self.state, function, args)
            .map_err(PeerError::chaincode)
    }

    /// Execute one decoded JSON-RPC request.
    pub fn handle(&mut self, request: RpcRequest) -> RpcResponse {
        let id = request.id.clone();
        if request.jsonrpc != rpc::JSONRPC_VERSION {
            return RpcResponse::error(
                id,
                rpc::INVALID_REQUEST,
                "Invalid request",
                Some(format!("unsupported jsonrpc version {:?}", request.jsonrpc)),
            );
        }
        if let Some(ctx) = &request.params.secure_context {
            tracing::debug!(secure_context = %ctx, "secure context not enforced");
        }

        let method = request.method;
        let ctor = &request.params.ctor_msg;
        let target = &request.params.chaincode_id;
        let outcome = match method {
            RpcMethod::Deploy => {
                let path = target.path.as_deref().unwrap_or_default();
                self.deploy(path, &ctor.function, &ctor.args)
            }
            RpcMethod::Invoke => match target.name.as_deref() {
                Some(name) => self.invoke(name, &ctor.function, &ctor.args),
                None => Err(PeerError::MissingName),
            },
            RpcMethod::Query => match target.name.as_deref() {
                Some(name) => self
                    .query(name, &ctor.function, &ctor.args)
                    .map(|bytes| String::from_utf8_lossy(&bytes).into_owned()),
                None => Err(PeerError::MissingName),
            },
        };

        match outcome {
            Ok(message) => RpcResponse::ok(id, message),
            Err(err) => {
                tracing::warn!(method = ?method, error = %err, "request failed");
                RpcResponse::error(
                    id,
                    method.failure_code(),
                    method.failure_message(),
                    Some(err.to_string()),
                )
            }
        }
    }

    /// Decode and execute one line of JSON.
    ///
    /// Text that is not JSON is a parse error. JSON that does not match the
    /// request shape is an invalid request, answered with its id when one
    /// can be recovered.
    pub fn handle_line(&mut self, line: &str) -> RpcResponse {
        let raw = match serde_json::from_str::<serde_json::Value>(line) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(error = %err, "unparseable request");
                return RpcResponse::error(None, rpc::PARSE_ERROR, "Parse error", Some(err.to_string()));
            }
        };
        let id = RpcId::from_raw(&raw);
        match serde_json::from_value::<RpcRequest>(raw) {
            Ok(request) => self.handle(request),
            Err(err) => {
                tracing::warn!(error = %err, "malformed request");
                RpcResponse::error(id, rpc::INVALID_REQUEST, "Invalid request", Some(err.to_string()))
            }
        }
    }

    fn check_deployed(&self, name: &str) -> Result<(), PeerError> {
        match self.deployment.as_deref() {
            Some(deployed) if deployed == name => Ok(()),
            _ => Err(PeerError::ChaincodeNotFound(name.to_owned())),
        }
    }
}

// ── Identifiers ──

fn hash_call(hasher: &mut blake3::Hasher, function: &str, args: &[String]) {
    hasher.update(&(function.len() as u64).to_le_bytes());
    hasher.update(function.as_bytes());
    for arg in args {
        hasher.update(&(arg.len() as u64).to_le_bytes());
        hasher.update(arg.as_bytes());
    }
}

/// Deployment name: hex BLAKE3 over the path and constructor message.
pub fn deployment_name(path: &str, function: &str, args: &[String]) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&(path.len() as u64).to_le_bytes());
    hasher.update(path.as_bytes());
    hash_call(&mut hasher, function, args);
    hasher.finalize().to_hex().to_string()
}

/// Transaction id in UUID layout (8-4-4-4-12 hex digits).
pub fn transaction_id(name: &str, seq: u64, function: &str, args: &[String]) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(name.as_bytes());
    hasher.update(&seq.to_le_bytes());
    hash_call(&mut hasher, function, args);
    let hex = hasher.finalize().to_hex();
    let hex = hex.as_str();
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}
