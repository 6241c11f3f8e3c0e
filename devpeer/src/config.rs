//! Development peer configuration.

use ledger_shim::StubConfig;

/// Configuration for a `DevPeer` process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerConfig {
    /// Limits enforced by the in-memory state stub.
    pub stub: StubConfig,
    /// Default `tracing` filter directive; `RUST_LOG` takes precedence.
    pub log_filter: String,
    /// Emit logs as JSON objects instead of plain text.
    pub json_logs: bool,
}

impl Default for PeerConfig {
    fn default() -> Self {
        Self {
            stub: StubConfig::default(),
            log_filter: "info".to_string(),
            json_logs: false,
        }
    }
}
