//! `devpeer`: run a chaincode behind a line-oriented JSON-RPC loop.
//!
//! Reads one request per line from `--input` (or stdin) and writes one
//! response per line to stdout. Logs go to stderr.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use hello_chaincode::SimpleChaincode;
use ledger_devpeer::{logging, DevPeer, PeerConfig};

#[derive(Debug, Parser)]
#[command(name = "devpeer", version, about = "Development peer for the key-value chaincode")]
struct Cli {
    /// File of newline-delimited JSON-RPC requests (default: stdin).
    #[arg(long)]
    input: Option<PathBuf>,

    /// Default log filter; RUST_LOG takes precedence.
    #[arg(long)]
    log_filter: Option<String>,

    /// Emit logs as JSON.
    #[arg(long)]
    json_logs: bool,

    /// Maximum state key length in bytes.
    #[arg(long)]
    max_key_len: Option<usize>,

    /// Maximum state value length in bytes.
    #[arg(long)]
    max_value_len: Option<usize>,
}

impl Cli {
    fn into_config(self) -> (PeerConfig, Option<PathBuf>) {
        let mut config = PeerConfig::default();
        if let Some(filter) = self.log_filter {
            config.log_filter = filter;
        }
        config.json_logs = self.json_logs;
        if let Some(max) = self.max_key_len {
            config.stub.max_key_len = max;
        }
        if let Some(max) = self.max_value_len {
            config.stub.max_value_len = max;
        }
        (config, self.input)
    }
}

fn main() -> anyhow::Result<()> {
    let (config, input) = Cli::parse().into_config();
    logging::init(&config.log_filter, config.json_logs);

    let reader: Box<dyn BufRead> = match &input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut peer = DevPeer::new(SimpleChaincode::new(), &config);
    tracing::info!(
        max_key_len = config.stub.max_key_len,
        max_value_len = config.stub.max_value_len,
        "devpeer ready"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in reader.lines() {
        let line = line.context("reading request")?;
        if line.trim().is_empty() {
            continue;
        }
        let response = peer.handle_line(&line);
        serde_json::to_writer(&mut out, &response).context("writing response")?;
        writeln!(out)?;
        out.flush()?;
    }

    tracing::info!(
        transactions = peer.committed_transactions(),
        keys = peer.state().len(),
        "input exhausted, shutting down"
    );
    Ok(())
}
