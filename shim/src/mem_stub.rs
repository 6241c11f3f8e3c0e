//! In-memory state stub.
//!
//! `MemStub` implements `ChaincodeStub` over a `BTreeMap` so that entries
//! come back in a deterministic key order. It backs unit tests and the
//! development peer, where no real ledger is available.

use std::collections::BTreeMap;

use crate::config::StubConfig;
use crate::error::StubError;
use crate::stub::ChaincodeStub;

/// In-memory state stub backed by `BTreeMap`.
#[derive(Debug, Clone, Default)]
pub struct MemStub {
    data: BTreeMap<String, Vec<u8>>,
    config: StubConfig,
}

impl MemStub {
    /// Create a new empty stub with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stub with the given limits.
    pub fn with_config(config: StubConfig) -> Self {
        Self {
            data: BTreeMap::new(),
            config,
        }
    }

    /// Create a stub pre-populated with data. Limits are not checked
    /// for the seeded entries.
    pub fn with_data(data: BTreeMap<String, Vec<u8>>) -> Self {
        Self {
            data,
            config: StubConfig::default(),
        }
    }

    /// Insert a key-value pair directly, bypassing limit checks.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.data.insert(key.into(), value.into());
    }

    /// Returns the number of entries in the stub.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the stub holds no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over all entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.data.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// The limits this stub enforces.
    pub fn config(&self) -> &StubConfig {
        &self.config
    }

    fn check_put(&self, key: &str, value: &[u8]) -> Result<(), StubError> {
        if key.is_empty() {
            return Err(StubError::EmptyKey);
        }
        if key.len() > self.config.max_key_len {
            return Err(StubError::KeyTooLarge {
                len: key.len(),
                max: self.config.max_key_len,
            });
        }
        if value.len() > self.config.max_value_len {
            return Err(StubError::ValueTooLarge {
                len: value.len(),
                max: self.config.max_value_len,
            });
        }
        Ok(())
    }
}

impl ChaincodeStub for MemStub {
    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StubError> {
        self.check_put(key, value)?;
        tracing::trace!(key, len = value.len(), "put_state");
        self.data.insert(key.to_owned(), value.to_vec());
        Ok(())
    }

    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StubError> {
        let value = self.data.get(key).cloned();
        tracing::trace!(key, found = value.is_some(), "get_state");
        Ok(value)
    }
}
