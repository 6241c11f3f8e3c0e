//! Shared test helpers for chaincode integration tests.
//!
//! Provides argument builders and two instrumented stubs: one that counts
//! every state access, and one whose backend always fails.

#![allow(dead_code)]

use std::cell::Cell;

use ledger_shim::{ChaincodeStub, MemStub, StubError};

/// Build an owned argument list.
pub fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ── Recording Stub ──

/// `MemStub` wrapper that counts reads and writes.
#[derive(Debug, Default)]
pub struct RecordingStub {
    pub inner: MemStub,
    reads: Cell<usize>,
    writes: usize,
}

impl RecordingStub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Total number of stub calls of either kind.
    pub fn accesses(&self) -> usize {
        self.reads() + self.writes()
    }
}

impl ChaincodeStub for RecordingStub {
    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StubError> {
        self.writes += 1;
        self.inner.put_state(key, value)
    }

    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StubError> {
        self.reads.set(self.reads.get() + 1);
        self.inner.get_state(key)
    }
}

// ── Failing Stub ──

/// Stub whose backend rejects every call with the given message.
#[derive(Debug, Clone)]
pub struct FailingStub {
    pub message: String,
}

impl FailingStub {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    pub fn error(&self) -> StubError {
        StubError::Backend(self.message.clone())
    }
}

impl ChaincodeStub for FailingStub {
    fn put_state(&mut self, _key: &str, _value: &[u8]) -> Result<(), StubError> {
        Err(self.error())
    }

    fn get_state(&self, _key: &str) -> Result<Option<Vec<u8>>, StubError> {
        Err(self.error())
    }
}
