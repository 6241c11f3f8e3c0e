//! Stub configuration.
//!
//! `StubConfig` bundles the size limits a stub enforces on every write.

/// Default maximum key length in bytes.
pub const MAX_KEY_LEN: usize = 256;

/// Default maximum value length in bytes.
pub const MAX_VALUE_LEN: usize = 64 * 1024;

/// Limits applied by a stub to `put_state` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StubConfig {
    /// Maximum length of a state key in bytes.
    pub max_key_len: usize,
    /// Maximum length of a state value in bytes.
    pub max_value_len: usize,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            max_key_len: MAX_KEY_LEN,
            max_value_len: MAX_VALUE_LEN,
        }
    }
}
