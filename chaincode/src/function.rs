//! Function-name decoding for the invoke and query routers.
//!
//! The peer names the function to run as a string. It is decoded once into
//! one of these enums; everything past the boundary matches on variants.

use std::fmt;
use std::str::FromStr;

use ledger_shim::EntryPoint;

use crate::error::ChaincodeError;

/// Functions routed by `invoke`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvokeFunction {
    /// Re-run initialisation: `[value]`.
    Init,
    /// Store a pair: `[key, value]`.
    Write,
}

impl InvokeFunction {
    pub fn name(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Write => "write",
        }
    }
}

impl FromStr for InvokeFunction {
    type Err = ChaincodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "init" => Ok(Self::Init),
            "write" => Ok(Self::Write),
            other => Err(ChaincodeError::UnknownFunction {
                entry: EntryPoint::Invoke,
                function: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for InvokeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Functions routed by `query`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryFunction {
    /// Fetch a value: `[key]`.
    Read,
}

impl QueryFunction {
    pub fn name(self) -> &'static str {
        match self {
            Self::Read => "read",
        }
    }
}

impl FromStr for QueryFunction {
    type Err = ChaincodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "read" => Ok(Self::Read),
            other => Err(ChaincodeError::UnknownFunction {
                entry: EntryPoint::Query,
                function: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for QueryFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
