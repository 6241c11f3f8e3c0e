//! The key-value chaincode itself.
//!
//! `SimpleChaincode` is stateless: each entry point validates its argument
//! count, then performs a single pass-through call on the stub it was given.

use ledger_shim::{Chaincode, ChaincodeStub};

use crate::error::ChaincodeError;
use crate::function::{InvokeFunction, QueryFunction};

/// Key written by `init`.
pub const HELLO_WORLD_KEY: &str = "hello_world";

/// Key-value ledger chaincode.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleChaincode;

impl SimpleChaincode {
    pub fn new() -> Self {
        Self
    }

    /// `[value]` → `hello_world = value`
    fn init_value(
        &self,
        stub: &mut dyn ChaincodeStub,
        args: &[String],
    ) -> Result<Vec<u8>, ChaincodeError> {
        ChaincodeError::check_arity(args, 1)?;
        stub.put_state(HELLO_WORLD_KEY, args[0].as_bytes())?;
        Ok(Vec::new())
    }

    /// `[key, value]` → `key = value`
    fn write(
        &self,
        stub: &mut dyn ChaincodeStub,
        args: &[String],
    ) -> Result<Vec<u8>, ChaincodeError> {
        tracing::debug!("running write()");
        ChaincodeError::check_arity(args, 2)?;
        let (key, value) = (&args[0], &args[1]);
        stub.put_state(key, value.as_bytes())?;
        Ok(Vec::new())
    }

    /// `[key]` → stored bytes
    fn read(
        &self,
        stub: &dyn ChaincodeStub,
        args: &[String],
    ) -> Result<Vec<u8>, ChaincodeError> {
        ChaincodeError::check_arity(args, 1)?;
        let key = &args[0];
        match stub.get_state(key) {
            Ok(Some(value)) => Ok(value),
            Ok(None) => {
                tracing::debug!(key = %key, "no state stored for key");
                Err(ChaincodeError::StateRetrieval { key: key.clone() })
            }
            Err(err) => {
                tracing::debug!(key = %key, error = %err, "get_state failed");
                Err(ChaincodeError::StateRetrieval { key: key.clone() })
            }
        }
    }
}

impl Chaincode for SimpleChaincode {
    type Error = ChaincodeError;

    fn init(
        &self,
        stub: &mut dyn ChaincodeStub,
        _function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, ChaincodeError> {
        self.init_value(stub, args)
    }

    fn invoke(
        &self,
        stub: &mut dyn ChaincodeStub,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, ChaincodeError> {
        tracing::info!(function, "invoke is running");

        let routed = function.parse::<InvokeFunction>().inspect_err(|_| {
            tracing::warn!(function, "invoke did not find func");
        })?;
        match routed {
            InvokeFunction::Init => self.init_value(stub, args),
            InvokeFunction::Write => self.write(stub, args),
        }
    }

    fn query(
        &self,
        stub: &dyn ChaincodeStub,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, ChaincodeError> {
        tracing::info!(function, "query is running");

        let routed = function.parse::<QueryFunction>().inspect_err(|_| {
            tracing::warn!(function, "query did not find func");
        })?;
        match routed {
            QueryFunction::Read => self.read(stub, args),
        }
    }
}
