//! This module contains the type definitions necessary to support the
//! oracle, the callback surface through which the solver requests
//! externally-computed values during solving.
//!
//! # Calling Contract
//!
//! The solver, not the engine, is the party that issues oracle calls. Each
//! call is a discrete request (operation name plus field-element inputs)
//! answered with either field-element outputs or a failure. Calls occur
//! strictly in program order with at most one in flight per execution, and
//! there is no declared upper bound on the call count. An implementation may
//! perform I/O internally, but it must present one completed answer (or
//! failure) per request before the next request is issued.
//!
//! The engine treats every call as opaque and potentially effectful; whether
//! an oracle mutates its own state is the oracle's business.

use std::fmt::Debug;

use thiserror::Error;

use crate::field::FieldElement;

/// The operation name under which the solver requests a contract storage
/// read.
pub const STORAGE_READ: &str = "storage_read";

/// The operation name under which the solver requests resolution of an
/// address handle.
pub const RESOLVE_ADDRESS: &str = "resolve_address";

/// The operation name under which the solver requests a native hash of a
/// sequence of field elements.
pub const HASH: &str = "hash";

/// The operation name under which the solver requests a random field
/// element.
pub const RANDOM: &str = "random";

/// The operation name under which the solver forwards a debug log message.
pub const DEBUG_LOG: &str = "debug_log";

/// The interface to an object that can answer the solver's requests for
/// externally-computed values.
///
/// Every operation has a default implementation that reports the operation
/// as unsupported, so an implementation only needs to provide the operations
/// the circuits it serves actually use.
pub trait Oracle
where
    Self: Debug,
{
    /// Reads the public storage of the contract at `address` at the given
    /// `slot`.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the read cannot be serviced.
    fn storage_read(&self, address: FieldElement, slot: FieldElement) -> Result<FieldElement> {
        let _ = (address, slot);
        Err(Error::UnsupportedOperation {
            name: STORAGE_READ.into(),
        })
    }

    /// Resolves the address `handle` to a complete address.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the handle cannot be resolved.
    fn resolve_address(&self, handle: FieldElement) -> Result<FieldElement> {
        let _ = handle;
        Err(Error::UnsupportedOperation {
            name: RESOLVE_ADDRESS.into(),
        })
    }

    /// Hashes the provided `inputs` with the circuit's native hash function.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the hash cannot be computed.
    fn hash(&self, inputs: &[FieldElement]) -> Result<FieldElement> {
        let _ = inputs;
        Err(Error::UnsupportedOperation { name: HASH.into() })
    }

    /// Produces a random field element.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if no randomness source is available.
    fn random(&self) -> Result<FieldElement> {
        Err(Error::UnsupportedOperation { name: RANDOM.into() })
    }

    /// Receives a debug log message from the circuit as raw field elements.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the sink rejects the message.
    fn debug_log(&self, values: &[FieldElement]) -> Result<()> {
        let _ = values;
        Err(Error::UnsupportedOperation {
            name: DEBUG_LOG.into(),
        })
    }
}

/// An implementation of the [`Oracle`] trait for circuits that make no
/// oracle calls at all.
///
/// Every operation fails as unsupported, so any call the solver does issue
/// surfaces as a solve failure rather than being silently answered.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct NullOracle;

impl Oracle for NullOracle {}

/// A single request issued by the solver against the oracle.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OracleCall {
    /// The name of the requested operation.
    pub name: String,

    /// The flattened field-element inputs to the operation.
    pub inputs: Vec<FieldElement>,
}

impl OracleCall {
    /// Constructs a new call to the operation `name` with the provided
    /// `inputs`.
    pub fn new(name: impl Into<String>, inputs: impl Into<Vec<FieldElement>>) -> Self {
        Self {
            name: name.into(),
            inputs: inputs.into(),
        }
    }
}

/// The surface handed to the solver for the duration of one execution,
/// routing each named request to the corresponding [`Oracle`] operation.
///
/// The binding borrows the oracle; it is created by the engine per call and
/// never owned by the solver.
#[derive(Clone, Copy, Debug)]
pub struct OracleBinding<'a> {
    oracle: &'a dyn Oracle,
}

impl<'a> OracleBinding<'a> {
    /// Creates a new binding routing requests to `oracle`.
    #[must_use]
    pub fn new(oracle: &'a dyn Oracle) -> Self {
        Self { oracle }
    }

    /// Answers a single `call` from the solver, returning the operation's
    /// flattened field-element outputs.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the operation name is unknown, if the input count
    /// does not match the operation's arity, or if the oracle itself fails
    /// to service the request.
    pub fn respond(&self, call: &OracleCall) -> Result<Vec<FieldElement>> {
        match call.name.as_str() {
            STORAGE_READ => {
                let [address, slot] = expect_inputs::<2>(call)?;
                Ok(vec![self.oracle.storage_read(address, slot)?])
            }
            RESOLVE_ADDRESS => {
                let [handle] = expect_inputs::<1>(call)?;
                Ok(vec![self.oracle.resolve_address(handle)?])
            }
            HASH => Ok(vec![self.oracle.hash(&call.inputs)?]),
            RANDOM => {
                expect_inputs::<0>(call)?;
                Ok(vec![self.oracle.random()?])
            }
            DEBUG_LOG => {
                self.oracle.debug_log(&call.inputs)?;
                Ok(vec![])
            }
            _ => Err(Error::UnsupportedOperation {
                name: call.name.clone(),
            }),
        }
    }
}

/// Checks that `call` carries exactly `N` inputs, handing them back as an
/// array for destructuring.
fn expect_inputs<const N: usize>(call: &OracleCall) -> Result<[FieldElement; N]> {
    let inputs: [FieldElement; N] =
        call.inputs
            .as_slice()
            .try_into()
            .map_err(|_| Error::InvalidInputs {
                name: call.name.clone(),
                expected: N,
                actual: call.inputs.len(),
            })?;
    Ok(inputs)
}

/// Errors that occur when servicing an oracle request.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    #[error("The oracle does not support the operation {name:?}")]
    UnsupportedOperation { name: String },

    #[error("The operation {name:?} takes {expected:?} inputs but {actual:?} were provided")]
    InvalidInputs {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("The oracle failed to service {name:?}: {message}")]
    OperationFailed { name: String, message: String },
}

impl Error {
    /// Constructs a failure of the operation `name` described by `message`.
    pub fn operation_failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::OperationFailed {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// The result type for oracle operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod test {
    use super::{Error, NullOracle, OracleBinding, OracleCall, HASH, RANDOM, STORAGE_READ};
    use crate::field::FieldElement;

    /// An oracle answering storage reads from a fixed value, for exercising
    /// the dispatch layer.
    #[derive(Debug)]
    struct FixedStorage(FieldElement);

    impl super::Oracle for FixedStorage {
        fn storage_read(
            &self,
            _address: FieldElement,
            _slot: FieldElement,
        ) -> super::Result<FieldElement> {
            Ok(self.0)
        }
    }

    #[test]
    fn routes_named_calls_to_operations() {
        let oracle = FixedStorage(FieldElement::from(42_u64));
        let binding = OracleBinding::new(&oracle);

        let call = OracleCall::new(
            STORAGE_READ,
            vec![FieldElement::zero(), FieldElement::one()],
        );
        let outputs = binding.respond(&call).expect("read should be serviced");
        assert_eq!(outputs, vec![FieldElement::from(42_u64)]);
    }

    #[test]
    fn rejects_wrong_input_arity() {
        let oracle = FixedStorage(FieldElement::zero());
        let binding = OracleBinding::new(&oracle);

        let call = OracleCall::new(STORAGE_READ, vec![FieldElement::zero()]);
        let result = binding.respond(&call);
        assert_eq!(
            result,
            Err(Error::InvalidInputs {
                name: STORAGE_READ.into(),
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn rejects_unknown_operations() {
        let binding = OracleBinding::new(&NullOracle);
        let call = OracleCall::new("not_an_operation", vec![]);
        assert_eq!(
            binding.respond(&call),
            Err(Error::UnsupportedOperation {
                name: "not_an_operation".into()
            })
        );
    }

    #[test]
    fn null_oracle_fails_every_operation() {
        let binding = OracleBinding::new(&NullOracle);
        for name in [STORAGE_READ, RANDOM, HASH] {
            let inputs = match name {
                STORAGE_READ => vec![FieldElement::zero(), FieldElement::zero()],
                _ => vec![],
            };
            let result = binding.respond(&OracleCall::new(name, inputs));
            assert!(matches!(
                result,
                Err(Error::UnsupportedOperation { .. })
            ));
        }
    }
}
