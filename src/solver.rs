//! This module contains the boundary to the external constraint solver.
//!
//! The solver is not implemented by this crate. It is the collaborator that
//! consumes circuit bytecode plus an initial witness, drives the oracle for
//! any externally-computed values it needs, and either completes the witness
//! or fails partway through. Only its calling contract is specified here.

use std::fmt::{Debug, Display, Formatter};

use thiserror::Error;

use crate::{oracle, oracle::OracleBinding, witness::WitnessMap};

/// The interface to an engine that can solve circuit bytecode to a complete
/// witness.
///
/// # Calling Contract
///
/// A call to [`Self::solve`] is synchronous from the engine's point of view.
/// The solver may issue any number of requests against `oracle` while
/// solving, strictly in program order with at most one in flight, and must
/// not proceed past a request until it resolves. The returned witness map
/// must be a superset of `initial_witness`.
pub trait Solver
where
    Self: Debug,
{
    /// Solves `bytecode` starting from `initial_witness`, servicing external
    /// data requests through `oracle`.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if solving fails for any reason, including an oracle
    /// request that could not be serviced.
    fn solve(
        &self,
        bytecode: &[u8],
        initial_witness: WitnessMap,
        oracle: &OracleBinding,
    ) -> Result<WitnessMap, SolveFailure>;
}

/// The location of a single opcode within circuit bytecode, as reported in
/// solver failures.
///
/// Locations are opaque to the engine except as keys into a function's debug
/// symbol table.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct OpcodeLocation(pub u64);

impl Display for OpcodeLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "opcode {}", self.0)
    }
}

/// A failure raised by the solver partway through execution.
///
/// The `trace` carries the solver's raw program-counter hint for the failure
/// point, innermost call last. It is empty when the solver had no location
/// information to attach.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("{message}")]
pub struct SolveFailure {
    /// The solver's description of what went wrong.
    pub message: String,

    /// The raw opcode locations active at the failure point, outermost
    /// first.
    pub trace: Vec<OpcodeLocation>,
}

impl SolveFailure {
    /// Constructs a new failure described by `message` with no location
    /// information.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            trace: Vec::new(),
        }
    }

    /// Constructs a new failure described by `message` with the raw opcode
    /// `trace` active at the failure point.
    pub fn with_trace(message: impl Into<String>, trace: impl Into<Vec<OpcodeLocation>>) -> Self {
        Self {
            message: message.into(),
            trace: trace.into(),
        }
    }
}

/// Oracle failures surface through the solver, so they fold into solve
/// failures with their message preserved verbatim.
impl From<oracle::Error> for SolveFailure {
    fn from(value: oracle::Error) -> Self {
        Self::new(value.to_string())
    }
}
