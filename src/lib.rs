//! This library implements an oracle-mediated execution engine for
//! "unconstrained" (non-proved, host-assisted) circuit functions. It takes
//! compiled circuit bytecode plus flattened field-element arguments, drives
//! an external constraint solver to completion while servicing the solver's
//! requests for external data through a pluggable callback interface (the
//! "oracle"), and decodes the solver's final variable assignment into a
//! structured return value.
//!
//! Note that this library does not implement the solver itself, nor any
//! concrete oracle; both are collaborators specified at their boundary only.
//!
//! # How it Works
//!
//! From a very high level, one execution is performed as follows:
//!
//! 1. The bytecode in the function's [`artifact::FunctionArtifact`] is
//!    decoded from its transport encoding into a raw byte buffer.
//! 2. The caller's arguments are encoded into the initial
//!    [`witness::WitnessMap`], assigning witness index 1 to the first
//!    argument, index 2 to the second, and so on in order.
//! 3. The [`solver::Solver`] is invoked with the bytecode, the initial
//!    witness, and an [`oracle::OracleBinding`] over the caller's oracle.
//!    While solving, the solver issues any number of named oracle requests,
//!    strictly in program order with at most one in flight.
//! 4. If the solver fails, the failure is enriched with an
//!    [`error::execution::ExecutionContext`] and a call stack reconstructed
//!    by [`debug_info::extract_call_stack`] from the artifact's debug symbol
//!    table, and the whole execution fails.
//! 5. If the solver succeeds, the witnesses designated by the function's
//!    signature as outputs are extracted from the final witness map in
//!    declared order and decoded against the declared return type into an
//!    [`abi::DecodedValue`].
//!
//! # Basic Usage
//!
//! For the most basic usage of the library, it is sufficient to construct an
//! `Executor` over your solver and call the `.execute` method, passing your
//! oracle and function artifact.
//!
//! ```
//! use unconstrained_executor as uex;
//! use unconstrained_executor::{
//!     abi::{AbiType, DecodedValue},
//!     artifact::{ContractAddress, FunctionArtifact, FunctionSelector},
//!     field::FieldElement,
//!     oracle::{NullOracle, OracleBinding},
//!     solver::{SolveFailure, Solver},
//!     witness::{Witness, WitnessMap},
//! };
//!
//! /// A solver standing in for the real constraint solver: it expects the
//! /// two input wires and assigns their sum to wire 3.
//! #[derive(Debug)]
//! struct AdditionSolver;
//!
//! impl Solver for AdditionSolver {
//!     fn solve(
//!         &self,
//!         _bytecode: &[u8],
//!         initial_witness: WitnessMap,
//!         _oracle: &OracleBinding,
//!     ) -> Result<WitnessMap, SolveFailure> {
//!         let mut witness = initial_witness;
//!         let lhs = *witness.get(Witness(1)).ok_or(SolveFailure::new("missing wire 1"))?;
//!         let rhs = *witness.get(Witness(2)).ok_or(SolveFailure::new("missing wire 2"))?;
//!         witness.insert(Witness(3), lhs + rhs);
//!         Ok(witness)
//!     }
//! }
//!
//! let artifact = FunctionArtifact::new(
//!     "AAEC",                   // Transport-encoded bytecode
//!     2,                        // The function takes two field elements
//!     vec![Witness(3)],         // Its output is wire 3
//!     Some(AbiType::Field),     // Declared as a single field element
//! );
//!
//! let solver = AdditionSolver;
//! let result = uex::new(&solver)
//!     .execute(
//!         &NullOracle,
//!         &artifact,
//!         ContractAddress::new(FieldElement::from(0x1234_u64)),
//!         FunctionSelector::from(0x0000_00ff_u32),
//!         &[FieldElement::from(3_u64), FieldElement::from(4_u64)],
//!     )
//!     .unwrap();
//!
//! assert_eq!(result, Some(DecodedValue::Field(FieldElement::from(7_u64))));
//! ```

#![warn(clippy::all, clippy::cargo, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // Allows for better API naming

pub mod abi;
pub mod artifact;
pub mod constant;
pub mod debug_info;
pub mod error;
pub mod executor;
pub mod field;
pub mod oracle;
pub mod solver;
pub mod witness;

pub use executor::Executor;

use crate::solver::Solver;

/// Creates a new [`Executor`] that runs executions against the provided
/// `solver`.
#[must_use]
pub fn new(solver: &dyn Solver) -> Executor {
    Executor::new(solver)
}
