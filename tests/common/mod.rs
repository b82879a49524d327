//! This module contains common utilities for simplifying the writing of
//! integration tests for this library.

#![cfg(test)]
#![allow(unused)] // Not all helpers are used by every test binary.

use std::cell::{Cell, RefCell};

use base64::{engine::general_purpose::STANDARD, Engine};
use unconstrained_executor::{
    abi::AbiType,
    artifact::{ContractAddress, FunctionArtifact, FunctionSelector},
    field::FieldElement,
    oracle,
    oracle::{Oracle, OracleBinding, OracleCall},
    solver::{SolveFailure, Solver},
    witness::{Witness, WitnessMap},
};

/// Encodes raw `bytecode` into the transport encoding expected by function
/// artifacts.
pub fn encode_bytecode(bytecode: &[u8]) -> String {
    STANDARD.encode(bytecode)
}

/// Builds the artifact for a function taking two field elements and
/// returning their sum on wire 3 as a single field element.
pub fn addition_artifact() -> FunctionArtifact {
    FunctionArtifact::new(
        encode_bytecode(&[0x00, 0x01, 0x02]),
        2,
        vec![Witness(3)],
        Some(AbiType::Field),
    )
}

/// Gets a fixed contract address for use in assertions.
pub fn contract_address() -> ContractAddress {
    ContractAddress::new(FieldElement::from(0x2222_u64))
}

/// Gets a fixed function selector for use in assertions.
pub fn function_selector() -> FunctionSelector {
    FunctionSelector::from(0x89ab_cdef_u32)
}

/// A solver stub that assigns the sum of wires 1 and 2 to wire 3, standing
/// in for a circuit compiled from `fn main(x, y) -> x + y`.
#[derive(Debug)]
pub struct AdditionSolver;

impl Solver for AdditionSolver {
    fn solve(
        &self,
        _bytecode: &[u8],
        initial_witness: WitnessMap,
        _oracle: &OracleBinding,
    ) -> Result<WitnessMap, SolveFailure> {
        let mut witness = initial_witness;
        let lhs = *witness
            .get(Witness(1))
            .ok_or(SolveFailure::new("missing wire 1"))?;
        let rhs = *witness
            .get(Witness(2))
            .ok_or(SolveFailure::new("missing wire 2"))?;
        witness.insert(Witness(3), lhs + rhs);
        Ok(witness)
    }
}

/// A solver stub that returns a pre-scripted final witness regardless of its
/// inputs.
#[derive(Debug)]
pub struct ScriptedSolver {
    pub final_witness: WitnessMap,
}

impl Solver for ScriptedSolver {
    fn solve(
        &self,
        _bytecode: &[u8],
        _initial_witness: WitnessMap,
        _oracle: &OracleBinding,
    ) -> Result<WitnessMap, SolveFailure> {
        Ok(self.final_witness.clone())
    }
}

/// A solver stub that always fails with a pre-scripted failure.
#[derive(Debug)]
pub struct FailingSolver {
    pub failure: SolveFailure,
}

impl Solver for FailingSolver {
    fn solve(
        &self,
        _bytecode: &[u8],
        _initial_witness: WitnessMap,
        _oracle: &OracleBinding,
    ) -> Result<WitnessMap, SolveFailure> {
        Err(self.failure.clone())
    }
}

/// A solver stub that records the initial witness it was handed and then
/// returns it unchanged.
#[derive(Debug, Default)]
pub struct RecordingSolver {
    pub seen_witness: RefCell<Option<WitnessMap>>,
}

impl Solver for RecordingSolver {
    fn solve(
        &self,
        _bytecode: &[u8],
        initial_witness: WitnessMap,
        _oracle: &OracleBinding,
    ) -> Result<WitnessMap, SolveFailure> {
        *self.seen_witness.borrow_mut() = Some(initial_witness.clone());
        Ok(initial_witness)
    }
}

/// A solver stub that replays a pre-scripted sequence of oracle calls in
/// program order, surfacing any oracle failure as a solve failure.
#[derive(Debug)]
pub struct OracleDrivenSolver {
    pub calls: Vec<OracleCall>,
}

impl Solver for OracleDrivenSolver {
    fn solve(
        &self,
        _bytecode: &[u8],
        initial_witness: WitnessMap,
        oracle: &OracleBinding,
    ) -> Result<WitnessMap, SolveFailure> {
        for call in &self.calls {
            oracle.respond(call)?;
        }
        Ok(initial_witness)
    }
}

/// An oracle that counts how many requests it has serviced, optionally
/// failing on a configured request ordinal.
#[derive(Debug, Default)]
pub struct CountingOracle {
    served: Cell<usize>,
    fail_on: Option<(usize, String)>,
}

impl CountingOracle {
    /// Creates an oracle that answers every request with zeroes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an oracle that fails the `ordinal`-th request (one-based)
    /// with the provided `message`.
    pub fn failing_on(ordinal: usize, message: impl Into<String>) -> Self {
        Self {
            served: Cell::new(0),
            fail_on: Some((ordinal, message.into())),
        }
    }

    /// Gets the number of requests the oracle has been asked to service.
    pub fn served(&self) -> usize {
        self.served.get()
    }

    fn record(&self, name: &str) -> oracle::Result<()> {
        let ordinal = self.served.get() + 1;
        self.served.set(ordinal);
        if let Some((fail_ordinal, message)) = &self.fail_on {
            if ordinal == *fail_ordinal {
                return Err(oracle::Error::operation_failed(name, message.clone()));
            }
        }
        Ok(())
    }
}

impl Oracle for CountingOracle {
    fn storage_read(
        &self,
        _address: FieldElement,
        _slot: FieldElement,
    ) -> oracle::Result<FieldElement> {
        self.record(oracle::STORAGE_READ)?;
        Ok(FieldElement::zero())
    }

    fn resolve_address(&self, _handle: FieldElement) -> oracle::Result<FieldElement> {
        self.record(oracle::RESOLVE_ADDRESS)?;
        Ok(FieldElement::zero())
    }

    fn hash(&self, _inputs: &[FieldElement]) -> oracle::Result<FieldElement> {
        self.record(oracle::HASH)?;
        Ok(FieldElement::zero())
    }

    fn random(&self) -> oracle::Result<FieldElement> {
        self.record(oracle::RANDOM)?;
        Ok(FieldElement::zero())
    }

    fn debug_log(&self, _values: &[FieldElement]) -> oracle::Result<()> {
        self.record(oracle::DEBUG_LOG)
    }
}
