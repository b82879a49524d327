//! This module is an integration test that checks how corrupted or
//! mismatched artifacts are rejected.
#![cfg(test)]

use unconstrained_executor as uex;
use unconstrained_executor::{
    abi::AbiType,
    artifact::FunctionArtifact,
    error::{decoding, execution::Cause, Error},
    field::FieldElement,
    witness::{Witness, WitnessMap},
};

mod common;

#[test]
fn invalid_transport_encoding_fails_before_any_oracle_call() {
    let solver = common::AdditionSolver;
    let oracle = common::CountingOracle::new();
    let artifact = FunctionArtifact::new(
        "this is !not! base64",
        2,
        vec![Witness(3)],
        Some(AbiType::Field),
    );

    let result = uex::new(&solver).execute(
        &oracle,
        &artifact,
        common::contract_address(),
        common::function_selector(),
        &[FieldElement::from(3_u64), FieldElement::from(4_u64)],
    );

    assert!(matches!(
        result,
        Err(Error::Decoding(
            decoding::Error::InvalidTransportEncoding { .. }
        ))
    ));
    assert_eq!(oracle.served(), 0);
}

#[test]
fn missing_return_wire_is_a_solver_contract_violation() {
    // The final witness never assigns the designated return wire 9.
    let final_witness: WitnessMap =
        [(Witness(1), FieldElement::one())].into_iter().collect();
    let solver = common::ScriptedSolver { final_witness };
    let artifact = FunctionArtifact::new(
        common::encode_bytecode(&[0xaa]),
        1,
        vec![Witness(9)],
        Some(AbiType::Field),
    );

    let result = uex::new(&solver).execute(
        &unconstrained_executor::oracle::NullOracle,
        &artifact,
        common::contract_address(),
        common::function_selector(),
        &[FieldElement::one()],
    );

    let Err(Error::Execution(error)) = result else {
        panic!("Expected an execution error");
    };
    assert_eq!(
        error.cause,
        Cause::MissingReturnWitness {
            witness: Witness(9)
        }
    );
}

#[test]
fn return_wires_must_match_the_declared_type_width() {
    // Two wires are designated but the declared return type is a single
    // field element.
    let final_witness: WitnessMap = [
        (Witness(1), FieldElement::one()),
        (Witness(2), FieldElement::one()),
    ]
    .into_iter()
    .collect();
    let solver = common::ScriptedSolver { final_witness };
    let artifact = FunctionArtifact::new(
        common::encode_bytecode(&[0xaa]),
        1,
        vec![Witness(1), Witness(2)],
        Some(AbiType::Field),
    );

    let result = uex::new(&solver).execute(
        &unconstrained_executor::oracle::NullOracle,
        &artifact,
        common::contract_address(),
        common::function_selector(),
        &[FieldElement::one()],
    );

    assert!(matches!(
        result,
        Err(Error::Decoding(decoding::Error::ReturnArityMismatch {
            expected: 1,
            actual: 2,
        }))
    ));
}
