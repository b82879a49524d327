//! This module contains the [`Executor`], the engine that runs a single
//! unconstrained function to completion and decodes its return value.
//!
//! An execution is one pass through a fixed pipeline: decode the artifact's
//! bytecode from its transport encoding, encode the caller's arguments into
//! the initial witness, hand both to the solver with the oracle bound in,
//! then either decode the designated return wires out of the final witness
//! or enrich the solver's failure with context and a reconstructed call
//! stack. Witness encoding happens entirely before the solver runs and
//! decoding entirely after it returns, so there is never any interleaving
//! between witness handling and oracle traffic.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::{
    abi::{decode_return_values, DecodedValue},
    artifact::{ContractAddress, FunctionArtifact, FunctionSelector},
    debug_info::extract_call_stack,
    error::{
        decoding,
        execution::{self, Cause, ExecutionContext},
        Result,
    },
    field::FieldElement,
    oracle::{Oracle, OracleBinding},
    solver::Solver,
    witness::WitnessMap,
};

/// The engine responsible for executing unconstrained functions against a
/// solver.
///
/// The executor borrows its solver for its own lifetime and owns nothing
/// else; all per-execution state (the oracle binding and both witness maps)
/// is scoped to one [`Self::execute`] call and discarded when it returns.
#[derive(Clone, Copy, Debug)]
pub struct Executor<'a> {
    /// The solver that executions are run against.
    solver: &'a dyn Solver,
}

impl<'a> Executor<'a> {
    /// Constructs a new executor that runs executions against `solver`.
    #[must_use]
    pub fn new(solver: &'a dyn Solver) -> Self {
        Self { solver }
    }

    /// Executes the unconstrained function described by `artifact` with the
    /// provided flattened `arguments`, servicing the solver's external data
    /// requests through `oracle`, and returns the decoded return value.
    ///
    /// `contract_address` and `function_selector` are opaque identifiers
    /// used only for diagnostics; they never influence control flow. The
    /// call is synchronous and performs no retries: retry policy, if any,
    /// belongs to the caller.
    ///
    /// Returns [`None`] for functions whose signature declares no return
    /// type.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] with [`decoding::Error`] if the artifact's bytecode
    /// is not valid in its transport encoding or if the return wires do not
    /// match the declared return type, and with [`execution::Error`] if the
    /// argument count does not match the declared arity or if the solver
    /// fails during solving. In the transport-encoding case the oracle is
    /// never called.
    pub fn execute(
        &self,
        oracle: &dyn Oracle,
        artifact: &FunctionArtifact,
        contract_address: ContractAddress,
        function_selector: FunctionSelector,
        arguments: &[FieldElement],
    ) -> Result<Option<DecodedValue>> {
        tracing::debug!(
            contract = %contract_address,
            function = %function_selector,
            "Executing unconstrained function"
        );

        let bytecode = STANDARD.decode(artifact.bytecode()).map_err(|e| {
            decoding::Error::InvalidTransportEncoding {
                message: e.to_string(),
            }
        })?;

        let context = ExecutionContext::new(contract_address, function_selector);

        if arguments.len() != artifact.parameter_count() {
            let cause = Cause::ArityMismatch {
                expected: artifact.parameter_count(),
                actual: arguments.len(),
            };
            return Err(execution::Error::new(context, Vec::new(), cause).into());
        }

        let initial_witness = WitnessMap::from_arguments(arguments);
        let binding = OracleBinding::new(oracle);

        let final_witness = self
            .solver
            .solve(&bytecode, initial_witness, &binding)
            .map_err(|failure| {
                let call_stack = extract_call_stack(&failure, artifact.debug());
                execution::Error::new(context, call_stack, Cause::Solver(failure))
            })?;

        let return_values = artifact
            .return_witnesses()
            .iter()
            .map(|witness| {
                final_witness.get(*witness).copied().ok_or_else(|| {
                    let cause = Cause::MissingReturnWitness { witness: *witness };
                    execution::Error::new(context, Vec::new(), cause)
                })
            })
            .collect::<execution::Result<Vec<_>>>()?;

        let Some(return_type) = artifact.return_type() else {
            return Ok(None);
        };

        let decoded = decode_return_values(&return_values, return_type)?;
        tracing::trace!(elements = return_values.len(), "Decoded return value");

        Ok(Some(decoded))
    }
}
