//! This module contains errors raised when the solver fails partway through
//! executing a function.
//!
//! A solve failure on its own says little about where it happened, so the
//! engine never propagates one bare. At the call boundary it is enriched
//! with the execution's context (which contract and function were running)
//! and a call stack reconstructed from the function's debug symbol table,
//! and it is that enriched error that callers see. Enrichment only ever
//! transforms the failure variant; it never downgrades a failure into a
//! success.

use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::{
    artifact::{ContractAddress, FunctionSelector},
    debug_info::{render_call_stack, SourceLocation},
    solver::SolveFailure,
    witness::Witness,
};

/// The diagnostic metadata identifying which execution a failure belongs to.
///
/// A context is constructed at the call boundary when a failure is observed.
/// Successful outcomes never carry one.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ExecutionContext {
    /// The address of the contract whose function was executing.
    pub contract_address: ContractAddress,

    /// The selector of the function that was executing.
    pub function_selector: FunctionSelector,
}

impl ExecutionContext {
    /// Creates a new context for the function identified by
    /// `contract_address` and `function_selector`.
    #[must_use]
    pub fn new(contract_address: ContractAddress, function_selector: FunctionSelector) -> Self {
        Self {
            contract_address,
            function_selector,
        }
    }
}

impl Display for ExecutionContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.contract_address, self.function_selector)
    }
}

/// The underlying cause of an execution failure.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Cause {
    /// The caller supplied a different number of flattened arguments than
    /// the function's signature declares, detected before the solver was
    /// invoked.
    #[error("Function expects {expected:?} arguments but {actual:?} were provided")]
    ArityMismatch { expected: usize, actual: usize },

    /// The solver failed while solving the bytecode.
    #[error("{0}")]
    Solver(#[from] SolveFailure),

    /// The solver reported success but its final witness is missing a wire
    /// the function's signature designates as an output.
    #[error("Final witness has no assignment for designated return wire {}", .witness.index())]
    MissingReturnWitness { witness: Witness },
}

/// An error raised when executing a function fails, enriched with the
/// execution's context and a best-effort call stack.
///
/// The call stack is empty when the function's artifact carries no debug
/// symbol table, or when the failure had no location information to resolve.
#[derive(Clone, Debug, Error)]
pub struct Error {
    /// The context of the execution that failed.
    pub context: ExecutionContext,

    /// The reconstructed source-level call stack, outermost frame first.
    pub call_stack: Vec<SourceLocation>,

    /// The underlying cause of the failure.
    #[source]
    pub cause: Cause,
}

impl Error {
    /// Creates a new execution error for the execution identified by
    /// `context`, caused by `cause`, with the reconstructed `call_stack`.
    #[must_use]
    pub fn new(context: ExecutionContext, call_stack: Vec<SourceLocation>, cause: Cause) -> Self {
        Self {
            context,
            call_stack,
            cause,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Execution of {} failed: {}", self.context, self.cause)?;
        if !self.call_stack.is_empty() {
            write!(f, "\n{}", render_call_stack(&self.call_stack))?;
        }
        Ok(())
    }
}

/// The result type for methods that may have execution errors.
pub type Result<T> = std::result::Result<T, Error>;
