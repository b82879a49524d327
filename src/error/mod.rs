//! This module contains the primary error type for the engine's interface.
//! It also re-exports the more specific error types that are
//! subsystem-specific.

pub mod decoding;
pub mod execution;

use thiserror::Error;

/// The interface result type for the library.
///
/// Any function considered to be part of the public interface of the library
/// should return this result type. Subsystems should return the
/// more-specific child error types as appropriate.
pub type Result<T> = std::result::Result<T, Error>;

/// The interface error type for the library.
///
/// All errors returned from the library interface (and hence encountered by
/// the clients of the library) should be members of this enum. These are the
/// only two kinds a caller needs to branch on: [`decoding::Error`] means the
/// input artifact is unusable and the call must not be retried with the same
/// input, while [`execution::Error`] means the solver failed partway through
/// and carries enough context for the caller to decide what to do next.
#[derive(Clone, Debug, Error)]
pub enum Error {
    /// Errors that come from decoding artifact data, including the
    /// bytecode's transport encoding.
    #[error(transparent)]
    Decoding(#[from] decoding::Error),

    /// Errors raised when the solver fails during execution, enriched with
    /// the execution's context and a reconstructed call stack.
    #[error(transparent)]
    Execution(#[from] execution::Error),
}
