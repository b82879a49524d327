//! This module contains errors pertaining to the decoding of artifact data:
//! the bytecode's transport encoding on the way in, and the return-value
//! witnesses on the way out.
//!
//! All of these indicate a corrupted or mismatched artifact. They are fatal
//! for the input in question and must not be retried with the same data.

use thiserror::Error;

use crate::field::FieldElement;

/// Errors that occur when decoding artifact data.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    #[error("Bytecode is not valid in its transport encoding: {message}")]
    InvalidTransportEncoding { message: String },

    #[error("Return type expects {expected:?} field elements but {actual:?} were designated")]
    ReturnArityMismatch { expected: usize, actual: usize },

    #[error("{actual} is not a valid boolean return value")]
    InvalidBoolean { actual: FieldElement },

    #[error("{actual} does not fit in a {width:?}-bit integer return value")]
    IntegerOutOfRange { actual: FieldElement, width: u16 },

    #[error("Return value is not a valid string: {message}")]
    InvalidString { message: String },
}

/// The result type for methods that may have decoding errors.
pub type Result<T> = std::result::Result<T, Error>;
