//! This module contains constants that are needed throughout the codebase.

/// The witness index assigned to the first flattened argument of a function.
///
/// Index zero is reserved by the solver and never populated, so argument
/// encoding starts here and proceeds contiguously.
pub const FIRST_ARGUMENT_WITNESS_INDEX: u32 = 1;

/// The size in bytes of a serialized field element.
pub const FIELD_ELEMENT_SIZE_BYTES: usize = 32;

/// The size in bytes of a function selector as it appears in diagnostics.
pub const FUNCTION_SELECTOR_SIZE_BYTES: usize = 4;
