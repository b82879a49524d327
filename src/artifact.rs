//! This module contains types useful for dealing with the compiled function
//! artifacts that you want to execute, along with the identifier types used
//! to describe where an execution originated.

use std::{fs::File, io::Read};

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use crate::{
    abi::AbiType,
    constant::FUNCTION_SELECTOR_SIZE_BYTES,
    debug_info::DebugInfo,
    field::FieldElement,
    witness::Witness,
};

/// The address of the contract a function belongs to.
///
/// The engine uses addresses purely for diagnostics; they never influence
/// control flow.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ContractAddress(FieldElement);

impl ContractAddress {
    /// Creates a new contract address from the underlying field element.
    #[must_use]
    pub fn new(value: FieldElement) -> Self {
        Self(value)
    }

    /// Gets the underlying field element of the address.
    #[must_use]
    pub fn value(&self) -> FieldElement {
        self.0
    }
}

impl From<FieldElement> for ContractAddress {
    fn from(value: FieldElement) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for ContractAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The selector identifying a function within its contract.
///
/// As with [`ContractAddress`], selectors are diagnostic identifiers only.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct FunctionSelector([u8; FUNCTION_SELECTOR_SIZE_BYTES]);

impl FunctionSelector {
    /// Creates a new function selector from its raw `bytes`.
    #[must_use]
    pub fn new(bytes: [u8; FUNCTION_SELECTOR_SIZE_BYTES]) -> Self {
        Self(bytes)
    }

    /// Gets the raw bytes of the selector.
    #[must_use]
    pub fn bytes(&self) -> [u8; FUNCTION_SELECTOR_SIZE_BYTES] {
        self.0
    }
}

impl From<u32> for FunctionSelector {
    fn from(value: u32) -> Self {
        Self(value.to_be_bytes())
    }
}

impl std::fmt::Display for FunctionSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// A representation of one compiled circuit function as passed to the
/// engine.
///
/// An artifact bundles the function's transport-encoded bytecode with the
/// flattened descriptions of its parameter and return layout, and optionally
/// the debug symbol table emitted at compile time.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FunctionArtifact {
    /// The circuit bytecode, base64-encoded for transport.
    bytecode: String,

    /// The number of field elements the function's parameters flatten to.
    parameter_count: usize,

    /// The witnesses designated by the function's signature as its outputs,
    /// in declared output order.
    return_witnesses: Vec<Witness>,

    /// The declared return type of the function, absent for functions that
    /// return nothing.
    return_type: Option<AbiType>,

    /// The debug symbol table for the function, absent for artifacts
    /// compiled without debug information.
    #[serde(default)]
    debug: Option<DebugInfo>,
}

impl FunctionArtifact {
    /// Creates a new artifact from its constituent parts.
    pub fn new(
        bytecode: impl Into<String>,
        parameter_count: usize,
        return_witnesses: impl Into<Vec<Witness>>,
        return_type: Option<AbiType>,
    ) -> Self {
        Self {
            bytecode: bytecode.into(),
            parameter_count,
            return_witnesses: return_witnesses.into(),
            return_type,
            debug: None,
        }
    }

    /// Attaches the debug symbol table `debug` to the artifact.
    #[must_use]
    pub fn with_debug_info(mut self, debug: DebugInfo) -> Self {
        self.debug = Some(debug);
        self
    }

    /// Creates a new artifact from the JSON file at the provided `path`.
    ///
    /// The file at `path` must be the compiled representation of a single
    /// circuit function, usually output by the compiler as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the file is unavailable or is not a valid artifact.
    pub fn new_from_file(path: impl Into<String>) -> anyhow::Result<Self> {
        let path = path.into();
        let mut file = File::open(path).map_err(|_| anyhow!("File not available"))?;
        let mut contents = vec![];
        file.read_to_end(&mut contents)
            .map_err(|_| anyhow!("File could not be read"))?;

        let artifact: Self = serde_json::from_slice(contents.as_slice())
            .map_err(|_| anyhow!("Could not parse compiled function artifact."))?;

        Ok(artifact)
    }

    /// Gets the transport-encoded bytecode of the function.
    #[must_use]
    pub fn bytecode(&self) -> &str {
        &self.bytecode
    }

    /// Gets the number of field elements the function's parameters flatten
    /// to.
    #[must_use]
    pub fn parameter_count(&self) -> usize {
        self.parameter_count
    }

    /// Gets the witnesses designated as the function's outputs, in declared
    /// order.
    #[must_use]
    pub fn return_witnesses(&self) -> &[Witness] {
        &self.return_witnesses
    }

    /// Gets the declared return type of the function, if it has one.
    #[must_use]
    pub fn return_type(&self) -> Option<&AbiType> {
        self.return_type.as_ref()
    }

    /// Gets the function's debug symbol table, if it has one.
    #[must_use]
    pub fn debug(&self) -> Option<&DebugInfo> {
        self.debug.as_ref()
    }
}
