//! This module contains the definition of the ABI types that a function's
//! return value can take, and the decoding of flat field-element sequences
//! into structured values of those types.
//!
//! Decoding consumes the return wires in flattened declaration order: a
//! field or integer consumes one element, an array of length `n` consumes
//! `n` times its element type's width, and a struct consumes its fields in
//! declaration order. The total width of the declared type must exactly
//! match the number of designated return wires.

use std::slice;

use serde::{Deserialize, Serialize};

use crate::{
    error::decoding::{Error, Result},
    field::FieldElement,
};

/// The signedness of an integer ABI type.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sign {
    Unsigned,
    Signed,
}

/// Concretely known ABI types for function return values.
///
/// # Invariants
///
/// Each individual variant in the enum describes the invariants placed upon
/// it. It is the responsibility of the code constructing these values to
/// ensure that the invariants are satisfied. Code utilising them will assume
/// that the data has been correctly constructed.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum AbiType {
    /// A single native field element.
    Field,

    /// A boolean, encoded as a field element that must be zero or one.
    Boolean,

    /// An integer of a given `width` in bits, where `0 < width <= 128`,
    /// encoded in a single field element that must fit the width.
    Integer { sign: Sign, width: u16 },

    /// A fixed-`length` array containing elements of an element type `typ`.
    Array {
        length: u64,
        #[serde(rename = "type")]
        typ: Box<AbiType>,
    },

    /// A structure with named `fields`, flattened in declaration order.
    Struct { fields: Vec<(String, AbiType)> },

    /// A string of a fixed `length` in bytes, one byte per field element.
    String { length: u64 },
}

impl AbiType {
    /// Gets the number of field elements that a value of this type flattens
    /// to.
    #[must_use]
    pub fn flattened_size(&self) -> usize {
        match self {
            Self::Field | Self::Boolean | Self::Integer { .. } => 1,
            Self::Array { length, typ } => {
                usize::try_from(*length).unwrap_or(usize::MAX) * typ.flattened_size()
            }
            Self::Struct { fields } => fields.iter().map(|(_, typ)| typ.flattened_size()).sum(),
            Self::String { length } => usize::try_from(*length).unwrap_or(usize::MAX),
        }
    }
}

/// A structured return value decoded from the return-wire subset of a final
/// witness.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DecodedValue {
    /// A single native field element, returned uninterpreted.
    Field(FieldElement),

    /// A decoded boolean.
    Boolean(bool),

    /// A decoded integer, widened to 128 bits regardless of declared width.
    Integer(u128),

    /// A fixed-length array of decoded values.
    Array(Vec<DecodedValue>),

    /// A structure of named decoded values, in declaration order.
    Struct(Vec<(String, DecodedValue)>),

    /// A decoded string.
    String(String),
}

/// Decodes the ordered return-wire `values` of a function into a structured
/// value of the declared `return_type`.
///
/// # Errors
///
/// Returns [`Err`] if the number of values does not exactly match the
/// flattened size of the type, or if any value is out of range for the
/// scalar type it encodes.
pub fn decode_return_values(values: &[FieldElement], return_type: &AbiType) -> Result<DecodedValue> {
    let expected = return_type.flattened_size();
    if values.len() != expected {
        return Err(Error::ReturnArityMismatch {
            expected,
            actual: values.len(),
        });
    }

    let mut remaining = values.iter();
    let decoded = decode_value(&mut remaining, return_type)?;

    // The size check above guarantees the iterator is exhausted here.
    debug_assert_eq!(remaining.len(), 0);

    Ok(decoded)
}

/// Decodes a single value of type `typ` by consuming elements from
/// `values`.
///
/// The caller is responsible for having checked that enough elements remain;
/// see [`decode_return_values`].
fn decode_value(
    values: &mut slice::Iter<FieldElement>,
    typ: &AbiType,
) -> Result<DecodedValue> {
    let decoded = match typ {
        AbiType::Field => DecodedValue::Field(*next_value(values)?),
        AbiType::Boolean => {
            let value = next_value(values)?;
            if value.is_zero() {
                DecodedValue::Boolean(false)
            } else if *value == FieldElement::one() {
                DecodedValue::Boolean(true)
            } else {
                return Err(Error::InvalidBoolean { actual: *value });
            }
        }
        AbiType::Integer { width, .. } => {
            let value = next_value(values)?;
            let narrowed = value.to_u128().ok_or(Error::IntegerOutOfRange {
                actual: *value,
                width: *width,
            })?;
            if *width < 128 && narrowed >= 1_u128 << *width {
                return Err(Error::IntegerOutOfRange {
                    actual: *value,
                    width: *width,
                });
            }
            DecodedValue::Integer(narrowed)
        }
        AbiType::Array { length, typ } => {
            let elements = (0..*length)
                .map(|_| decode_value(values, typ))
                .collect::<Result<Vec<_>>>()?;
            DecodedValue::Array(elements)
        }
        AbiType::Struct { fields } => {
            let fields = fields
                .iter()
                .map(|(name, typ)| Ok((name.clone(), decode_value(values, typ)?)))
                .collect::<Result<Vec<_>>>()?;
            DecodedValue::Struct(fields)
        }
        AbiType::String { length } => {
            let bytes = (0..*length)
                .map(|_| {
                    let value = next_value(values)?;
                    u8::try_from(value.to_u128().unwrap_or(u128::MAX)).map_err(|_| {
                        Error::InvalidString {
                            message: format!("{value} is not a byte"),
                        }
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            let text = String::from_utf8(bytes).map_err(|e| Error::InvalidString {
                message: e.to_string(),
            })?;
            DecodedValue::String(text)
        }
    };

    Ok(decoded)
}

/// Takes the next element from `values`, reporting exhaustion as an arity
/// mismatch.
fn next_value<'a>(values: &mut slice::Iter<'a, FieldElement>) -> Result<&'a FieldElement> {
    values.next().ok_or(Error::ReturnArityMismatch {
        expected: 1,
        actual: 0,
    })
}
