//! This module contains the representation of field elements as they cross
//! the engine's boundaries.
//!
//! # Opacity
//!
//! The engine never performs modular arithmetic on these values. A
//! [`FieldElement`] is a 256-bit bag of bits that the engine moves between
//! the caller, the witness map, the solver and the oracle. Reduction modulo
//! the circuit's native field is the solver's concern, and any arithmetic
//! provided here exists for stub solvers and decoders, operating on the raw
//! 256-bit store with wrap-around.

use std::fmt::{Display, Formatter};

use ethnum::U256;

/// A single field element as exchanged with the solver and the oracle.
///
/// # Representation
///
/// The value is stored as a 256-bit unsigned integer. All byte-level
/// conversions use big-endian ordering, matching the transport encoding used
/// by circuit artifacts.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FieldElement {
    value: U256,
}

impl FieldElement {
    /// Creates a field element representing zero.
    #[must_use]
    pub fn zero() -> Self {
        Self { value: U256::ZERO }
    }

    /// Creates a field element representing one.
    #[must_use]
    pub fn one() -> Self {
        Self { value: U256::ONE }
    }

    /// Constructs a new `FieldElement` from `bytes` in big-endian ordering.
    #[must_use]
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        let value = U256::from_be_bytes(bytes);
        Self { value }
    }

    /// Gets the bytes of the field element in big-endian ordering.
    #[must_use]
    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.value.to_be_bytes()
    }

    /// Parses a field element from a hexadecimal string, with or without a
    /// `0x` prefix.
    ///
    /// Returns [`None`] if `text` is not valid hexadecimal or encodes more
    /// than 32 bytes.
    #[must_use]
    pub fn from_hex(text: &str) -> Option<Self> {
        let digits = text.strip_prefix("0x").unwrap_or(text);
        let value = U256::from_str_radix(digits, 16).ok()?;
        Some(Self { value })
    }

    /// Formats the field element as a minimal `0x`-prefixed hexadecimal
    /// string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("{self}")
    }

    /// Interprets the low 128 bits of the element as an unsigned integer,
    /// returning [`None`] if the value does not fit.
    #[must_use]
    pub fn to_u128(&self) -> Option<u128> {
        if *self.value.high() == 0 {
            Some(*self.value.low())
        } else {
            None
        }
    }

    /// Checks whether the element is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value == U256::ZERO
    }
}

impl From<u128> for FieldElement {
    fn from(value: u128) -> Self {
        Self {
            value: U256::from(value),
        }
    }
}

impl From<u64> for FieldElement {
    fn from(value: u64) -> Self {
        Self {
            value: U256::from(value),
        }
    }
}

impl From<u32> for FieldElement {
    fn from(value: u32) -> Self {
        Self {
            value: U256::from(value),
        }
    }
}

impl From<bool> for FieldElement {
    fn from(value: bool) -> Self {
        if value {
            Self::one()
        } else {
            Self::zero()
        }
    }
}

/// Addition on the raw 256-bit store, wrapping on overflow.
impl std::ops::Add for FieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value.wrapping_add(rhs.value),
        }
    }
}

/// Subtraction on the raw 256-bit store, wrapping on underflow.
impl std::ops::Sub for FieldElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value.wrapping_sub(rhs.value),
        }
    }
}

/// Multiplication on the raw 256-bit store, wrapping on overflow.
impl std::ops::Mul for FieldElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value.wrapping_mul(rhs.value),
        }
    }
}

impl Display for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:x}", self.value)
    }
}
