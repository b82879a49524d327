//! This module contains the witness types that the engine exchanges with the
//! solver.
//!
//! A witness map is the flat, index-addressed view of a circuit's wires. The
//! engine builds the _initial_ witness map from the caller's flattened
//! arguments before solving, and reads the designated return wires out of the
//! _final_ witness map the solver produces.

use std::collections::{btree_map, BTreeMap};

use serde::{Deserialize, Serialize};

use crate::{constant::FIRST_ARGUMENT_WITNESS_INDEX, field::FieldElement};

/// The index of a single wire in a circuit's witness.
///
/// # Invariants
///
/// Valid witness indices are strictly positive. Index zero is reserved by the
/// solver and the engine never constructs an entry for it.
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct Witness(pub u32);

impl Witness {
    /// Gets the raw index of the wire.
    #[must_use]
    pub fn index(self) -> u32 {
        self.0
    }
}

impl From<u32> for Witness {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

/// A mapping from wire indices to their assigned field-element values.
///
/// Insertion order is irrelevant and keys are unique. The map is scoped to a
/// single execution and discarded once the return value has been decoded.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WitnessMap {
    assignments: BTreeMap<Witness, FieldElement>,
}

impl WitnessMap {
    /// Creates an empty witness map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the initial witness map for an execution from the caller's
    /// flattened `arguments`.
    ///
    /// The first argument is assigned witness index
    /// [`FIRST_ARGUMENT_WITNESS_INDEX`], the second the index after it, and
    /// so on with no gaps. This assignment is load-bearing: the circuit
    /// bytecode was compiled assuming exactly this layout, so no other
    /// indices are populated.
    ///
    /// # Panics
    ///
    /// Panics if the number of arguments exceeds [`u32::MAX`]. This is a
    /// programmer bug.
    #[must_use]
    pub fn from_arguments(arguments: &[FieldElement]) -> Self {
        let assignments = arguments
            .iter()
            .enumerate()
            .map(|(offset, value)| {
                let offset = u32::try_from(offset)
                    .unwrap_or_else(|_| panic!("Argument count should not exceed {}", u32::MAX));
                (Witness(FIRST_ARGUMENT_WITNESS_INDEX + offset), *value)
            })
            .collect();
        Self { assignments }
    }

    /// Inserts an assignment of `value` to the wire at `witness`, returning
    /// the previous assignment if one existed.
    pub fn insert(&mut self, witness: Witness, value: FieldElement) -> Option<FieldElement> {
        self.assignments.insert(witness, value)
    }

    /// Gets the value assigned to the wire at `witness`, if any.
    #[must_use]
    pub fn get(&self, witness: Witness) -> Option<&FieldElement> {
        self.assignments.get(&witness)
    }

    /// Checks whether the wire at `witness` has an assignment.
    #[must_use]
    pub fn contains(&self, witness: Witness) -> bool {
        self.assignments.contains_key(&witness)
    }

    /// Gets the number of assigned wires in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Checks whether the map contains no assignments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Iterates over the assignments in ascending wire-index order.
    pub fn iter(&self) -> impl Iterator<Item = (&Witness, &FieldElement)> {
        self.assignments.iter()
    }
}

impl FromIterator<(Witness, FieldElement)> for WitnessMap {
    fn from_iter<T: IntoIterator<Item = (Witness, FieldElement)>>(iter: T) -> Self {
        let assignments = iter.into_iter().collect();
        Self { assignments }
    }
}

impl IntoIterator for WitnessMap {
    type IntoIter = btree_map::IntoIter<Witness, FieldElement>;
    type Item = (Witness, FieldElement);

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.into_iter()
    }
}
