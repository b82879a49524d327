//! This module contains the debug symbol table that accompanies compiled
//! functions, and the reconstruction of source-level call stacks from raw
//! solver failures.
//!
//! Reconstruction is deliberately a pure function of the failure and the
//! table, separate from the control flow that decides whether to run it, so
//! it can be tested without ever invoking a solver.

use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter},
};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::solver::SolveFailure;

/// A single source-level frame in a reconstructed call stack.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct SourceLocation {
    /// The path of the source file, as recorded at compile time.
    pub file: String,

    /// The one-based line number within the file.
    pub line: u32,

    /// The one-based column number within the line.
    pub column: u32,
}

impl SourceLocation {
    /// Constructs a new source location in `file` at `line` and `column`.
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl Display for SourceLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// The debug symbol table for one compiled function, mapping raw opcode
/// locations to the source-level frames that were inlined there.
///
/// The table is emitted by the compiler alongside the bytecode and ships
/// inside the function's artifact. It is optional: artifacts compiled
/// without debug information simply have none, in which case call stacks
/// come back empty.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct DebugInfo {
    /// The source frames for each opcode location, outermost call first.
    pub locations: BTreeMap<u64, Vec<SourceLocation>>,
}

impl DebugInfo {
    /// Creates a new debug symbol table from the provided `locations`.
    #[must_use]
    pub fn new(locations: BTreeMap<u64, Vec<SourceLocation>>) -> Self {
        Self { locations }
    }
}

/// Reconstructs a source-level call stack from the raw `failure` and the
/// function's debug symbol table.
///
/// Each raw opcode location in the failure's trace is resolved through the
/// table and its frames appended in order, outermost first. Resolution is
/// best effort: locations with no table entry are skipped, and an absent
/// table yields an empty stack.
#[must_use]
pub fn extract_call_stack(
    failure: &SolveFailure,
    debug: Option<&DebugInfo>,
) -> Vec<SourceLocation> {
    let Some(debug) = debug else {
        return Vec::new();
    };

    failure
        .trace
        .iter()
        .filter_map(|location| debug.locations.get(&location.0))
        .flatten()
        .cloned()
        .collect()
}

/// Renders a reconstructed call stack for display, one frame per line with
/// the innermost frame last.
#[must_use]
pub fn render_call_stack(frames: &[SourceLocation]) -> String {
    frames.iter().map(|frame| format!("  at {frame}")).join("\n")
}
