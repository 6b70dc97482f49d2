//! Purpose: JSON text boundary shared by the convenience entry points.
//! Exports: `parse` (text to tree) and `write` (tree to text) helpers.
//! Role: Single seam for serde_json usage so callsites avoid ad hoc decode logic.
//! Invariants: serde_json errors are mapped to crate `ErrorKind`s only here.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub(crate) mod parse;
pub(crate) mod write;
