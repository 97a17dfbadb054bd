//! Shape errors raised by the algebra.
//!
//! The operator overloads treat these as violated preconditions and panic with
//! the corresponding message; the `checked_*` and `TryFrom` forms return them
//! instead.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// Inner dimensions of a matrix product disagree.
    #[error("dimension mismatch in {op}: left is {}x{}, right is {}x{}", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Two state vectors of different order were combined entrywise.
    #[error("order mismatch in {op}: {left} vs {right}")]
    OrderMismatch {
        op: &'static str,
        left: usize,
        right: usize,
    },

    #[error("a ket must have exactly one column, got {rows}x{cols}")]
    NotColumn { rows: usize, cols: usize },

    #[error("a bra must have exactly one row, got {rows}x{cols}")]
    NotRow { rows: usize, cols: usize },

    /// A bit position outside the register was addressed.
    #[error("bit {bit} is out of range for a {bits}-bit register")]
    BitOutOfRange { bit: usize, bits: usize },
}
