//! Library of named gate matrices.
//!
//! Fixed gates are built once on first use and handed out as clones, so each
//! caller owns an independent [`Operator`].
//!
//! Multi-qubit gates use the same index convention as [`Ket::from_bits`]: the
//! first bit of a register is the most significant bit of a basis index.
//!
//! [`Ket::from_bits`]: crate::ket::Ket::from_bits

use std::f64::consts::{ FRAC_1_SQRT_2, FRAC_PI_4, PI };
use once_cell::sync::Lazy;
use crate::{
    complex::{ self, C64, I, ONE, ZERO },
    operator::Operator,
};

static IDENTITY: Lazy<Operator> = Lazy::new(|| {
    Operator::from_rows(&[
        [1.0, 0.0],
        [0.0, 1.0],
    ])
});

static NOT: Lazy<Operator> = Lazy::new(|| {
    Operator::from_rows(&[
        [0.0, 1.0],
        [1.0, 0.0],
    ])
});

static HADAMARD: Lazy<Operator> = Lazy::new(|| {
    Operator::from_rows(&[
        [FRAC_1_SQRT_2,  FRAC_1_SQRT_2],
        [FRAC_1_SQRT_2, -FRAC_1_SQRT_2],
    ])
});

static CNOT: Lazy<Operator> = Lazy::new(|| {
    Operator::from_rows(&[
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
        [0.0, 0.0, 1.0, 0.0],
    ])
});

static SWAP: Lazy<Operator> = Lazy::new(|| {
    Operator::from_rows(&[
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
});

// ZERO and ONE share the same (non-unitary) matrix
static ZERO_ONE: Lazy<Operator> = Lazy::new(|| {
    Operator::from_rows(&[
        [1.0, 1.0],
        [0.0, 0.0],
    ])
});

static PAULI_Y: Lazy<Operator> = Lazy::new(|| {
    Operator::from_rows(&[
        [ZERO, -I  ],
        [I,    ZERO],
    ])
});

static PAULI_Z: Lazy<Operator> = Lazy::new(|| {
    Operator::from_rows(&[
        [1.0,  0.0],
        [0.0, -1.0],
    ])
});

static PHASE_S: Lazy<Operator> = Lazy::new(|| {
    Operator::from_rows(&[
        [ONE,  ZERO],
        [ZERO, I   ],
    ])
});

static PHASE_T: Lazy<Operator> = Lazy::new(|| {
    Operator::from_rows(&[
        [ONE,  ZERO               ],
        [ZERO, C64::cis(FRAC_PI_4)],
    ])
});

/// Single-qubit identity.
pub fn identity() -> Operator { IDENTITY.clone() }

/// Bit flip (Pauli X).
pub fn not() -> Operator { NOT.clone() }

/// Hadamard, `1/√2 [[1, 1], [1, -1]]`.
pub fn hadamard() -> Operator { HADAMARD.clone() }

/// Controlled NOT with the first qubit as control.
pub fn cnot() -> Operator { CNOT.clone() }

/// Two-qubit swap.
pub fn swap() -> Operator { SWAP.clone() }

/// `[[1, 1], [0, 0]]`.
///
/// **Note**: this is neither unitary nor a projector, and is identical to
/// [`one`].
pub fn zero() -> Operator { ZERO_ONE.clone() }

/// `[[1, 1], [0, 0]]`.
///
/// **Note**: this is neither unitary nor a projector, and is identical to
/// [`zero`].
pub fn one() -> Operator { ZERO_ONE.clone() }

/// Pauli Y.
pub fn pauli_y() -> Operator { PAULI_Y.clone() }

/// Pauli Z.
pub fn pauli_z() -> Operator { PAULI_Z.clone() }

/// π/2 phase rotation (S = Z<sup>1/2</sup>).
pub fn phase_s() -> Operator { PHASE_S.clone() }

/// π/4 phase rotation (T = Z<sup>1/4</sup>).
pub fn phase_t() -> Operator { PHASE_T.clone() }

/// Quantum Fourier transform on `bits` qubits.
///
/// With `n = 2^bits` and `w = e^(2πi/n)`, entry `(r, c)` is
/// `w^(r c) / √n`, where the power is taken by repeated multiplication.
pub fn fourier(bits: usize) -> Operator {
    let n: usize = 1 << bits;
    let angle = 2.0 * PI / n as f64;
    let w = C64::new(angle.cos(), angle.sin());
    let norm = (n as f64).sqrt();
    Operator::from_fn(n, n, |r, c| complex::pow(w, r * c) / norm)
}
