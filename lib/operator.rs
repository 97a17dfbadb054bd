//! General complex matrices.
//!
//! An [`Operator`] is a dense `R × C` grid of [`C64`] values, backed by an
//! [`nalgebra::DMatrix`]. Operators behave as values: the tensor product
//! (`+`), matrix product (`*`) and scalar product all construct new operators,
//! and the only in-place mutators are element assignment and
//! [`Operator::clear`].
//!
//! ```
//! use braket_sim::{ gate, operator::Operator };
//!
//! let id2 = gate::identity() + gate::identity();
//! assert_eq!(id2.shape(), (4, 4));
//! assert_eq!(id2, Operator::from_rows(&[
//!     [1, 0, 0, 0],
//!     [0, 1, 0, 0],
//!     [0, 0, 1, 0],
//!     [0, 0, 0, 1],
//! ]));
//! ```

use std::{
    fmt,
    ops::{ Add, Index, IndexMut, Mul },
};
use nalgebra as na;
use crate::{
    complex::{ self, Cell, IntoC64, C64, ZERO },
    error::AlgebraError,
};

/// A dense complex matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Operator {
    pub(crate) data: na::DMatrix<C64>,
}

impl Default for Operator {
    fn default() -> Self { Self::new() }
}

impl From<na::DMatrix<C64>> for Operator {
    fn from(data: na::DMatrix<C64>) -> Self { Self { data } }
}

impl From<Operator> for na::DMatrix<C64> {
    fn from(op: Operator) -> Self { op.data }
}

impl Operator {
    /// Create a new 0 × 0 operator.
    pub fn new() -> Self { Self::zeros(0, 0) }

    /// Create a new `rows × cols` operator with all entries zero.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self { data: na::DMatrix::from_element(rows, cols, ZERO) }
    }

    /// Create a new operator with entries given by `f(row, col)`.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where F: FnMut(usize, usize) -> C64
    {
        Self { data: na::DMatrix::from_fn(rows, cols, |r, c| f(r, c)) }
    }

    /// Create a new operator from a row-major grid of integers, reals, or
    /// complex values.
    pub fn from_rows<T, const C: usize>(rows: &[[T; C]]) -> Self
    where T: IntoC64
    {
        Self::from_fn(rows.len(), C, |r, c| rows[r][c].into_c64())
    }

    /// Return the number of rows.
    pub fn rows(&self) -> usize { self.data.nrows() }

    /// Return the number of columns.
    pub fn cols(&self) -> usize { self.data.ncols() }

    /// Return `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) { self.data.shape() }

    /// Return a reference to the underlying matrix.
    pub fn as_matrix(&self) -> &na::DMatrix<C64> { &self.data }

    /// Total probability mass, Σ |a<sub>rc</sub>|².
    pub fn sum_squared_magnitudes(&self) -> f64 {
        self.data.iter().copied().map(complex::squared_magnitude).sum()
    }

    /// Reset every entry to zero, in place.
    pub fn clear(&mut self) { self.data.fill(ZERO); }

    /// Tensor (Kronecker) product of `self` with `rhs`.
    ///
    /// For `self` of shape `Ra × Ca` and `rhs` of shape `Rb × Cb` the result is
    /// `(Ra Rb) × (Ca Cb)`, with entry `(ar Rb + br, ac Cb + bc)` equal to
    /// `self[ar, ac] × rhs[br, bc]`.
    pub fn tensor(&self, rhs: &Self) -> Self {
        Self { data: self.data.kronecker(&rhs.data) }
    }

    /// Matrix product `self · rhs`, failing if `self.cols() != rhs.rows()`.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, AlgebraError> {
        if self.cols() != rhs.rows() {
            return Err(AlgebraError::DimensionMismatch {
                op: "matrix multiplication",
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        Ok(Self { data: &self.data * &rhs.data })
    }

    /// Multiply every entry by `scalar`.
    pub fn scale(&self, scalar: C64) -> Self {
        Self { data: self.data.map(|a| a * scalar) }
    }

    /// Conjugate transpose.
    pub fn dagger(&self) -> Self {
        Self { data: self.data.map(|a| a.conj()).transpose() }
    }

    /// Return `true` if `self` and `other` have the same shape and all entries
    /// agree to within `eps`.
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        self.shape() == other.shape()
            && self.data.iter().zip(other.data.iter())
                .all(|(a, b)| complex::approx_eq(*a, *b, eps))
    }

    /// Return `true` if `self` is square and U U<sup>†</sup> = I to within
    /// `eps`.
    pub fn is_unitary(&self, eps: f64) -> bool {
        let (rows, cols) = self.shape();
        if rows != cols { return false; }
        let eye = Self { data: na::DMatrix::identity(rows, cols) };
        (self * &self.dagger()).approx_eq(&eye, eps)
    }
}

impl Index<(usize, usize)> for Operator {
    type Output = C64;

    fn index(&self, idx: (usize, usize)) -> &Self::Output { &self.data[idx] }
}

impl IndexMut<(usize, usize)> for Operator {
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        &mut self.data[idx]
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                write!(f, "{} ", Cell(self.data[(r, c)]))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// forward the owned/borrowed combinations of a binary operator to the
// `&lhs op &rhs` implementation
macro_rules! forward_binop {
    (
        impl $trait:ident, $trait_fn:ident for $lhs:ty, $rhs:ty => $out:ty
    ) => {
        impl $trait<$rhs> for $lhs {
            type Output = $out;

            fn $trait_fn(self, rhs: $rhs) -> Self::Output {
                (&self).$trait_fn(&rhs)
            }
        }

        impl $trait<&$rhs> for $lhs {
            type Output = $out;

            fn $trait_fn(self, rhs: &$rhs) -> Self::Output {
                (&self).$trait_fn(rhs)
            }
        }

        impl $trait<$rhs> for &$lhs {
            type Output = $out;

            fn $trait_fn(self, rhs: $rhs) -> Self::Output {
                self.$trait_fn(&rhs)
            }
        }
    }
}
pub(crate) use forward_binop;

/// Tensor product.
impl Add<&Operator> for &Operator {
    type Output = Operator;

    fn add(self, rhs: &Operator) -> Self::Output { self.tensor(rhs) }
}
forward_binop!(impl Add, add for Operator, Operator => Operator);

/// Matrix product.
///
/// *Panics if `self.cols() != rhs.rows()`.*
impl Mul<&Operator> for &Operator {
    type Output = Operator;

    fn mul(self, rhs: &Operator) -> Self::Output {
        self.checked_mul(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}
forward_binop!(impl Mul, mul for Operator, Operator => Operator);

impl Mul<C64> for &Operator {
    type Output = Operator;

    fn mul(self, rhs: C64) -> Self::Output { self.scale(rhs) }
}

impl Mul<C64> for Operator {
    type Output = Operator;

    fn mul(self, rhs: C64) -> Self::Output { self.scale(rhs) }
}

impl Mul<f64> for &Operator {
    type Output = Operator;

    fn mul(self, rhs: f64) -> Self::Output { self.scale(rhs.into()) }
}

impl Mul<f64> for Operator {
    type Output = Operator;

    fn mul(self, rhs: f64) -> Self::Output { self.scale(rhs.into()) }
}
