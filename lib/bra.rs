//! Row state vectors, dual to [`Ket`].

use std::{
    fmt,
    ops::{ Index, IndexMut, Mul },
};
use crate::{
    complex::{ IntoC64, C64 },
    error::AlgebraError,
    ket::Ket,
    operator::{ forward_binop, Operator },
};

/// A row vector of complex amplitudes.
#[derive(Clone, Debug, PartialEq)]
pub struct Bra(pub(crate) Operator);

impl TryFrom<Operator> for Bra {
    type Error = AlgebraError;

    fn try_from(op: Operator) -> Result<Self, Self::Error> {
        if op.rows() == 1 {
            Ok(Self(op))
        } else {
            Err(AlgebraError::NotRow { rows: op.rows(), cols: op.cols() })
        }
    }
}

impl From<Bra> for Operator {
    fn from(bra: Bra) -> Self { bra.0 }
}

impl Bra {
    /// Create a new bra of order `order` with all amplitudes zero.
    pub fn zeros(order: usize) -> Self { Self(Operator::zeros(1, order)) }

    /// Create a new bra from a list of integer, real, or complex amplitudes,
    /// laid out as a single row.
    pub fn from_amplitudes<T>(amps: &[T]) -> Self
    where T: IntoC64
    {
        Self(Operator::from_fn(1, amps.len(), |_, c| amps[c].into_c64()))
    }

    /// Return the number of amplitudes.
    pub fn order(&self) -> usize { self.0.cols() }

    /// Return a reference to `self` as a general operator.
    pub fn as_operator(&self) -> &Operator { &self.0 }

    /// Return the dual column vector, conjugating every amplitude.
    pub fn ket(&self) -> Ket { Ket(self.0.dagger()) }

    /// Inner product ⟨`self`∣`ket`⟩ = Σ<sub>i</sub> `self[i] ket[i]`, failing
    /// if the orders differ.
    pub fn checked_inner(&self, ket: &Ket) -> Result<C64, AlgebraError> {
        if self.order() != ket.order() {
            return Err(AlgebraError::OrderMismatch {
                op: "inner product",
                left: self.order(),
                right: ket.order(),
            });
        }
        Ok((&self.0.data * &ket.0.data)[(0, 0)])
    }
}

impl Index<usize> for Bra {
    type Output = C64;

    fn index(&self, c: usize) -> &Self::Output { &self.0[(0, c)] }
}

impl IndexMut<usize> for Bra {
    fn index_mut(&mut self, c: usize) -> &mut Self::Output {
        &mut self.0[(0, c)]
    }
}

impl fmt::Display for Bra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Inner product.
///
/// *Panics if the orders differ.*
impl Mul<&Ket> for &Bra {
    type Output = C64;

    fn mul(self, rhs: &Ket) -> Self::Output {
        self.checked_inner(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}
forward_binop!(impl Mul, mul for Bra, Ket => C64);
