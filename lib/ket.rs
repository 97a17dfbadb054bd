//! Column state vectors.
//!
//! A [`Ket`] of order `n = 2^N` is the amplitude vector of an `N`-bit register
//! in the computational basis. Registers are joined with the tensor product
//! (`+`), overlaid entrywise (`^`), and transformed by gates (`op * ket`).
//!
//! Two bit conventions coexist here and are kept distinct:
//! - [`Ket::from_bits`], [`Ket::measure`] and [`Ket::collapse`] treat bit 0 as
//!   the *most* significant bit of a basis index, i.e. the first factor of the
//!   tensor product;
//! - [`Ket::swap_bits`] addresses bits of the index's binary representation
//!   with bit 0 as the *least* significant.
//!
//! # Example
//! ```
//! use braket_sim::{ gate, ket::Ket };
//! use rand::{ rngs::StdRng, SeedableRng };
//!
//! let mut rng = StdRng::seed_from_u64(10546);
//! let mut psi = &(gate::hadamard() + gate::hadamard()) * &Ket::from_bits([0_u8, 0]);
//! let b0 = psi.measure(0, &mut rng);
//! // the first bit is now definite, so measuring it again is deterministic
//! assert_eq!(psi.measure(0, &mut rng), b0);
//! ```

use std::{
    fmt,
    ops::{ Add, BitXor, Index, IndexMut, Mul },
};
use rand::Rng;
use tracing::trace;
use crate::{
    bra::Bra,
    complex::{ self, IntoC64, C64, ONE, ZERO },
    error::AlgebraError,
    operator::{ forward_binop, Operator },
    sample::{ Bit, Outcome },
};

/// A column vector of complex amplitudes.
#[derive(Clone, Debug, PartialEq)]
pub struct Ket(pub(crate) Operator);

impl TryFrom<Operator> for Ket {
    type Error = AlgebraError;

    fn try_from(op: Operator) -> Result<Self, Self::Error> {
        if op.cols() == 1 {
            Ok(Self(op))
        } else {
            Err(AlgebraError::NotColumn { rows: op.rows(), cols: op.cols() })
        }
    }
}

impl From<Ket> for Operator {
    fn from(ket: Ket) -> Self { ket.0 }
}

impl Ket {
    /// Create a new ket of order `order` with all amplitudes zero.
    pub fn zeros(order: usize) -> Self { Self(Operator::zeros(order, 1)) }

    /// Create a new ket from a list of integer, real, or complex amplitudes.
    ///
    /// The amplitudes are taken as-is, without normalization.
    pub fn from_amplitudes<T>(amps: &[T]) -> Self
    where T: IntoC64
    {
        Self(Operator::from_fn(amps.len(), 1, |r, _| amps[r].into_c64()))
    }

    /// Create a new order-2 ket in the classical state ∣`bit`⟩.
    pub fn from_bit<B>(bit: B) -> Self
    where B: Into<Bit>
    {
        let bit: Bit = bit.into();
        let mut k = Self::zeros(2);
        k[bit as usize] = ONE;
        k
    }

    /// Create a new ket in the classical state ∣b<sub>0</sub> b<sub>1</sub>
    /// ...⟩ by tensoring together single-bit kets from left to right.
    ///
    /// An empty pattern gives the order-1 ket `[1]`.
    pub fn from_bits<I>(bits: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Bit>,
    {
        bits.into_iter()
            .map(Self::from_bit)
            .fold(Self(Operator::from_rows(&[[ONE]])), |acc, k| acc + k)
    }

    /// Return the number of amplitudes.
    pub fn order(&self) -> usize { self.0.rows() }

    /// Return the number of bits in the register, `floor(log2(order))`.
    pub fn num_bits(&self) -> usize {
        self.order().checked_ilog2().map_or(0, |b| b as usize)
    }

    /// Return a reference to `self` as a general operator.
    pub fn as_operator(&self) -> &Operator { &self.0 }

    /// Iterate over the amplitudes in index order.
    pub fn amplitudes(&self) -> impl Iterator<Item = C64> + '_ {
        self.0.data.iter().copied()
    }

    /// Return the squared magnitude of every amplitude.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes().map(complex::squared_magnitude).collect()
    }

    /// Total probability mass.
    pub fn sum_squared_magnitudes(&self) -> f64 {
        self.0.sum_squared_magnitudes()
    }

    /// Reset every amplitude to zero, in place.
    pub fn clear(&mut self) { self.0.clear(); }

    /// Rescale to unit total probability, in place.
    ///
    /// The zero vector is not special-cased, and normalizes to NaNs.
    pub fn normalise(&mut self) -> &mut Self {
        let scale = self.0.sum_squared_magnitudes().sqrt();
        self.0.data.iter_mut().for_each(|a| { *a /= scale; });
        self
    }

    /// Like [`Self::normalise`], but returning a new ket.
    pub fn normalised(&self) -> Self {
        let mut k = self.clone();
        k.normalise();
        k
    }

    /// Return the dual row vector, conjugating every amplitude.
    pub fn bra(&self) -> Bra { Bra(self.0.dagger()) }

    /// Entrywise sum of two kets of equal order.
    pub fn checked_overlay(&self, rhs: &Self) -> Result<Self, AlgebraError> {
        if self.order() != rhs.order() {
            return Err(AlgebraError::OrderMismatch {
                op: "overlay",
                left: self.order(),
                right: rhs.order(),
            });
        }
        Ok(Self(Operator::from(&self.0.data + &rhs.0.data)))
    }

    /// Apply `op` as a matrix-vector product, failing if `op.cols() !=
    /// self.order()`.
    ///
    /// The order of the result is `op.rows()`.
    pub fn checked_apply(&self, op: &Operator) -> Result<Self, AlgebraError> {
        op.checked_mul(&self.0).map(Self)
    }

    fn check_bit(&self, bit: usize) {
        let bits = self.num_bits();
        if bit >= bits {
            panic!("{}", AlgebraError::BitOutOfRange { bit, bits });
        }
    }

    /// Return a new ket with bits `a` and `b` of every basis index exchanged,
    /// moving each amplitude accordingly.
    ///
    /// Bit positions count from the least significant bit of the index.
    ///
    /// *Panics if either position is not less than [`Self::num_bits`].*
    pub fn swap_bits(&self, a: usize, b: usize) -> Self {
        self.check_bit(a);
        self.check_bit(b);
        let swapped = |r: usize| -> usize {
            if (r >> a) & 1 == (r >> b) & 1 { r } else { r ^ (1 << a) ^ (1 << b) }
        };
        Self(Operator::from_fn(self.order(), 1, |r, _| self[swapped(r)]))
    }

    /// Perform a projective measurement on the `bit`-th bit, returning the
    /// outcome.
    ///
    /// `self` is first normalized. The probability of `Zero` is the total
    /// squared magnitude of all basis indices `r` for which
    /// `(r / (order >> (bit + 1))) % 2 == 0`; a single uniform sample in `[0,
    /// 1)` drawn from `rng` selects `Zero` if it falls below this probability.
    /// Every amplitude inconsistent with the outcome is then set to zero and
    /// the state renormalized.
    ///
    /// *Panics if `bit` is not less than [`Self::num_bits`].*
    pub fn measure<R>(&mut self, bit: usize, rng: &mut R) -> Bit
    where R: Rng + ?Sized
    {
        self.check_bit(bit);
        self.normalise();
        let divisor = self.order() >> (bit + 1);
        let is_zero = |r: usize| (r / divisor) % 2 == 0;
        let p0: f64
            = (0..self.order())
            .filter(|r| is_zero(*r))
            .map(|r| complex::squared_magnitude(self[r]))
            .sum();
        let sample: f64 = rng.gen();
        let outcome = if sample < p0 { Bit::Zero } else { Bit::One };
        for r in 0..self.order() {
            if is_zero(r) != (outcome == Bit::Zero) { self[r] = ZERO; }
        }
        self.normalise();
        trace!(bit, p0, sample, %outcome, "measured");
        outcome
    }

    /// Measure every bit in ascending order, returning the full classical
    /// outcome.
    ///
    /// The order of `self` should be a power of two.
    pub fn collapse<R>(&mut self, rng: &mut R) -> Outcome
    where R: Rng + ?Sized
    {
        let outcome: Outcome
            = (0..self.num_bits())
            .map(|k| self.measure(k, &mut *rng))
            .collect();
        trace!(%outcome, "collapsed");
        outcome
    }
}

impl Index<usize> for Ket {
    type Output = C64;

    fn index(&self, r: usize) -> &Self::Output { &self.0[(r, 0)] }
}

impl IndexMut<usize> for Ket {
    fn index_mut(&mut self, r: usize) -> &mut Self::Output {
        &mut self.0[(r, 0)]
    }
}

impl fmt::Display for Ket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Tensor product.
impl Add<&Ket> for &Ket {
    type Output = Ket;

    fn add(self, rhs: &Ket) -> Self::Output { Ket(self.0.tensor(&rhs.0)) }
}
forward_binop!(impl Add, add for Ket, Ket => Ket);

/// Entrywise sum.
///
/// *Panics if the orders differ.*
impl BitXor<&Ket> for &Ket {
    type Output = Ket;

    fn bitxor(self, rhs: &Ket) -> Self::Output {
        self.checked_overlay(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}
forward_binop!(impl BitXor, bitxor for Ket, Ket => Ket);

/// Gate application.
///
/// *Panics if `self.cols() != rhs.order()`.*
impl Mul<&Ket> for &Operator {
    type Output = Ket;

    fn mul(self, rhs: &Ket) -> Self::Output {
        rhs.checked_apply(self).unwrap_or_else(|err| panic!("{err}"))
    }
}
forward_binop!(impl Mul, mul for Operator, Ket => Ket);

#[cfg(test)]
mod test {
    use super::*;
    use rand::{ rngs::StdRng, RngCore, SeedableRng };
    use crate::{ complex::I, gate };

    const EPS: f64 = 1e-12;

    // always yields the same word; `Standard` maps `u64` words `w` to
    // `(w >> 11) * 2^-53`
    struct Fixed(u64);

    impl RngCore for Fixed {
        fn next_u32(&mut self) -> u32 { self.0 as u32 }

        fn next_u64(&mut self) -> u64 { self.0 }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let word = self.0.to_le_bytes();
            dest.iter_mut().zip(word.iter().cycle()).for_each(|(d, w)| { *d = *w; });
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8])
            -> Result<(), rand::Error>
        {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    const HALF: u64 = 1 << 63;

    fn uniform2() -> Ket {
        &(gate::hadamard() + gate::hadamard()) * &Ket::from_bits([0_u8, 0])
    }

    #[test]
    fn construction() {
        let k = Ket::zeros(4);
        assert_eq!(k.order(), 4);
        assert_eq!(k.sum_squared_magnitudes(), 0.0);

        let k = Ket::from_amplitudes(&[1, 2, 3]);
        assert_eq!(k.order(), 3);
        assert_eq!(k[2], C64::new(3.0, 0.0));
        assert_eq!(k, Ket::from_amplitudes(&[1.0, 2.0, 3.0]));

        let k = Ket::from_amplitudes(&[I, ONE]);
        assert_eq!(k[0], I);

        assert_eq!(Ket::from_bit(false), Ket::from_amplitudes(&[1, 0]));
        assert_eq!(Ket::from_bit(true), Ket::from_amplitudes(&[0, 1]));
    }

    #[test]
    fn from_bits_is_tensor_of_single_bits() {
        let k = Ket::from_bits([1_u8, 0, 1]);
        assert_eq!(k.order(), 8);
        assert_eq!(k.num_bits(), 3);
        assert_eq!(k[0b101], ONE);
        assert_eq!(k.sum_squared_magnitudes(), 1.0);
        assert_eq!(
            k,
            Ket::from_bit(true) + Ket::from_bit(false) + Ket::from_bit(true),
        );
        assert_eq!(Ket::from_bits(Vec::<Bit>::new()), Ket::from_amplitudes(&[1]));
    }

    #[test]
    fn try_from_operator() {
        assert!(Ket::try_from(Operator::zeros(4, 1)).is_ok());
        assert_eq!(
            Ket::try_from(Operator::zeros(2, 2)),
            Err(AlgebraError::NotColumn { rows: 2, cols: 2 }),
        );
    }

    #[test]
    fn normalisation() {
        let k = Ket::from_amplitudes(&[3.0, 4.0]);
        let n = k.normalised();
        assert_eq!(k.sum_squared_magnitudes(), 25.0);
        assert!((n.sum_squared_magnitudes() - 1.0).abs() < EPS);
        assert_eq!(n, Ket::from_amplitudes(&[0.6, 0.8]));

        let mut m = k.clone();
        m.normalise();
        assert_eq!(m, n);
    }

    #[test]
    fn normalising_zero_gives_nan() {
        let n = Ket::zeros(2).normalised();
        assert!(n[0].re.is_nan());
    }

    #[test]
    fn tensor_of_kets() {
        let a = Ket::from_amplitudes(&[1, 2]);
        let b = Ket::from_amplitudes(&[3, 4, 5]);
        assert_eq!(&a + &b, Ket::from_amplitudes(&[3, 4, 5, 6, 8, 10]));
    }

    #[test]
    fn overlay() {
        let a = Ket::from_bit(false);
        let b = Ket::from_bit(true);
        assert_eq!(&a ^ &b, Ket::from_amplitudes(&[1, 1]));
        assert_eq!(
            a.checked_overlay(&Ket::zeros(4)),
            Err(AlgebraError::OrderMismatch { op: "overlay", left: 2, right: 4 }),
        );
    }

    #[test]
    fn overlay_is_entrywise() {
        let a = Ket::from_amplitudes(&[ONE, I, C64::new(0.5, -2.0)]);
        let b = Ket::from_amplitudes(&[I, -I, C64::new(1.5, 2.0)]);
        let s = &a ^ &b;
        assert_eq!(s.order(), 3);
        assert_eq!(s, Ket::from_amplitudes(&[C64::new(1.0, 1.0), ZERO, C64::new(2.0, 0.0)]));
        assert_eq!(a.checked_overlay(&b), Ok(s));
    }

    #[test]
    #[should_panic(expected = "order mismatch")]
    fn overlay_mismatch_panics() {
        let _ = Ket::zeros(2) ^ Ket::zeros(4);
    }

    #[test]
    fn gate_application() {
        let ones = &(gate::not() + gate::not()) * &Ket::from_bits([0_u8, 0]);
        assert_eq!(ones, Ket::from_bits([1_u8, 1]));

        let k = &gate::cnot() * &Ket::from_bits([1_u8, 0]);
        assert_eq!(k, Ket::from_bits([1_u8, 1]));
        let k = &gate::cnot() * &Ket::from_bits([0_u8, 1]);
        assert_eq!(k, Ket::from_bits([0_u8, 1]));

        for p in uniform2().probabilities() {
            assert!((p - 0.25).abs() < EPS);
        }
    }

    #[test]
    fn non_square_application_takes_operator_rows() {
        let op = Operator::from_rows(&[[1, 1]]);
        let k = &op * &Ket::from_amplitudes(&[2, 3]);
        assert_eq!(k, Ket::from_amplitudes(&[5]));
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn mismatched_application_panics() {
        let _ = gate::cnot() * Ket::from_bit(false);
    }

    #[test]
    fn swap_bits_moves_amplitudes() {
        let k = Ket::from_amplitudes(&[0, 1, 2, 3, 4, 5, 6, 7]);
        let s = k.swap_bits(0, 2);
        // 001 <-> 100, 011 <-> 110
        assert_eq!(s, Ket::from_amplitudes(&[0, 4, 2, 6, 1, 5, 3, 7]));
        assert_eq!(k.swap_bits(1, 1), k);
        assert_eq!(s.swap_bits(0, 2), k);
    }

    #[test]
    fn swap_bits_matches_swap_gate() {
        let k = Ket::from_amplitudes(&[ONE, I, C64::new(0.5, 0.0), -ONE]);
        assert_eq!(k.swap_bits(0, 1), &gate::swap() * &k);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn swap_bits_out_of_range() {
        let _ = Ket::zeros(4).swap_bits(0, 2);
    }

    #[test]
    fn bra_conjugates() {
        let k = Ket::from_amplitudes(&[C64::new(1.0, 2.0), C64::new(-3.0, -4.0)]);
        let b = k.bra();
        assert_eq!(b.order(), 2);
        assert_eq!(b[1], C64::new(-3.0, 4.0));
        assert_eq!(b.ket(), k);
    }

    #[test]
    fn measure_deterministic_states() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut k = Ket::from_bits([0_u8, 1]);
        assert_eq!(k.measure(0, &mut rng), Bit::Zero);
        assert_eq!(k.measure(1, &mut rng), Bit::One);
        assert_eq!(k, Ket::from_bits([0_u8, 1]));
    }

    #[test]
    fn measure_uses_the_sample_threshold() {
        // P(bit 0 = 0) = 0.25 for this state
        let k = Ket::from_amplitudes(&[0.5, 0.0, 0.75_f64.sqrt(), 0.0]);

        let mut low = k.clone();
        assert_eq!(low.measure(0, &mut Fixed(0)), Bit::Zero);
        assert!(
            low.as_operator()
                .approx_eq(Ket::from_amplitudes(&[1, 0, 0, 0]).as_operator(), EPS)
        );
        assert_eq!(low[2], ZERO);

        let mut high = k.clone();
        assert_eq!(high.measure(0, &mut Fixed(HALF)), Bit::One);
        assert_eq!(high[0], ZERO);
        assert_eq!(high[1], ZERO);
        assert!((high[2].re - 1.0).abs() < EPS);
    }

    #[test]
    fn measure_zeroes_inconsistent_amplitudes() {
        let mut rng = StdRng::seed_from_u64(987);
        for _ in 0..50 {
            let mut k = uniform2();
            let b = k.measure(0, &mut rng);
            assert!((k.sum_squared_magnitudes() - 1.0).abs() < EPS);
            // bit 0 is the high bit of the index
            let (kept, dropped) = match b {
                Bit::Zero => ([0, 1], [2, 3]),
                Bit::One => ([2, 3], [0, 1]),
            };
            for r in dropped { assert_eq!(k[r], ZERO); }
            for r in kept { assert!((k[r].norm_sqr() - 0.5).abs() < EPS); }
        }
    }

    #[test]
    fn measure_normalises_first() {
        let mut k = Ket::from_amplitudes(&[0, 0, 3, 0]);
        assert_eq!(k.measure(0, &mut Fixed(0)), Bit::One);
        assert_eq!(k, Ket::from_amplitudes(&[0, 0, 1, 0]));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn measure_out_of_range() {
        let _ = Ket::from_bit(true).measure(1, &mut Fixed(0));
    }

    #[test]
    fn collapse_gives_a_basis_state() {
        let mut rng = StdRng::seed_from_u64(55);
        let mut k = &gate::fourier(3) * &Ket::from_bits([0_u8, 1, 1]);
        let outcome = k.collapse(&mut rng);
        assert_eq!(outcome.len(), 3);
        let idx = outcome.to_index();
        assert!((k[idx].norm_sqr() - 1.0).abs() < 1e-9);
        for r in (0..8).filter(|r| *r != idx) {
            assert_eq!(k[r], ZERO);
        }
    }

    #[test]
    fn collapse_order_one() {
        let mut k = Ket::from_amplitudes(&[I]);
        assert!(k.collapse(&mut Fixed(0)).is_empty());
    }

    #[test]
    fn display() {
        let k = Ket::from_bit(true);
        assert_eq!(k.to_string(), "0.00+0.00i   \n1.00+0.00i   \n");
    }
}
