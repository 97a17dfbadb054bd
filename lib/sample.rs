//! Classical measurement records and a seedable driver for repeated collapse.
//!
//! All randomness in the crate enters through an explicit [`rand::Rng`]; the
//! [`Sampler`] here simply owns one, so that runs can be replayed from a seed.
//!
//! # Example
//! ```
//! use braket_sim::{ gate, ket::Ket, sample::{ Outcome, Sampler, SamplerConfig } };
//!
//! let bell = &gate::cnot() * &(&(gate::hadamard() + gate::identity())
//!     * &Ket::from_bits([0_u8, 0]));
//!
//! let config = SamplerConfig { shots: 500, seed: Some(1) };
//! let counts = Sampler::new(config).run(&bell);
//! assert_eq!(counts.shots(), 500);
//! // only ∣00⟩ and ∣11⟩ are ever observed
//! assert_eq!(counts.get(&Outcome::from_iter([0_u8, 1])), 0);
//! assert_eq!(counts.get(&Outcome::from_iter([1_u8, 0])), 0);
//! ```

use std::fmt;
use itertools::Itertools;
use rand::{ rngs::StdRng, SeedableRng };
use rustc_hash::FxHashMap;
use tracing::debug;
use crate::ket::Ket;

/// A single classical bit produced by a measurement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bit {
    /// ∣0⟩
    Zero,
    /// ∣1⟩
    One,
}

impl Bit {
    /// Return `true` if `self` is `One`.
    pub fn is_one(self) -> bool { matches!(self, Self::One) }
}

impl From<bool> for Bit {
    fn from(b: bool) -> Self { if b { Self::One } else { Self::Zero } }
}

/// Any nonzero value is `One`.
impl From<u8> for Bit {
    fn from(b: u8) -> Self { Self::from(b != 0) }
}

/// Any nonzero value is `One`.
impl From<i32> for Bit {
    fn from(b: i32) -> Self { Self::from(b != 0) }
}

impl From<Bit> for u8 {
    fn from(b: Bit) -> Self { b as u8 }
}

impl From<Bit> for bool {
    fn from(b: Bit) -> Self { b.is_one() }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Zero => write!(f, "0"),
            Self::One => write!(f, "1"),
        }
    }
}

/// An ordered string of measured bits.
///
/// Bit `k` of the outcome is the result of measuring bit `k` of the register,
/// in the same order accepted by [`Ket::from_bits`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Outcome(pub Vec<Bit>);

impl Outcome {
    /// Return the number of bits.
    pub fn len(&self) -> usize { self.0.len() }

    /// Return `true` if no bits were measured.
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Return the bits as a slice.
    pub fn bits(&self) -> &[Bit] { &self.0 }

    /// Iterate over the bits in measurement order.
    pub fn iter(&self) -> impl Iterator<Item = Bit> + '_ {
        self.0.iter().copied()
    }

    /// Convert to the basis index of the corresponding state, reading the
    /// first bit as the most significant.
    pub fn to_index(&self) -> usize {
        self.0.iter().fold(0, |acc, b| (acc << 1) | usize::from(b.is_one()))
    }

    /// Convert back to the classical state.
    pub fn to_ket(&self) -> Ket { Ket::from_bits(self.iter()) }
}

impl<B> FromIterator<B> for Outcome
where B: Into<Bit>
{
    fn from_iter<I>(iter: I) -> Self
    where I: IntoIterator<Item = B>
    {
        Self(iter.into_iter().map(|b| b.into()).collect())
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(""))
    }
}

/// Parameters for a [`Sampler`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Number of collapses performed by [`Sampler::run`].
    pub shots: usize,
    /// Seed for the random number generator; drawn from system entropy if
    /// `None`.
    pub seed: Option<u64>,
}

impl Default for SamplerConfig {
    fn default() -> Self { Self { shots: 1024, seed: None } }
}

/// Driver for measurements with an owned, seedable random number generator.
#[derive(Clone, Debug)]
pub struct Sampler {
    pub shots: usize,
    pub rng: StdRng,
}

impl Default for Sampler {
    fn default() -> Self { Self::new(SamplerConfig::default()) }
}

impl Sampler {
    /// Create a new `Sampler`.
    pub fn new(config: SamplerConfig) -> Self {
        let rng
            = config.seed.map(StdRng::seed_from_u64)
            .unwrap_or_else(StdRng::from_entropy);
        Self { shots: config.shots, rng }
    }

    /// Create a new `Sampler` with the default number of shots and a fixed
    /// seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SamplerConfig { seed: Some(seed), ..Default::default() })
    }

    /// Measure a single bit of `ket`, collapsing it in place.
    ///
    /// See [`Ket::measure`].
    pub fn measure(&mut self, ket: &mut Ket, bit: usize) -> Bit {
        ket.measure(bit, &mut self.rng)
    }

    /// Measure every bit of `ket`, collapsing it in place.
    ///
    /// See [`Ket::collapse`].
    pub fn collapse(&mut self, ket: &mut Ket) -> Outcome {
        ket.collapse(&mut self.rng)
    }

    /// Collapse `self.shots` independent copies of `ket` and tally the
    /// outcomes. `ket` itself is left untouched.
    pub fn run(&mut self, ket: &Ket) -> Counts {
        debug!(shots = self.shots, order = ket.order(), "sampling");
        let mut counts: FxHashMap<Outcome, usize> = FxHashMap::default();
        for _ in 0..self.shots {
            let mut copy = ket.clone();
            *counts.entry(copy.collapse(&mut self.rng)).or_insert(0) += 1;
        }
        debug!(distinct = counts.len(), "sampling done");
        Counts { shots: self.shots, counts }
    }
}

/// Tallied outcomes from [`Sampler::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Counts {
    shots: usize,
    counts: FxHashMap<Outcome, usize>,
}

impl Counts {
    /// Return the total number of shots.
    pub fn shots(&self) -> usize { self.shots }

    /// Return the number of distinct outcomes observed.
    pub fn len(&self) -> usize { self.counts.len() }

    /// Return `true` if nothing was observed.
    pub fn is_empty(&self) -> bool { self.counts.is_empty() }

    /// Return the number of times `outcome` was observed.
    pub fn get(&self, outcome: &Outcome) -> usize {
        self.counts.get(outcome).copied().unwrap_or(0)
    }

    /// Return the fraction of shots resulting in `outcome`, or zero if there
    /// were no shots.
    pub fn frequency(&self, outcome: &Outcome) -> f64 {
        if self.shots == 0 { return 0.0; }
        self.get(outcome) as f64 / self.shots as f64
    }

    /// Iterate over `(outcome, count)` pairs in ascending outcome order.
    pub fn sorted(&self) -> impl Iterator<Item = (&Outcome, usize)> + '_ {
        self.counts.iter()
            .sorted_by(|l, r| l.0.cmp(r.0))
            .map(|(o, n)| (o, *n))
    }
}
