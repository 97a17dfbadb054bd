//! Tools for simulating small registers of qubits as dense state vectors.
//!
//! States are column vectors of complex amplitudes ([`ket::Ket`]) with dual row
//! vectors ([`bra::Bra`]), and gates are general complex matrices
//! ([`operator::Operator`]). Independent registers and gates are joined with the
//! tensor product (written `+`), gates act on states through ordinary matrix
//! multiplication (written `*`), and a superposition is reduced to classical
//! bits by projective measurement in the computational basis.
//!
//! # Example
//! ```
//! use braket_sim::{ gate, ket::Ket, sample::Sampler };
//!
//! // ∣00⟩ → ∣11⟩
//! let zeros = Ket::from_bits([0_u8, 0]);
//! let ones = &(gate::not() + gate::not()) * &zeros;
//! assert_eq!(ones, Ket::from_bits([1_u8, 1]));
//!
//! // uniform superposition over all four basis states
//! let mut plus = &(gate::hadamard() + gate::hadamard()) * &ones;
//! let mut sampler = Sampler::seeded(10546);
//! let outcome = sampler.collapse(&mut plus);
//! assert_eq!(outcome.len(), 2);
//! ```

pub mod complex;
pub mod error;
pub mod operator;
pub mod gate;
pub mod ket;
pub mod bra;
pub mod sample;

pub use complex::C64;
pub use error::AlgebraError;
pub use operator::Operator;
pub use ket::Ket;
pub use bra::Bra;
pub use sample::{ Bit, Outcome, Sampler, SamplerConfig };
