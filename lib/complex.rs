//! Double-precision complex scalars.
//!
//! Amplitudes are plain [`num_complex::Complex64`] values; this module adds the
//! handful of constants and helpers the rest of the crate leans on, plus a
//! fixed-width display wrapper for tabular printing.
//!
//! Equality on `C64` is exact, field-wise comparison. Use [`approx_eq`] where
//! rounding error needs to be tolerated.

use std::fmt;
pub use num_complex::Complex64 as C64;

/// Additive identity, 0 + 0i.
pub const ZERO: C64 = C64::new(0.0, 0.0);

/// Multiplicative identity, 1 + 0i.
pub const ONE: C64 = C64::new(1.0, 0.0);

/// Imaginary unit, 0 + 1i.
pub const I: C64 = C64::new(0.0, 1.0);

/// Width of the column used by [`Cell`].
pub const CELL_WIDTH: usize = 12;

/// Conversion of grid and vector entries into amplitudes.
pub trait IntoC64: Copy {
    fn into_c64(self) -> C64;
}

impl IntoC64 for C64 {
    fn into_c64(self) -> C64 { self }
}

impl IntoC64 for f64 {
    fn into_c64(self) -> C64 { C64::new(self, 0.0) }
}

impl IntoC64 for f32 {
    fn into_c64(self) -> C64 { C64::new(f64::from(self), 0.0) }
}

impl IntoC64 for i32 {
    fn into_c64(self) -> C64 { C64::new(f64::from(self), 0.0) }
}

/// Raise `a` to the `n`-th power by repeated multiplication, starting from
/// [`ONE`].
pub fn pow(a: C64, n: usize) -> C64 {
    (0..n).fold(ONE, |acc, _| acc * a)
}

/// re² + im²
pub fn squared_magnitude(a: C64) -> f64 { a.re * a.re + a.im * a.im }

/// Return `true` if the real and imaginary parts of `a` and `b` each differ by
/// at most `eps`.
pub fn approx_eq(a: C64, b: C64, eps: f64) -> bool {
    (a.re - b.re).abs() <= eps && (a.im - b.im).abs() <= eps
}

/// Display wrapper rendering a complex number as `re+imi` with two decimal
/// places, left-aligned in a [`CELL_WIDTH`]-wide column.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cell(pub C64);

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = format!("{:.2}+{:.2}i", self.0.re, self.0.im);
        write!(f, "{:<width$}", s, width = CELL_WIDTH)
    }
}
