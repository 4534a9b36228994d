//! Scalar type the spring core is generic over.

use core::cmp::PartialOrd;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Trait abstracting the floating-point operations the spring core needs.
///
/// Implemented for `f32` and `f64`. Transcendentals go through `libm` so the
/// crate stays `no_std`.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
    + core::fmt::Display
{
    /// 0.0, the rest velocity.
    fn zero() -> Self;
    /// 1.0.
    fn one() -> Self;
    /// 0.5, used by the over-damped factors.
    fn half() -> Self;
    /// 2.0, used for the damping ratio.
    fn two() -> Self;
    /// Square root; `sqrt(force)` is the angular frequency.
    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    /// e^self, the decay envelope of the closed form.
    fn exp(self) -> Self;
    fn abs(self) -> Self;
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    /// Lift an `f32` constant such as an epsilon or a default parameter.
    fn from_f32(v: f32) -> Self;
    /// Neither infinite nor NaN.
    fn is_finite(self) -> bool;

    /// Confine to `[min, max]`. A NaN input comes out as `min`.
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    /// 1 / self.
    fn recip(self) -> Self {
        Self::one() / self
    }

    /// `|self| < epsilon`, the shape of every rest and on-target test.
    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }
}

macro_rules! impl_float {
    ($t:ident, $sqrt:path, $sin:path, $cos:path, $exp:path, $abs:path) => {
        impl Float for $t {
            fn zero() -> Self { 0.0 }
            fn one() -> Self { 1.0 }
            fn half() -> Self { 0.5 }
            fn two() -> Self { 2.0 }
            fn sqrt(self) -> Self { $sqrt(self) }
            fn sin(self) -> Self { $sin(self) }
            fn cos(self) -> Self { $cos(self) }
            fn exp(self) -> Self { $exp(self) }
            fn abs(self) -> Self { $abs(self) }
            // Plain comparisons: a NaN `self` yields `other`.
            fn min(self, other: Self) -> Self { if self < other { self } else { other } }
            fn max(self, other: Self) -> Self { if self > other { self } else { other } }
            fn from_f32(v: f32) -> Self { v as $t }
            fn is_finite(self) -> bool { $t::is_finite(self) }
        }
    };
}

impl_float!(f32, libm::sqrtf, libm::sinf, libm::cosf, libm::expf, libm::fabsf);
impl_float!(f64, libm::sqrt, libm::sin, libm::cos, libm::exp, libm::fabs);
