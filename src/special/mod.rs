//! Gamma function and factorial.
//!
//! [`gamma`] evaluates Γ on the whole complex plane. For Re(x) > 0 it
//! integrates Euler's integral Γ(x) = ∫₀^∞ t^(x−1) e^(−t) dt with
//! [`crate::quad`]; for Re(x) ≤ 0 it uses the reflection formula
//! Γ(x) = π / (sin(πx)·Γ(1−x)). Non-positive integers are poles and
//! evaluate to +∞. [`lgamma`] returns ln|Γ(x)| from the same integral
//! for arguments whose Γ is out of range.
//!
//! The same generic code serves `f32`, `f64`, `Complex<f32>` and
//! `Complex<f64>`.
//!
//! # Functions
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`gamma`] | Γ(x) with default quadrature settings |
//! | [`gamma_with`] | Γ(x) with explicit settings |
//! | [`lgamma`] | ln\|Γ(x)\| for real x |
//! | [`lgamma_with`] | ln\|Γ(x)\| with explicit settings |
//! | [`factorial`] | n! for integer n |
//! | [`factorial_of`] | n! for a float holding a non-negative integer |
//!
//! # Example
//!
//! ```
//! use gammastat::special::{gamma, factorial};
//! use gammastat::Complex;
//!
//! // Γ(5) = 4! = 24
//! assert!((gamma(5.0_f64).unwrap() - 24.0).abs() < 1e-9);
//! assert_eq!(factorial(4).unwrap(), 24);
//!
//! // Γ(i) ≈ −0.15495 − 0.49802i
//! let g = gamma(Complex::new(0.0_f64, 1.0)).unwrap();
//! assert!((g.re + 0.1549498283).abs() < 1e-9);
//! assert!((g.im + 0.4980156681).abs() < 1e-9);
//! ```

use core::fmt;

use crate::quad::QuadError;

mod gamma_fn;
mod factorial_fn;


pub use gamma_fn::{gamma, gamma_with, lgamma, lgamma_with};
pub use factorial_fn::{factorial, factorial_of};

/// Errors from special function evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialError {
    /// Factorial of a negative number.
    NegativeArgument,
    /// Factorial of a value that is not an integer.
    NotInteger,
    /// Result does not fit in the output type.
    Overflow,
    /// Numerical integration of Euler's integral failed.
    Integration(QuadError),
}

impl fmt::Display for SpecialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeArgument => write!(f, "argument must be non-negative"),
            Self::NotInteger => write!(f, "argument must be an integer"),
            Self::Overflow => write!(f, "result overflows the output type"),
            Self::Integration(e) => write!(f, "gamma integral failed: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SpecialError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Integration(e) => Some(e),
            _ => None,
        }
    }
}

impl From<QuadError> for SpecialError {
    fn from(e: QuadError) -> Self {
        Self::Integration(e)
    }
}
