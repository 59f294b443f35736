//! Factorial as Γ(n + 1).

use num_traits::{Float, ToPrimitive};

use crate::FloatScalar;

use super::SpecialError;
use super::gamma_fn::gamma;

/// Largest n with n! representable in `u64`.
const MAX_FACTORIAL_ARG: i64 = 20;

/// Largest n whose Γ(n + 1) rounds to n! under the default tolerance:
/// 12!·1e-10 < 0.5, while 13!·1e-10 is not.
const MAX_ROUNDED_ARG: u64 = 12;

/// Factorial n! = Γ(n + 1).
///
/// For n ≤ 12, Γ(n + 1) is evaluated by the gamma integral in `f64` and
/// rounded to the nearest integer, which is exact while the integral's
/// relative error stays below 1e-10. Past that the recurrence
/// n! = n·(n − 1)! continues from 12! in exact integer arithmetic.
///
/// # Errors
///
/// - [`SpecialError::NegativeArgument`] if `n < 0`.
/// - [`SpecialError::Overflow`] if n! exceeds `u64::MAX` (n > 20).
/// - [`SpecialError::Integration`] if the gamma integral fails.
///
/// # Example
///
/// ```
/// use gammastat::special::{factorial, SpecialError};
///
/// assert_eq!(factorial(0).unwrap(), 1);
/// assert_eq!(factorial(4).unwrap(), 24);
/// assert_eq!(factorial(19).unwrap(), 121_645_100_408_832_000);
/// assert_eq!(factorial(-1), Err(SpecialError::NegativeArgument));
/// ```
pub fn factorial(n: i64) -> Result<u64, SpecialError> {
    if n < 0 {
        return Err(SpecialError::NegativeArgument);
    }
    if n > MAX_FACTORIAL_ARG {
        return Err(SpecialError::Overflow);
    }
    let n = n as u64;
    let base = n.min(MAX_ROUNDED_ARG);
    let g = gamma((base + 1) as f64)?;
    let rounded = Float::round(g).to_u64().ok_or(SpecialError::Overflow)?;
    (base + 1..=n)
        .try_fold(rounded, |acc, k| acc.checked_mul(k))
        .ok_or(SpecialError::Overflow)
}

/// Factorial of a float that holds a non-negative integer.
///
/// Both conditions are checked: the sign first, then integrality. Γ is
/// defined between the integers but this function does not extend to it.
///
/// # Errors
///
/// - [`SpecialError::NegativeArgument`] if `x < 0`.
/// - [`SpecialError::NotInteger`] if `x` has a fractional part or is NaN
///   or infinite.
/// - Otherwise as [`factorial`].
///
/// # Example
///
/// ```
/// use gammastat::special::{factorial_of, SpecialError};
///
/// assert_eq!(factorial_of(5.0_f64).unwrap(), 120);
/// assert_eq!(factorial_of(2.5_f64), Err(SpecialError::NotInteger));
/// assert_eq!(factorial_of(-3.0_f64), Err(SpecialError::NegativeArgument));
/// ```
pub fn factorial_of<T: FloatScalar>(x: T) -> Result<u64, SpecialError> {
    if x < T::zero() {
        return Err(SpecialError::NegativeArgument);
    }
    if !x.is_finite() || x != x.trunc() {
        return Err(SpecialError::NotInteger);
    }
    let n = x.to_i64().ok_or(SpecialError::Overflow)?;
    factorial(n)
}
