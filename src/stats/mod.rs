//! Student's t and chi-squared distributions built on the gamma integral.
//!
//! Both densities carry a gamma-function normalizer, evaluated once per
//! distribution in log space by [`crate::special::lgamma_with`]. The
//! cumulative distribution functions integrate the density with
//! [`crate::quad`], after substitutions that keep every integral bounded
//! and of order one (see [`StudentT`] and [`ChiSquared`]).
//!
//! | Distribution | Parameters | Support |
//! |---|---|---|
//! | [`StudentT`] | degrees of freedom ν | (−∞, ∞) |
//! | [`ChiSquared`] | degrees of freedom k | [0, ∞) |
//!
//! The free functions mirror the familiar R names:
//!
//! | Function | Meaning |
//! |---|---|
//! | [`dt`] | t density |
//! | [`pt`] | t lower/upper tail probability, optionally two-sided |
//! | [`dchisq`] | χ² density |
//! | [`pchisq`] | χ² lower/upper tail probability |
//!
//! # Example
//!
//! ```
//! use gammastat::stats::{pt, pchisq, StudentT, ContinuousDistribution};
//!
//! // P(T ≤ 0) = 1/2 for any ν
//! assert!((pt(0.0_f64, 4.0, true, false).unwrap() - 0.5).abs() < 1e-10);
//!
//! // χ²(2) is exponential with rate 1/2: P(X ≤ 2) = 1 − e^(−1)
//! let p = pchisq(2.0_f64, 2.0, true).unwrap();
//! assert!((p - (1.0 - (-1.0_f64).exp())).abs() < 1e-10);
//!
//! let t = StudentT::new(10.0_f64).unwrap();
//! assert!((t.variance() - 10.0 / 8.0).abs() < 1e-14);
//! ```

mod chi_squared;
mod student_t;


pub use chi_squared::ChiSquared;
pub use student_t::StudentT;

use crate::quad::{integrate, QuadError, QuadSettings};
use crate::special::SpecialError;
use crate::traits::FloatScalar;

/// Errors from distribution construction and evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// Degrees of freedom not strictly positive (or NaN).
    InvalidParameter,
    /// The gamma normalizer or the CDF integral failed.
    Special(SpecialError),
}

impl core::fmt::Display for StatsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidParameter => write!(f, "degrees of freedom must be positive"),
            Self::Special(e) => write!(f, "{e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Special(e) => Some(e),
            Self::InvalidParameter => None,
        }
    }
}

impl From<SpecialError> for StatsError {
    fn from(e: SpecialError) -> Self {
        Self::Special(e)
    }
}

impl From<QuadError> for StatsError {
    fn from(e: QuadError) -> Self {
        Self::Special(SpecialError::Integration(e))
    }
}

/// Trait for continuous probability distributions.
pub trait ContinuousDistribution<T> {
    /// Probability density function.
    fn pdf(&self, x: T) -> T;
    /// Natural log of the probability density function.
    fn ln_pdf(&self, x: T) -> T;
    /// Lower tail P(X ≤ x), by integrating the density.
    fn cdf(&self, x: T) -> Result<T, StatsError>;
    /// Upper tail P(X ≥ x), by integrating the density.
    fn sf(&self, x: T) -> Result<T, StatsError>;
    /// Expected value E\[X\].
    fn mean(&self) -> T;
    /// Variance Var(X).
    fn variance(&self) -> T;
}

/// Reject degrees of freedom that are not strictly positive.
pub(crate) fn check_dof<T: FloatScalar>(dof: T) -> Result<(), StatsError> {
    // also catches NaN
    if !(dof > T::zero()) {
        return Err(StatsError::InvalidParameter);
    }
    Ok(())
}

/// ∫ₐᵇ f for a real integrand, value only.
pub(crate) fn quad_value<T: FloatScalar>(
    f: impl FnMut(T) -> T,
    a: T,
    b: T,
    settings: &QuadSettings<T>,
) -> Result<T, StatsError> {
    Ok(integrate(f, a, b, settings)?.value)
}

/// Density of Student's t-distribution at `t` with `v` degrees of freedom.
///
/// dt(t, v) = Γ((v+1)/2) / (√(πv)·Γ(v/2)) · (1 + t²/v)^(−(v+1)/2)
///
/// # Errors
///
/// [`StatsError::InvalidParameter`] if `v ≤ 0`; see [`StudentT::new`].
///
/// # Example
///
/// ```
/// use gammastat::stats::dt;
///
/// // ν = 1 is the Cauchy distribution: 1/π at the origin
/// let d = dt(0.0_f64, 1.0).unwrap();
/// assert!((d - 1.0 / core::f64::consts::PI).abs() < 1e-10);
/// ```
pub fn dt<T: FloatScalar>(t: T, v: T) -> Result<T, StatsError>
where
    QuadSettings<T>: Default,
{
    Ok(StudentT::new(v)?.pdf(t))
}

/// Tail probability of Student's t-distribution.
///
/// Integrates [`dt`] over (−∞, q] when `lower_tail` is true, otherwise over
/// [q, ∞). When `two_sided` is true the result is doubled. The two flags are
/// independent; the usual choices are `(true, false)` for P(T ≤ q) and
/// `(false, true)` for a two-sided p-value at q > 0.
///
/// # Errors
///
/// [`StatsError::InvalidParameter`] if `v ≤ 0`; integration failures as
/// [`StatsError::Special`].
///
/// # Example
///
/// ```
/// use gammastat::stats::pt;
///
/// // Cauchy: P(T ≥ 1) = 1/4, two-sided 1/2
/// assert!((pt(1.0_f64, 1.0, false, false).unwrap() - 0.25).abs() < 1e-10);
/// assert!((pt(1.0_f64, 1.0, false, true).unwrap() - 0.5).abs() < 1e-10);
/// ```
pub fn pt<T: FloatScalar>(q: T, v: T, lower_tail: bool, two_sided: bool) -> Result<T, StatsError>
where
    QuadSettings<T>: Default,
{
    let dist = StudentT::new(v)?;
    let p = if lower_tail { dist.cdf(q)? } else { dist.sf(q)? };
    if two_sided {
        Ok(p + p)
    } else {
        Ok(p)
    }
}

/// Density of the chi-squared distribution at `x` with `k` degrees of freedom.
///
/// dchisq(x, k) = x^(k/2−1)·e^(−x/2) / (2^(k/2)·Γ(k/2)) for x > 0, and 0
/// for x ≤ 0.
///
/// # Errors
///
/// [`StatsError::InvalidParameter`] if `k ≤ 0`; see [`ChiSquared::new`].
///
/// # Example
///
/// ```
/// use gammastat::stats::dchisq;
///
/// // k = 2: e^(−x/2) / 2
/// let d = dchisq(2.0_f64, 2.0).unwrap();
/// assert!((d - 0.5 * (-1.0_f64).exp()).abs() < 1e-10);
/// assert_eq!(dchisq(-1.0_f64, 2.0).unwrap(), 0.0);
/// ```
pub fn dchisq<T: FloatScalar>(x: T, k: T) -> Result<T, StatsError>
where
    QuadSettings<T>: Default,
{
    Ok(ChiSquared::new(k)?.pdf(x))
}

/// Tail probability of the chi-squared distribution.
///
/// Integrates [`dchisq`] over (−∞, q] when `lower_tail` is true, otherwise
/// over [q, ∞).
///
/// # Errors
///
/// [`StatsError::InvalidParameter`] if `k ≤ 0`; integration failures as
/// [`StatsError::Special`].
pub fn pchisq<T: FloatScalar>(q: T, k: T, lower_tail: bool) -> Result<T, StatsError>
where
    QuadSettings<T>: Default,
{
    let dist = ChiSquared::new(k)?;
    if lower_tail {
        dist.cdf(q)
    } else {
        dist.sf(q)
    }
}
