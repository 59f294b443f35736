//! Gamma function via Euler's integral and the reflection formula.

use num_traits::{Float, One, ToPrimitive, Zero};

use crate::quad::{integrate, QuadError, QuadSettings};
use crate::traits::{FieldScalar, FloatScalar};

use super::SpecialError;

/// Most recurrence steps taken to bring an argument to |Im| ≤ Re.
const MAX_SHIFT: usize = 4096;

/// Γ(x) as exp(ln_mag)·unit with |unit| = 1, so magnitudes beyond the
/// range of the element type survive until the final scaling.
struct Polar<V: FieldScalar> {
    ln_mag: V::Real,
    unit: V,
}

impl<V: FieldScalar> Polar<V> {
    fn value(self) -> V {
        let mag = self.ln_mag.exp();
        if mag.is_infinite() && self.unit.im() == V::Real::zero() {
            // avoid inf·0 in the imaginary part
            return V::from_real(self.unit.re().signum() * mag);
        }
        self.unit.fscale(mag)
    }
}

/// Gamma function Γ(x) with default quadrature settings.
///
/// See [`gamma_with`].
///
/// # Example
///
/// ```
/// use gammastat::special::gamma;
///
/// // Γ(0.5) = √π
/// let sqrt_pi = core::f64::consts::PI.sqrt();
/// assert!((gamma(0.5_f64).unwrap() - sqrt_pi).abs() < 1e-10);
///
/// // poles at the non-positive integers
/// assert_eq!(gamma(-2.0_f64).unwrap(), f64::INFINITY);
/// ```
pub fn gamma<V>(x: V) -> Result<V, SpecialError>
where
    V: FieldScalar,
    QuadSettings<V::Real>: Default,
{
    gamma_with(x, &QuadSettings::default())
}

/// Gamma function Γ(x) for real or complex `x`.
///
/// - Re(x) ≤ 0 with Im(x) = 0 and Re(x) integral: pole, returns +∞.
/// - Re(x) ≤ 0 otherwise: Γ(x) = π / (sin(πx)·Γ(1−x)). Since Re(1−x) ≥ 1
///   the second evaluation goes straight to the integral.
/// - Re(x) > 0: Euler's integral ∫₀^∞ t^(x−1) e^(−t) dt.
///
/// Arguments with |Im x| > Re x are first moved to |Im| ≤ Re with
/// Γ(x) = Γ(x+n) / (x(x+1)…(x+n−1)). The integral is then taken along the
/// ray t = a·e^(σw) through a = x (or a = 1 when |x| < 1), σ = 1/√max(|x|, 1):
///
/// Γ(x) = σ·exp(x·ln a − a) · ∫ exp((x − a)·σw + a·(σw − (e^(σw) − 1))) dw
///
/// over w ∈ (−∞, ∞). Along that ray the integrand does not oscillate away
/// its own magnitude, and the remaining integral is of order one. Magnitude
/// and phase are carried separately, so Γ(171.5) ≈ 9.5e307 is still finite
/// in `f64`.
///
/// NaN in either component is returned unchanged. A result that overflows
/// is +∞.
///
/// # Errors
///
/// Returns [`SpecialError::Integration`] if the quadrature fails to
/// converge, including when its error estimate is not small next to the
/// integral (the oscillating integrand cancelled).
pub fn gamma_with<V: FieldScalar>(
    x: V,
    settings: &QuadSettings<V::Real>,
) -> Result<V, SpecialError> {
    if x.has_nan() {
        return Ok(x);
    }
    if is_pole(x) {
        return Ok(V::from_real(V::Real::infinity()));
    }
    Ok(polar(x, settings)?.value())
}

/// Natural log of |Γ(x)| with default quadrature settings.
///
/// See [`lgamma_with`].
///
/// # Example
///
/// ```
/// use gammastat::special::lgamma;
///
/// // Γ(200.5) overflows f64, its logarithm does not
/// let lg = lgamma(200.5_f64).unwrap();
/// assert!((lg - 860.5822035097825).abs() < 1e-9);
/// ```
pub fn lgamma<T>(x: T) -> Result<T, SpecialError>
where
    T: FloatScalar,
    QuadSettings<T>: Default,
{
    lgamma_with(x, &QuadSettings::default())
}

/// Natural log of |Γ(x)| for real `x`.
///
/// Same evaluation as [`gamma_with`], without the final exponential. Poles
/// give +∞ and NaN is returned unchanged.
///
/// # Errors
///
/// Returns [`SpecialError::Integration`] if the quadrature fails to converge.
pub fn lgamma_with<T: FloatScalar>(x: T, settings: &QuadSettings<T>) -> Result<T, SpecialError> {
    if x.is_nan() {
        return Ok(x);
    }
    if is_pole(x) {
        return Ok(T::infinity());
    }
    Ok(polar(x, settings)?.ln_mag)
}

/// Non-positive integers on the real axis.
fn is_pole<V: FieldScalar>(x: V) -> bool {
    let re = x.re();
    x.im() == V::Real::zero() && re <= V::Real::zero() && re == re.trunc()
}

fn polar<V: FieldScalar>(x: V, settings: &QuadSettings<V::Real>) -> Result<Polar<V>, SpecialError> {
    let zero = V::Real::zero();
    let one = V::Real::one();

    if x.re() <= zero {
        let pi: V::Real = num_traits::cast(core::f64::consts::PI).unwrap();
        let (ln_sin, sin_unit) = x.fscale(pi).fln_sin();
        let reflected = polar(V::one() - x, settings)?;
        return Ok(Polar {
            ln_mag: pi.ln() - ln_sin - reflected.ln_mag,
            unit: V::one() / (sin_unit * reflected.unit),
        });
    }

    // Γ(x) = Γ(x + n) / (x(x+1)…(x+n−1))
    let mut z = x;
    let mut ln_den = zero;
    let mut den_unit = V::one();
    let excess = z.im().abs() - z.re();
    if excess > zero {
        let steps = excess.ceil().to_usize().unwrap_or(MAX_SHIFT).min(MAX_SHIFT);
        for _ in 0..steps {
            let r = z.modulus();
            ln_den = ln_den + r.ln();
            den_unit = den_unit * z.fscale(r.recip());
            z = z + V::one();
        }
    }

    let rho = z.modulus();
    let anchor = if rho >= one { z } else { V::one() };
    let offset = z - anchor;
    let width = rho.max(one).sqrt().recip();
    let shift = z * anchor.fln() - anchor;
    let ln_tiny = V::Real::min_positive_value().ln();

    let r = integrate(
        |w: V::Real| {
            let s = width * w;
            let defect = exp_defect(s);
            if !defect.is_finite() {
                return V::zero();
            }
            let y = offset.fscale(s) + anchor.fscale(defect);
            if y.re() < ln_tiny {
                return V::zero();
            }
            y.fexp()
        },
        V::Real::neg_infinity(),
        V::Real::infinity(),
        settings,
    )?;

    let j = r.value;
    let j_mod = j.modulus();
    // the integral is of order one; an error estimate that is large next to
    // it means the integrand cancelled
    if !(r.error <= (settings.abs_tol + settings.rel_tol) * j_mod) {
        return Err(QuadError::MaxLevels.into());
    }
    if j_mod == zero {
        return Ok(Polar {
            ln_mag: V::Real::neg_infinity(),
            unit: V::one(),
        });
    }

    let phase = if shift.re().is_finite() {
        (shift - V::from_real(shift.re())).fexp()
    } else {
        V::one()
    };
    Ok(Polar {
        ln_mag: shift.re() + width.ln() + j_mod.ln() - ln_den,
        unit: phase * j.fscale(j_mod.recip()) / den_unit,
    })
}

/// s − (eˢ − 1) = −(s²/2! + s³/3! + …), without cancellation near 0.
fn exp_defect<T: FloatScalar>(s: T) -> T {
    let cutoff = T::from(0.05).unwrap();
    if s.abs() >= cutoff {
        return s - s.exp_m1();
    }
    let mut acc = T::one();
    for n in (3..=9).rev() {
        acc = T::one() + acc * s / T::from(n).unwrap();
    }
    -(s * s / (T::one() + T::one())) * acc
}
