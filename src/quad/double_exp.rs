//! Double-exponential transforms and the level-refinement loop.

use crate::traits::{FieldScalar, FloatScalar};

use super::{QuadError, QuadResult, QuadSettings};

/// Change of variables mapping the transformed axis s ∈ ℝ onto the interval.
#[derive(Debug, Clone, Copy)]
pub(super) enum Transform<T> {
    /// [a, b], both finite.
    Finite { a: T, b: T },
    /// [a, ∞).
    Upper { a: T },
    /// (−∞, b].
    Lower { b: T },
    /// (−∞, ∞).
    Full,
}

impl<T: FloatScalar> Transform<T> {
    /// Abscissa and weight at `s`, or `None` when the node falls outside
    /// the representable range (or onto an endpoint) and carries no weight.
    fn node(&self, s: T) -> Option<(T, T)> {
        let half_pi = T::from(core::f64::consts::FRAC_PI_2).unwrap();
        let u = half_pi * s.sinh();
        let du = half_pi * s.cosh();

        let (x, w) = match *self {
            Transform::Finite { a, b } => {
                let two = T::one() + T::one();
                let r = (b - a) / two;
                // distance from the nearer endpoint: r·(1 − tanh|u|)
                let d = two * r / ((two * u.abs()).exp() + T::one());
                if d == T::zero() {
                    return None;
                }
                let x = if s >= T::zero() { b - d } else { a + d };
                if x <= a || x >= b {
                    return None;
                }
                let c = u.cosh();
                (x, r * du / (c * c))
            }
            Transform::Upper { a } => {
                let e = u.exp();
                let x = a + e;
                if x == a {
                    return None;
                }
                (x, e * du)
            }
            Transform::Lower { b } => {
                let e = u.exp();
                let x = b - e;
                if x == b {
                    return None;
                }
                (x, e * du)
            }
            Transform::Full => (u.sinh(), u.cosh() * du),
        };

        if !x.is_finite() || !w.is_finite() || w == T::zero() {
            return None;
        }
        Some((x, w))
    }
}

/// Half-width of the window on the transformed axis.
///
/// Beyond |s| = asinh(2/π · ln(MAX)) the exponentials in every transform
/// leave the representable range, so no node out there carries weight.
fn window<T: FloatScalar>() -> T {
    let two_over_pi = T::from(core::f64::consts::FRAC_2_PI).unwrap();
    (two_over_pi * T::max_value().ln()).asinh()
}

/// Number of whole steps of size `h` that fit in `s_max`.
fn steps<T: FloatScalar>(s_max: T, h: T) -> i64 {
    (s_max / h).floor().to_i64().unwrap_or(0)
}

/// Weighted integrand value at s = k·h.
fn term<T, V>(
    f: &mut impl FnMut(T) -> V,
    transform: &Transform<T>,
    s: T,
    evals: &mut usize,
) -> Result<V, QuadError>
where
    T: FloatScalar,
    V: FieldScalar<Real = T>,
{
    let Some((x, w)) = transform.node(s) else {
        return Ok(V::zero());
    };
    *evals += 1;
    let y = f(x);
    if y.has_nan() {
        return Err(QuadError::NotFinite);
    }
    Ok(y.fscale(w))
}

/// Trapezoidal sums on the transformed axis with the step halved each level.
///
/// Level 0 uses step 1; level n adds the odd multiples of 2⁻ⁿ, so every
/// integrand value is computed exactly once.
pub(super) fn sum_levels<T, V>(
    f: &mut impl FnMut(T) -> V,
    transform: Transform<T>,
    settings: &QuadSettings<T>,
) -> Result<QuadResult<V, T>, QuadError>
where
    T: FloatScalar,
    V: FieldScalar<Real = T>,
{
    let two = T::one() + T::one();
    let s_max = window::<T>();
    let mut evals = 0usize;

    let mut h = T::one();
    let mut sum = V::zero();
    let n = steps(s_max, h);
    for k in -n..=n {
        let s = T::from(k).unwrap() * h;
        sum = sum + term(f, &transform, s, &mut evals)?;
    }
    let mut value = sum.fscale(h);

    for level in 1..=settings.max_levels {
        h = h / two;
        let n = steps(s_max, h);
        for k in (-n..=n).filter(|k| k % 2 != 0) {
            let s = T::from(k).unwrap() * h;
            sum = sum + term(f, &transform, s, &mut evals)?;
        }

        let next = sum.fscale(h);
        let error = (next - value).modulus();
        value = next;

        let magnitude = value.modulus();
        if value.has_nan() || magnitude.is_nan() {
            return Err(QuadError::NotFinite);
        }
        if magnitude.is_infinite() {
            // overflow is a value, not a failure to converge
            return Ok(QuadResult {
                value,
                error: T::infinity(),
                levels: level,
                evals,
            });
        }
        if level >= settings.min_levels && error <= settings.abs_tol + settings.rel_tol * magnitude {
            return Ok(QuadResult {
                value,
                error,
                levels: level,
                evals,
            });
        }
    }
    Err(QuadError::MaxLevels)
}
