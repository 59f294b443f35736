use core::fmt::Debug;
use core::ops::Neg;
use num_complex::Complex;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as numeric elements.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for real floating-point elements (`f32`, `f64`).
///
/// Required wherever an ordering is needed: tolerances, interval bounds,
/// degrees of freedom, quadrature nodes and weights.
/// Implies `FieldScalar<Real = Self>` since real floats are their own real type.
pub trait FloatScalar: Scalar + Float + FieldScalar<Real = Self> {}

impl<T: Scalar + Float + FieldScalar<Real = T>> FloatScalar for T {}

/// Trait for values the gamma evaluator and the integrator can work on.
///
/// Covers both real floats (`f32`, `f64`) and complex numbers (`Complex<f32>`,
/// `Complex<f64>`), so a single generic code path evaluates Γ on the real
/// line and on the complex plane.
pub trait FieldScalar: Scalar + Neg<Output = Self> {
    /// The real component type (`Self` for reals, `T` for `Complex<T>`).
    type Real: FloatScalar;

    /// Absolute value / modulus: `|z|` for complex, `.abs()` for real.
    fn modulus(self) -> Self::Real;

    /// Real part.
    fn re(self) -> Self::Real;

    /// Imaginary part (zero for reals).
    fn im(self) -> Self::Real;

    /// Exponential.
    fn fexp(self) -> Self;

    /// Sine.
    fn fsin(self) -> Self;

    /// Natural logarithm (principal branch for complex).
    fn fln(self) -> Self;

    /// `sin(self)` split into `ln|sin(self)|` and the unit factor
    /// `sin(self) / |sin(self)|`.
    ///
    /// Stays finite where `sin` itself overflows (large imaginary parts).
    fn fln_sin(self) -> (Self::Real, Self);

    /// Multiply by a real factor without promoting it to `Self`.
    ///
    /// Keeps infinite components from meeting a zero imaginary part.
    fn fscale(self, r: Self::Real) -> Self;

    /// True if any component is NaN.
    fn has_nan(self) -> bool;

    /// Promote a real value into `Self`.
    fn from_real(r: Self::Real) -> Self;
}

macro_rules! impl_field_scalar_real {
    ($($t:ty),*) => {
        $(
            impl FieldScalar for $t {
                type Real = $t;

                #[inline] fn modulus(self) -> $t { Float::abs(self) }
                #[inline] fn re(self) -> $t { self }
                #[inline] fn im(self) -> $t { 0.0 }
                #[inline] fn fexp(self) -> $t { Float::exp(self) }
                #[inline] fn fsin(self) -> $t { Float::sin(self) }
                #[inline] fn fln(self) -> $t { Float::ln(self) }
                #[inline]
                fn fln_sin(self) -> ($t, $t) {
                    let s = Float::sin(self);
                    (Float::ln(Float::abs(s)), Float::signum(s))
                }
                #[inline] fn fscale(self, r: $t) -> $t { self * r }
                #[inline] fn has_nan(self) -> bool { Float::is_nan(self) }
                #[inline] fn from_real(r: $t) -> $t { r }
            }
        )*
    };
}

impl_field_scalar_real!(f32, f64);

impl<T: FloatScalar> FieldScalar for Complex<T> {
    type Real = T;

    #[inline]
    fn modulus(self) -> T {
        self.norm()
    }

    #[inline]
    fn re(self) -> T {
        self.re
    }

    #[inline]
    fn im(self) -> T {
        self.im
    }

    #[inline]
    fn fexp(self) -> Self {
        self.exp()
    }

    #[inline]
    fn fsin(self) -> Self {
        self.sin()
    }

    #[inline]
    fn fln(self) -> Self {
        self.ln()
    }

    fn fln_sin(self) -> (T, Self) {
        // beyond |Im| = 20, sin(a + ib) = ½e^|b|·(sin a + i·sgn(b)·cos a) to
        // within e^(−40)
        let cutoff = T::from(20.0).unwrap();
        if self.im.abs() < cutoff {
            let s = self.sin();
            let m = s.norm();
            return (m.ln(), s.unscale(m));
        }
        let ln2 = T::from(core::f64::consts::LN_2).unwrap();
        let unit = Complex::new(self.re.sin(), self.im.signum() * self.re.cos());
        (self.im.abs() - ln2, unit)
    }

    #[inline]
    fn fscale(self, r: T) -> Self {
        Complex::scale(&self, r)
    }

    #[inline]
    fn has_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    #[inline]
    fn from_real(r: T) -> Self {
        Complex::new(r, T::zero())
    }
}
