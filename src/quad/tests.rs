use super::*;
use crate::Complex;

const TOL: f64 = 1e-10;

fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff {})",
        msg,
        a,
        b,
        (a - b).abs()
    );
}

fn quad(f: impl FnMut(f64) -> f64, a: f64, b: f64) -> f64 {
    integrate(f, a, b, &QuadSettings::default()).unwrap().value
}

// ═══════════════════════════════════════════════════════════════════
// Finite intervals (tanh-sinh)
// ═══════════════════════════════════════════════════════════════════

#[test]
fn finite_polynomial() {
    assert_near(quad(|x| x * x, 0.0, 1.0), 1.0 / 3.0, TOL, "∫₀¹ x²");
    assert_near(quad(|x| x * x * x, -1.0, 2.0), 15.0 / 4.0, TOL, "∫₋₁² x³");
}

#[test]
fn finite_trig() {
    assert_near(quad(|x| x.sin(), 0.0, core::f64::consts::PI), 2.0, TOL, "∫₀^π sin");
}

#[test]
fn finite_endpoint_singularities() {
    assert_near(quad(|x| 1.0 / x.sqrt(), 0.0, 1.0), 2.0, TOL, "∫₀¹ x^(-1/2)");
    assert_near(quad(|x| x.ln(), 0.0, 1.0), -1.0, TOL, "∫₀¹ ln x");
    // singular at both ends: ∫₋₁¹ 1/√(1−x²) = π
    assert_near(
        quad(|x| 1.0 / (1.0 - x * x).sqrt(), -1.0, 1.0),
        core::f64::consts::PI,
        1e-7,
        "arcsine density",
    );
}

// ═══════════════════════════════════════════════════════════════════
// Half-infinite and infinite intervals
// ═══════════════════════════════════════════════════════════════════

#[test]
fn upper_half_line() {
    assert_near(quad(|x| (-x).exp(), 0.0, f64::INFINITY), 1.0, TOL, "∫₀^∞ e^-x");
    assert_near(quad(|x| (-x).exp(), 2.0, f64::INFINITY), (-2.0_f64).exp(), TOL, "∫₂^∞ e^-x");
    assert_near(quad(|x| 1.0 / (x * x), 1.0, f64::INFINITY), 1.0, TOL, "∫₁^∞ x^-2");
}

#[test]
fn lower_half_line() {
    assert_near(quad(|x| x.exp(), f64::NEG_INFINITY, 0.0), 1.0, TOL, "∫₋∞⁰ eˣ");
    assert_near(quad(|x| x.exp(), f64::NEG_INFINITY, 1.0), core::f64::consts::E, TOL, "∫₋∞¹ eˣ");
}

#[test]
fn whole_line() {
    let pi = core::f64::consts::PI;
    assert_near(quad(|x| (-x * x).exp(), f64::NEG_INFINITY, f64::INFINITY), pi.sqrt(), TOL, "gaussian");
    assert_near(quad(|x| 1.0 / (1.0 + x * x), f64::NEG_INFINITY, f64::INFINITY), pi, TOL, "cauchy");
}

// ═══════════════════════════════════════════════════════════════════
// Bounds handling
// ═══════════════════════════════════════════════════════════════════

#[test]
fn reversed_bounds_negate() {
    assert_near(quad(|x| x * x, 1.0, 0.0), -1.0 / 3.0, TOL, "∫₁⁰ x²");
    assert_near(quad(|x| (-x).exp(), f64::INFINITY, 0.0), -1.0, TOL, "∫∞⁰ e^-x");
}

#[test]
fn equal_bounds_zero() {
    let mut calls = 0;
    let r = integrate(
        |x: f64| {
            calls += 1;
            x
        },
        3.0,
        3.0,
        &QuadSettings::default(),
    )
    .unwrap();
    assert_eq!(r.value, 0.0);
    assert_eq!(r.evals, 0);
    assert_eq!(calls, 0);

    let r = integrate(|x: f64| x, f64::INFINITY, f64::INFINITY, &QuadSettings::default()).unwrap();
    assert_eq!(r.value, 0.0);
}

#[test]
fn nan_bounds() {
    let r = integrate(|x: f64| x, f64::NAN, 1.0, &QuadSettings::default());
    assert_eq!(r.unwrap_err(), QuadError::InvalidBounds);
    let r = integrate(|x: f64| x, 0.0, f64::NAN, &QuadSettings::default());
    assert_eq!(r.unwrap_err(), QuadError::InvalidBounds);
}

// ═══════════════════════════════════════════════════════════════════
// Failure modes
// ═══════════════════════════════════════════════════════════════════

#[test]
fn nan_integrand() {
    let r = integrate(|_x: f64| f64::NAN, 0.0, 1.0, &QuadSettings::default());
    assert_eq!(r.unwrap_err(), QuadError::NotFinite);
}

#[test]
fn max_levels_exceeded() {
    let settings = QuadSettings {
        abs_tol: 0.0,
        rel_tol: 0.0,
        min_levels: 1,
        max_levels: 2,
    };
    let r = integrate(|x: f64| x.cos(), 0.0, 1.0, &settings);
    assert_eq!(r.unwrap_err(), QuadError::MaxLevels);
}

#[test]
fn overflow_is_a_value() {
    let r = integrate(|_x: f64| f64::MAX, 0.0, 10.0, &QuadSettings::default()).unwrap();
    assert_eq!(r.value, f64::INFINITY);
}

// ═══════════════════════════════════════════════════════════════════
// Result metadata, complex integrands, f32
// ═══════════════════════════════════════════════════════════════════

#[test]
fn result_metadata() {
    let settings = QuadSettings::<f64>::default();
    let r = integrate(|x: f64| x.exp(), 0.0, 1.0, &settings).unwrap();
    assert_near(r.value, core::f64::consts::E - 1.0, TOL, "∫₀¹ eˣ");
    assert!(r.levels >= settings.min_levels);
    assert!(r.levels <= settings.max_levels);
    assert!(r.evals > 0);
    assert!(r.error <= settings.abs_tol + settings.rel_tol * r.value.abs());
}

#[test]
fn complex_integrand() {
    // ∫₀^π e^(ix) dx = 2i
    let r = integrate(
        |x: f64| Complex::new(0.0, x).exp(),
        0.0,
        core::f64::consts::PI,
        &QuadSettings::default(),
    )
    .unwrap();
    assert_near(r.value.re, 0.0, TOL, "re");
    assert_near(r.value.im, 2.0, TOL, "im");
}

#[test]
fn complex_integrand_reversed() {
    let r = integrate(
        |x: f64| Complex::new(x, x),
        1.0,
        0.0,
        &QuadSettings::default(),
    )
    .unwrap();
    assert_near(r.value.re, -0.5, TOL, "re");
    assert_near(r.value.im, -0.5, TOL, "im");
}

#[test]
fn f32_integration() {
    let settings = QuadSettings::<f32>::default();
    let r = integrate(|x: f32| x * x, 0.0f32, 1.0f32, &settings).unwrap();
    assert!((r.value - 1.0 / 3.0).abs() < 1e-5, "f32 ∫₀¹ x²");
    let r = integrate(|x: f32| (-x).exp(), 0.0f32, f32::INFINITY, &settings).unwrap();
    assert!((r.value - 1.0).abs() < 1e-4, "f32 ∫₀^∞ e^-x");
}

#[cfg(feature = "std")]
#[test]
fn error_display() {
    assert_eq!(
        QuadError::MaxLevels.to_string(),
        "integration did not converge within tolerance"
    );
    assert_eq!(QuadError::InvalidBounds.to_string(), "integration bound is NaN");
}
