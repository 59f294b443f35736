use gammastat::quad::{integrate, QuadSettings};
use gammastat::special::gamma;
use gammastat::Complex;

type C = Complex<f64>;

fn c(re: f64, im: f64) -> C {
    Complex::new(re, im)
}

const TOL: f64 = 1e-10;

fn assert_complex_near(a: C, b: C, tol: f64, msg: &str) {
    assert!(
        (a.re - b.re).abs() < tol && (a.im - b.im).abs() < tol,
        "{}: {:?} vs {:?}",
        msg,
        a,
        b
    );
}

// ── gamma ────────────────────────────────────────────────────────────

#[test]
fn complex_gamma_right_half_plane() {
    assert_complex_near(gamma(c(1.0, 1.0)).unwrap(), c(0.498015668118356, -0.154949828301811), TOL, "Γ(1+i)");
    assert_complex_near(gamma(c(2.5, 1.0)).unwrap(), c(0.774762104551084, 0.707631204379593), TOL, "Γ(2.5+i)");
}

#[test]
fn complex_gamma_reflected() {
    assert_complex_near(
        gamma(c(-3.4, 2.0)).unwrap(),
        c(-0.00188962598641077, 3.71821375361287e-5),
        1e-13,
        "Γ(-3.4+2i)",
    );
}

#[test]
fn complex_gamma_recurrence() {
    // Γ(z+1) = z·Γ(z)
    for &z in &[c(0.4, 0.9), c(1.5, -2.0), c(-1.3, 0.6)] {
        let lhs = gamma(z + 1.0).unwrap();
        let rhs = z * gamma(z).unwrap();
        assert_complex_near(lhs, rhs, 1e-10 * rhs.norm().max(1.0), "recurrence");
    }
}

#[test]
fn complex_gamma_modulus_on_imaginary_axis() {
    // |Γ(iy)|² = π / (y·sinh(πy))
    let pi = core::f64::consts::PI;
    for &y in &[0.5, 1.0, 2.0] {
        let g = gamma(c(0.0, y)).unwrap();
        let expected = pi / (y * (pi * y).sinh());
        assert!((g.norm_sqr() - expected).abs() < 1e-10, "y = {y}");
    }
}

#[test]
fn complex_gamma_f32() {
    let g = gamma(Complex::new(2.5_f32, 1.0)).unwrap();
    assert!((g.re - 0.774_762).abs() < 1e-3);
    assert!((g.im - 0.707_631).abs() < 1e-3);
}

// ── quadrature ───────────────────────────────────────────────────────

#[test]
fn complex_integrand_half_line() {
    // ∫₀^∞ e^{-(1-i)x} dx = 1/(1-i) = (1+i)/2
    let r = integrate(|x: f64| (c(-1.0, 1.0) * x).exp(), 0.0, f64::INFINITY, &QuadSettings::default()).unwrap();
    assert_complex_near(r.value, c(0.5, 0.5), TOL, "half line");
}

#[test]
fn complex_integrand_whole_line() {
    // ∫ e^{-x²} e^{ix} dx = √π e^{-1/4}
    let r = integrate(
        |x: f64| c(-x * x, x).exp(),
        f64::NEG_INFINITY,
        f64::INFINITY,
        &QuadSettings::default(),
    )
    .unwrap();
    let expected = core::f64::consts::PI.sqrt() * (-0.25_f64).exp();
    assert_complex_near(r.value, c(expected, 0.0), TOL, "fourier gaussian");
}
