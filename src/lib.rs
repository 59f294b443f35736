//! # gammastat
//!
//! The gamma function on the complex plane, computed from Euler's integral by
//! double-exponential quadrature, and the statistical functions built on it.
//! no-std compatible and allocation-free.
//!
//! ## Quick start
//!
//! ```
//! use gammastat::special::{gamma, factorial};
//! use gammastat::stats::{dt, pt, dchisq, pchisq};
//! use gammastat::Complex;
//!
//! let g = gamma(Complex::new(-3.4_f64, 2.0)).unwrap();
//! assert!((g.re + 0.00188962598641077).abs() < 1e-10);
//!
//! assert_eq!(factorial(4).unwrap(), 24);
//! assert!((dt(1.96_f64, 5.0).unwrap() - 0.0686516976).abs() < 1e-8);
//! assert!((pt(8.0_f64 / 9.0, 8.0, true, false).unwrap() - 0.7999998408).abs() < 1e-8);
//! assert!((dchisq(5.0_f64, 10.0).unwrap() - 0.0668009429).abs() < 1e-8);
//! assert!((pchisq(2.98_f64, 10.0, true).unwrap() - 0.0181091854).abs() < 1e-8);
//! ```
//!
//! ## Modules
//!
//! - [`special`] — [`special::gamma`] for real and complex arguments
//!   (reflection formula for Re(x) ≤ 0, +∞ at the poles),
//!   [`special::lgamma`] for ln|Γ(x)| beyond the float range, and
//!   [`special::factorial`] as Γ(n + 1).
//!
//! - [`stats`] — [`stats::StudentT`] and [`stats::ChiSquared`] with the
//!   [`stats::ContinuousDistribution`] trait, plus the free functions
//!   [`stats::dt`], [`stats::pt`], [`stats::dchisq`], [`stats::pchisq`].
//!
//! - [`quad`] — adaptive double-exponential quadrature over finite,
//!   half-infinite and infinite intervals, for real or complex integrands.
//!   [`quad::QuadSettings`] carries the working tolerances used everywhere.
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all numeric elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] — real floats (`Scalar + Float`)
//!   - [`FieldScalar`] — real floats and complex numbers, accepted by the
//!     gamma evaluator and the integrator
//!
//! ## Precision
//!
//! The element type selects the precision (`f32` or `f64`, real or complex),
//! and a [`quad::QuadSettings`] value selects the tolerance. There is no
//! global state: functions without a settings argument use
//! `QuadSettings::default()` for their element type.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Hardware FPU via system libm, `std::error::Error` impls |
//! | `libm`    | no       | Pure-Rust software float for `no_std` targets |

#![cfg_attr(not(feature = "std"), no_std)]

pub mod quad;
pub mod special;
pub mod stats;
pub mod traits;

pub use traits::{FieldScalar, FloatScalar, Scalar};

pub use num_complex::Complex;
