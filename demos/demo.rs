// Prints the gamma function, factorial and t / chi-squared reference values.
//
//   cargo run --example demo

use gammastat::special::{factorial, gamma};
use gammastat::stats::{dchisq, dt, pchisq, pt, StatsError};
use gammastat::Complex;

fn main() -> Result<(), StatsError> {
    let z = Complex::new(-3.4_f64, 2.0);
    let g = gamma(z)?;
    println!("gamma({z}) = {g}");
    println!("factorial(4) = {}", factorial(4)?);

    println!("dt(1.96, 5) = {:.15}", dt(1.96_f64, 5.0)?);
    println!("pt(8/9, 8) = {:.15}", pt(8.0_f64 / 9.0, 8.0, true, false)?);
    println!("dchisq(5, 10) = {:.15}", dchisq(5.0_f64, 10.0)?);
    println!("pchisq(2.98, 10) = {:.15}", pchisq(2.98_f64, 10.0, true)?);

    // two-sided p-value of a t statistic
    let p = pt(2.3_f64, 12.0, false, true)?;
    println!("two-sided p for t = 2.3, df = 12: {p:.6}");

    Ok(())
}
