//! Durand-Kerner (Weierstrass) simultaneous iteration for all complex roots of a
//! polynomial with real coefficients.
//!
//! Sweeps are Gauss-Seidel style: each estimate is replaced as soon as its correction is
//! known, and later estimates in the same sweep see the new value in their denominator
//! products.
//!
//! Known limitations:
//! - coincident estimates make a denominator vanish; the correction becomes NaN and the
//!   run ends at the iteration cap without converging
//! - repeated or very close roots converge slowly (linearly) and may stop at the cap
//! - real roots closer together than the imaginary-part tolerance can come back as a
//!   near-conjugate pair, and vice versa
use crate::numerical::complex_kernel::{
    Complex, complex, complex_abs, complex_div, complex_mul, complex_sub,
};
use crate::numerical::poly_algebra::{evaluate_polynomial_complex, trim_leading_zeros};
use log::{debug, warn};
use std::f64::consts::PI;

/// default cap on the number of sweeps
pub const MAX_ITERATIONS: usize = 100;
/// default bound on the largest correction in a sweep
pub const TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq)]
pub struct DurandKernerOutcome {
    /// roots in no particular order
    pub roots: Vec<Complex>,
    /// sweeps performed
    pub iterations: usize,
    pub converged: bool,
}

/// `degree` starting points evenly spaced on the unit circle.
///
/// The circle is rotated by a quarter step so that no two starting points are complex
/// conjugates of each other: for real coefficients a conjugate-symmetric start is
/// preserved by the iteration, and estimates on the imaginary axis could never leave it.
/// The angles are therefore `2πi/n + π/(2n)`, not the textbook `2πi/n`, and iteration
/// traces differ from ones started at `θ = 0`.
pub fn initial_guesses(degree: usize) -> Vec<Complex> {
    let step = 2.0 * PI / degree as f64;
    (0..degree)
        .map(|i| {
            let theta = step * i as f64 + step / 4.0;
            complex(theta.cos(), theta.sin())
        })
        .collect()
}

/// Runs the iteration on `coefficients` (highest power first).
///
/// Leading zeros are dropped first; a constant polynomial has no roots. The estimates
/// reached when the cap is hit are returned as they are, with `converged == false`.
pub fn durand_kerner(
    coefficients: &[f64],
    tolerance: f64,
    max_iterations: usize,
) -> DurandKernerOutcome {
    let coefficients = trim_leading_zeros(coefficients);
    if coefficients.len() < 2 {
        return DurandKernerOutcome {
            roots: Vec::new(),
            iterations: 0,
            converged: true,
        };
    }
    let lead = coefficients[0];
    let monic: Vec<f64> = coefficients.iter().map(|c| c / lead).collect();
    let degree = monic.len() - 1;
    let mut roots = initial_guesses(degree);

    let mut iterations = 0;
    let mut converged = false;
    let mut max_delta = f64::INFINITY;
    while iterations < max_iterations {
        iterations += 1;
        max_delta = 0.0;
        for i in 0..degree {
            let z = roots[i];
            let numerator = evaluate_polynomial_complex(&monic, z);
            let denominator = roots
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .fold(complex(1.0, 0.0), |acc, (_, &zj)| {
                    complex_mul(acc, complex_sub(z, zj))
                });
            let correction = complex_div(numerator, denominator);
            roots[i] = complex_sub(z, correction);
            let delta = complex_abs(correction);
            // NaN must win so that a broken sweep never looks converged
            if !(delta <= max_delta) {
                max_delta = delta;
            }
        }
        if max_delta < tolerance {
            converged = true;
            break;
        }
    }

    if converged {
        debug!(
            "Durand-Kerner: degree {} converged after {} iterations (max correction {:e})",
            degree, iterations, max_delta
        );
    } else {
        warn!(
            "Durand-Kerner: degree {} stopped at the iteration cap {} with max correction {:e}; returning the last estimates",
            degree, max_iterations, max_delta
        );
    }
    DurandKernerOutcome {
        roots,
        iterations,
        converged,
    }
}

/// All complex roots with the default tolerance and iteration cap.
pub fn durand_kerner_roots(coefficients: &[f64]) -> Vec<Complex> {
    durand_kerner(coefficients, TOLERANCE, MAX_ITERATIONS).roots
}
