//! Degree dispatch and real/complex classification of polynomial roots.
//!
//! Degree 1..=3 goes to the closed-form solvers, degree 4 and up to Durand-Kerner.
//! Leading zero coefficients demote the degree before dispatch.
use crate::numerical::closed_form::{
    solve_cubic_complex, solve_linear_complex, solve_quadratic_complex,
};
use crate::numerical::complex_kernel::{Complex, EPSILON, complex_abs};
use crate::numerical::durand_kerner::durand_kerner;
use crate::numerical::errors::SolverError;
use crate::numerical::poly_algebra::trim_leading_zeros;
use crate::numerical::solver_config::SolverConfig;
use log::{debug, info};
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SolveMethod {
    #[strum(serialize = "constant")]
    Constant,
    #[strum(serialize = "linear formula")]
    Linear,
    #[strum(serialize = "quadratic formula")]
    Quadratic,
    #[strum(serialize = "Cardano")]
    Cubic,
    #[strum(serialize = "Durand-Kerner")]
    DurandKerner,
}

/// Roots split for display: real parts of the real roots in ascending order, and one
/// root out of each conjugate pair.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeparatedRoots {
    pub real_roots: Vec<f64>,
    pub complex_roots: Vec<Complex>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RootReport {
    /// every root as produced by the method
    pub roots: Vec<Complex>,
    pub real_roots: Vec<f64>,
    pub complex_roots: Vec<Complex>,
    /// Durand-Kerner sweeps; None for the closed forms
    pub iterations: Option<usize>,
    /// false only when Durand-Kerner hit its iteration cap
    pub converged: bool,
    pub method: SolveMethod,
}

/// [`separate_roots_with`] using the kernel's absolute tolerance.
pub fn separate_roots(roots: &[Complex]) -> SeparatedRoots {
    separate_roots_with(roots, EPSILON)
}

/// Splits `roots` into real roots (`|im| < epsilon`) and non-real roots.
///
/// Non-real roots are matched with their conjugates, up to a relative tolerance of
/// `1e-6 * (1 + |z|)`, and only the member with positive imaginary part is kept. A root
/// without a conjugate partner is kept as it is. Complex roots keep their input order.
pub fn separate_roots_with(roots: &[Complex], epsilon: f64) -> SeparatedRoots {
    let mut real_roots: Vec<f64> = Vec::new();
    let mut non_real: Vec<Complex> = Vec::new();
    for root in roots {
        if root.im.abs() < epsilon {
            real_roots.push(root.re);
        } else {
            non_real.push(*root);
        }
    }
    real_roots.sort_by(|a, b| a.total_cmp(b));

    let mut paired = vec![false; non_real.len()];
    let mut complex_roots = Vec::with_capacity(non_real.len() / 2 + 1);
    for i in 0..non_real.len() {
        if paired[i] {
            continue;
        }
        let z = non_real[i];
        let tolerance = 1e-6 * (1.0 + complex_abs(z));
        let partner = (i + 1..non_real.len()).find(|&j| {
            !paired[j]
                && (non_real[j].re - z.re).abs() <= tolerance
                && (non_real[j].im + z.im).abs() <= tolerance
        });
        match partner {
            Some(j) => {
                paired[i] = true;
                paired[j] = true;
                complex_roots.push(if z.im > 0.0 { z } else { non_real[j] });
            }
            None => {
                debug!("root {} has no conjugate partner", z);
                complex_roots.push(z);
            }
        }
    }
    SeparatedRoots {
        real_roots,
        complex_roots,
    }
}

/// Solves `coefficients` (highest power first) with the settings in `config`.
///
/// Errors on an empty slice or an all-zero polynomial. A non-zero constant has no roots.
pub fn find_polynomial_roots_with(
    coefficients: &[f64],
    config: &SolverConfig,
) -> Result<RootReport, SolverError> {
    if coefficients.is_empty() {
        return Err(SolverError::EmptyPolynomial);
    }
    let trimmed = trim_leading_zeros(coefficients);
    if trimmed.is_empty() {
        return Err(SolverError::ZeroPolynomial);
    }
    if trimmed.len() < coefficients.len() {
        debug!(
            "leading zeros demote the degree from {} to {}",
            coefficients.len() - 1,
            trimmed.len() - 1
        );
    }

    let (roots, method, iterations, converged) = match trimmed.as_slice() {
        [_] => (Vec::new(), SolveMethod::Constant, None, true),
        &[a, b] => (solve_linear_complex(a, b), SolveMethod::Linear, None, true),
        &[a, b, c] => (
            solve_quadratic_complex(a, b, c),
            SolveMethod::Quadratic,
            None,
            true,
        ),
        &[a, b, c, d] => (
            solve_cubic_complex(a, b, c, d),
            SolveMethod::Cubic,
            None,
            true,
        ),
        _ => {
            let outcome = durand_kerner(&trimmed, config.tolerance, config.max_iterations);
            (
                outcome.roots,
                SolveMethod::DurandKerner,
                Some(outcome.iterations),
                outcome.converged,
            )
        }
    };
    info!(
        "degree {} solved by {}: {} roots",
        trimmed.len() - 1,
        method,
        roots.len()
    );

    let separated = separate_roots_with(&roots, config.epsilon);
    Ok(RootReport {
        roots,
        real_roots: separated.real_roots,
        complex_roots: separated.complex_roots,
        iterations,
        converged,
        method,
    })
}

/// All complex roots of `coefficients` (highest power first) with default settings.
///
/// Degenerate input (empty, all zeros, or a constant) gives no roots.
pub fn find_polynomial_roots_complex(coefficients: &[f64]) -> Vec<Complex> {
    match find_polynomial_roots_with(coefficients, &SolverConfig::default()) {
        Ok(report) => report.roots,
        Err(e) => {
            debug!("no roots: {}", e);
            Vec::new()
        }
    }
}
