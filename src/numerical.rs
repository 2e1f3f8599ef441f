/// complex arithmetic with fixed NaN and branch conventions, plus display formatting
pub mod complex_kernel;
/// linear, quadratic and cubic (Cardano) formulas returning complex roots
pub mod closed_form;
/// Durand-Kerner simultaneous iteration for all roots of a polynomial of any degree
pub mod durand_kerner;
/// Horner evaluation, leading-zero trimming and long division of dense polynomials
pub mod poly_algebra;
///______________________________________________________________________________________________
/// degree dispatch and real/complex separation of roots
/// Example#
/// ```
/// use RustedMathKit::numerical::roots::{find_polynomial_roots_complex, separate_roots};
/// // x^4 - 1 = (x - 1)(x + 1)(x^2 + 1)
/// let roots = find_polynomial_roots_complex(&[1.0, 0.0, 0.0, 0.0, -1.0]);
/// let separated = separate_roots(&roots);
/// assert_eq!(separated.real_roots.len(), 2);
/// assert_eq!(separated.complex_roots.len(), 1);
/// assert!((separated.complex_roots[0].im - 1.0).abs() < 1e-9);
/// ```
pub mod roots;
mod roots_tests;
///______________________________________________________________________________________________
/// limits, finite-difference derivatives, Taylor coefficients and quadrature of
/// single-variable expressions
/// Example#
/// ```
/// use RustedMathKit::numerical::calculus::{IntegrationMethod, integrate, limit};
/// let l = limit("sin(x)/x", "x", 0.0).unwrap();
/// assert!((l - 1.0).abs() < 1e-9);
/// let area = integrate("3t^2", "t", 0.0, 2.0, IntegrationMethod::GaussLegendre { degree: 5 }).unwrap();
/// assert!((area - 8.0).abs() < 1e-10);
/// ```
pub mod calculus;
pub mod errors;
/// solver settings and their task-document form
pub mod solver_config;
/// configurable solver front end with logging and a summary table
pub mod poly_solver;
