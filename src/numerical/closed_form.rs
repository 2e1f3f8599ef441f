//! Closed-form solvers for linear, quadratic and cubic equations with real coefficients.
//!
//! All arithmetic after the discriminant runs through the complex kernel, so negative
//! discriminants produce conjugate roots without case splits. A zero leading
//! coefficient demotes the equation: cubic -> quadratic -> linear.
//!
//! Root order:
//! - quadratic: `(-b + sqrt(D)) / 2a` first, then `(-b - sqrt(D)) / 2a`
//! - cubic: `u + v`, `u*w + v*w^2`, `u*w^2 + v*w` (w the primitive cube root of unity),
//!   each shifted by `-b/3a`
use crate::numerical::complex_kernel::{
    Complex, EPSILON, complex, complex_abs, complex_add, complex_cbrt, complex_div,
    complex_mul, complex_scale, complex_sqrt, complex_sub,
};
use log::debug;

/// Root of `a*x + b = 0`. Empty when `a == 0` (no solution, or every x when `b == 0`).
pub fn solve_linear_complex(a: f64, b: f64) -> Vec<Complex> {
    if a == 0.0 {
        let solutions = if b == 0.0 { "infinitely many" } else { "no" };
        debug!("linear equation with zero slope: {} solutions", solutions);
        return Vec::new();
    }
    vec![complex(-b / a, 0.0)]
}

/// Roots of `a*x^2 + b*x + c = 0`, "+" root first.
pub fn solve_quadratic_complex(a: f64, b: f64, c: f64) -> Vec<Complex> {
    if a == 0.0 {
        return solve_linear_complex(b, c);
    }
    let discriminant = b * b - 4.0 * a * c;
    let sqrt_d = complex_sqrt(complex(discriminant, 0.0));
    let minus_b = complex(-b, 0.0);
    let two_a = complex(2.0 * a, 0.0);
    vec![
        complex_div(complex_add(minus_b, sqrt_d), two_a),
        complex_div(complex_sub(minus_b, sqrt_d), two_a),
    ]
}

/// Roots of `a*x^3 + b*x^2 + c*x + d = 0` by Cardano's formula.
///
/// The cubic is depressed with `x = t - b/3a` to `t^3 + p*t + q = 0`. With
/// `D = (q/2)^2 + (p/3)^3`, `u` is the principal cube root of `-q/2 + sqrt(D)` and `v` is
/// the partner cube root of `-q/2 - sqrt(D)` fixed by `u*v = -p/3`; taking both principal
/// roots independently would mix branches whenever one radicand is a negative real.
pub fn solve_cubic_complex(a: f64, b: f64, c: f64, d: f64) -> Vec<Complex> {
    if a == 0.0 {
        return solve_quadratic_complex(b, c, d);
    }
    let p = (3.0 * a * c - b * b) / (3.0 * a * a);
    let q = (2.0 * b * b * b - 9.0 * a * b * c + 27.0 * a * a * d) / (27.0 * a * a * a);
    let discriminant = (q / 2.0).powi(2) + (p / 3.0).powi(3);
    let sqrt_d = complex_sqrt(complex(discriminant, 0.0));
    let half_q = complex(-q / 2.0, 0.0);

    // pick the radicand of larger modulus to keep u away from zero
    let plus = complex_add(half_q, sqrt_d);
    let minus = complex_sub(half_q, sqrt_d);
    let radicand = if complex_abs(plus) >= complex_abs(minus) { plus } else { minus };
    let u = complex_cbrt(radicand);
    let v = if complex_abs(u) < EPSILON {
        complex(0.0, 0.0)
    } else {
        complex_div(complex(-p / 3.0, 0.0), u)
    };
    debug!("cubic: p = {}, q = {}, D = {}, u = {}, v = {}", p, q, discriminant, u, v);

    let omega = complex(-0.5, 3.0f64.sqrt() / 2.0);
    let omega2 = complex(-0.5, -(3.0f64.sqrt()) / 2.0);
    let shift = complex(-b / (3.0 * a), 0.0);
    let depressed = [
        complex_add(u, v),
        complex_add(complex_mul(u, omega), complex_mul(v, omega2)),
        complex_add(complex_mul(u, omega2), complex_mul(v, omega)),
    ];
    depressed
        .iter()
        .map(|&t| complex_add(t, shift))
        .collect()
}

/// Real-coefficient cubic in depressed form, exposed for callers that already hold `p, q`.
pub fn solve_depressed_cubic(p: f64, q: f64) -> Vec<Complex> {
    solve_cubic_complex(1.0, 0.0, p, q)
}

/// Multiplies every root by `k`; used to undo a scaling substitution `x = k*y`.
pub fn scale_roots(roots: &[Complex], k: f64) -> Vec<Complex> {
    roots.iter().map(|&r| complex_scale(r, k)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sorted_real_parts(roots: &[Complex]) -> Vec<f64> {
        let mut re: Vec<f64> = roots.iter().map(|r| r.re).collect();
        re.sort_by(|a, b| a.partial_cmp(b).unwrap());
        re
    }

    #[test]
    fn test_linear() {
        assert_eq!(solve_linear_complex(2.0, -4.0), vec![complex(2.0, 0.0)]);
        assert!(solve_linear_complex(0.0, 1.0).is_empty());
        assert!(solve_linear_complex(0.0, 0.0).is_empty());
    }

    #[test]
    fn test_quadratic_real_roots_plus_first() {
        let roots = solve_quadratic_complex(1.0, -5.0, 6.0);
        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0].re, 3.0, epsilon = 1e-12);
        assert_relative_eq!(roots[1].re, 2.0, epsilon = 1e-12);
        assert_relative_eq!(roots[0].im, 0.0, epsilon = 1e-12);
        assert_relative_eq!(roots[1].im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_quadratic_imaginary_roots() {
        let roots = solve_quadratic_complex(1.0, 0.0, 1.0);
        assert_relative_eq!(roots[0].re, 0.0, epsilon = 1e-12);
        assert_relative_eq!(roots[0].im, 1.0, epsilon = 1e-12);
        assert_relative_eq!(roots[1].re, 0.0, epsilon = 1e-12);
        assert_relative_eq!(roots[1].im, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_quadratic_complex_pair() {
        // x^2 - 2x + 5 = 0 -> 1 +- 2i
        let roots = solve_quadratic_complex(1.0, -2.0, 5.0);
        assert_relative_eq!(roots[0].re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(roots[0].im, 2.0, epsilon = 1e-12);
        assert_relative_eq!(roots[1].im, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_quadratic_degrades_to_linear() {
        assert_eq!(solve_quadratic_complex(0.0, 2.0, -4.0), vec![complex(2.0, 0.0)]);
    }

    #[test]
    fn test_cubic_three_real_roots() {
        // (x-1)(x-2)(x-3)
        let roots = solve_cubic_complex(1.0, -6.0, 11.0, -6.0);
        assert_eq!(roots.len(), 3);
        let re = sorted_real_parts(&roots);
        for (got, want) in re.iter().zip([1.0, 2.0, 3.0]) {
            assert_relative_eq!(*got, want, epsilon = 1e-4);
        }
        for r in &roots {
            assert_relative_eq!(r.im, 0.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_cubic_one_real_two_complex() {
        // (x + 2)(x^2 + 1) = x^3 + 2x^2 + x + 2
        let roots = solve_cubic_complex(1.0, 2.0, 1.0, 2.0);
        let real: Vec<&Complex> = roots.iter().filter(|r| r.im.abs() < 1e-9).collect();
        assert_eq!(real.len(), 1);
        assert_relative_eq!(real[0].re, -2.0, epsilon = 1e-9);
        let mut im: Vec<f64> = roots.iter().filter(|r| r.im.abs() >= 1e-9).map(|r| r.im).collect();
        im.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_relative_eq!(im[0], -1.0, epsilon = 1e-9);
        assert_relative_eq!(im[1], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cubic_negative_radicand() {
        // x^3 + 8 = 0: the larger radicand is -8, a negative real
        let roots = solve_cubic_complex(1.0, 0.0, 0.0, 8.0);
        let real: Vec<&Complex> = roots.iter().filter(|r| r.im.abs() < 1e-9).collect();
        assert_eq!(real.len(), 1);
        assert_relative_eq!(real[0].re, -2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cubic_triple_root() {
        // (x - 1)^3
        let roots = solve_cubic_complex(1.0, -3.0, 3.0, -1.0);
        for r in &roots {
            assert_relative_eq!(r.re, 1.0, epsilon = 1e-6);
            assert_relative_eq!(r.im, 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_cubic_non_monic() {
        // 2(x-1)(x+1)(x-4) = 2x^3 - 8x^2 - 2x + 8
        let roots = solve_cubic_complex(2.0, -8.0, -2.0, 8.0);
        let re = sorted_real_parts(&roots);
        for (got, want) in re.iter().zip([-1.0, 1.0, 4.0]) {
            assert_relative_eq!(*got, want, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_cubic_degrades_to_quadratic() {
        assert_eq!(
            solve_cubic_complex(0.0, 1.0, -5.0, 6.0),
            solve_quadratic_complex(1.0, -5.0, 6.0)
        );
    }

    #[test]
    fn test_depressed_and_scaled() {
        let roots = solve_depressed_cubic(-1.0, 0.0);
        let re = sorted_real_parts(&roots);
        assert_relative_eq!(re[0], -1.0, epsilon = 1e-9);
        assert_relative_eq!(re[2], 1.0, epsilon = 1e-9);
        let scaled = scale_roots(&roots, 2.0);
        let re = sorted_real_parts(&scaled);
        assert_relative_eq!(re[2], 2.0, epsilon = 1e-9);
    }
}
