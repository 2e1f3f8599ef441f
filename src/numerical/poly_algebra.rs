//! Dense polynomial helpers. Coefficients are stored highest power first.
use crate::numerical::complex_kernel::{Complex, complex, complex_add, complex_mul};

/// Quotient and remainder of a polynomial division, highest power first.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyDivision {
    pub quotient: Vec<f64>,
    pub remainder: Vec<f64>,
}

/// Horner evaluation at a real point.
pub fn evaluate_polynomial(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Horner evaluation at a complex point.
pub fn evaluate_polynomial_complex(coefficients: &[f64], z: Complex) -> Complex {
    coefficients.iter().fold(complex(0.0, 0.0), |acc, &c| {
        complex_add(complex_mul(acc, z), complex(c, 0.0))
    })
}

/// Drops exactly-zero leading coefficients, demoting the degree.
pub fn trim_leading_zeros(coefficients: &[f64]) -> Vec<f64> {
    let first_nonzero = coefficients
        .iter()
        .position(|&c| c != 0.0)
        .unwrap_or(coefficients.len());
    coefficients[first_nonzero..].to_vec()
}

/// Expands `prod (x - r)` for the given roots.
pub fn polynomial_from_roots(roots: &[f64]) -> Vec<f64> {
    roots.iter().fold(vec![1.0], |acc, &r| {
        let mut next = vec![0.0; acc.len() + 1];
        for (i, &c) in acc.iter().enumerate() {
            next[i] += c;
            next[i + 1] -= c * r;
        }
        next
    })
}

/// Long division `dividend = quotient * divisor + remainder`.
///
/// `None` if either input is empty or the divisor is the zero polynomial. When the
/// dividend has lower degree than the divisor the quotient is `[0]`. The remainder has
/// its leading zeros trimmed and is `[0]` for an exact division.
pub fn divide_polynomials(dividend: &[f64], divisor: &[f64]) -> Option<PolyDivision> {
    if dividend.is_empty() || divisor.is_empty() {
        return None;
    }
    let divisor = trim_leading_zeros(divisor);
    if divisor.is_empty() {
        return None;
    }
    let mut dividend = trim_leading_zeros(dividend);
    if dividend.is_empty() {
        dividend.push(0.0);
    }
    if dividend.len() < divisor.len() {
        return Some(PolyDivision {
            quotient: vec![0.0],
            remainder: dividend,
        });
    }

    let quotient_len = dividend.len() - divisor.len() + 1;
    let lead = divisor[0];
    let mut work = dividend;
    let mut quotient = Vec::with_capacity(quotient_len);
    for i in 0..quotient_len {
        let factor = work[i] / lead;
        quotient.push(factor);
        for (j, &d) in divisor.iter().enumerate() {
            work[i + j] -= factor * d;
        }
    }
    let mut remainder = trim_leading_zeros(&work[quotient_len..]);
    if remainder.is_empty() {
        remainder.push(0.0);
    }
    Some(PolyDivision {
        quotient,
        remainder,
    })
}
